use chrono::{Datelike, NaiveDate, Weekday};

/// Separator between the fields of a stored line.
pub const FIELD_SEPARATOR: &str = " - ";

pub const STATUS_UNDONE: &str = "undone";
pub const STATUS_DONE: &str = "done";

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("Monday", Weekday::Mon),
    ("Tuesday", Weekday::Tue),
    ("Wednesday", Weekday::Wed),
    ("Thursday", Weekday::Thu),
    ("Friday", Weekday::Fri),
    ("Saturday", Weekday::Sat),
    ("Sunday", Weekday::Sun),
];

/// One record of the list. It has no identity beyond the line it encodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoItem {
    pub title: String,
    pub due_date: NaiveDate,
    // Free text: only "undone" and "done" are produced, anything round-trips.
    pub status: String,
}

impl ToDoItem {
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            due_date,
            status: STATUS_UNDONE.to_string(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn weekday(&self) -> Weekday {
        self.due_date.weekday()
    }
}

/// A title is storable when it is non-empty and cannot be confused with the
/// field separator on decode.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty() && !title.contains(FIELD_SEPARATOR)
}

/// Exact, case-sensitive weekday name lookup ("Friday", not "friday" or "Fri").
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|(day_name, _)| *day_name == name)
        .map(|(_, day)| *day)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS
        .iter()
        .find(|(_, d)| *d == day)
        .map(|(name, _)| *name)
        .unwrap_or("Monday")
}
