//! # Line Codec
//!
//! Every record is a single line of text:
//!
//! ```text
//! Buy milk - 01/02/2024 - undone
//! ^title     ^due date    ^status
//! ```
//!
//! Fields are joined with `" - "` and there is no escaping. Decoding splits on
//! the first two separators only, so a status may contain the separator but a
//! title may not (see [`crate::model::is_valid_title`]).
//!
//! Dates are rendered with a single configurable `chrono` format string. On the
//! way in, parsing is deliberately broad: the configured format is tried first,
//! then a handful of common spellings, then full date-times truncated to their
//! date.

use crate::error::{Result, TodoError};
use crate::model::{ToDoItem, FIELD_SEPARATOR};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
];

// Spread across centuries so two-digit years and similar lossy formats fail.
const PROBE_DATES: &[(i32, u32, u32)] = &[(1950, 1, 2), (2024, 12, 31), (2099, 7, 15)];

fn check_round_trip(date_format: &str, probe: NaiveDate) -> Result<()> {
    let mut rendered = String::new();
    {
        use std::fmt::Write;
        write!(rendered, "{}", probe.format(date_format)).map_err(|_| {
            TodoError::Config(format!("Invalid date format: {:?}", date_format))
        })?;
    }

    if rendered.contains(FIELD_SEPARATOR) || rendered.contains('\n') {
        return Err(TodoError::Config(format!(
            "Date format {:?} renders a field separator or line break ({:?})",
            date_format, rendered
        )));
    }

    match NaiveDate::parse_from_str(&rendered, date_format) {
        Ok(parsed) if parsed == probe => Ok(()),
        _ => Err(TodoError::Config(format!(
            "Date format {:?} does not round-trip (renders {} as {:?})",
            date_format, probe, rendered
        ))),
    }
}

/// Joins the three fields of a record into its stored form.
pub fn encode_line(title: &str, due_date_text: &str, status: &str) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        title,
        due_date_text,
        status,
        sep = FIELD_SEPARATOR
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCodec {
    date_format: String,
}

impl Default for LineCodec {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl LineCodec {
    /// Builds a codec for `date_format`, refusing formats whose output cannot
    /// be parsed back into the same date or would split the stored line.
    pub fn new(date_format: impl Into<String>) -> Result<Self> {
        let date_format = date_format.into();
        for (y, m, d) in PROBE_DATES {
            let probe = NaiveDate::from_ymd_opt(*y, *m, *d)
                .ok_or_else(|| TodoError::Config("invalid probe date".to_string()))?;
            check_round_trip(&date_format, probe)?;
        }
        Ok(Self { date_format })
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    pub fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(text, &self.date_format) {
            return Some(date);
        }

        for fmt in FALLBACK_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
                return Some(date);
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.date_naive());
        }

        FALLBACK_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .map(|dt| dt.date())
    }

    pub fn encode(&self, item: &ToDoItem) -> String {
        encode_line(&item.title, &self.format_date(item.due_date), &item.status)
    }

    pub fn decode(&self, line: &str) -> Result<ToDoItem> {
        let mut fields = line.splitn(3, FIELD_SEPARATOR);
        let (title, date_text, status) = match (fields.next(), fields.next(), fields.next()) {
            (Some(title), Some(date), Some(status)) => (title, date, status),
            _ => {
                return Err(TodoError::MalformedRecord {
                    line: line.to_string(),
                    reason: "expected \"title - date - status\"".to_string(),
                })
            }
        };

        let due_date = self
            .parse_date(date_text)
            .ok_or_else(|| TodoError::MalformedRecord {
                line: line.to_string(),
                reason: format!("unparseable due date {:?}", date_text),
            })?;

        Ok(ToDoItem {
            title: title.to_string(),
            due_date,
            status: status.to_string(),
        })
    }

    /// Decodes every line, failing on the first malformed one.
    pub fn decode_all(&self, lines: &[String]) -> Result<Vec<ToDoItem>> {
        lines.iter().map(|line| self.decode(line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{STATUS_DONE, STATUS_UNDONE};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn encodes_with_separator() {
        assert_eq!(
            encode_line("Buy milk", "01/02/2024", "undone"),
            "Buy milk - 01/02/2024 - undone"
        );
    }

    #[test]
    fn default_codec_renders_month_first() {
        let codec = LineCodec::default();
        let item = ToDoItem::new("Buy milk", date(2024, 1, 2));
        assert_eq!(codec.encode(&item), "Buy milk - 01/02/2024 - undone");
    }

    #[test]
    fn decode_reverses_encode() {
        let codec = LineCodec::default();
        for status in [STATUS_UNDONE, STATUS_DONE] {
            let item = ToDoItem::new("Water the plants", date(2023, 11, 30)).with_status(status);
            assert_eq!(codec.decode(&codec.encode(&item)).unwrap(), item);
        }
    }

    #[test]
    fn decode_keeps_separator_inside_status() {
        let codec = LineCodec::default();
        let item = codec.decode("Call mum - 03/04/2024 - waiting - on hold").unwrap();
        assert_eq!(item.title, "Call mum");
        assert_eq!(item.status, "waiting - on hold");
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let codec = LineCodec::default();
        let err = codec.decode("Buy milk - 01/02/2024").unwrap_err();
        assert!(matches!(err, TodoError::MalformedRecord { .. }));
    }

    #[test]
    fn decode_rejects_bad_date() {
        let codec = LineCodec::default();
        let err = codec.decode("Buy milk - someday - undone").unwrap_err();
        assert!(matches!(err, TodoError::MalformedRecord { .. }));
    }

    #[test]
    fn parses_common_date_spellings() {
        let codec = LineCodec::default();
        let expected = date(2024, 3, 9);
        for text in [
            "03/09/2024",
            "3/9/2024",
            "2024-03-09",
            "2024/03/09",
            "9 March 2024",
            "March 9, 2024",
            "Mar 9, 2024",
            "2024-03-09T10:30:00",
            "2024-03-09T10:30:00+02:00",
            " 03/09/2024 ",
        ] {
            assert_eq!(codec.parse_date(text), Some(expected), "parsing {:?}", text);
        }
    }

    #[test]
    fn rejects_non_dates() {
        let codec = LineCodec::default();
        assert_eq!(codec.parse_date(""), None);
        assert_eq!(codec.parse_date("tomorrow"), None);
        assert_eq!(codec.parse_date("02/30/2024"), None);
    }

    #[test]
    fn configured_format_wins_over_fallbacks() {
        let codec = LineCodec::new("%d/%m/%Y").unwrap();
        assert_eq!(codec.parse_date("01/02/2024"), Some(date(2024, 2, 1)));
        let item = ToDoItem::new("Pay rent", date(2024, 2, 1));
        assert_eq!(codec.encode(&item), "Pay rent - 01/02/2024 - undone");
        assert_eq!(codec.decode(&codec.encode(&item)).unwrap(), item);
    }

    #[test]
    fn rejects_formats_that_lose_the_date() {
        assert!(matches!(LineCodec::new("%m/%Y"), Err(TodoError::Config(_))));
    }

    #[test]
    fn rejects_formats_that_render_the_separator() {
        assert!(matches!(LineCodec::new("%m - %d - %Y"), Err(TodoError::Config(_))));
        assert!(matches!(LineCodec::new("%m-%d-%Y"), Ok(_)));
    }

    #[test]
    fn rejects_two_digit_years() {
        assert!(matches!(LineCodec::new("%m/%d/%y"), Err(TodoError::Config(_))));
    }

    #[test]
    fn accepted_format_keeps_old_dates() {
        let codec = LineCodec::new("%Y-%m-%d").unwrap();
        let item = ToDoItem::new("Archive", date(1950, 1, 2));
        assert_eq!(codec.decode(&codec.encode(&item)).unwrap(), item);
    }

    #[test]
    fn decode_all_stops_on_first_bad_line() {
        let codec = LineCodec::default();
        let lines = vec![
            "A - 01/01/2024 - undone".to_string(),
            "garbage".to_string(),
        ];
        assert!(codec.decode_all(&lines).is_err());
    }
}
