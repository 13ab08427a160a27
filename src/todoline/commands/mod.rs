use crate::model::ToDoItem;

pub mod add;
pub mod complete;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod sort;
pub mod update_day;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items created or rewritten by the command.
    pub affected_items: Vec<ToDoItem>,
    /// Raw stored lines, for commands that show the file as-is.
    pub listed_lines: Vec<String>,
    /// Decoded items in display order, for commands that reorder.
    pub listed_items: Vec<ToDoItem>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_items(mut self, items: Vec<ToDoItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_lines(mut self, lines: Vec<String>) -> Self {
        self.listed_lines = lines;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<ToDoItem>) -> Self {
        self.listed_items = items;
        self
    }
}
