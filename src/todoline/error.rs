use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("{command} takes {expected}, got {got} argument(s)")]
    InvalidArgumentCount {
        command: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("The date you passed in for Due Date could not be validated: {0:?}")]
    InvalidDate(String),

    #[error("Invalid title {0:?}: titles must be non-empty and cannot contain \" - \"")]
    InvalidTitle(String),

    #[error("The day you have entered is not a valid one: {0:?} (expected Monday..Sunday)")]
    InvalidDay(String),

    #[error("It appears there are no TODO items in your list, please add at least one.")]
    EmptyStore,

    #[error("{0}")]
    NotFound(String),

    #[error("Malformed record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("File access error: {0}")]
    FileAccess(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TodoError {
    /// Validation failures abort the current command but are not fatal to
    /// the process; everything else is.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TodoError::InvalidArgumentCount { .. }
                | TodoError::InvalidDate(_)
                | TodoError::InvalidTitle(_)
                | TodoError::InvalidDay(_)
                | TodoError::EmptyStore
                | TodoError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
