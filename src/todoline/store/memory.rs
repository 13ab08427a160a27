use super::RecordStore;
use crate::error::{Result, TodoError};
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    lines: Vec<String>,
    writes: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of successful `save_all`/`append` calls.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(TodoError::FileAccess(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Simulated write error",
            )));
        }
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn save_all(&mut self, lines: &[String]) -> Result<()> {
        self.check_writable()?;
        self.lines = lines.to_vec();
        self.writes += 1;
        Ok(())
    }

    fn append(&mut self, line: &str) -> Result<()> {
        self.check_writable()?;
        self.lines.push(line.to_string());
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://TODO_Items.txt")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::codec::LineCodec;
    use crate::model::ToDoItem;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        codec: LineCodec,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                codec: LineCodec::default(),
            }
        }

        pub fn with_item(mut self, title: &str, (y, m, d): (i32, u32, u32), status: &str) -> Self {
            let due = NaiveDate::from_ymd_opt(y, m, d).expect("fixture date must be valid");
            let item = ToDoItem::new(title, due).with_status(status);
            self.store.lines.push(self.codec.encode(&item));
            self
        }

        pub fn with_raw_line(mut self, line: &str) -> Self {
            self.store.lines.push(line.to_string());
            self
        }

        pub fn build(self) -> (InMemoryStore, LineCodec) {
            (self.store, self.codec)
        }
    }
}
