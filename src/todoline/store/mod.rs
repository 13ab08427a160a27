//! # Storage Layer
//!
//! The whole list lives in one plain text file, one record per line. The
//! [`RecordStore`] trait is the only way commands touch it, which keeps file
//! access in one place and lets tests swap in memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - `<documents>/TODO_Items.txt` by default
//!   - Full rewrites go through a temp file + rename
//!   - Appends open the file in append mode, creating it on first use
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts writes so tests can assert read-only commands stay read-only
//!
//! ## Access Model
//!
//! Every mutating command is load-everything, change, save-everything. There
//! is no locking: two processes racing on the same file will lose updates.
//!
//! ```text
//! TODO_Items.txt
//! ├── Buy milk - 01/02/2024 - undone
//! ├── Pay rent - 02/01/2024 - done
//! └── ...
//! ```

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface over the ordered list of raw record lines.
pub trait RecordStore {
    /// Read every line, in file order. A store that does not exist yet is empty.
    fn load_all(&self) -> Result<Vec<String>>;

    /// Replace the entire contents with `lines`, preserving their order.
    fn save_all(&mut self, lines: &[String]) -> Result<()>;

    /// Add one line at the end.
    fn append(&mut self, line: &str) -> Result<()>;

    /// Where the records live (a real path for file stores, a virtual one otherwise).
    fn location(&self) -> PathBuf;
}
