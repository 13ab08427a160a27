//! # todoline Architecture
//!
//! todoline keeps a to-do list in a single plain text file, one item per line:
//!
//! ```text
//! Buy milk - 01/02/2024 - undone
//! ```
//!
//! Each invocation runs exactly one command and exits. The library is the
//! whole program minus the terminal; the binary only parses arguments and
//! prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store + codec            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One read-modify-write procedure per command              │
//! │  - Validates everything before the first write              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Codec (codec.rs) + Storage Layer (store/)                  │
//! │  - One line <-> one ToDoItem                                │
//! │  - RecordStore trait: FileStore, InMemoryStore              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching Rules
//!
//! Title lookups are substring matches against the *raw line*, not the title
//! field. `-remove_by_title` drops every matching line, `-mark_complete`
//! changes only the first one.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`codec`]: Line encoding/decoding and date parsing
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `ToDoItem`, status and weekday helpers
//! - [`config`]: Configuration and store path resolution
//! - [`logging`]: stderr logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
