//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all todoline operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the store and the line codec so callers don't thread them around
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never formats for a terminal.
//!
//! ## Generic Over RecordStore
//!
//! `TodoApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::codec::LineCodec;
use crate::commands;
use crate::error::{Result, TodoError};
use crate::store::RecordStore;

/// The main API facade for to-do operations.
pub struct TodoApi<S: RecordStore> {
    store: S,
    codec: LineCodec,
}

impl<S: RecordStore> TodoApi<S> {
    pub fn new(store: S, codec: LineCodec) -> Self {
        Self { store, codec }
    }

    pub fn add_item<I: AsRef<str>>(&mut self, args: &[I]) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.codec, args)
    }

    pub fn remove_by_title(&mut self, title: Option<&str>) -> Result<commands::CmdResult> {
        let title = require_title("-remove_by_title", title)?;
        commands::remove::run(&mut self.store, title)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn mark_complete(&mut self, title: Option<&str>) -> Result<commands::CmdResult> {
        let title = require_title("-mark_complete", title)?;
        commands::complete::run(&mut self.store, &self.codec, title)
    }

    pub fn sort_by_date(&self, order: SortOrder) -> Result<commands::CmdResult> {
        commands::sort::run(&self.store, &self.codec, order)
    }

    pub fn update_by_day<I: AsRef<str>>(&mut self, args: &[I]) -> Result<commands::CmdResult> {
        commands::update_day::run(&mut self.store, &self.codec, args)
    }

    pub fn codec(&self) -> &LineCodec {
        &self.codec
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn require_title<'a>(command: &'static str, title: Option<&'a str>) -> Result<&'a str> {
    title.ok_or(TodoError::InvalidArgumentCount {
        command,
        expected: "a title",
        got: 0,
    })
}

pub use crate::commands::sort::SortOrder;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
