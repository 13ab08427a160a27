use crate::codec::LineCodec;
use crate::commands::helpers::{ensure_at_most, positional_args};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::{is_valid_title, ToDoItem};
use crate::store::RecordStore;

pub fn run<S: RecordStore, I: AsRef<str>>(
    store: &mut S,
    codec: &LineCodec,
    args: &[I],
) -> Result<CmdResult> {
    let positionals = positional_args(args);
    ensure_at_most("-add", "a title and a date", &positionals, 2)?;

    let date_text = positionals.get(1).map(String::as_str).unwrap_or_default();
    let due_date = codec
        .parse_date(date_text)
        .ok_or_else(|| TodoError::InvalidDate(date_text.to_string()))?;

    let title = positionals.first().map(String::as_str).unwrap_or_default();
    if !is_valid_title(title) {
        return Err(TodoError::InvalidTitle(title.to_string()));
    }

    let item = ToDoItem::new(title, due_date);
    let line = codec.encode(&item);
    store.append(&line)?;
    log::info!("added {:?} to {}", line, store.location().display());

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Added TODO item: {}", line)))
        .with_affected_items(vec![item]))
}
