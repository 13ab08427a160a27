use crate::codec::LineCodec;
use crate::commands::helpers::{ensure_at_most, positional_args};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::{parse_weekday, weekday_name};
use crate::store::RecordStore;

const COMMAND: &str = "-update_by_day";
const EXPECTED: &str = "a day and a status";

/// Sets the status of every item due on the given weekday.
///
/// Arguments are validated before the store is read. When nothing matches the
/// file is left untouched.
pub fn run<S: RecordStore, I: AsRef<str>>(
    store: &mut S,
    codec: &LineCodec,
    args: &[I],
) -> Result<CmdResult> {
    let positionals = positional_args(args);
    ensure_at_most(COMMAND, EXPECTED, &positionals, 2)?;

    let day_text = positionals.first().map(String::as_str).unwrap_or_default();
    let day = parse_weekday(day_text).ok_or_else(|| TodoError::InvalidDay(day_text.to_string()))?;

    let status = positionals.get(1).ok_or(TodoError::InvalidArgumentCount {
        command: COMMAND,
        expected: EXPECTED,
        got: positionals.len(),
    })?;

    let mut lines = store.load_all()?;
    let items = codec.decode_all(&lines)?;
    if lines.is_empty() || items.is_empty() {
        return Err(TodoError::EmptyStore);
    }

    let mut updated = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if item.weekday() == day {
            let item = item.with_status(status.as_str());
            lines[index] = codec.encode(&item);
            updated.push(item);
        }
    }

    let day_name = weekday_name(day);
    if updated.is_empty() {
        log::debug!("no items due on {}; store left as is", day_name);
        return Err(TodoError::NotFound(
            "No ToDo items could be found with the provided day.".to_string(),
        ));
    }

    store.save_all(&lines)?;
    log::info!(
        "set status {:?} on {} item(s) due {}",
        status,
        updated.len(),
        day_name
    );

    let count = updated.len();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Successfully updated all entries for {} ({} item(s))",
            day_name, count
        )))
        .with_affected_items(updated))
}
