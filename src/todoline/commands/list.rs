use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let lines = store.load_all()?;

    if lines.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "It seems there are no TODO items in your list, please add one.",
        )));
    }

    Ok(CmdResult::default().with_listed_lines(lines))
}
