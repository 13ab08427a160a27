use crate::codec::LineCodec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::STATUS_DONE;
use crate::store::RecordStore;

/// Marks the first line containing `title` as done. Later matches are left alone.
pub fn run<S: RecordStore>(store: &mut S, codec: &LineCodec, title: &str) -> Result<CmdResult> {
    let mut lines = store.load_all()?;

    let Some(index) = lines.iter().position(|line| line.contains(title)) else {
        log::debug!("no match for {:?} after scanning {} line(s)", title, lines.len());
        return Err(TodoError::NotFound(format!(
            "Could not find ToDo item: {}, please ensure you have entered the name correctly.",
            title
        )));
    };

    let item = codec.decode(&lines[index])?.with_status(STATUS_DONE);
    lines[index] = codec.encode(&item);
    store.save_all(&lines)?;
    log::info!("marked line {} as done", index);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Successfully marked {} as done.",
            lines[index]
        )))
        .with_affected_items(vec![item]))
}
