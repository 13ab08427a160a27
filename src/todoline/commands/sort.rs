use crate::codec::LineCodec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Orders items by due date for display only; the file keeps insertion order.
///
/// Any line that fails to decode aborts the whole sort. Equal dates keep their
/// file order in both directions.
pub fn run<S: RecordStore>(store: &S, codec: &LineCodec, order: SortOrder) -> Result<CmdResult> {
    let lines = store.load_all()?;
    let mut items = codec.decode_all(&lines)?;

    if items.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "Sorry no ToDo items could be found, please ensure you have created at least one.",
        )));
    }

    match order {
        SortOrder::Ascending => items.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
        SortOrder::Descending => items.sort_by(|a, b| b.due_date.cmp(&a.due_date)),
    }
    log::debug!("sorted {} item(s) {:?}", items.len(), order);

    Ok(CmdResult::default().with_listed_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.listed_items.iter().map(|i| i.title.as_str()).collect()
    }

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_item("late", (2024, 1, 2), "undone")
            .with_item("early-first", (2024, 1, 1), "undone")
            .with_item("early-second", (2024, 1, 1), "done")
    }

    #[test]
    fn ascending_is_stable() {
        let (store, codec) = fixture().build();
        let result = run(&store, &codec, SortOrder::Ascending).unwrap();
        assert_eq!(titles(&result), vec!["early-first", "early-second", "late"]);
    }

    #[test]
    fn descending_is_stable() {
        let (store, codec) = fixture().build();
        let result = run(&store, &codec, SortOrder::Descending).unwrap();
        assert_eq!(titles(&result), vec!["late", "early-first", "early-second"]);
    }

    #[test]
    fn keeps_stored_status() {
        let (store, codec) = fixture().build();
        let result = run(&store, &codec, SortOrder::Ascending).unwrap();
        let statuses: Vec<&str> = result
            .listed_items
            .iter()
            .map(|i| i.status.as_str())
            .collect();
        assert_eq!(statuses, vec!["undone", "done", "undone"]);
    }

    #[test]
    fn never_rewrites_the_store() {
        let (store, codec) = fixture().build();
        let before = store.lines().to_vec();
        run(&store, &codec, SortOrder::Ascending).unwrap();
        run(&store, &codec, SortOrder::Descending).unwrap();
        assert_eq!(store.lines(), before.as_slice());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn empty_store_gives_a_notice() {
        let store = InMemoryStore::new();
        let result = run(&store, &LineCodec::default(), SortOrder::Ascending).unwrap();
        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn one_malformed_line_fails_the_sort() {
        let (store, codec) = fixture().with_raw_line("broken line").build();
        let err = run(&store, &codec, SortOrder::Ascending).unwrap_err();
        assert!(matches!(err, TodoError::MalformedRecord { .. }));
    }
}
