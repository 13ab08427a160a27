use crate::commands::helpers::matching_lines;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::store::RecordStore;

/// Removes every line containing `title`. Matching is against the raw line,
/// so a needle can also hit the date or status text.
pub fn run<S: RecordStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let lines = store.load_all()?;

    if lines.is_empty() {
        return Err(TodoError::EmptyStore);
    }

    let matched = matching_lines(&lines, title);
    if matched.is_empty() {
        return Err(TodoError::NotFound(format!(
            "The item with the provided title: {} could not be found.",
            title
        )));
    }

    let (removed, kept): (Vec<String>, Vec<String>) =
        lines.into_iter().partition(|line| line.contains(title));
    store.save_all(&kept)?;
    log::info!("removed {} line(s) matching {:?}", removed.len(), title);

    let mut result = CmdResult::default().with_listed_lines(removed);
    result.add_message(CmdMessage::success(format!(
        "Successfully removed all TODO items with the Title: {}",
        title
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_every_substring_match() {
        let (mut store, _) = StoreFixture::new()
            .with_item("Buy milk", (2024, 1, 1), "undone")
            .with_item("Buy milk2", (2024, 1, 2), "undone")
            .build();

        let result = run(&mut store, "Buy milk").unwrap();
        assert!(store.lines().is_empty());
        assert_eq!(result.listed_lines.len(), 2);
    }

    #[test]
    fn keeps_non_matching_lines_in_order() {
        let (mut store, _) = StoreFixture::new()
            .with_item("A", (2024, 1, 1), "undone")
            .with_item("Drop me", (2024, 1, 2), "undone")
            .with_item("B", (2024, 1, 3), "undone")
            .with_item("C", (2024, 1, 4), "done")
            .build();

        run(&mut store, "Drop").unwrap();
        assert_eq!(
            store.lines(),
            [
                "A - 01/01/2024 - undone",
                "B - 01/03/2024 - undone",
                "C - 01/04/2024 - done"
            ]
        );
    }

    #[test]
    fn matches_outside_the_title_field() {
        let (mut store, _) = StoreFixture::new()
            .with_item("Report", (2024, 1, 1), "done")
            .with_item("Review", (2024, 1, 2), "undone")
            .build();

        // "done" also appears inside "undone"
        run(&mut store, "done").unwrap();
        assert!(store.lines().is_empty());
    }

    #[test]
    fn empty_store_is_rejected_without_writing() {
        let mut store = InMemoryStore::new();
        assert!(matches!(run(&mut store, "x"), Err(TodoError::EmptyStore)));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn missing_title_is_rejected_without_writing() {
        let (mut store, _) = StoreFixture::new()
            .with_item("A", (2024, 1, 1), "undone")
            .build();
        assert!(matches!(run(&mut store, "zzz"), Err(TodoError::NotFound(_))));
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.lines().len(), 1);
    }
}
