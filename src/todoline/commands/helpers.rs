use crate::error::{Result, TodoError};

/// Marker that identifies a command/flag token in a raw argument list.
pub const FLAG_MARKER: char = '-';

/// Drops every flag token (anything starting with `-`), keeping the order of
/// what is left.
pub fn positional_args<I: AsRef<str>>(args: &[I]) -> Vec<String> {
    args.iter()
        .map(|a| a.as_ref())
        .filter(|a| !a.starts_with(FLAG_MARKER))
        .map(str::to_string)
        .collect()
}

/// Fails with `InvalidArgumentCount` when more than `max` positionals remain.
pub fn ensure_at_most(
    command: &'static str,
    expected: &'static str,
    positionals: &[String],
    max: usize,
) -> Result<()> {
    if positionals.len() > max {
        return Err(TodoError::InvalidArgumentCount {
            command,
            expected,
            got: positionals.len(),
        });
    }
    Ok(())
}

/// Indexes of the lines whose raw text contains `needle` anywhere.
pub fn matching_lines(lines: &[String], needle: &str) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_flags_in_any_position() {
        let args = ["-add", "Buy milk", "-x", "01/02/2024"];
        assert_eq!(positional_args(&args), vec!["Buy milk", "01/02/2024"]);
    }

    #[test]
    fn count_guard_allows_up_to_max() {
        let two = vec!["a".to_string(), "b".to_string()];
        assert!(ensure_at_most("-add", "a title and date", &two, 2).is_ok());

        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let err = ensure_at_most("-add", "a title and date", &three, 2).unwrap_err();
        assert!(matches!(err, TodoError::InvalidArgumentCount { got: 3, .. }));
    }

    #[test]
    fn matches_substrings_across_fields() {
        let lines = vec![
            "Buy milk - 01/01/2024 - undone".to_string(),
            "Call bank - 02/01/2024 - done".to_string(),
        ];
        assert_eq!(matching_lines(&lines, "milk"), vec![0]);
        // "01/2024" lives in the date field of both lines
        assert_eq!(matching_lines(&lines, "01/2024"), vec![0, 1]);
        assert!(matching_lines(&lines, "rent").is_empty());
    }
}
