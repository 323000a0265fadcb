// src/people/text.rs

/// Collapses every whitespace run to a single space and trims the ends.
/// Returns `None` for missing input or when nothing survives the cleanup.
pub fn clean_text(input: Option<&str>) -> Option<String> {
    let raw = input?;
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Splits a full name into (first, last) on whitespace.
///
/// Middle tokens are discarded; a single-token name has no last name.
pub fn split_name(full: &str) -> (Option<String>, Option<String>) {
    let parts: Vec<&str> = full.split_whitespace().collect();
    match parts.as_slice() {
        [] => (None, None),
        [only] => (Some((*only).to_string()), None),
        [first, .., last] => (Some((*first).to_string()), Some((*last).to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_runs() {
        assert_eq!(
            clean_text(Some("  Jane \t\n  Smith ")),
            Some("Jane Smith".to_string())
        );
    }

    #[test]
    fn clean_text_rejects_empty_input() {
        assert_eq!(clean_text(None), None);
        assert_eq!(clean_text(Some("")), None);
        assert_eq!(clean_text(Some(" \n\t ")), None);
    }

    #[test]
    fn split_name_two_tokens() {
        assert_eq!(
            split_name("Jane Smith"),
            (Some("Jane".to_string()), Some("Smith".to_string()))
        );
    }

    #[test]
    fn split_name_drops_middle_tokens() {
        assert_eq!(
            split_name("Jane van der Berg"),
            (Some("Jane".to_string()), Some("Berg".to_string()))
        );
    }

    #[test]
    fn split_name_single_token_has_no_last_name() {
        assert_eq!(split_name("Cher"), (Some("Cher".to_string()), None));
    }

    #[test]
    fn split_name_empty() {
        assert_eq!(split_name(""), (None, None));
        assert_eq!(split_name("   "), (None, None));
    }
}
