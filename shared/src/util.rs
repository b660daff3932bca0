//! Small shared helpers

/// Split a comma-separated tag string, trimming whitespace and dropping
/// empty segments.
pub fn split_tags(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The literal confirmation token an operator must type to enable a
/// criteria-based hard delete of `count` rows, e.g. `DELETE 7`.
pub fn confirmation_token(count: usize) -> String {
    format!("DELETE {count}")
}

/// Exact-match check of the typed confirmation against the expected token.
/// No trimming or case folding: anything but the literal token fails.
pub fn confirmation_matches(count: usize, typed: &str) -> bool {
    typed == confirmation_token(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tags_trims_and_drops_empties() {
        assert_eq!(split_tags("Italian, Pizza"), vec!["Italian", "Pizza"]);
        assert_eq!(split_tags(" , ,Thai ,"), vec!["Thai"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn token_is_delete_count() {
        assert_eq!(confirmation_token(7), "DELETE 7");
        assert_eq!(confirmation_token(0), "DELETE 0");
    }

    #[test]
    fn confirmation_is_exact_match_only() {
        assert!(confirmation_matches(3, "DELETE 3"));
        assert!(!confirmation_matches(3, "delete 3"));
        assert!(!confirmation_matches(3, "DELETE 4"));
        assert!(!confirmation_matches(3, " DELETE 3"));
        assert!(!confirmation_matches(3, "DELETE 3 "));
        assert!(!confirmation_matches(3, ""));
    }
}
