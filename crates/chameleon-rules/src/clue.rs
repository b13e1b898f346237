//! Clue validation.

/// Maximum clue length in characters.
pub const MAX_CLUE_LEN: usize = 30;

/// Why a clue was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClueRejection {
    #[error("clue must not be empty")]
    Empty,
    #[error("clue must be a single word")]
    MultipleWords,
    #[error("clue is too long (max {MAX_CLUE_LEN} characters)")]
    TooLong,
    #[error("clue must not be the secret word")]
    SecretWord,
    #[error("clue was already given this round")]
    AlreadyUsed,
}

/// Validates a raw clue against the round state.
///
/// Returns the trimmed clue on success. All comparisons are
/// case-insensitive; the clue is stored with its original casing.
pub fn validate_clue<'a, I>(raw: &str, secret: &str, used: I) -> Result<String, ClueRejection>
where
    I: IntoIterator<Item = &'a str>,
{
    let clue = raw.trim();
    if clue.is_empty() {
        return Err(ClueRejection::Empty);
    }
    if clue.split_whitespace().count() > 1 {
        return Err(ClueRejection::MultipleWords);
    }
    if clue.chars().count() > MAX_CLUE_LEN {
        return Err(ClueRejection::TooLong);
    }
    if clue.eq_ignore_ascii_case(secret) {
        return Err(ClueRejection::SecretWord);
    }
    if used.into_iter().any(|u| u.eq_ignore_ascii_case(clue)) {
        return Err(ClueRejection::AlreadyUsed);
    }
    Ok(clue.to_string())
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn no_used() -> std::iter::Empty<&'static str> {
        std::iter::empty()
    }

    #[test]
    fn test_validate_clue_accepts_and_trims() {
        let clue = validate_clue("  Italy ", "Pizza", no_used()).unwrap();
        assert_eq!(clue, "Italy");
    }

    #[test]
    fn test_validate_clue_rejects_empty() {
        assert_eq!(validate_clue("", "Pizza", no_used()), Err(ClueRejection::Empty));
        assert_eq!(validate_clue("   ", "Pizza", no_used()), Err(ClueRejection::Empty));
    }

    #[test]
    fn test_validate_clue_rejects_interior_whitespace() {
        assert_eq!(
            validate_clue("thin crust", "Pizza", no_used()),
            Err(ClueRejection::MultipleWords)
        );
        assert_eq!(
            validate_clue("thin\tcrust", "Pizza", no_used()),
            Err(ClueRejection::MultipleWords)
        );
    }

    #[test]
    fn test_validate_clue_rejects_over_max_len() {
        let long = "a".repeat(MAX_CLUE_LEN + 1);
        assert_eq!(
            validate_clue(&long, "Pizza", no_used()),
            Err(ClueRejection::TooLong)
        );
        // Exactly at the limit is fine.
        let at_limit = "a".repeat(MAX_CLUE_LEN);
        assert!(validate_clue(&at_limit, "Pizza", no_used()).is_ok());
    }

    #[test]
    fn test_validate_clue_rejects_secret_case_insensitive() {
        assert_eq!(
            validate_clue("pizza", "Pizza", no_used()),
            Err(ClueRejection::SecretWord)
        );
        assert_eq!(
            validate_clue("PIZZA", "Pizza", no_used()),
            Err(ClueRejection::SecretWord)
        );
    }

    #[test]
    fn test_validate_clue_rejects_duplicate_case_insensitive() {
        let used = ["Italy", "cheese"];
        assert_eq!(
            validate_clue("italy", "Pizza", used.iter().copied()),
            Err(ClueRejection::AlreadyUsed)
        );
    }

    #[test]
    fn test_validate_clue_keeps_original_casing() {
        let used = ["Italy"];
        let clue = validate_clue("Cheese", "Pizza", used.iter().copied()).unwrap();
        assert_eq!(clue, "Cheese");
    }
}
