//! Shared helpers for optional cell values.

/// Returns true when an optional cell is absent or blank after trimming.
///
/// Classification treats `None` and whitespace-only text identically, so
/// every required-field check goes through this one predicate.
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(text) => text.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_blank() {
        assert!(is_blank(None));
    }

    #[test]
    fn whitespace_is_blank() {
        assert!(is_blank(Some("   ")));
        assert!(is_blank(Some("\t")));
        assert!(is_blank(Some("")));
    }

    #[test]
    fn text_is_not_blank() {
        assert!(!is_blank(Some("USA")));
        assert!(!is_blank(Some(" x ")));
    }
}
