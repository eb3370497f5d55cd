//! Canonical form for code-like cells.
//!
//! Every place codes are compared (reference table, fact table, code map)
//! runs values through [`normalize_code`] first. Comparing a normalized
//! side against a raw side is a bug.

/// Trim and uppercase a code cell, preserving missing values.
///
/// `None` stays `None`, and a cell that is blank after trimming also
/// becomes `None`; a missing code is never coerced into text. Idempotent:
/// normalizing an already-normalized code returns it unchanged.
pub fn normalize_code(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_uppercase())
}

/// Normalize a code cell in place.
pub fn normalize_code_in_place(cell: &mut Option<String>) {
    *cell = normalize_code(cell.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        assert_eq!(normalize_code(Some("  usa ")), Some("USA".to_string()));
        assert_eq!(normalize_code(Some("srb")), Some("SRB".to_string()));
    }

    #[test]
    fn preserves_missing() {
        assert_eq!(normalize_code(None), None);
        assert_eq!(normalize_code(Some("")), None);
        assert_eq!(normalize_code(Some("   ")), None);
    }

    #[test]
    fn idempotent() {
        let once = normalize_code(Some("  usa "));
        let twice = normalize_code(once.as_deref());
        assert_eq!(once, twice);
        assert_eq!(normalize_code(Some("USA")), Some("USA".to_string()));
    }
}
