//! Legacy-code harmonization.
//!
//! A small override table rewrites deprecated fact-table codes into the
//! reference vocabulary (e.g. `SCG -> SRB`). The mapping is single-hop:
//! a rewritten code is not looked up again in the same pass.

use std::collections::BTreeMap;

use tracing::debug;

use odq_model::MedalRow;

use crate::code::normalize_code;

/// Immutable from-code -> to-code mapping, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMap {
    entries: BTreeMap<String, String>,
}

/// Result of applying a [`CodeMap`] to a batch of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarmonizeOutcome {
    /// Rows whose code actually changed (identity mappings and codes
    /// absent from the table do not count).
    pub rewritten: usize,
}

impl CodeMap {
    /// Build a mapping from raw `(from_code, to_code)` pairs.
    ///
    /// Both sides are normalized exactly like row codes. Pairs with a
    /// blank/missing `from_code` are dropped: a missing key must never
    /// become a rewrite rule. Construction never fails on malformed rows.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, Option<String>)>,
    {
        let mut entries = BTreeMap::new();
        let mut dropped = 0usize;
        for (from_code, to_code) in pairs {
            let Some(from) = normalize_code(from_code.as_deref()) else {
                dropped += 1;
                continue;
            };
            let to = normalize_code(to_code.as_deref()).unwrap_or_default();
            entries.insert(from, to);
        }
        if dropped > 0 {
            debug!(dropped, "dropped code-map rows with blank from_code");
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the replacement for an already-normalized code.
    pub fn target_for(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Normalize one code cell and rewrite it through the mapping.
    ///
    /// Returns the resulting code and whether the mapping changed it.
    /// Codes absent from the mapping pass through normalized; the result
    /// is never fed back into the mapping (no transitive chaining).
    pub fn resolve(&self, raw: Option<&str>) -> (Option<String>, bool) {
        let Some(normalized) = normalize_code(raw) else {
            return (None, false);
        };
        match self.entries.get(&normalized) {
            // A blank to_code erases the cell rather than producing "".
            Some(target) if target.is_empty() => (None, true),
            Some(target) if *target != normalized => (Some(target.clone()), true),
            Some(_) => (Some(normalized), false),
            None => (Some(normalized), false),
        }
    }

    /// Normalize and rewrite the `code` cell of every row in place.
    pub fn apply(&self, rows: &mut [MedalRow]) -> HarmonizeOutcome {
        let mut outcome = HarmonizeOutcome::default();
        for row in rows.iter_mut() {
            let (code, rewritten) = self.resolve(row.code.as_deref());
            row.code = code;
            if rewritten {
                outcome.rewritten += 1;
            }
        }
        debug!(rows = rows.len(), rewritten = outcome.rewritten, "applied code map");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_scg_srb() -> CodeMap {
        CodeMap::from_pairs(vec![(Some("scg ".to_string()), Some(" srb".to_string()))])
    }

    fn row_with_code(code: Option<&str>) -> MedalRow {
        MedalRow {
            code: code.map(str::to_string),
            ..MedalRow::default()
        }
    }

    #[test]
    fn builds_normalized_entries() {
        let map = map_scg_srb();
        assert_eq!(map.target_for("SCG"), Some("SRB"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn blank_from_code_is_dropped() {
        let map = CodeMap::from_pairs(vec![
            (None, Some("SRB".to_string())),
            (Some("  ".to_string()), Some("SRB".to_string())),
            (Some("SCG".to_string()), Some("SRB".to_string())),
        ]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn apply_rewrites_and_counts() {
        let map = map_scg_srb();
        let mut rows = vec![
            row_with_code(Some(" scg ")),
            row_with_code(Some("usa")),
            row_with_code(None),
        ];
        let outcome = map.apply(&mut rows);
        assert_eq!(outcome.rewritten, 1);
        assert_eq!(rows[0].code.as_deref(), Some("SRB"));
        assert_eq!(rows[1].code.as_deref(), Some("USA"));
        assert_eq!(rows[2].code, None);
    }

    #[test]
    fn identity_mapping_is_not_a_rewrite() {
        let map = CodeMap::from_pairs(vec![(Some("USA".to_string()), Some("usa".to_string()))]);
        let mut rows = vec![row_with_code(Some("USA"))];
        let outcome = map.apply(&mut rows);
        assert_eq!(outcome.rewritten, 0);
        assert_eq!(rows[0].code.as_deref(), Some("USA"));
    }

    #[test]
    fn mapping_is_single_hop() {
        let map = CodeMap::from_pairs(vec![
            (Some("A".to_string()), Some("B".to_string())),
            (Some("B".to_string()), Some("C".to_string())),
        ]);
        // Three-letter codes are not required at this layer; harmonization
        // runs before format validation.
        let (code, rewritten) = map.resolve(Some("A"));
        assert_eq!(code.as_deref(), Some("B"));
        assert!(rewritten);
    }

    #[test]
    fn apply_is_idempotent_for_unmapped_codes() {
        let map = map_scg_srb();
        let mut rows = vec![row_with_code(Some("SRB"))];
        let first = map.apply(&mut rows);
        assert_eq!(first.rewritten, 0);
        let second = map.apply(&mut rows);
        assert_eq!(second.rewritten, 0);
        assert_eq!(rows[0].code.as_deref(), Some("SRB"));
    }
}
