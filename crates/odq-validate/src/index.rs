//! Code lookups derived from the clean reference partition.

use std::collections::{BTreeMap, BTreeSet};

use odq_model::{CountryRow, is_blank};
use odq_normalize::normalize_code;

/// Valid-code set and code -> name lookup for referential checks and
/// country backfill.
///
/// Built only from the clean partition: a quarantined reference row never
/// certifies a code as valid. Curated historical delegations may be
/// merged in on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    names: BTreeMap<String, String>,
}

impl ReferenceIndex {
    /// Derive the index from clean reference rows.
    ///
    /// Clean rows always carry a normalized code and a name; anything
    /// else is skipped rather than indexed.
    pub fn from_clean(rows: &[CountryRow]) -> Self {
        let mut names = BTreeMap::new();
        for row in rows {
            let Some(code) = normalize_code(row.code.as_deref()) else {
                continue;
            };
            let Some(name) = row.country.as_deref().map(str::trim) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            names.insert(code, name.to_string());
        }
        Self { names }
    }

    /// Merge curated historical delegation entries (code -> name).
    ///
    /// Entries with a blank code or name are ignored; existing reference
    /// entries win over the curated table.
    #[must_use]
    pub fn with_historical(mut self, delegations: &BTreeMap<String, String>) -> Self {
        for (code, name) in delegations {
            let Some(code) = normalize_code(Some(code)) else {
                continue;
            };
            if is_blank(Some(name)) {
                continue;
            }
            self.names.entry(code).or_insert_with(|| name.trim().to_string());
        }
        self
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Number of distinct valid codes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Codes in sorted order.
    pub fn codes(&self) -> BTreeSet<String> {
        self.names.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_row(country: &str, code: &str) -> CountryRow {
        CountryRow {
            country: Some(country.to_string()),
            code: Some(code.to_string()),
            population: None,
            gdp_per_capita: None,
        }
    }

    #[test]
    fn indexes_clean_rows() {
        let index = ReferenceIndex::from_clean(&[
            clean_row("Serbia", "SRB"),
            clean_row("France", "FRA"),
        ]);
        assert_eq!(index.len(), 2);
        assert!(index.contains("SRB"));
        assert_eq!(index.name_for("FRA"), Some("France"));
        assert_eq!(index.name_for("USA"), None);
    }

    #[test]
    fn historical_entries_extend_but_never_override() {
        let mut delegations = BTreeMap::new();
        delegations.insert("BOH".to_string(), "Bohemia".to_string());
        delegations.insert("SRB".to_string(), "Not Serbia".to_string());

        let index =
            ReferenceIndex::from_clean(&[clean_row("Serbia", "SRB")]).with_historical(&delegations);
        assert_eq!(index.name_for("BOH"), Some("Bohemia"));
        assert_eq!(index.name_for("SRB"), Some("Serbia"));
    }
}
