//! Reference-table classification.
//!
//! The countries table is the reference system: its codes are normalized
//! but never harmonized. Rules run in fixed order and the first match
//! wins, so a row with a blank name and a bad code reports
//! `missing_required` only.

use tracing::info;

use odq_model::{CountryReason, CountryRow, Verdict};
use odq_normalize::normalize_code_in_place;

use crate::format::is_valid_code_format;

/// Clean/quarantine partition of the countries table.
///
/// Every input row lands in exactly one of the two vectors, in input
/// order; quarantined rows carry their single reason.
#[derive(Debug, Clone, Default)]
pub struct CountrySplit {
    pub clean: Vec<CountryRow>,
    pub quarantine: Vec<(CountryRow, CountryReason)>,
}

impl CountrySplit {
    pub fn total(&self) -> usize {
        self.clean.len() + self.quarantine.len()
    }
}

/// Classify one reference row whose code is already normalized.
pub fn classify_country(row: &CountryRow) -> Verdict<CountryReason> {
    if !row.has_required_fields() {
        return Verdict::Quarantined(CountryReason::MissingRequired);
    }
    if !is_valid_code_format(row.code.as_deref()) {
        return Verdict::Quarantined(CountryReason::InvalidCodeFormat);
    }
    Verdict::Clean
}

/// Partition the countries table into clean and quarantine sets.
pub fn split_countries(rows: Vec<CountryRow>) -> CountrySplit {
    let mut split = CountrySplit::default();
    for mut row in rows {
        normalize_code_in_place(&mut row.code);
        match classify_country(&row) {
            Verdict::Clean => split.clean.push(row),
            Verdict::Quarantined(reason) => split.quarantine.push((row, reason)),
        }
    }
    info!(
        clean = split.clean.len(),
        quarantine = split.quarantine.len(),
        "split countries table"
    );
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: Option<&str>, code: Option<&str>) -> CountryRow {
        CountryRow {
            country: country.map(str::to_string),
            code: code.map(str::to_string),
            population: None,
            gdp_per_capita: None,
        }
    }

    #[test]
    fn valid_row_is_clean() {
        let split = split_countries(vec![row(Some("Serbia"), Some(" srb "))]);
        assert_eq!(split.clean.len(), 1);
        // Code comes out normalized.
        assert_eq!(split.clean[0].code.as_deref(), Some("SRB"));
    }

    #[test]
    fn missing_name_beats_bad_code() {
        let split = split_countries(vec![row(None, Some("not-a-code"))]);
        assert_eq!(split.quarantine.len(), 1);
        assert_eq!(split.quarantine[0].1, CountryReason::MissingRequired);
    }

    #[test]
    fn bad_format_reported_when_fields_present() {
        let split = split_countries(vec![row(Some("Serbia"), Some("SRBX"))]);
        assert_eq!(split.quarantine[0].1, CountryReason::InvalidCodeFormat);
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let rows = vec![
            row(Some("Serbia"), Some("SRB")),
            row(Some("Nowhere"), Some("XX")),
            row(None, None),
        ];
        let split = split_countries(rows);
        assert_eq!(split.total(), 3);
        assert_eq!(split.clean.len(), 1);
        assert_eq!(split.quarantine.len(), 2);
    }
}
