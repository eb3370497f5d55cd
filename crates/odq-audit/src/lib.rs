//! Cross-table code integrity audit.
//!
//! An early, coarse gate run before the fine-grained classifiers. It
//! checks the raw fact table against the raw reference table: every
//! non-null reference code counts as valid here, clean or not. The later
//! fact classifier consults only the clean reference partition, so the
//! two may legitimately disagree on counts.
//!
//! `should_fail` is advisory data. Deciding whether to abort a larger
//! run belongs to the caller.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use odq_model::{AuditPolicy, CountryRow, MedalRow};
use odq_normalize::{CodeMap, normalize_code};

/// Cap on the unmatched-code samples in the summary, for log readability.
pub const BAD_CODE_SAMPLE_LIMIT: usize = 25;

/// Aggregate counts and policy evidence from one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegritySummary {
    pub summer_rows_total: usize,
    pub countries_rows_total: usize,
    /// Distinct non-null codes in the raw reference table.
    pub valid_country_codes_count: usize,
    /// Fact rows whose code the harmonization map actually changed.
    pub mapped_rows_count: usize,
    /// Rows with a null code plus rows with an unmatched code.
    pub bad_rows_total: usize,
    pub bad_rows_null_code: usize,
    /// Lenient: every row with a non-null code absent from the
    /// reference set.
    pub bad_rows_code_not_in_countries: usize,
    pub unique_bad_codes_count: usize,
    /// First entries of the sorted unique unmatched codes.
    pub unique_bad_codes_sample: Vec<String>,
    /// Strict: unmatched rows whose code is not on the historical
    /// allowlist.
    pub bad_rows_code_not_in_countries_strict: usize,
    pub unique_bad_codes_strict_sample: Vec<String>,
    pub historical_code_allowlist: Vec<String>,
    pub fail_on_null_codes: bool,
    pub should_fail: bool,
}

/// Full audit result: the summary plus the offending rows for export.
#[derive(Debug, Clone, Default)]
pub struct IntegrityAudit {
    pub summary: IntegritySummary,
    /// Harmonized fact rows with a null or unmatched code, in input order.
    pub bad_rows: Vec<MedalRow>,
}

/// Audit fact codes against the full reference code set.
///
/// Both tables are normalized independently here; the fact codes are
/// additionally harmonized through the map, with the rewrite count kept
/// for the summary.
pub fn audit_codes(
    summer: &[MedalRow],
    countries: &[CountryRow],
    code_map: &CodeMap,
    policy: &AuditPolicy,
) -> IntegrityAudit {
    let mut rows: Vec<MedalRow> = summer.to_vec();
    let outcome = code_map.apply(&mut rows);

    let valid_codes: BTreeSet<String> = countries
        .iter()
        .filter_map(|row| normalize_code(row.code.as_deref()))
        .collect();

    let mut bad_rows = Vec::new();
    let mut null_code = 0usize;
    let mut not_in = 0usize;
    let mut not_in_strict = 0usize;
    let mut unique_bad: BTreeSet<String> = BTreeSet::new();

    for row in &rows {
        match row.code.as_deref() {
            None => {
                null_code += 1;
                bad_rows.push(row.clone());
            }
            Some(code) if !valid_codes.contains(code) => {
                not_in += 1;
                if !policy.is_allowlisted(code) {
                    not_in_strict += 1;
                }
                unique_bad.insert(code.to_string());
                bad_rows.push(row.clone());
            }
            Some(_) => {}
        }
    }

    let strict_codes: Vec<String> = unique_bad
        .iter()
        .filter(|code| !policy.is_allowlisted(code))
        .cloned()
        .collect();

    let should_fail =
        not_in_strict > 0 || (policy.fail_on_null_codes && null_code > 0);

    let summary = IntegritySummary {
        summer_rows_total: summer.len(),
        countries_rows_total: countries.len(),
        valid_country_codes_count: valid_codes.len(),
        mapped_rows_count: outcome.rewritten,
        bad_rows_total: null_code + not_in,
        bad_rows_null_code: null_code,
        bad_rows_code_not_in_countries: not_in,
        unique_bad_codes_count: unique_bad.len(),
        unique_bad_codes_sample: unique_bad
            .iter()
            .take(BAD_CODE_SAMPLE_LIMIT)
            .cloned()
            .collect(),
        bad_rows_code_not_in_countries_strict: not_in_strict,
        unique_bad_codes_strict_sample: strict_codes
            .into_iter()
            .take(BAD_CODE_SAMPLE_LIMIT)
            .collect(),
        historical_code_allowlist: policy.historical_allowlist.iter().cloned().collect(),
        fail_on_null_codes: policy.fail_on_null_codes,
        should_fail,
    };

    info!(
        bad_total = summary.bad_rows_total,
        strict = summary.bad_rows_code_not_in_countries_strict,
        should_fail = summary.should_fail,
        "completed integrity audit"
    );

    IntegrityAudit { summary, bad_rows }
}
