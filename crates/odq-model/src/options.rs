//! Configuration passed into the classifiers and the integrity auditor.
//!
//! Everything policy-shaped is an explicit value here. The core never
//! reads the environment or the clock; callers resolve those once at the
//! boundary and hand the result in.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// First modern summer games; no valid result predates it.
pub const MIN_YEAR: i32 = 1896;

/// Discontinued delegation codes treated as deliberate exceptions.
const DEFAULT_ALLOWLIST: &[&str] = &["BOH"];

/// Curated code -> name entries for delegations that no longer appear in
/// the reference table (e.g. Bohemia, 1900 era).
const DEFAULT_DELEGATIONS: &[(&str, &str)] = &[("BOH", "Bohemia")];

/// Options for the fact-table classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Lower bound of the valid year range (inclusive).
    pub min_year: i32,
    /// Upper bound of the valid year range (inclusive). Callers resolve
    /// this from the calendar once per run.
    pub max_year: i32,
    /// Historical delegation codes merged into the clean-reference lookup
    /// before referential checks and country backfill.
    pub historical_delegations: BTreeMap<String, String>,
}

impl ClassifyOptions {
    /// Build options with the default year floor and delegation table.
    pub fn for_max_year(max_year: i32) -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year,
            historical_delegations: DEFAULT_DELEGATIONS
                .iter()
                .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_historical_delegations(mut self, delegations: BTreeMap<String, String>) -> Self {
        self.historical_delegations = delegations;
        self
    }
}

/// Policy for the cross-table integrity audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditPolicy {
    /// Codes exempted from the strict unmatched-code failure.
    pub historical_allowlist: BTreeSet<String>,
    /// When set, null fact codes also trip `should_fail`.
    pub fail_on_null_codes: bool,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            historical_allowlist: DEFAULT_ALLOWLIST
                .iter()
                .map(|code| (*code).to_string())
                .collect(),
            fail_on_null_codes: false,
        }
    }
}

impl AuditPolicy {
    #[must_use]
    pub fn with_fail_on_null_codes(mut self, enable: bool) -> Self {
        self.fail_on_null_codes = enable;
        self
    }

    #[must_use]
    pub fn with_allowlist(mut self, allowlist: BTreeSet<String>) -> Self {
        self.historical_allowlist = allowlist;
        self
    }

    /// True when the code is an accepted historical exception.
    pub fn is_allowlisted(&self, code: &str) -> bool {
        self.historical_allowlist.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allowlists_bohemia() {
        let policy = AuditPolicy::default();
        assert!(policy.is_allowlisted("BOH"));
        assert!(!policy.is_allowlisted("SRB"));
        assert!(!policy.fail_on_null_codes);
    }

    #[test]
    fn classify_options_carry_year_bounds() {
        let options = ClassifyOptions::for_max_year(2024);
        assert_eq!(options.min_year, MIN_YEAR);
        assert_eq!(options.max_year, 2024);
        assert_eq!(
            options.historical_delegations.get("BOH").map(String::as_str),
            Some("Bohemia")
        );
    }
}
