//! Audit behavior against the classifier, including their expected
//! disagreement.

use odq_audit::audit_codes;
use odq_model::{AuditPolicy, ClassifyOptions, CountryRow, MedalReason, MedalRow};
use odq_normalize::CodeMap;
use odq_validate::{ReferenceIndex, split_countries, split_summer};

fn country(name: &str, code: &str) -> CountryRow {
    CountryRow {
        country: Some(name.to_string()),
        code: Some(code.to_string()),
        population: None,
        gdp_per_capita: None,
    }
}

fn medal(code: &str) -> MedalRow {
    MedalRow {
        year: Some("2008".to_string()),
        city: Some("Beijing".to_string()),
        sport: Some("Aquatics".to_string()),
        discipline: Some("Swimming".to_string()),
        athlete: Some("PHELPS, Michael".to_string()),
        code: Some(code.to_string()),
        gender: Some("Men".to_string()),
        event: Some("100M Butterfly".to_string()),
        medal: Some("Gold".to_string()),
        country: Some("Somewhere".to_string()),
    }
}

/// A code that only exists on a quarantined reference row passes the
/// coarse audit (which sees all reference codes) but fails the fine
/// classifier (which sees only the clean partition). Both behaviors are
/// intentional.
#[test]
fn audit_and_classifier_disagree_on_dirty_reference_codes() {
    // Name is blank, so this row is quarantined by the classifier but
    // still contributes its code to the audit's valid set.
    let dirty = CountryRow {
        country: Some("   ".to_string()),
        code: Some("ZZZ".to_string()),
        population: None,
        gdp_per_capita: None,
    };
    let countries = vec![country("Serbia", "SRB"), dirty];
    let summer = vec![medal("ZZZ")];

    let audit = audit_codes(
        &summer,
        &countries,
        &CodeMap::default(),
        &AuditPolicy::default(),
    );
    assert_eq!(audit.summary.bad_rows_total, 0);
    assert!(!audit.summary.should_fail);

    let split = split_countries(countries);
    let index = ReferenceIndex::from_clean(&split.clean);
    let (summer_split, _) = split_summer(
        summer,
        &CodeMap::default(),
        &index,
        &ClassifyOptions::for_max_year(2024),
    );
    assert_eq!(summer_split.quarantine.len(), 1);
    assert_eq!(summer_split.quarantine[0].1, MedalReason::CodeNotInCountries);
}

#[test]
fn summary_serializes_with_stable_field_names() {
    let audit = audit_codes(
        &[medal("QQQ")],
        &[country("Serbia", "SRB")],
        &CodeMap::default(),
        &AuditPolicy::default(),
    );
    let json = serde_json::to_value(&audit.summary).expect("serialize summary");
    assert_eq!(json["summer_rows_total"], 1);
    assert_eq!(json["bad_rows_code_not_in_countries"], 1);
    assert_eq!(json["bad_rows_code_not_in_countries_strict"], 1);
    assert_eq!(json["historical_code_allowlist"][0], "BOH");
    assert_eq!(json["should_fail"], true);
}
