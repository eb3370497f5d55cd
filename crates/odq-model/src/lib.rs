pub mod options;
pub mod reason;
pub mod row;
pub mod value;

pub use options::{AuditPolicy, ClassifyOptions, MIN_YEAR};
pub use reason::{CountryReason, Gender, Medal, MedalReason, Verdict};
pub use row::{CountryRow, MedalRow};
pub use value::is_blank;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medal_reason_labels_round_trip() {
        for reason in MedalReason::ALL {
            let parsed: MedalReason = reason.as_str().parse().expect("parse label");
            assert_eq!(parsed, reason);
        }
    }

    #[test]
    fn country_row_required_presence() {
        let row = CountryRow {
            country: Some("Serbia".to_string()),
            code: Some("SRB".to_string()),
            population: None,
            gdp_per_capita: None,
        };
        assert!(row.has_required_fields());

        let blank = CountryRow {
            country: Some("   ".to_string()),
            ..row
        };
        assert!(!blank.has_required_fields());
    }

    #[test]
    fn reason_serializes_as_label() {
        let json = serde_json::to_string(&MedalReason::CodeNotInCountries).expect("serialize");
        assert_eq!(json, "\"code_not_in_countries\"");
    }
}
