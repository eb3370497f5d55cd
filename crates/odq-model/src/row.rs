//! Typed rows for the two input tables.
//!
//! Cells are `Option<String>`: `None` means the cell was empty in the
//! source file. The classifiers never coerce a missing cell into text.

use serde::{Deserialize, Serialize};

use crate::value::is_blank;

/// One row of the countries reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryRow {
    pub country: Option<String>,
    pub code: Option<String>,
    /// Kept as raw text; range checking belongs to the external
    /// statistical validation step, not this core.
    pub population: Option<String>,
    pub gdp_per_capita: Option<String>,
}

impl CountryRow {
    /// True when both required cells (country, code) are present.
    pub fn has_required_fields(&self) -> bool {
        !is_blank(self.country.as_deref()) && !is_blank(self.code.as_deref())
    }
}

/// One row of the summer results fact table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedalRow {
    pub year: Option<String>,
    pub city: Option<String>,
    pub sport: Option<String>,
    pub discipline: Option<String>,
    pub athlete: Option<String>,
    pub code: Option<String>,
    pub gender: Option<String>,
    pub event: Option<String>,
    pub medal: Option<String>,
    pub country: Option<String>,
}

impl MedalRow {
    /// All ten required cells, in column order.
    pub fn required_fields(&self) -> [Option<&str>; 10] {
        [
            self.year.as_deref(),
            self.city.as_deref(),
            self.sport.as_deref(),
            self.discipline.as_deref(),
            self.athlete.as_deref(),
            self.code.as_deref(),
            self.gender.as_deref(),
            self.event.as_deref(),
            self.medal.as_deref(),
            self.country.as_deref(),
        ]
    }

    /// True when every required cell is present and non-blank.
    pub fn has_required_fields(&self) -> bool {
        self.required_fields().iter().all(|cell| !is_blank(*cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> MedalRow {
        MedalRow {
            year: Some("2008".to_string()),
            city: Some("Beijing".to_string()),
            sport: Some("Aquatics".to_string()),
            discipline: Some("Swimming".to_string()),
            athlete: Some("PHELPS, Michael".to_string()),
            code: Some("USA".to_string()),
            gender: Some("Men".to_string()),
            event: Some("100M Butterfly".to_string()),
            medal: Some("Gold".to_string()),
            country: Some("United States".to_string()),
        }
    }

    #[test]
    fn full_row_has_required_fields() {
        assert!(full_row().has_required_fields());
    }

    #[test]
    fn any_blank_cell_fails_required_check() {
        let mut row = full_row();
        row.event = Some("  ".to_string());
        assert!(!row.has_required_fields());

        let mut row = full_row();
        row.year = None;
        assert!(!row.has_required_fields());
    }
}
