//! Fact-table classification.
//!
//! The summer table is checked after its codes are harmonized into the
//! reference vocabulary. Blank countries are backfilled from the
//! reference lookup before any rule runs, so a repaired row can still
//! come out clean. Rules run in fixed priority order; the first match is
//! the row's single quarantine reason.

use std::collections::BTreeMap;

use tracing::info;

use odq_model::{ClassifyOptions, Gender, Medal, MedalReason, MedalRow, Verdict, is_blank};
use odq_normalize::{CodeMap, HarmonizeOutcome};

use crate::format::is_valid_code_format;
use crate::index::ReferenceIndex;

/// Clean/quarantine partition of the summer table.
#[derive(Debug, Clone, Default)]
pub struct SummerSplit {
    pub clean: Vec<MedalRow>,
    pub quarantine: Vec<(MedalRow, MedalReason)>,
}

impl SummerSplit {
    pub fn total(&self) -> usize {
        self.clean.len() + self.quarantine.len()
    }

    /// Quarantine reasons with row counts, in priority order.
    pub fn reason_counts(&self) -> BTreeMap<MedalReason, usize> {
        let mut counts = BTreeMap::new();
        for (_, reason) in &self.quarantine {
            *counts.entry(*reason).or_insert(0) += 1;
        }
        counts
    }
}

fn trim_cell(cell: &mut Option<String>) {
    let trimmed = cell.as_deref().map(str::trim);
    *cell = match trimmed {
        None | Some("") => None,
        Some(text) => Some(text.to_string()),
    };
}

/// Classify one fact row that has already been harmonized and backfilled.
///
/// Rules run in this exact order, first match wins:
/// `missing_required`, `invalid_code_format`, `invalid_medal`,
/// `invalid_year`, `invalid_gender`, `code_not_in_countries`. A row with
/// no code at all stops at `missing_required` and is never also counted
/// as unmatched.
pub fn classify_medal(
    row: &MedalRow,
    index: &ReferenceIndex,
    options: &ClassifyOptions,
) -> Verdict<MedalReason> {
    if !row.has_required_fields() {
        return Verdict::Quarantined(MedalReason::MissingRequired);
    }
    if !is_valid_code_format(row.code.as_deref()) {
        return Verdict::Quarantined(MedalReason::InvalidCodeFormat);
    }
    if !is_valid_medal(row.medal.as_deref()) {
        return Verdict::Quarantined(MedalReason::InvalidMedal);
    }
    if !is_valid_year(row.year.as_deref(), options) {
        return Verdict::Quarantined(MedalReason::InvalidYear);
    }
    if !is_valid_gender(row.gender.as_deref()) {
        return Verdict::Quarantined(MedalReason::InvalidGender);
    }
    match row.code.as_deref() {
        Some(code) if index.contains(code) => Verdict::Clean,
        _ => Verdict::Quarantined(MedalReason::CodeNotInCountries),
    }
}

fn is_valid_medal(medal: Option<&str>) -> bool {
    medal.is_some_and(|value| value.parse::<Medal>().is_ok())
}

fn is_valid_gender(gender: Option<&str>) -> bool {
    gender.is_some_and(|value| value.parse::<Gender>().is_ok())
}

fn is_valid_year(year: Option<&str>, options: &ClassifyOptions) -> bool {
    let Some(raw) = year else {
        return false;
    };
    // Years saved through a float-typed column arrive as "1896.0".
    let Ok(value) = raw.trim().parse::<f64>() else {
        return false;
    };
    value >= f64::from(options.min_year) && value <= f64::from(options.max_year)
}

/// Harmonize, backfill, and partition the summer table.
///
/// Steps in fixed order: normalize + harmonize codes via the map, trim
/// the gender/medal/country cells, backfill blank countries from the
/// reference lookup, then classify every row.
pub fn split_summer(
    rows: Vec<MedalRow>,
    code_map: &CodeMap,
    index: &ReferenceIndex,
    options: &ClassifyOptions,
) -> (SummerSplit, HarmonizeOutcome) {
    let mut rows = rows;
    let outcome = code_map.apply(&mut rows);

    let mut split = SummerSplit::default();
    for mut row in rows {
        trim_cell(&mut row.gender);
        trim_cell(&mut row.medal);
        trim_cell(&mut row.country);

        // Repair before validation: a blank country with a resolvable
        // code is filled from the reference lookup.
        if is_blank(row.country.as_deref())
            && let Some(code) = row.code.as_deref()
            && let Some(name) = index.name_for(code)
        {
            row.country = Some(name.to_string());
        }

        match classify_medal(&row, index, options) {
            Verdict::Clean => split.clean.push(row),
            Verdict::Quarantined(reason) => split.quarantine.push((row, reason)),
        }
    }
    info!(
        clean = split.clean.len(),
        quarantine = split.quarantine.len(),
        rewritten = outcome.rewritten,
        "split summer table"
    );
    (split, outcome)
}
