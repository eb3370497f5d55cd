//! CSV writers for the clean/quarantine partitions.
//!
//! Quarantine files carry one extra `quarantine_reason` column; an
//! absent reason column implicitly means clean.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;
use tracing::info;

use odq_model::{CountryRow, MedalRow};
use odq_validate::{CountrySplit, SummerSplit};

const COUNTRIES_HEADERS: [&str; 4] = ["Country", "Code", "Population", "GDP per Capita"];
const SUMMER_HEADERS: [&str; 10] = [
    "Year",
    "City",
    "Sport",
    "Discipline",
    "Athlete",
    "Code",
    "Gender",
    "Event",
    "Medal",
    "Country",
];
const REASON_HEADER: &str = "quarantine_reason";

/// Paths of the four partition files written by [`write_split_outputs`].
#[derive(Debug, Clone)]
pub struct SplitOutputPaths {
    pub countries_clean: PathBuf,
    pub countries_quarantine: PathBuf,
    pub summer_clean: PathBuf,
    pub summer_quarantine: PathBuf,
}

fn cell(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

fn country_fields(row: &CountryRow) -> [&str; 4] {
    [
        cell(row.country.as_deref()),
        cell(row.code.as_deref()),
        cell(row.population.as_deref()),
        cell(row.gdp_per_capita.as_deref()),
    ]
}

fn medal_fields(row: &MedalRow) -> [&str; 10] {
    [
        cell(row.year.as_deref()),
        cell(row.city.as_deref()),
        cell(row.sport.as_deref()),
        cell(row.discipline.as_deref()),
        cell(row.athlete.as_deref()),
        cell(row.code.as_deref()),
        cell(row.gender.as_deref()),
        cell(row.event.as_deref()),
        cell(row.medal.as_deref()),
        cell(row.country.as_deref()),
    ]
}

fn write_rows<'a, F, R>(
    path: &Path,
    headers: &[&str],
    reason_column: bool,
    rows: impl Iterator<Item = (R, Option<&'a str>)>,
    fields: F,
) -> Result<()>
where
    F: Fn(R) -> Vec<String>,
{
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    let mut header_row: Vec<&str> = headers.to_vec();
    if reason_column {
        header_row.push(REASON_HEADER);
    }
    writer.write_record(&header_row)?;
    for (row, reason) in rows {
        let mut record = fields(row);
        if reason_column {
            record.push(reason.unwrap_or("").to_string());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the four partition CSVs under `out_dir`.
pub fn write_split_outputs(
    out_dir: &Path,
    countries: &CountrySplit,
    summer: &SummerSplit,
) -> Result<SplitOutputPaths> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let paths = SplitOutputPaths {
        countries_clean: out_dir.join("countries_clean.csv"),
        countries_quarantine: out_dir.join("countries_quarantine.csv"),
        summer_clean: out_dir.join("summer_clean.csv"),
        summer_quarantine: out_dir.join("summer_quarantine.csv"),
    };

    write_rows(
        &paths.countries_clean,
        &COUNTRIES_HEADERS,
        false,
        countries.clean.iter().map(|row| (row, None)),
        |row| country_fields(row).map(str::to_string).to_vec(),
    )?;
    write_rows(
        &paths.countries_quarantine,
        &COUNTRIES_HEADERS,
        true,
        countries
            .quarantine
            .iter()
            .map(|(row, reason)| (row, Some(reason.as_str()))),
        |row| country_fields(row).map(str::to_string).to_vec(),
    )?;
    write_rows(
        &paths.summer_clean,
        &SUMMER_HEADERS,
        false,
        summer.clean.iter().map(|row| (row, None)),
        |row| medal_fields(row).map(str::to_string).to_vec(),
    )?;
    write_rows(
        &paths.summer_quarantine,
        &SUMMER_HEADERS,
        true,
        summer
            .quarantine
            .iter()
            .map(|(row, reason)| (row, Some(reason.as_str()))),
        |row| medal_fields(row).map(str::to_string).to_vec(),
    )?;

    info!(out_dir = %out_dir.display(), "wrote partition outputs");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use odq_model::{CountryReason, MedalReason};

    fn sample_splits() -> (CountrySplit, SummerSplit) {
        let clean_country = CountryRow {
            country: Some("Serbia".to_string()),
            code: Some("SRB".to_string()),
            population: Some("7000000".to_string()),
            gdp_per_capita: None,
        };
        let dirty_country = CountryRow::default();
        let countries = CountrySplit {
            clean: vec![clean_country],
            quarantine: vec![(dirty_country, CountryReason::MissingRequired)],
        };

        let clean_medal = MedalRow {
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
        };
        let mut dirty_medal = clean_medal.clone();
        dirty_medal.year = Some("1850".to_string());
        let summer = SummerSplit {
            clean: vec![clean_medal],
            quarantine: vec![(dirty_medal, MedalReason::InvalidYear)],
        };
        (countries, summer)
    }

    #[test]
    fn writes_four_files_with_reason_column() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (countries, summer) = sample_splits();
        let paths = write_split_outputs(dir.path(), &countries, &summer).expect("write outputs");

        let quarantine =
            std::fs::read_to_string(&paths.summer_quarantine).expect("read quarantine");
        let mut lines = quarantine.lines();
        let header = lines.next().expect("header");
        assert!(header.ends_with(",quarantine_reason"));
        let row = lines.next().expect("row");
        assert!(row.ends_with(",invalid_year"));

        let clean = std::fs::read_to_string(&paths.summer_clean).expect("read clean");
        assert!(!clean.contains("quarantine_reason"));

        let countries_q =
            std::fs::read_to_string(&paths.countries_quarantine).expect("read countries");
        assert!(countries_q.contains("missing_required"));
    }

    #[test]
    fn missing_cells_round_trip_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (countries, summer) = sample_splits();
        let paths = write_split_outputs(dir.path(), &countries, &summer).expect("write outputs");
        let clean = std::fs::read_to_string(&paths.countries_clean).expect("read clean");
        // GDP cell was None; it must come out empty, not "NAN".
        assert!(clean.lines().nth(1).expect("row").ends_with(","));
    }
}
