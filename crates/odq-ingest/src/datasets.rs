//! Typed loaders for the three input datasets.

use std::io::Read;
use std::path::Path;

use tracing::info;

use odq_model::{CountryRow, MedalRow};

use crate::error::{IngestError, Result};
use crate::table::CsvTable;

const COUNTRIES_TABLE: &str = "countries";
const SUMMER_TABLE: &str = "summer";

/// Required column in a table; absence is a schema error, not row data.
fn require_column(table: &CsvTable, table_name: &str, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| IngestError::missing_column(table_name, column))
}

/// Load the countries reference table.
///
/// `Country` and `Code` must be present; `Population` and `GDP per Capita`
/// are optional columns and come back as `None` cells when absent.
pub fn read_countries_from_reader<R: Read>(reader: R) -> Result<Vec<CountryRow>> {
    let table = CsvTable::from_reader(reader)?;
    let country = require_column(&table, COUNTRIES_TABLE, "Country")?;
    let code = require_column(&table, COUNTRIES_TABLE, "Code")?;
    let population = table.column_index("Population");
    let gdp = table.column_index("GDP per Capita");

    let rows = table
        .rows
        .iter()
        .map(|row| CountryRow {
            country: table.cell(row, Some(country)),
            code: table.cell(row, Some(code)),
            population: table.cell(row, population),
            gdp_per_capita: table.cell(row, gdp),
        })
        .collect::<Vec<_>>();
    info!(rows = rows.len(), "loaded countries table");
    Ok(rows)
}

pub fn read_countries(path: &Path) -> Result<Vec<CountryRow>> {
    let file = std::fs::File::open(path)?;
    read_countries_from_reader(file)
}

/// Load the summer results fact table. All ten columns must be present.
pub fn read_summer_from_reader<R: Read>(reader: R) -> Result<Vec<MedalRow>> {
    let table = CsvTable::from_reader(reader)?;
    let year = require_column(&table, SUMMER_TABLE, "Year")?;
    let city = require_column(&table, SUMMER_TABLE, "City")?;
    let sport = require_column(&table, SUMMER_TABLE, "Sport")?;
    let discipline = require_column(&table, SUMMER_TABLE, "Discipline")?;
    let athlete = require_column(&table, SUMMER_TABLE, "Athlete")?;
    let code = require_column(&table, SUMMER_TABLE, "Code")?;
    let gender = require_column(&table, SUMMER_TABLE, "Gender")?;
    let event = require_column(&table, SUMMER_TABLE, "Event")?;
    let medal = require_column(&table, SUMMER_TABLE, "Medal")?;
    let country = require_column(&table, SUMMER_TABLE, "Country")?;

    let rows = table
        .rows
        .iter()
        .map(|row| MedalRow {
            year: table.cell(row, Some(year)),
            city: table.cell(row, Some(city)),
            sport: table.cell(row, Some(sport)),
            discipline: table.cell(row, Some(discipline)),
            athlete: table.cell(row, Some(athlete)),
            code: table.cell(row, Some(code)),
            gender: table.cell(row, Some(gender)),
            event: table.cell(row, Some(event)),
            medal: table.cell(row, Some(medal)),
            country: table.cell(row, Some(country)),
        })
        .collect::<Vec<_>>();
    info!(rows = rows.len(), "loaded summer table");
    Ok(rows)
}

pub fn read_summer(path: &Path) -> Result<Vec<MedalRow>> {
    let file = std::fs::File::open(path)?;
    read_summer_from_reader(file)
}

/// Load the raw `(from_code, to_code)` pairs of the code map.
///
/// Headers are matched case-insensitively; files without `from_code` /
/// `to_code` headers fall back to the first two columns. Normalization
/// and blank-key dropping happen when the pairs are turned into a
/// `CodeMap`, with the same rules as row codes.
pub fn read_code_map_pairs_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<(Option<String>, Option<String>)>> {
    let table = CsvTable::from_reader(reader)?;
    let (from, to) = match (table.column_index("from_code"), table.column_index("to_code")) {
        (Some(from), Some(to)) => (from, to),
        _ => (0, 1),
    };

    let pairs = table
        .rows
        .iter()
        .map(|row| (table.cell(row, Some(from)), table.cell(row, Some(to))))
        .collect::<Vec<_>>();
    info!(pairs = pairs.len(), "loaded code map");
    Ok(pairs)
}

pub fn read_code_map_pairs(path: &Path) -> Result<Vec<(Option<String>, Option<String>)>> {
    let file = std::fs::File::open(path)?;
    read_code_map_pairs_from_reader(file)
}
