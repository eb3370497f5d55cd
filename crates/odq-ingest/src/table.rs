//! Raw CSV table loading.
//!
//! Cells come back as `Option<String>`: empty after trimming means the
//! cell was missing. Input files may carry a leading unnamed index column
//! (the pandas `to_csv(index=True)` convention); it is detected by its
//! empty header and skipped.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl CsvTable {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let raw_headers = csv_reader.headers()?.clone();
        let mut headers: Vec<String> = raw_headers.iter().map(normalize_header).collect();

        // A pandas-saved frame has an unnamed first column holding the
        // old index; drop it so positional fallbacks stay correct.
        let skip_index = headers.first().is_some_and(String::is_empty);
        if skip_index {
            headers.remove(0);
            debug!("skipping leading unnamed index column");
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let cells = record
                .iter()
                .skip(usize::from(skip_index))
                .map(normalize_cell);
            let mut row: Vec<Option<String>> = cells.collect();
            // Flexible parsing tolerates short records; pad to width.
            row.resize(headers.len(), None);
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Position of a column by case-insensitive header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell at (row, column position), if the column exists.
    pub fn cell(&self, row: &[Option<String>], index: Option<usize>) -> Option<String> {
        index.and_then(|idx| row.get(idx).cloned().flatten())
    }
}
