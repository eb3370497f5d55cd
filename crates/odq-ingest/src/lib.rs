#![deny(unsafe_code)]

mod datasets;
mod error;
mod table;

pub use datasets::{
    read_code_map_pairs, read_code_map_pairs_from_reader, read_countries,
    read_countries_from_reader, read_summer, read_summer_from_reader,
};
pub use error::{IngestError, Result};
pub use table::CsvTable;
