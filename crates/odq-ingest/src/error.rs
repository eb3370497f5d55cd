use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// An expected column is absent. Raised before any row is classified
    /// so a wrong schema never masquerades as all-rows-invalid.
    #[error("{table}: missing expected column '{column}'")]
    MissingColumn { table: String, column: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl IngestError {
    pub fn missing_column(table: &str, column: &str) -> Self {
        Self::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
