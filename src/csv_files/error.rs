use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("Failed to open CSV file '{0}'")]
    FileOpen(PathBuf, #[source] std::io::Error),

    #[error("Failed to read CSV file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Field {column} on line {line} of '{path}' is not a number: {value:?}")]
    NumericField {
        path: PathBuf,
        line: usize,
        column: usize,
        value: String,
    },
}
