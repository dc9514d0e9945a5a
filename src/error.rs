use crate::csv_files::error::CsvError;
use crate::dates::error::DateTableError;
use crate::pvwatts::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PvFeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error(transparent)]
    DateTable(#[from] DateTableError),
}
