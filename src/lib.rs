mod csv_files;
mod dates;
mod error;
mod pvfeed;
mod pvwatts;
mod types;

pub use error::PvFeedError;
pub use pvfeed::*;

pub use pvwatts::client::{PvWattsClient, DEFAULT_LOSSES, DEFAULT_TILT, PVWATTS_URL};

pub use types::column::{Column, Row, ROW_WIDTH};
pub use types::table::Table;

pub use dates::date_table::{DateStamp, DateTable, HOURS_PER_TYPICAL_YEAR};

pub use csv_files::error::CsvError;
pub use dates::error::DateTableError;
pub use pvwatts::error::FetchError;
