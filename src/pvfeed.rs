//! The crate's entry points: one function for live PVWatts data and two for stored
//! PVWatts CSV exports. All three return the same [`Table`] layout, so live and
//! historical data can be handled by the same downstream code.

use crate::csv_files::loader;
use crate::csv_files::parser;
use crate::dates::date_table::DateTable;
use crate::error::PvFeedError;
use crate::pvwatts::client::{PvWattsClient, DEFAULT_LOSSES, DEFAULT_TILT};
use crate::types::table::Table;
use bon::builder;
use std::path::Path;

/// Fetches hourly PVWatts output for a system at `address` using a fresh [`PvWattsClient`].
///
/// `panel_watts` is the nameplate DC capacity in watts. It is sent to PVWatts in kilowatts.
///
/// # Optional Builder Methods
///
/// * `.tilt(f64)`: Array tilt in degrees (default: 20.0).
/// * `.losses(f64)`: System losses in percent (default: 14.0).
/// * `.use_cache(bool)`: Accepted and ignored, every call performs one request.
/// * `.date_table(&DateTable)`: Calendar skeleton (default: [`DateTable::typical_year`]).
///
/// # Errors
///
/// Returns [`PvFeedError::Fetch`] if the request fails or the response does not fill
/// the calendar exactly.
///
/// # Examples
///
/// ```no_run
/// use pvfeed::{fetch_remote, Column, PvFeedError};
///
/// # fn main() -> Result<(), PvFeedError> {
/// let table = fetch_remote("DEMO_KEY", "Golden, CO", 5000.0)
///     .tilt(25.0)
///     .call()?;
/// let yearly_ac_wh: f64 = table.column(Column::AcOutput).iter().sum();
/// println!("Expected yearly AC output: {:.1} kWh", yearly_ac_wh / 1000.0);
/// # Ok(())
/// # }
/// ```
#[builder]
pub fn fetch_remote(
    #[builder(start_fn)] api_key: &str,
    #[builder(start_fn)] address: &str,
    #[builder(start_fn)] panel_watts: f64,
    #[builder(default = DEFAULT_TILT)] tilt: f64,
    #[builder(default = DEFAULT_LOSSES)] losses: f64,
    #[builder(default = true)] use_cache: bool,
    date_table: Option<&DateTable>,
) -> Result<Table, PvFeedError> {
    let table = PvWattsClient::new()
        .fetch(api_key, address, panel_watts)
        .tilt(tilt)
        .losses(losses)
        .use_cache(use_cache)
        .maybe_date_table(date_table)
        .call()?;
    Ok(table)
}

/// Parses a single PVWatts-style CSV file.
///
/// Only lines with exactly 11 comma-separated fields (after removing `"`) whose first
/// field is an unsigned integer are kept. Headers, metadata lines and totals rows are
/// skipped. The result may be empty.
///
/// # Errors
///
/// Returns [`PvFeedError::Csv`] if the file cannot be opened or read, or if a kept
/// line contains a non-numeric field.
///
/// # Examples
///
/// ```no_run
/// use pvfeed::{parse_file, PvFeedError};
///
/// # fn main() -> Result<(), PvFeedError> {
/// let table = parse_file("data/pvwatts_hourly.csv")?;
/// println!("{} hourly rows", table.len());
/// # Ok(())
/// # }
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Table, PvFeedError> {
    Ok(parser::parse_file(path.as_ref())?)
}

/// Parses every file in `paths` and concatenates the rows in the given order.
///
/// # Errors
///
/// Returns the first [`PvFeedError::Csv`] encountered. Files after the failing one are
/// not read.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Table, PvFeedError> {
    Ok(loader::load_files(paths)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_files::error::CsvError;
    use crate::ROW_WIDTH;
    use tempfile::tempdir;

    #[test]
    fn test_csv_entry_points_share_schema() -> Result<(), PvFeedError> {
        let dir = tempdir().expect("Failed to create temp dir");
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");
        std::fs::write(&first, "\"6\",\"1\",\"0\",\"1\",\"2\",\"3\",\"4\",\"5\",\"6\",\"7\",\"8\"\n")
            .expect("Failed to write fixture");
        std::fs::write(&second, "6,1,1,1,2,3,4,5,6,7,8\nfooter\n").expect("Failed to write fixture");

        let single = parse_file(&first)?;
        let combined = load_files(&[&first, &second])?;
        assert_eq!(single.len(), 1);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.rows()[0], single.rows()[0]);
        assert!(combined.iter().all(|row| row.len() == ROW_WIDTH));
        Ok(())
    }

    #[test]
    fn test_csv_errors_are_wrapped() {
        let result = parse_file("/no/such/dir/file.csv");
        assert!(matches!(
            result,
            Err(PvFeedError::Csv(CsvError::FileOpen(_, _)))
        ));
    }

    #[test]
    fn test_fetch_rejects_bad_capacity_without_network() {
        let result = fetch_remote("KEY", "Denver", -5.0).call();
        assert!(matches!(result, Err(PvFeedError::Fetch(_))));
    }
}
