//! The calendar skeleton that remote PVWatts results are stamped onto.
//!
//! PVWatts hourly responses carry bare arrays without any timestamps. A [`DateTable`]
//! supplies the month/day/hour triple for each position, and its length decides how many
//! rows a fetched [`crate::Table`] has.

use crate::dates::error::DateTableError;
use bincode::config::{Configuration, Fixint, LittleEndian};
use chrono::Datelike;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::slice;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

// Any non-leap year works, PVWatts typical-year data always has 365 days.
const TYPICAL_YEAR: i32 = 2019;

/// Number of hourly entries in a typical (non-leap) year.
pub const HOURS_PER_TYPICAL_YEAR: usize = 8760;

/// One calendar position: month (index 0), day (index 1) and hour (index 2).
///
/// Fields are stored as `f64` since they are copied verbatim into the first three
/// columns of a [`crate::Row`].
///
/// # Examples
///
/// ```
/// use pvfeed::DateStamp;
///
/// let noon_new_year = DateStamp(1.0, 1.0, 12.0);
/// assert_eq!(noon_new_year.2, 12.0); // Hour
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateStamp(pub f64, pub f64, pub f64);

impl DateStamp {
    pub fn as_array(&self) -> [f64; 3] {
        [self.0, self.1, self.2]
    }
}

/// An ordered, read-only sequence of [`DateStamp`]s.
///
/// Use [`DateTable::typical_year`] for the standard 8760-hour PVWatts calendar,
/// [`DateTable::load`] to read a stored skeleton, or [`DateTable::new`] to inject any
/// synthetic calendar (handy for tests with short arrays).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTable {
    stamps: Vec<DateStamp>,
}

impl DateTable {
    pub fn new(stamps: Vec<DateStamp>) -> Self {
        Self { stamps }
    }

    /// Builds the hourly calendar of a typical year, January 1st hour 0 through
    /// December 31st hour 23.
    pub fn typical_year() -> Self {
        let stamps = NaiveDate::from_ymd_opt(TYPICAL_YEAR, 1, 1)
            .into_iter()
            .flat_map(|start| start.iter_days())
            .take_while(|day| day.year() == TYPICAL_YEAR)
            .flat_map(|day| {
                (0..24).map(move |hour| {
                    DateStamp(f64::from(day.month()), f64::from(day.day()), f64::from(hour))
                })
            })
            .collect();
        Self { stamps }
    }

    /// Reads a date table previously written with [`DateTable::save`].
    pub fn load(path: &Path) -> Result<Self, DateTableError> {
        let bytes =
            std::fs::read(path).map_err(|e| DateTableError::Read(path.to_path_buf(), e))?;
        let (stamps, _) =
            bincode::serde::decode_from_slice::<Vec<DateStamp>, _>(&bytes, BINCODE_CONFIG)
                .map_err(|e| DateTableError::Decode(path.to_path_buf(), Box::new(e)))?;
        Ok(Self { stamps })
    }

    pub fn save(&self, path: &Path) -> Result<(), DateTableError> {
        let bytes = bincode::serde::encode_to_vec(&self.stamps, BINCODE_CONFIG)
            .map_err(|e| DateTableError::Encode(Box::new(e)))?;
        std::fs::write(path, bytes).map_err(|e| DateTableError::Write(path.to_path_buf(), e))
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn stamps(&self) -> &[DateStamp] {
        &self.stamps
    }

    pub fn iter(&self) -> slice::Iter<'_, DateStamp> {
        self.stamps.iter()
    }
}

impl Default for DateTable {
    fn default() -> Self {
        Self::typical_year()
    }
}

impl FromIterator<DateStamp> for DateTable {
    fn from_iter<I: IntoIterator<Item = DateStamp>>(iter: I) -> Self {
        Self {
            stamps: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_typical_year_covers_every_hour() {
        let table = DateTable::typical_year();
        assert_eq!(table.len(), HOURS_PER_TYPICAL_YEAR);
        assert_eq!(table.stamps()[0], DateStamp(1.0, 1.0, 0.0));
        assert_eq!(table.stamps()[23], DateStamp(1.0, 1.0, 23.0));
        assert_eq!(table.stamps()[24], DateStamp(1.0, 2.0, 0.0));
        assert_eq!(
            table.stamps()[HOURS_PER_TYPICAL_YEAR - 1],
            DateStamp(12.0, 31.0, 23.0)
        );
    }

    #[test]
    fn test_typical_year_has_no_leap_day() {
        let table = DateTable::typical_year();
        assert!(!table.iter().any(|s| s.0 == 2.0 && s.1 == 29.0));
        let february_hours = table.iter().filter(|s| s.0 == 2.0).count();
        assert_eq!(february_hours, 28 * 24);
    }

    #[test]
    fn test_save_then_load_restores_stamps() -> Result<(), DateTableError> {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("dates.bin");
        let table = DateTable::new(vec![DateStamp(3.0, 14.0, 1.0), DateStamp(3.0, 14.0, 2.0)]);
        table.save(&path)?;
        assert_eq!(DateTable::load(&path)?, table);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let result = DateTable::load(&dir.path().join("absent.bin"));
        assert!(matches!(result, Err(DateTableError::Read(_, _))));
    }

    #[test]
    fn test_load_garbage_fails_to_decode() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("dates.bin");
        // Claims 1000 stamps but holds only a few bytes.
        let mut bytes = 1000u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        assert!(matches!(
            DateTable::load(&path),
            Err(DateTableError::Decode(_, _))
        ));
    }
}
