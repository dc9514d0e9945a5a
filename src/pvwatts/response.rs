//! Decoding of the PVWatts v5 JSON body and its reshaping into a [`Table`].

use crate::dates::date_table::DateTable;
use crate::pvwatts::error::FetchError;
use crate::types::column::{Column, Row, ROW_WIDTH};
use crate::types::table::Table;
use log::warn;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The subset of a PVWatts response this crate reads.
///
/// `outputs` also carries monthly and annual summaries next to the hourly arrays,
/// so it is kept as a loose map and only the hourly keys are extracted.
#[derive(Debug, Deserialize)]
pub(crate) struct PvWattsResponse {
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub outputs: Option<Map<String, Value>>,
}

impl PvWattsResponse {
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Stamps the eight hourly arrays onto `dates`.
    ///
    /// Every array must be present and exactly as long as `dates`. Nothing is returned
    /// unless the whole table can be filled.
    pub fn into_table(self, dates: &DateTable) -> Result<Table, FetchError> {
        if !self.errors.is_empty() {
            return Err(FetchError::ApiErrors(self.errors));
        }
        for warning in &self.warnings {
            warn!("PVWatts warning: {}", warning);
        }
        let mut outputs = self.outputs.ok_or(FetchError::MissingOutputs)?;

        let mut measurements = Vec::with_capacity(Column::MEASUREMENTS.len());
        for column in Column::MEASUREMENTS {
            let name = column.name();
            let value = outputs.remove(name).ok_or(FetchError::MissingArray(name))?;
            let values: Vec<f64> = serde_json::from_value(value)
                .map_err(|source| FetchError::InvalidArray { name, source })?;
            if values.len() != dates.len() {
                return Err(FetchError::LengthMismatch {
                    name,
                    expected: dates.len(),
                    found: values.len(),
                });
            }
            measurements.push((column.index(), values));
        }

        let table = dates
            .iter()
            .enumerate()
            .map(|(position, stamp)| {
                let mut row: Row = [0.0; ROW_WIDTH];
                row[..3].copy_from_slice(&stamp.as_array());
                for (index, values) in &measurements {
                    row[*index] = values[position];
                }
                row
            })
            .collect();
        Ok(table)
    }
}
