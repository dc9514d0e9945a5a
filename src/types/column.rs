//! Defines the fixed, positional column layout shared by every [`crate::Table`].

use std::fmt;

/// Number of fields in every row: three calendar fields followed by eight measurements.
pub const ROW_WIDTH: usize = 11;

/// A single record of the shared table schema. Field order follows [`Column::ALL`].
pub type Row = [f64; ROW_WIDTH];

/// Identifies one of the eleven positional columns of a [`crate::Table`].
///
/// The first three columns are the calendar skeleton (month, day, hour). The remaining
/// eight carry the PVWatts hourly outputs, in the order the PVWatts CSV export lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Month of the year, 1-12.
    Month,
    /// Day of the month, 1-31.
    Day,
    /// Hour of the day, 0-23.
    Hour,
    /// Beam (direct normal) irradiance in W/m².
    BeamIrradiance,
    /// Diffuse irradiance in W/m².
    DiffuseIrradiance,
    /// Ambient temperature in °C.
    AmbientTemperature,
    /// Wind speed in m/s.
    WindSpeed,
    /// Plane-of-array irradiance in W/m².
    PlaneOfArrayIrradiance,
    /// Module cell temperature in °C.
    CellTemperature,
    /// DC array output in W.
    DcOutput,
    /// AC system output in W.
    AcOutput,
}

impl Column {
    /// All columns in row order.
    pub const ALL: [Column; ROW_WIDTH] = [
        Column::Month,
        Column::Day,
        Column::Hour,
        Column::BeamIrradiance,
        Column::DiffuseIrradiance,
        Column::AmbientTemperature,
        Column::WindSpeed,
        Column::PlaneOfArrayIrradiance,
        Column::CellTemperature,
        Column::DcOutput,
        Column::AcOutput,
    ];

    /// The eight measurement columns, in the order they are filled from a PVWatts response.
    pub const MEASUREMENTS: [Column; 8] = [
        Column::BeamIrradiance,
        Column::DiffuseIrradiance,
        Column::AmbientTemperature,
        Column::WindSpeed,
        Column::PlaneOfArrayIrradiance,
        Column::CellTemperature,
        Column::DcOutput,
        Column::AcOutput,
    ];

    /// Position of this column inside a [`Row`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short column name. For measurement columns this is also the key of the
    /// matching array in the PVWatts `outputs` object.
    pub fn name(self) -> &'static str {
        match self {
            Column::Month => "month",
            Column::Day => "day",
            Column::Hour => "hour",
            Column::BeamIrradiance => "dn",
            Column::DiffuseIrradiance => "df",
            Column::AmbientTemperature => "tamb",
            Column::WindSpeed => "wspd",
            Column::PlaneOfArrayIrradiance => "poa",
            Column::CellTemperature => "tcell",
            Column::DcOutput => "dc",
            Column::AcOutput => "ac",
        }
    }
}

/// Formats a `Column` using its short name.
///
/// # Examples
///
/// ```
/// use pvfeed::Column;
///
/// assert_eq!(Column::AcOutput.to_string(), "ac");
/// assert_eq!(format!("{}", Column::Hour), "hour");
/// ```
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_row_order() {
        for (position, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), position, "{} out of place", column);
        }
    }

    #[test]
    fn test_measurements_start_after_calendar_fields() {
        assert_eq!(Column::MEASUREMENTS[0].index(), 3);
        assert_eq!(Column::MEASUREMENTS[7].index(), ROW_WIDTH - 1);
        let names: Vec<_> = Column::MEASUREMENTS.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["dn", "df", "tamb", "wspd", "poa", "tcell", "dc", "ac"]
        );
    }
}
