//! Parses one PVWatts-style CSV export into a [`Table`].

use crate::csv_files::error::CsvError;
use crate::csv_files::line_filter::{is_data_row, split_fields, strip_quotes};
use crate::types::column::{Row, ROW_WIDTH};
use crate::types::table::Table;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads `path` line by line and keeps every line that qualifies as a data row.
///
/// Lines that fail the shape check are dropped silently. A line that passes the shape
/// check but holds a non-numeric field fails the whole file.
pub fn parse_file(path: &Path) -> Result<Table, CsvError> {
    let file = File::open(path).map_err(|e| CsvError::FileOpen(path.to_path_buf(), e))?;
    parse_reader(BufReader::new(file), path)
}

pub(crate) fn parse_reader<R: BufRead>(mut reader: R, path: &Path) -> Result<Table, CsvError> {
    let mut table = Table::new();
    let mut buffer = Vec::new();
    let mut line_number = 0;
    let mut dropped = 0;

    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| CsvError::FileRead(path.to_path_buf(), e))?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(&buffer);
        let cleaned = strip_quotes(&line);
        let fields = split_fields(&cleaned);
        if !is_data_row(&fields) {
            dropped += 1;
            continue;
        }
        table.push(convert_row(&fields, path, line_number)?);
    }

    if dropped > 0 {
        debug!("Skipped {} non-data lines in {:?}", dropped, path);
    }
    info!("Parsed {} rows from {:?}", table.len(), path);
    Ok(table)
}

fn convert_row(fields: &[&str], path: &Path, line: usize) -> Result<Row, CsvError> {
    let mut row: Row = [0.0; ROW_WIDTH];
    for (column, (slot, field)) in row.iter_mut().zip(fields).enumerate() {
        let text = field.trim();
        *slot = text.parse::<f64>().map_err(|_| CsvError::NumericField {
            path: path.to_path_buf(),
            line,
            column,
            value: text.to_string(),
        })?;
    }
    Ok(row)
}
