//! Contains [`Table`], the in-memory result type returned by both the remote fetch and
//! the CSV loaders.

use crate::types::column::{Column, Row};
use polars::prelude::{
    Column as FrameColumn, DataFrame, IntoLazy, LazyFrame, NamedFrom, PolarsResult, Series,
};
use std::slice;

/// An ordered sequence of fixed-width numeric rows.
///
/// Row order is meaningful (chronological for PVWatts data) and is never changed by
/// any operation on this type. Every row has exactly [`crate::ROW_WIDTH`] fields, which
/// the [`Row`] array type guarantees.
///
/// # Examples
///
/// ```
/// use pvfeed::{Column, Table};
///
/// let mut table = Table::new();
/// table.push([1.0, 1.0, 12.0, 800.0, 90.0, 4.5, 2.1, 650.0, 21.0, 3200.0, 3050.0]);
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.column(Column::AcOutput), vec![3050.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn iter(&self) -> slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Appends all rows of `other` after the rows already present, keeping both orders.
    pub fn append(&mut self, other: Table) {
        self.rows.extend(other.rows);
    }

    /// Copies one column out of every row, top to bottom.
    pub fn column(&self, column: Column) -> Vec<f64> {
        let index = column.index();
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// Converts the table into a Polars `DataFrame` with one named `f64` column per field.
    ///
    /// Column names are the short names from [`Column::name`]
    /// (`month, day, hour, dn, df, tamb, wspd, poa, tcell, dc, ac`).
    ///
    /// # Errors
    ///
    /// Returns a [`polars::prelude::PolarsError`] if Polars rejects the frame construction.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns: Vec<FrameColumn> = Column::ALL
            .iter()
            .map(|column| Series::new(column.name().into(), self.column(*column)).into())
            .collect();
        DataFrame::new(columns)
    }

    /// Same as [`Table::to_dataframe`], but hands back a `LazyFrame` for further querying.
    pub fn into_lazy(self) -> PolarsResult<LazyFrame> {
        Ok(self.to_dataframe()?.lazy())
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl Extend<Row> for Table {
    fn extend<I: IntoIterator<Item = Row>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
