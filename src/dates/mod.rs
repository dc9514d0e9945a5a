pub mod date_table;
pub mod error;
