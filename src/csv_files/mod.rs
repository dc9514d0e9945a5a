pub mod error;
pub mod line_filter;
pub mod loader;
pub mod parser;
