use pvfeed::{load_files, Column, PvFeedError};
use std::env;

/// Usage: cargo run --example load_exports -- first.csv second.csv ...
fn main() -> Result<(), PvFeedError> {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Pass one or more PVWatts hourly CSV exports");
        return Ok(());
    }

    let table = load_files(&paths)?;
    println!("Loaded {} rows from {} files", table.len(), paths.len());

    let peak_ac = table
        .column(Column::AcOutput)
        .into_iter()
        .fold(f64::MIN, f64::max);
    if !table.is_empty() {
        println!("Peak AC output: {:.0} W", peak_ac);
    }

    Ok(())
}
