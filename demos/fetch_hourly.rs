use pvfeed::{fetch_remote, Column, PvFeedError};
use std::env;

fn main() -> Result<(), PvFeedError> {
    let api_key = env::var("NREL_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string());

    let table = fetch_remote(&api_key, "Golden, CO", 5000.0)
        .tilt(25.0)
        .losses(14.0)
        .call()?;

    let ac = table.column(Column::AcOutput);
    let yearly_kwh: f64 = ac.iter().sum::<f64>() / 1000.0;
    println!("{} hourly rows, {:.1} kWh AC per year", table.len(), yearly_kwh);

    match table.to_dataframe() {
        Ok(frame) => println!("{}", frame.head(Some(24))),
        Err(e) => eprintln!("Could not build a DataFrame: {}", e),
    }

    Ok(())
}
