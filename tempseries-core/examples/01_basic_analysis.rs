//! Basic series analysis
//!
//! Builds a series from a morning of readings, appends the afternoon,
//! shows a rejected batch, and prints the queries.
//!
//! Run with `cargo run -p tempseries-core --example 01_basic_analysis`.

use tempseries_core::{SeriesError, SeriesStore};

fn main() -> Result<(), SeriesError> {
    let morning = [8.5, 9.1, 10.4, 12.0, 13.7, 15.2];
    let afternoon = [17.8, 19.3, 20.1, 19.6, 18.2];

    let mut series = SeriesStore::from_values(&morning)?;
    println!("Morning readings: {}", series.len());

    let len = series.append(&afternoon)?;
    println!("After afternoon append: {} readings (capacity {})", len, series.capacity());

    // A faulty sensor reports a reading colder than physics allows
    match series.append(&[18.0, -512.0]) {
        Err(SeriesError::InvalidMeasurement { value, index }) => {
            println!("Rejected batch: {value}°C at index {index}, series still {} readings", series.len());
        }
        other => println!("Unexpected result: {:?}", other),
    }

    println!("Summary: {}", series.summary()?);
    println!("Closest to 0°C: {}", series.find_closest_to_zero()?);
    println!("Closest to 18°C: {}", series.find_closest_to_value(18.0)?);
    println!("Below 10°C: {:?}", series.find_less_than(10.0));
    println!("At or above 19°C: {:?}", series.find_greater_or_equal(19.0));
    println!("Between 12°C and 18°C: {:?}", series.find_in_range(12.0, 18.0));

    Ok(())
}
