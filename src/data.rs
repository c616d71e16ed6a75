use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Candle, PriceSample};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("no candles loaded from {0}")]
    EmptyData(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct CsvCandle {
    #[serde(alias = "Timestamp", alias = "time")]
    timestamp: String,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close")]
    close: f64,
    #[serde(alias = "Volume", default)]
    volume: f64,
}

/// Load candles from a headered CSV file. Space-separated timestamps are
/// normalized to ISO 8601.
pub fn load_candles_from_csv(file_path: &str) -> Result<Vec<Candle>, DataError> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(DataError::FileNotFound(file_path.to_string()));
    }

    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut candles = Vec::new();
    for result in rdr.deserialize() {
        let csv_candle: CsvCandle = result?;

        let time = if csv_candle.timestamp.contains('T') {
            csv_candle.timestamp
        } else {
            // "2024-08-06 08:00:00" -> "2024-08-06T08:00:00Z"
            csv_candle.timestamp.replace(' ', "T") + "Z"
        };

        candles.push(Candle {
            time,
            open: csv_candle.open,
            high: csv_candle.high,
            low: csv_candle.low,
            close: csv_candle.close,
            volume: csv_candle.volume,
        });
    }

    if candles.is_empty() {
        return Err(DataError::EmptyData(file_path.to_string()));
    }

    info!("Loaded {} candles from {}", candles.len(), file_path);
    Ok(candles)
}

/// Collapse the trailing `lookback` candles into a single price sample:
/// the window's extreme high/low with the last candle's close as both the
/// close and the current price.
pub fn sample_from_candles(candles: &[Candle], lookback: usize) -> Option<PriceSample> {
    let last = candles.last()?;
    let window_start = candles.len().saturating_sub(lookback.max(1));
    let window = &candles[window_start..];

    let high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);

    Some(PriceSample {
        price: last.close,
        high,
        low,
        close: last.close,
    })
}
