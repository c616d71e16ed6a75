// tests/engine_tests.rs
use gann_levels::{
    load_candles_from_csv, sample_from_candles, DataError, EngineConfig, LevelsEngine,
    PriceSample, ReportFileManager, WaveDirection,
};

use std::fs;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("gann_levels_tests")
        .join(format!("{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample() -> PriceSample {
    PriceSample {
        price: 100.0,
        high: 105.0,
        low: 95.0,
        close: 100.0,
    }
}

#[test]
fn test_engine_report_shape() {
    let engine = LevelsEngine::new(EngineConfig::default());
    let report = engine.analyze("BTC", &sample());

    assert_eq!(report.symbol, "BTC");
    assert_eq!(report.pivots.len(), 7);
    assert_eq!(report.fibonacci.len(), 7);
    assert_eq!(report.rings.len(), 5);
    assert_eq!(report.degrees.len(), 25);
    assert_eq!(report.octaves.len(), 9);
    assert_eq!(report.angles.len(), 7);
    assert_eq!(report.fan.lines.len(), 7);

    // Price on the midpoint: upward branch, swing projected low -> high
    assert_eq!(report.wave.direction, WaveDirection::Up);
    assert_eq!(report.wave_projection.direction, WaveDirection::Up);
    assert!((report.wave_projection.wave_size - 10.0).abs() < 1e-9);

    // Worked pivot example flows through the report
    assert!((report.pivots.get("pivot").unwrap() - 100.0).abs() < 1e-9);
    assert!((report.pivots.get("R1").unwrap() - 105.0).abs() < 1e-9);
}

#[test]
fn test_engine_is_deterministic_apart_from_timestamp() {
    let engine = LevelsEngine::new(EngineConfig::default());
    let a = engine.analyze("ETH", &sample());
    let b = engine.analyze("ETH", &sample());

    assert_eq!(a.pivots, b.pivots);
    assert_eq!(a.fibonacci, b.fibonacci);
    assert_eq!(a.rings, b.rings);
    assert_eq!(a.degrees, b.degrees);
    assert_eq!(a.angles, b.angles);
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let config = EngineConfig::load_from_file("does/not/exist.toml").unwrap();
    assert_eq!(config.ring_count, 5);
    assert_eq!(config.degree_step, 15);
    assert!((config.time_unit - 1.0).abs() < 1e-9);
    assert_eq!(config.fan_direction, WaveDirection::Up);
}

#[test]
fn test_config_symbol_overrides() {
    let dir = temp_dir("config");
    let path = dir.join("levels.toml");
    fs::write(
        &path,
        r#"
ring_count = 3
time_unit = 1.0

[symbols.GOLD]
time_unit = 0.25
fan_direction = "down"
"#,
    )
    .unwrap();

    let config = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(config.ring_count, 3);

    // Override wins for the configured symbol, default elsewhere
    assert!((config.time_unit_for("GOLD") - 0.25).abs() < 1e-9);
    assert_eq!(config.fan_direction_for("GOLD"), WaveDirection::Down);
    assert!((config.time_unit_for("BTC") - 1.0).abs() < 1e-9);
    assert_eq!(config.fan_direction_for("BTC"), WaveDirection::Up);
}

#[test]
fn test_config_malformed_file_is_an_error() {
    let dir = temp_dir("bad_config");
    let path = dir.join("levels.toml");
    fs::write(&path, "ring_count = \"not a number\"").unwrap();

    assert!(EngineConfig::load_from_file(&path).is_err());
}

#[test]
fn test_report_file_round_trip() {
    let dir = temp_dir("reports");
    let engine = LevelsEngine::new(EngineConfig::default());
    let report = engine.analyze("BTC", &sample());

    let manager = ReportFileManager::new(dir.to_str().unwrap());
    let path = manager.write_report(&report).unwrap();

    assert!(path.exists());
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("BTC_"));
    assert!(name.ends_with(".json"));

    let contents = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["symbol"], "BTC");
    assert_eq!(parsed["pivots"]["levels"][0]["label"], "pivot");
}

#[test]
fn test_csv_loading_and_sampling() {
    let dir = temp_dir("csv");
    let path = dir.join("BTC.csv");
    fs::write(
        &path,
        "Timestamp,Open,High,Low,Close,Volume\n\
         2024-08-06 08:00:00,100.0,106.0,99.0,104.0,1000.0\n\
         2024-08-06 09:00:00,104.0,108.0,103.0,107.0,1200.0\n\
         2024-08-06 10:00:00,107.0,110.0,102.0,105.0,900.0\n",
    )
    .unwrap();

    let candles = load_candles_from_csv(path.to_str().unwrap()).unwrap();
    assert_eq!(candles.len(), 3);
    // Space-separated timestamps are normalized
    assert_eq!(candles[0].time, "2024-08-06T08:00:00Z");

    let sample = sample_from_candles(&candles, 3).unwrap();
    assert!((sample.high - 110.0).abs() < 1e-9);
    assert!((sample.low - 99.0).abs() < 1e-9);
    assert!((sample.close - 105.0).abs() < 1e-9);
    assert!((sample.price - 105.0).abs() < 1e-9);

    // A shorter lookback only sees the tail of the series
    let tail = sample_from_candles(&candles, 1).unwrap();
    assert!((tail.high - 110.0).abs() < 1e-9);
    assert!((tail.low - 102.0).abs() < 1e-9);
}

#[test]
fn test_csv_missing_file() {
    let err = load_candles_from_csv("no/such/file.csv").unwrap_err();
    assert!(matches!(err, DataError::FileNotFound(_)));
}
