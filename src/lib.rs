pub mod config;
pub mod data;
pub mod engine;
pub mod levels;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use crate::config::{EngineConfig, SymbolConfig};
pub use crate::data::{load_candles_from_csv, sample_from_candles, DataError};
pub use crate::engine::LevelsEngine;
pub use crate::models::{
    Candle, FanLine, GannFan, Level, LevelSet, LevelsReport, PriceSample, Ring, WaveDirection,
};
pub use crate::report::ReportFileManager;

use log::info;
use tracing_subscriber::{fmt, EnvFilter};

pub fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gann_levels=debug"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    info!("Logging initialized");
}
