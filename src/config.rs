use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::WaveDirection;

/// Engine parameters. Everything has a sensible default so the engine runs
/// without a config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of Square-of-9 rings to expand.
    pub ring_count: usize,
    /// Step in degrees for the Square-of-9 degree levels.
    pub degree_step: usize,
    /// Time unit for the Gann angle levels.
    pub time_unit: f64,
    /// Default fan direction when none is given per symbol.
    pub fan_direction: WaveDirection,
    /// Number of Square-of-144 divisions to emit (up to 12).
    pub square_144_levels: usize,
    /// Per-symbol overrides.
    pub symbols: HashMap<String, SymbolConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    pub time_unit: Option<f64>,
    pub fan_direction: Option<WaveDirection>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ring_count: 5,
            degree_step: 15,
            time_unit: 1.0,
            fan_direction: WaveDirection::Up,
            square_144_levels: 12,
            symbols: HashMap::new(),
        }
    }
}

impl EngineConfig {
    /// Load from a TOML file, falling back to defaults when the file does
    /// not exist. A malformed file is an error, not a silent default.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: EngineConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Effective time unit for a symbol, applying any override.
    pub fn time_unit_for(&self, symbol: &str) -> f64 {
        self.symbols
            .get(symbol)
            .and_then(|s| s.time_unit)
            .unwrap_or(self.time_unit)
    }

    /// Effective fan direction for a symbol, applying any override.
    pub fn fan_direction_for(&self, symbol: &str) -> WaveDirection {
        self.symbols
            .get(symbol)
            .and_then(|s| s.fan_direction)
            .unwrap_or(self.fan_direction)
    }
}
