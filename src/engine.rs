use chrono::Utc;
use log::debug;

use crate::config::EngineConfig;
use crate::levels::{fibonacci, gann_angles, gann_box, gann_wave, pivots, square_of_nine};
use crate::models::{LevelsReport, PriceSample, WaveDirection};

/// Runs the full calculator family over a price sample and assembles a
/// report. Every calculator is pure; the engine only adds the timestamp
/// and the per-symbol configuration lookups.
pub struct LevelsEngine {
    config: EngineConfig,
}

impl LevelsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyze(&self, symbol: &str, sample: &PriceSample) -> LevelsReport {
        let time_unit = self.config.time_unit_for(symbol);
        let fan_direction = self.config.fan_direction_for(symbol);

        debug!(
            "Analyzing {}: price={} high={} low={} close={}",
            symbol, sample.price, sample.high, sample.low, sample.close
        );

        let wave = gann_wave::extensions(sample.high, sample.low, sample.price);

        // Project the sample's swing in the direction the extensions chose.
        let (wave_start, wave_end) = match wave.direction {
            WaveDirection::Up => (sample.low, sample.high),
            WaveDirection::Down => (sample.high, sample.low),
        };

        LevelsReport {
            symbol: symbol.to_string(),
            generated_at: Utc::now(),
            inputs: *sample,
            pivots: pivots::pivot_levels(sample.high, sample.low, sample.close).to_level_set(),
            fibonacci: fibonacci::retracement(sample.high, sample.low),
            fibonacci_extensions: fibonacci::extensions(sample.low, sample.high, sample.close),
            rings: square_of_nine::rings(sample.price, self.config.ring_count),
            degrees: square_of_nine::degree_levels(sample.price, self.config.degree_step),
            octaves: gann_box::octaves(sample.high, sample.low),
            percentages: gann_box::percentage_levels(sample.low, sample.high, sample.price),
            square_of_144: square_of_nine::square_of_144(
                sample.price,
                self.config.square_144_levels,
            ),
            wave,
            wave_projection: gann_wave::project_wave(wave_start, wave_end),
            angles: gann_angles::angle_levels(sample.price, time_unit),
            fan: gann_angles::fan(sample.price, 0.0, fan_direction),
        }
    }
}
