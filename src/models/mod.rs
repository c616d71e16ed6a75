use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price inputs for a single calculation pass. All fields must be finite,
/// non-NaN numbers; behavior on NaN or negative prices is undefined and
/// not validated here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceSample {
    pub price: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// A single named price level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub label: String,
    pub value: f64,
}

impl Level {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An ordered collection of labeled levels. Order is the emission order of
/// the calculator that produced it and is preserved through serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<Level>,
}

impl LevelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            levels: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.levels.push(Level::new(label, value));
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.levels
            .iter()
            .find(|level| level.label == label)
            .map(|level| level.value)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.levels.iter().map(|level| level.value)
    }
}

impl FromIterator<(String, f64)> for LevelSet {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            levels: iter
                .into_iter()
                .map(|(label, value)| Level { label, value })
                .collect(),
        }
    }
}

/// One ring of the Square-of-9 spiral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub ring_index: usize,
    pub values: Vec<f64>,
}

/// Direction of a wave projection or fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveDirection {
    Up,
    Down,
}

impl WaveDirection {
    pub fn sign(self) -> f64 {
        match self {
            WaveDirection::Up => 1.0,
            WaveDirection::Down => -1.0,
        }
    }
}

/// One line of a Gann fan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanLine {
    pub angle: f64,
    pub slope: f64,
    pub label: String,
}

/// A Gann fan: fixed-slope trendlines radiating from an anchor point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GannFan {
    pub start_price: f64,
    pub start_time: f64,
    pub direction: WaveDirection,
    pub lines: Vec<FanLine>,
}

/// Wave extension targets with the branch that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveExtensions {
    pub direction: WaveDirection,
    pub levels: LevelSet,
}

/// Continuation and retracement targets projected from a completed wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveProjection {
    pub direction: WaveDirection,
    pub wave_size: f64,
    pub continuation: LevelSet,
    pub retracement: LevelSet,
}

/// Percentage levels of a cycle range with the nearest levels bracketing
/// the current price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageLevels {
    pub levels: LevelSet,
    pub nearest_support: f64,
    pub nearest_resistance: f64,
}

/// Support/resistance pairs from the Square of 144.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquareOf144Levels {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

/// A projected Gann time cycle date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeCycle {
    pub days: i64,
    pub date: DateTime<Utc>,
    pub name: String,
}

/// Aggregate output of one engine pass over a `PriceSample`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelsReport {
    pub symbol: String,
    pub generated_at: DateTime<Utc>,
    pub inputs: PriceSample,
    pub pivots: LevelSet,
    pub fibonacci: LevelSet,
    pub fibonacci_extensions: LevelSet,
    pub rings: Vec<Ring>,
    pub degrees: LevelSet,
    pub octaves: LevelSet,
    pub percentages: PercentageLevels,
    pub square_of_144: SquareOf144Levels,
    pub wave: WaveExtensions,
    pub wave_projection: WaveProjection,
    pub angles: LevelSet,
    pub fan: GannFan,
}
