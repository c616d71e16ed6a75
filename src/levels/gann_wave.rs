use crate::models::{LevelSet, WaveDirection, WaveExtensions, WaveProjection};

/// Multipliers for midpoint-branched extensions off a range.
pub const EXTENSION_MULTIPLIERS: [(f64, &str); 4] = [
    (0.382, "38.2%"),
    (0.618, "61.8%"),
    (1.0, "100%"),
    (1.618, "161.8%"),
];

/// Continuation ratios for projecting the next wave.
pub const CONTINUATION_RATIOS: [f64; 12] = [
    0.25, 0.333, 0.5, 0.618, 0.667, 0.75, 1.0, 1.25, 1.333, 1.5, 1.618, 2.0,
];

/// Retracement ratios against the completed wave.
pub const RETRACEMENT_RATIOS: [f64; 8] = [0.25, 0.333, 0.382, 0.5, 0.618, 0.667, 0.75, 1.0];

/// Wave extensions off a high/low range. The branch is chosen by comparing
/// `current_price` to the range midpoint: at or above the midpoint the
/// targets project upward from the high, otherwise downward from the low.
/// A price exactly on the midpoint takes the upward branch.
pub fn extensions(high: f64, low: f64, current_price: f64) -> WaveExtensions {
    let range = high - low;
    let midpoint = (high + low) / 2.0;

    let direction = if current_price >= midpoint {
        WaveDirection::Up
    } else {
        WaveDirection::Down
    };

    let mut levels = LevelSet::with_capacity(EXTENSION_MULTIPLIERS.len());
    for (multiplier, label) in EXTENSION_MULTIPLIERS {
        let value = match direction {
            WaveDirection::Up => high + range * multiplier,
            WaveDirection::Down => low - range * multiplier,
        };
        levels.push(label, value);
    }

    WaveExtensions { direction, levels }
}

/// Project targets for the wave following a completed swing from
/// `wave_start` to `wave_end`. Continuation targets extend in the wave's
/// direction; retracement targets pull back against it.
pub fn project_wave(wave_start: f64, wave_end: f64) -> WaveProjection {
    let wave_size = (wave_end - wave_start).abs();
    let direction = if wave_end >= wave_start {
        WaveDirection::Up
    } else {
        WaveDirection::Down
    };
    let sign = direction.sign();

    let continuation = CONTINUATION_RATIOS
        .iter()
        .map(|&ratio| (ratio_label(ratio), wave_end + wave_size * ratio * sign))
        .collect();

    let retracement = RETRACEMENT_RATIOS
        .iter()
        .map(|&ratio| (ratio_label(ratio), wave_end - wave_size * ratio * sign))
        .collect();

    WaveProjection {
        direction,
        wave_size,
        continuation,
        retracement,
    }
}

fn ratio_label(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
