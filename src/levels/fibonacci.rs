use crate::models::{LevelSet, WaveDirection};

/// Standard retracement ratios, ascending.
pub const RETRACEMENT_RATIOS: [(f64, &str); 7] = [
    (0.0, "0%"),
    (0.236, "23.6%"),
    (0.382, "38.2%"),
    (0.5, "50%"),
    (0.618, "61.8%"),
    (0.786, "78.6%"),
    (1.0, "100%"),
];

/// Extension ratios beyond a completed retracement.
pub const EXTENSION_RATIOS: [(f64, &str); 5] = [
    (1.0, "100%"),
    (1.272, "127.2%"),
    (1.618, "161.8%"),
    (2.0, "200%"),
    (2.618, "261.8%"),
];

/// Fibonacci retracement of the range. `0%` maps to the low and `100%` to
/// the high; levels are non-decreasing in ratio order for `high >= low`.
pub fn retracement(high: f64, low: f64) -> LevelSet {
    let range = high - low;
    let mut set = LevelSet::with_capacity(RETRACEMENT_RATIOS.len());
    for (ratio, label) in RETRACEMENT_RATIOS {
        set.push(label, low + range * ratio);
    }
    set
}

/// Direction-aware retracement. In an up-trend levels are measured down
/// from the high (so `0%` is the high); in a down-trend up from the low.
pub fn retracement_directed(high: f64, low: f64, direction: WaveDirection) -> LevelSet {
    let range = high - low;
    let mut set = LevelSet::with_capacity(RETRACEMENT_RATIOS.len());
    for (ratio, label) in RETRACEMENT_RATIOS {
        let value = match direction {
            WaveDirection::Up => high - range * ratio,
            WaveDirection::Down => low + range * ratio,
        };
        set.push(label, value);
    }
    set
}

/// Extension targets above a retracement low, scaled by the prior swing.
pub fn extensions(swing_low: f64, swing_high: f64, retracement_low: f64) -> LevelSet {
    let range = swing_high - swing_low;
    let mut set = LevelSet::with_capacity(EXTENSION_RATIOS.len());
    for (ratio, label) in EXTENSION_RATIOS {
        set.push(label, retracement_low + range * ratio);
    }
    set
}
