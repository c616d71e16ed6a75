use crate::models::{LevelSet, PercentageLevels};

/// Gann box octaves: the range divided into eighths, `0/8` at the low and
/// `8/8` at the high.
pub fn octaves(high: f64, low: f64) -> LevelSet {
    let range = high - low;
    let mut set = LevelSet::with_capacity(9);
    for k in 0..=8 {
        set.push(format!("{}/8", k), low + range * k as f64 / 8.0);
    }
    set
}

/// Gann percentage levels of a cycle range: the eighths plus the thirds,
/// with the nearest levels bracketing `current_price`. When no level sits
/// strictly below (or above) the current price, the cycle extreme is used.
pub fn percentage_levels(cycle_low: f64, cycle_high: f64, current_price: f64) -> PercentageLevels {
    const FRACTIONS: [(f64, &str); 11] = [
        (0.0, "extreme_low"),
        (0.125, "12.5%"),
        (0.25, "25%"),
        (0.333, "33.3%"),
        (0.375, "37.5%"),
        (0.5, "50%"),
        (0.625, "62.5%"),
        (0.667, "66.7%"),
        (0.75, "75%"),
        (0.875, "87.5%"),
        (1.0, "extreme_high"),
    ];

    let range = cycle_high - cycle_low;
    let mut levels = LevelSet::with_capacity(FRACTIONS.len());
    for (fraction, label) in FRACTIONS {
        levels.push(label, cycle_low + range * fraction);
    }

    let nearest_support = levels
        .values()
        .filter(|&v| v < current_price)
        .fold(None::<f64>, |acc, v| Some(acc.map_or(v, |a| a.max(v))))
        .unwrap_or(cycle_low);

    let nearest_resistance = levels
        .values()
        .filter(|&v| v > current_price)
        .fold(None::<f64>, |acc, v| Some(acc.map_or(v, |a| a.min(v))))
        .unwrap_or(cycle_high);

    PercentageLevels {
        levels,
        nearest_support,
        nearest_resistance,
    }
}
