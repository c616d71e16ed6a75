use crate::models::{FanLine, GannFan, LevelSet, WaveDirection};

/// Classic Gann angle ratios and their slope fractions, in display order.
/// The 1x1 carries a zero offset so its level sits on the input price.
pub const ANGLE_RATIOS: [(&str, f64); 7] = [
    ("1x1", 0.0),
    ("1x2", 0.5),
    ("1x4", 0.25),
    ("1x8", 0.125),
    ("2x1", 2.0),
    ("4x1", 4.0),
    ("8x1", 8.0),
];

/// Fan angles in degrees, steepest first.
pub const FAN_ANGLES: [f64; 7] = [82.5, 75.0, 63.75, 45.0, 26.25, 15.0, 7.5];

/// Gann angle levels from a price: one level per classic ratio, offset by
/// the ratio's slope fraction scaled by the time unit.
pub fn angle_levels(price: f64, time_unit: f64) -> LevelSet {
    let mut set = LevelSet::with_capacity(ANGLE_RATIOS.len());
    for (label, slope) in ANGLE_RATIOS {
        set.push(label, price + time_unit * slope);
    }
    set
}

/// Gann fan lines radiating from a pivot. Slopes are the tangents of the
/// fixed fan angles, negated when the fan opens downward. The anchor point
/// is carried through for the caller; it does not affect the slopes.
pub fn fan(start_price: f64, start_time: f64, direction: WaveDirection) -> GannFan {
    let sign = direction.sign();

    let lines = FAN_ANGLES
        .iter()
        .map(|&angle| FanLine {
            angle,
            slope: angle.to_radians().tan() * sign,
            label: format!("{}°", angle),
        })
        .collect();

    GannFan {
        start_price,
        start_time,
        direction,
        lines,
    }
}

/// Angle of a price move in degrees: `atan2(price - base_price, time_units)`.
/// Zero elapsed time yields 0.
pub fn price_angle(price: f64, base_price: f64, time_units: f64) -> f64 {
    if time_units == 0.0 {
        return 0.0;
    }
    (price - base_price).atan2(time_units).to_degrees()
}
