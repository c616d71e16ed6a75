use crate::models::LevelSet;

/// Classic floor-trader pivot levels computed from the prior period's
/// high, low and close. Values are raw; callers format for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotLevels {
    pub pivot: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

pub fn pivot_levels(high: f64, low: f64, close: f64) -> PivotLevels {
    let pivot = (high + low + close) / 3.0;

    PivotLevels {
        pivot,
        r1: 2.0 * pivot - low,
        r2: pivot + (high - low),
        r3: high + 2.0 * (pivot - low),
        s1: 2.0 * pivot - high,
        s2: pivot - (high - low),
        s3: low - 2.0 * (high - pivot),
    }
}

impl PivotLevels {
    pub fn to_level_set(&self) -> LevelSet {
        let mut set = LevelSet::with_capacity(7);
        set.push("pivot", self.pivot);
        set.push("R1", self.r1);
        set.push("R2", self.r2);
        set.push("R3", self.r3);
        set.push("S1", self.s1);
        set.push("S2", self.s2);
        set.push("S3", self.s3);
        set
    }
}
