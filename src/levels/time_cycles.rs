use chrono::{DateTime, Duration, Utc};

use crate::models::TimeCycle;

/// Gann's key time cycles in days.
pub const TIME_CYCLES: [i64; 15] = [
    7, 14, 21, 28, 30, 45, 49, 52, 60, 90, 120, 144, 180, 270, 360,
];

/// Project cycle dates forward from a pivot date, keeping those within
/// `horizon_days`. Output is ordered by day count.
pub fn cycle_dates(pivot_date: DateTime<Utc>, horizon_days: i64) -> Vec<TimeCycle> {
    TIME_CYCLES
        .iter()
        .filter(|&&days| days <= horizon_days)
        .map(|&days| TimeCycle {
            days,
            date: pivot_date + Duration::days(days),
            name: cycle_name(days),
        })
        .collect()
}

fn cycle_name(days: i64) -> String {
    match days {
        7 => "weekly".to_string(),
        30 => "monthly".to_string(),
        90 => "quarterly".to_string(),
        144 => "master".to_string(),
        180 => "semi-annual".to_string(),
        360 => "annual".to_string(),
        _ => format!("{}-day", days),
    }
}
