//! Display Formatting
//!
//! Turns the numeric metrics of records into the short strings cards show.

use chrono::{DateTime, Utc};

use crate::catalog::aggregate::round_to_one_decimal;

/// 950 -> "950", 1200 -> "1.2k", 2000 -> "2k", 3400000 -> "3.4m".
/// The unit is chosen after rounding, so 999950 reads "1m".
pub fn compact_count(n: u32) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let n = u64::from(n);
    let thousand_tenths = (n + 50) / 100;
    if thousand_tenths < 10_000 {
        format!("{}k", tenths(thousand_tenths))
    } else {
        format!("{}m", tenths((n + 50_000) / 100_000))
    }
}

/// 12 -> "1.2", 20 -> "2"
fn tenths(value: u64) -> String {
    if value % 10 == 0 {
        (value / 10).to_string()
    } else {
        format!("{}.{}", value / 10, value % 10)
    }
}

/// 8 -> "8 min"
pub fn read_time(minutes: u32) -> String {
    format!("{} min", minutes)
}

/// Video badge: 765 -> "12:45", 3723 -> "1:02:03"
pub fn clock(seconds: u32) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Tutorial length: 150 -> "2.5 hours", 60 -> "1 hour", 45 -> "45 min"
pub fn hours(minutes: u32) -> String {
    if minutes < 60 {
        return read_time(minutes);
    }
    let value = round_to_one_decimal(minutes as f64 / 60.0);
    if value == 1.0 {
        "1 hour".to_string()
    } else {
        format!("{} hours", value)
    }
}

/// "2 hours ago", "1 day ago". Future timestamps read as "just now".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let (amount, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{} {}{} ago", amount, unit, plural)
}
