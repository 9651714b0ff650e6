//! Human-readable formatting for build creation times.
//!
//! Recent times get relative phrasing ("2 hours ago"); anything older than
//! 30 days falls back to an absolute date, which stays meaningful in
//! long-lived listings.

use chrono::{DateTime, Utc};

/// Formats a creation time relative to now.
pub fn format_created(created_at: DateTime<Utc>) -> String {
    format_created_from(created_at, Utc::now())
}

/// Formats a creation time relative to an explicit reference point.
///
/// Clock skew can put `created_at` slightly in the future; that is treated
/// the same as "just now" rather than producing negative durations.
pub fn format_created_from(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days <= 30 {
        return plural(days, "day");
    }

    created_at.format("%Y-%m-%d").to_string()
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
