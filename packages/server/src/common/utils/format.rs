/// Display-formatting helpers for API payloads
///
/// Outputs are passed through to clients unmodified, so wording changes
/// here are user-visible.
use chrono::{DateTime, Utc};

/// Average adult reading speed used for read-time estimates.
const WORDS_PER_MINUTE: usize = 200;

/// Formats a timestamp as e.g. "Jan 5, 2026".
pub fn display_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Human relative time: "just now", "5 minutes ago", "2 hours ago",
/// "3 days ago"; anything older than a week falls back to the full date.
pub fn time_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - ts).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return plural(days, "day");
    }

    display_date(ts)
}

/// Estimated read time in whole minutes, never below 1.
pub fn read_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    minutes as u32
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
