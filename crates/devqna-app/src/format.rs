//! Display formatting helpers.

use chrono::{DateTime, Utc};

/// Render a timestamp relative to now ("2h ago").
pub fn relative_time(timestamp: DateTime<Utc>) -> String {
    relative_time_at(timestamp.timestamp_millis(), Utc::now().timestamp_millis())
}

fn relative_time_at(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

/// First line of a markdown body, truncated with an ellipsis.
pub fn preview(content: &str, max_chars: usize) -> String {
    let first_line = content.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_time_units() {
        let now = 10_000_000;
        assert_eq!(relative_time_at(now - 30_000, now), "just now");
        assert_eq!(relative_time_at(now - 120_000, now), "2m ago");
        assert_eq!(relative_time_at(now - 2 * 60 * 60_000, now), "2h ago");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        let text = "This is a very long sentence that should be shortened\nsecond line";
        assert_eq!(preview(text, 20), "This is a very lo...");
        assert_eq!(preview("short", 20), "short");
    }
}
