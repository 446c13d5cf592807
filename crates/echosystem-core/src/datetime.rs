//! Relative-date formatting for display surfaces.

use chrono::{DateTime, Utc};

/// Format `date` relative to `now`: "just now", "N mins ago",
/// "N hours ago", "yesterday", "N days ago", falling back to YYYY-MM-DD
/// beyond a week.
pub fn format_relative(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(date);
    let secs = diff.num_seconds();

    if secs < 60 {
        return "just now".to_string();
    }
    if secs < 60 * 60 {
        let minutes = diff.num_minutes();
        return format!("{} min{} ago", minutes, if minutes == 1 { "" } else { "s" });
    }
    if secs < 24 * 60 * 60 {
        let hours = diff.num_hours();
        return format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" });
    }

    let days = diff.num_days();
    if days == 1 {
        return "yesterday".to_string();
    }
    if days < 7 {
        return format!("{days} days ago");
    }

    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn formats_each_bucket() {
        let now = Utc::now();
        assert_eq!(format_relative(now - Duration::seconds(10), now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(1), now), "1 min ago");
        assert_eq!(format_relative(now - Duration::minutes(5), now), "5 mins ago");
        assert_eq!(format_relative(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_relative(now - Duration::days(1), now), "yesterday");
        assert_eq!(format_relative(now - Duration::days(3), now), "3 days ago");
    }

    #[test]
    fn falls_back_to_date_beyond_a_week() {
        let now = Utc::now();
        let old = now - Duration::days(30);
        assert_eq!(format_relative(old, now), old.format("%Y-%m-%d").to_string());
    }
}
