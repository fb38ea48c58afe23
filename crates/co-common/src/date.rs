//! Relative timestamp formatting for job cards and notifications.

use chrono::{DateTime, Utc};

/// "5 mins ago" style label, falling back to a calendar date past 7 days.
/// A timestamp in the future clamps to "0 mins ago".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).max(chrono::Duration::zero());
    let mins = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if mins < 60 {
        format!("{} min{} ago", mins, plural(mins))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        then.format("%d %b %Y").to_string()
    }
}

/// [`format_time_ago`] against the current clock.
pub fn time_ago(then: DateTime<Utc>) -> String {
    format_time_ago(then, Utc::now())
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn minute_hour_day_boundaries() {
        let now = now();
        assert_eq!(format_time_ago(now - Duration::minutes(1), now), "1 min ago");
        assert_eq!(format_time_ago(now - Duration::minutes(45), now), "45 mins ago");
        assert_eq!(format_time_ago(now - Duration::minutes(60), now), "1 hour ago");
        assert_eq!(format_time_ago(now - Duration::hours(23), now), "23 hours ago");
        assert_eq!(format_time_ago(now - Duration::hours(24), now), "1 day ago");
        assert_eq!(format_time_ago(now - Duration::days(6), now), "6 days ago");
    }

    #[test]
    fn older_than_a_week_shows_the_date() {
        let now = now();
        assert_eq!(format_time_ago(now - Duration::days(8), now), "07 Jun 2025");
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        let now = now();
        assert_eq!(format_time_ago(now + Duration::minutes(5), now), "0 mins ago");
    }
}
