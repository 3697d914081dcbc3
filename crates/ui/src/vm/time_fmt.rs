use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y %H:%M").to_string()
}

#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// `45 min`, or `1h 05m` past the hour.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::time::fixed_now;

    #[test]
    fn formats_fixed_timestamp() {
        assert_eq!(format_datetime(fixed_now()), "Nov 14, 2023 22:13");
        assert_eq!(format_date(fixed_now()), "Nov 14, 2023");
    }

    #[test]
    fn minutes_switch_to_hours() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(59), "59 min");
        assert_eq!(format_minutes(65), "1h 05m");
    }
}
