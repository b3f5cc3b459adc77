#[cfg(test)]
mod tests {
    use chrono::Duration;
    use oeetrack::libs::formatter::{format_duration, format_ratio, format_seconds, FormattedEntry};
    use oeetrack::libs::interval::{Status, StatusInterval};
    use oeetrack::libs::timestamp::Timestamp;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::zero()), "00:00:00");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30:00");
        assert_eq!(format_duration(&(Duration::hours(26) + Duration::seconds(5))), "26:00:05");
    }

    #[test]
    fn test_format_duration_negative_is_zero() {
        assert_eq!(format_duration(&Duration::minutes(-5)), "00:00:00");
    }

    #[test]
    fn test_format_seconds_rounds() {
        assert_eq!(format_seconds(3599.6), "01:00:00");
        assert_eq!(format_seconds(2700.0), "00:45:00");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.83), "83%");
        assert_eq!(format_ratio(1.0), "100%");
        assert_eq!(format_ratio(0.0), "0%");
    }

    #[test]
    fn test_formatted_entry_shows_end_of_day() {
        let entry = StatusInterval::new(
            1,
            Timestamp::parse("2024/03/01 23:00:00").unwrap(),
            Timestamp::parse("2024/03/01 24:00:00").unwrap(),
            Status::Down,
            "Jam",
        );
        let formatted = FormattedEntry::new(&entry, entry.start_time.day());

        assert_eq!(formatted.start, "23:00:00");
        assert_eq!(formatted.end, "24:00:00");
        assert_eq!(formatted.status, "DOWN");
        assert_eq!(formatted.duration, "01:00:00");
    }
}
