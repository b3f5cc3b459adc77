#[cfg(test)]
mod tests {
    use oeetrack::libs::downtime::{aggregate_occurrences, downtime_entries, OccurrenceRecord, DEFAULT_DOWN_REASON};
    use oeetrack::libs::interval::{Status, StatusInterval};
    use oeetrack::libs::timestamp::Timestamp;

    fn entry(equipment_id: u32, start: &str, end: &str, status: Status, reason: &str) -> StatusInterval {
        StatusInterval::new(
            equipment_id,
            Timestamp::parse(start).unwrap(),
            Timestamp::parse(end).unwrap(),
            status,
            reason,
        )
    }

    fn occurrence(equipment_id: u32, date: &str, reason: &str, count: usize) -> OccurrenceRecord {
        OccurrenceRecord {
            equipment_id,
            date: date.parse().unwrap(),
            status: Status::Down,
            reason: reason.to_string(),
            occurrence_count: count,
        }
    }

    #[test]
    fn test_only_down_entries_are_kept() {
        let timeline = vec![
            entry(1, "2024/03/01 08:00:00", "2024/03/01 09:00:00", Status::Running, ""),
            entry(1, "2024/03/01 09:00:00", "2024/03/01 09:30:00", Status::Down, "Jam"),
            entry(1, "2024/03/01 09:30:00", "2024/03/01 10:00:00", Status::Idle, "Waiting"),
            entry(1, "2024/03/01 10:00:00", "2024/03/01 11:00:00", Status::Offline, ""),
        ];
        let down = downtime_entries(&timeline, DEFAULT_DOWN_REASON);
        assert_eq!(down, vec![timeline[1].clone()]);
    }

    #[test]
    fn test_empty_reason_gets_fallback() {
        let timeline = vec![entry(1, "2024/03/01 09:00:00", "2024/03/01 09:30:00", Status::Down, "")];

        let down = downtime_entries(&timeline, DEFAULT_DOWN_REASON);
        assert_eq!(down[0].reason, "Status Down");

        let down = downtime_entries(&timeline, "Unexplained");
        assert_eq!(down[0].reason, "Unexplained");
    }

    #[test]
    fn test_counts_match_group_sizes() {
        let entries = vec![
            entry(1, "2024/03/01 09:00:00", "2024/03/01 09:10:00", Status::Down, "Jam"),
            entry(1, "2024/03/01 11:00:00", "2024/03/01 11:10:00", Status::Down, "Jam"),
            entry(1, "2024/03/01 12:00:00", "2024/03/01 12:10:00", Status::Down, "Tool change"),
            entry(1, "2024/03/01 15:00:00", "2024/03/01 15:10:00", Status::Down, "Jam"),
        ];
        assert_eq!(
            aggregate_occurrences(&entries),
            vec![
                occurrence(1, "2024/03/01", "Jam", 3),
                occurrence(1, "2024/03/01", "Tool change", 1),
            ]
        );
    }

    #[test]
    fn test_ordering_by_equipment_day_then_count() {
        let entries = vec![
            entry(2, "2024/03/01 09:00:00", "2024/03/01 09:10:00", Status::Down, "Jam"),
            entry(1, "2024/03/02 09:00:00", "2024/03/02 09:10:00", Status::Down, "Jam"),
            entry(1, "2024/03/01 08:00:00", "2024/03/01 08:10:00", Status::Down, "Tool change"),
            entry(1, "2024/03/01 09:00:00", "2024/03/01 09:10:00", Status::Down, "Jam"),
            entry(1, "2024/03/01 10:00:00", "2024/03/01 10:10:00", Status::Down, "Jam"),
        ];
        assert_eq!(
            aggregate_occurrences(&entries),
            vec![
                occurrence(1, "2024/03/01", "Jam", 2),
                occurrence(1, "2024/03/01", "Tool change", 1),
                occurrence(1, "2024/03/02", "Jam", 1),
                occurrence(2, "2024/03/01", "Jam", 1),
            ]
        );
    }

    #[test]
    fn test_equal_counts_keep_first_seen_order() {
        let entries = vec![
            entry(1, "2024/03/01 08:00:00", "2024/03/01 08:10:00", Status::Down, "Tool change"),
            entry(1, "2024/03/01 09:00:00", "2024/03/01 09:10:00", Status::Down, "Jam"),
        ];
        let reasons: Vec<String> = aggregate_occurrences(&entries).into_iter().map(|o| o.reason).collect();
        assert_eq!(reasons, vec!["Tool change", "Jam"]);
    }

    #[test]
    fn test_no_entries_no_occurrences() {
        assert!(aggregate_occurrences(&[]).is_empty());
    }

    #[test]
    fn test_occurrence_serializes_with_slash_date() {
        let json = serde_json::to_value(occurrence(4, "2024-03-01", "Jam", 2)).unwrap();
        assert_eq!(json["date"], "2024/03/01");
        assert_eq!(json["status"], "DOWN");
        assert_eq!(json["occurrence_count"], 2);
    }
}
