#[cfg(test)]
mod tests {
    use oeetrack::libs::config::MidnightBoundary;
    use oeetrack::libs::interval::{DayBounded, ProductionInterval, Status, StatusInterval};
    use oeetrack::libs::midnight::{split_at_midnight, SplitAtMidnight};
    use oeetrack::libs::timestamp::Timestamp;

    fn ts(value: &str) -> Timestamp {
        Timestamp::parse(value).unwrap()
    }

    fn status(start: &str, end: &str) -> StatusInterval {
        StatusInterval::new(7, ts(start), ts(end), Status::Down, "Jam")
    }

    #[test]
    fn test_same_day_interval_is_unchanged() {
        let entry = status("2024/03/01 08:00:00", "2024/03/01 17:00:00");
        assert_eq!(split_at_midnight(&entry, MidnightBoundary::Split), vec![entry]);
    }

    #[test]
    fn test_one_midnight_gives_two_adjacent_pieces() {
        let entry = status("2024/03/01 22:00:00", "2024/03/02 02:00:00");
        let pieces = split_at_midnight(&entry, MidnightBoundary::Split);

        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].start_time, ts("2024/03/01 22:00:00"));
        assert_eq!(pieces[0].end_time, ts("2024/03/01 24:00:00"));
        assert_eq!(pieces[1].start_time, ts("2024/03/02 00:00:00"));
        assert_eq!(pieces[1].end_time, ts("2024/03/02 02:00:00"));

        // No gap or overlap at the boundary, nothing lost overall.
        assert_eq!(pieces[0].end_time, pieces[1].start_time);
        let total: f64 = pieces.iter().map(|p| p.duration_seconds()).sum();
        assert_eq!(total, entry.duration_seconds());

        for piece in &pieces {
            assert_eq!(piece.equipment_id, 7);
            assert_eq!(piece.status, Status::Down);
            assert_eq!(piece.reason, "Jam");
        }
    }

    #[test]
    fn test_end_exactly_at_midnight_leaves_a_zero_length_piece() {
        let entry = status("2024/03/01 23:00:00", "2024/03/02 00:00:00");
        let pieces = split_at_midnight(&entry, MidnightBoundary::Split);

        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].start_time, ts("2024/03/01 23:00:00"));
        assert_eq!(pieces[0].end_time.to_string(), "2024/03/01 24:00:00");
        assert_eq!(pieces[1].start_time.to_string(), "2024/03/02 00:00:00");
        assert_eq!(pieces[1].end_time.to_string(), "2024/03/02 00:00:00");
        assert_eq!(pieces[1].duration_seconds(), 0.0);

        let days: Vec<String> = pieces.iter().map(|p| p.day().to_string()).collect();
        assert_eq!(days, vec!["2024/03/01", "2024/03/02"]);
    }

    #[test]
    fn test_end_exactly_at_midnight_attached_to_start_day() {
        let entry = status("2024/03/01 23:00:00", "2024/03/02 00:00:00");
        let pieces = split_at_midnight(&entry, MidnightBoundary::Attach);
        assert_eq!(pieces, vec![entry]);
        assert_eq!(pieces[0].day().to_string(), "2024/03/01");
    }

    #[test]
    fn test_written_end_of_day_is_not_split() {
        let entry = status("2024/03/01 23:00:00", "2024/03/01 24:00:00");
        for boundary in [MidnightBoundary::Split, MidnightBoundary::Attach] {
            assert_eq!(split_at_midnight(&entry, boundary), vec![entry.clone()]);
        }
    }

    #[test]
    fn test_several_midnights_give_one_piece_per_day() {
        let entry = status("2024/03/01 20:00:00", "2024/03/04 04:00:00");
        let pieces = split_at_midnight(&entry, MidnightBoundary::Split);

        let days: Vec<String> = pieces.iter().map(|p| p.day().to_string()).collect();
        assert_eq!(days, vec!["2024/03/01", "2024/03/02", "2024/03/03", "2024/03/04"]);
        assert_eq!(pieces[1].duration_seconds(), 86400.0);
        assert_eq!(pieces[2].duration_seconds(), 86400.0);

        let total: f64 = pieces.iter().map(|p| p.duration_seconds()).sum();
        assert_eq!(total, entry.duration_seconds());
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].end_time, pair[1].start_time);
        }
    }

    #[test]
    fn test_splitting_twice_changes_nothing() {
        let entries = vec![
            status("2024/03/01 20:00:00", "2024/03/03 04:00:00"),
            status("2024/03/01 08:00:00", "2024/03/01 09:00:00"),
            status("2024/03/02 23:00:00", "2024/03/03 00:00:00"),
        ];
        for boundary in [MidnightBoundary::Split, MidnightBoundary::Attach] {
            let once = entries.clone().split_at_midnight(boundary);
            let twice = once.clone().split_at_midnight(boundary);
            assert_eq!(once, twice);
        }
        assert_eq!(entries.clone().split_at_midnight(MidnightBoundary::Split).len(), 6);
        assert_eq!(entries.split_at_midnight(MidnightBoundary::Attach).len(), 5);
    }

    #[test]
    fn test_collection_is_ordered_by_start() {
        let entries = vec![
            status("2024/03/02 06:00:00", "2024/03/02 07:00:00"),
            status("2024/03/01 23:00:00", "2024/03/02 01:00:00"),
        ];
        let starts: Vec<String> = entries
            .split_at_midnight(MidnightBoundary::Split)
            .iter()
            .map(|p| p.start_time.to_string())
            .collect();
        assert_eq!(
            starts,
            vec!["2024/03/01 23:00:00", "2024/03/02 00:00:00", "2024/03/02 06:00:00"]
        );
    }

    #[test]
    fn test_production_run_keeps_quantities_on_every_piece() {
        let run = ProductionInterval {
            equipment_id: 3,
            start_production: ts("2024/03/01 22:00:00"),
            finish_production: ts("2024/03/02 02:00:00"),
            planned_duration_seconds: 14400,
            planned_quantity: 100,
            actual_quantity: 90,
            defect_quantity: 4,
        };
        let pieces = split_at_midnight(&run, MidnightBoundary::Split);

        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            assert_eq!(piece.planned_duration_seconds, 14400);
            assert_eq!(piece.planned_quantity, 100);
            assert_eq!(piece.actual_quantity, 90);
            assert_eq!(piece.defect_quantity, 4);
        }
        assert_eq!(pieces[0].finish_production, ts("2024/03/02 00:00:00"));
        assert_eq!(pieces[1].start_production, ts("2024/03/02 00:00:00"));
    }
}
