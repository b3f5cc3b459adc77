#[cfg(test)]
mod tests {
    use oeetrack::libs::config::{MidnightBoundary, OverlapResolution};
    use oeetrack::libs::interval::{Status, StatusInterval};
    use oeetrack::libs::merge::merge_status;
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

    fn running(start: &str, end: &str) -> StatusInterval {
        entry(1, start, end, Status::Running, "")
    }

    fn down(start: &str, end: &str) -> StatusInterval {
        entry(1, start, end, Status::Down, "Jam")
    }

    #[test]
    fn test_contained_manual_splits_automatic() {
        let merged = merge_status(
            vec![running("2024/03/01 08:00:00", "2024/03/01 12:00:00")],
            vec![down("2024/03/01 09:00:00", "2024/03/01 10:00:00")],
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );

        assert_eq!(
            merged,
            vec![
                running("2024/03/01 08:00:00", "2024/03/01 09:00:00"),
                down("2024/03/01 09:00:00", "2024/03/01 10:00:00"),
                running("2024/03/01 10:00:00", "2024/03/01 12:00:00"),
            ]
        );
    }

    #[test]
    fn test_manual_covering_automatic_replaces_it() {
        let merged = merge_status(
            vec![running("2024/03/01 08:00:00", "2024/03/01 12:00:00")],
            vec![down("2024/03/01 08:00:00", "2024/03/01 12:00:00")],
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );
        assert_eq!(merged, vec![down("2024/03/01 08:00:00", "2024/03/01 12:00:00")]);
    }

    #[test]
    fn test_manual_at_left_edge_leaves_right_remainder() {
        let merged = merge_status(
            vec![running("2024/03/01 08:00:00", "2024/03/01 12:00:00")],
            vec![down("2024/03/01 08:00:00", "2024/03/01 09:00:00")],
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );
        assert_eq!(
            merged,
            vec![
                down("2024/03/01 08:00:00", "2024/03/01 09:00:00"),
                running("2024/03/01 09:00:00", "2024/03/01 12:00:00"),
            ]
        );
    }

    #[test]
    fn test_several_manual_entries_in_one_automatic() {
        let merged = merge_status(
            vec![running("2024/03/01 08:00:00", "2024/03/01 17:00:00")],
            vec![
                down("2024/03/01 13:00:00", "2024/03/01 14:00:00"),
                down("2024/03/01 09:00:00", "2024/03/01 10:00:00"),
            ],
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );
        assert_eq!(
            merged,
            vec![
                running("2024/03/01 08:00:00", "2024/03/01 09:00:00"),
                down("2024/03/01 09:00:00", "2024/03/01 10:00:00"),
                running("2024/03/01 10:00:00", "2024/03/01 13:00:00"),
                down("2024/03/01 13:00:00", "2024/03/01 14:00:00"),
                running("2024/03/01 14:00:00", "2024/03/01 17:00:00"),
            ]
        );
    }

    #[test]
    fn test_manual_never_touches_other_equipment() {
        let other = entry(2, "2024/03/01 08:00:00", "2024/03/01 12:00:00", Status::Running, "");
        let merged = merge_status(
            vec![other.clone()],
            vec![down("2024/03/01 09:00:00", "2024/03/01 10:00:00")],
            OverlapResolution::Clip,
            MidnightBoundary::Split,
        );
        assert_eq!(merged, vec![other, down("2024/03/01 09:00:00", "2024/03/01 10:00:00")]);
    }

    #[test]
    fn test_straddling_manual_under_containment_leaves_automatic() {
        let automatic = vec![
            running("2024/03/01 08:00:00", "2024/03/01 10:00:00"),
            entry(1, "2024/03/01 10:00:00", "2024/03/01 12:00:00", Status::Idle, ""),
        ];
        let merged = merge_status(
            automatic.clone(),
            vec![down("2024/03/01 09:00:00", "2024/03/01 11:00:00")],
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );
        assert_eq!(
            merged,
            vec![
                automatic[0].clone(),
                down("2024/03/01 09:00:00", "2024/03/01 11:00:00"),
                automatic[1].clone(),
            ]
        );
    }

    #[test]
    fn test_straddling_manual_under_clip_trims_both_sides() {
        let merged = merge_status(
            vec![
                running("2024/03/01 08:00:00", "2024/03/01 10:00:00"),
                entry(1, "2024/03/01 10:00:00", "2024/03/01 12:00:00", Status::Idle, ""),
            ],
            vec![down("2024/03/01 09:00:00", "2024/03/01 11:00:00")],
            OverlapResolution::Clip,
            MidnightBoundary::Split,
        );
        assert_eq!(
            merged,
            vec![
                running("2024/03/01 08:00:00", "2024/03/01 09:00:00"),
                down("2024/03/01 09:00:00", "2024/03/01 11:00:00"),
                entry(1, "2024/03/01 11:00:00", "2024/03/01 12:00:00", Status::Idle, ""),
            ]
        );
        for pair in merged.windows(2) {
            assert!(pair[0].end_time <= pair[1].start_time);
        }
    }

    #[test]
    fn test_streams_are_split_at_midnight_before_merging() {
        let merged = merge_status(
            vec![running("2024/03/01 20:00:00", "2024/03/02 04:00:00")],
            vec![down("2024/03/01 23:00:00", "2024/03/02 01:00:00")],
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );
        assert_eq!(
            merged,
            vec![
                running("2024/03/01 20:00:00", "2024/03/01 23:00:00"),
                down("2024/03/01 23:00:00", "2024/03/01 24:00:00"),
                down("2024/03/02 00:00:00", "2024/03/02 01:00:00"),
                running("2024/03/02 01:00:00", "2024/03/02 04:00:00"),
            ]
        );
    }

    #[test]
    fn test_without_manual_entries_automatic_is_returned_in_order() {
        let merged = merge_status(
            vec![
                running("2024/03/01 10:00:00", "2024/03/01 11:00:00"),
                down("2024/03/01 08:00:00", "2024/03/01 09:00:00"),
            ],
            Vec::new(),
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );
        assert_eq!(
            merged,
            vec![
                down("2024/03/01 08:00:00", "2024/03/01 09:00:00"),
                running("2024/03/01 10:00:00", "2024/03/01 11:00:00"),
            ]
        );
    }

    #[test]
    fn test_merge_is_deterministic() {
        let automatic = vec![
            running("2024/03/01 08:00:00", "2024/03/01 17:00:00"),
            entry(2, "2024/03/01 08:00:00", "2024/03/01 17:00:00", Status::Idle, ""),
        ];
        let manual = vec![down("2024/03/01 09:00:00", "2024/03/01 10:00:00")];
        let first = merge_status(automatic.clone(), manual.clone(), OverlapResolution::Containment, MidnightBoundary::Split);
        let second = merge_status(automatic, manual, OverlapResolution::Containment, MidnightBoundary::Split);
        assert_eq!(first, second);
    }

    #[test]
    fn test_manual_ending_at_midnight_stays_off_the_previous_day() {
        let merged = merge_status(
            vec![running("2024/03/01 20:00:00", "2024/03/02 04:00:00")],
            vec![down("2024/03/01 23:00:00", "2024/03/02 00:00:00")],
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );
        assert_eq!(
            merged,
            vec![
                running("2024/03/01 20:00:00", "2024/03/01 23:00:00"),
                down("2024/03/01 23:00:00", "2024/03/01 24:00:00"),
                down("2024/03/02 00:00:00", "2024/03/02 00:00:00"),
                running("2024/03/02 00:00:00", "2024/03/02 04:00:00"),
            ]
        );
        assert_eq!(merged[1].end_time.to_string(), "2024/03/01 24:00:00");
    }

    #[test]
    fn test_midnight_piece_never_trims_the_previous_day() {
        let idle = |start: &str, end: &str| entry(1, start, end, Status::Idle, "");
        let merged = merge_status(
            vec![
                running("2024/03/01 20:00:00", "2024/03/01 23:00:00"),
                idle("2024/03/01 23:00:00", "2024/03/02 04:00:00"),
            ],
            vec![down("2024/03/01 22:00:00", "2024/03/02 00:00:00")],
            OverlapResolution::Containment,
            MidnightBoundary::Split,
        );
        assert_eq!(
            merged,
            vec![
                running("2024/03/01 20:00:00", "2024/03/01 23:00:00"),
                down("2024/03/01 22:00:00", "2024/03/01 24:00:00"),
                idle("2024/03/01 23:00:00", "2024/03/01 24:00:00"),
                down("2024/03/02 00:00:00", "2024/03/02 00:00:00"),
                idle("2024/03/02 00:00:00", "2024/03/02 04:00:00"),
            ]
        );
        assert_eq!(merged[2].end_time.to_string(), "2024/03/01 24:00:00");
    }
}
