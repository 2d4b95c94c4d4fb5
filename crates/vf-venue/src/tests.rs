//! Unit tests for vf-venue.

use vf_core::{BlockId, Point};

use crate::{merge_records, Block, BlockSequence, DurationRecord, PlayAreaRecord, VenueError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle with its lower-left corner at (x, y).
fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ]
}

/// Three 10x10 rooms in a row: "1-1", "1-2", "2-1".
fn three_rooms() -> Vec<PlayAreaRecord> {
    vec![
        PlayAreaRecord::new("1-1", rect(0.0, 0.0, 10.0, 10.0)),
        PlayAreaRecord::new("1-2", rect(20.0, 0.0, 10.0, 10.0)),
        PlayAreaRecord::new("2-1", rect(40.0, 0.0, 10.0, 10.0)),
    ]
}

// ── Block ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod block {
    use super::*;

    #[test]
    fn derives_centroid_and_area() {
        let b = Block::new("hall", rect(0.0, 0.0, 4.0, 2.0), Some(30.0)).unwrap();
        assert_eq!(b.name(), "hall");
        assert_eq!(b.centroid(), Point::new(2.0, 1.0));
        assert!((b.area() - 8.0).abs() < 1e-12);
        assert_eq!(b.duration_secs(), Some(30.0));
        assert_eq!(b.polygon().len(), 4);
    }

    #[test]
    fn empty_polygon_is_rejected() {
        let err = Block::new("ghost", vec![], Some(1.0)).unwrap_err();
        assert!(matches!(err, VenueError::Geometry { ref name, .. } if name == "ghost"));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let err = Block::new("b", rect(0.0, 0.0, 1.0, 1.0), Some(-5.0)).unwrap_err();
        assert!(matches!(err, VenueError::InvalidDuration { .. }));
    }

    #[test]
    fn degenerate_outline_has_zero_area() {
        let b = Block::new("line", vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)], None).unwrap();
        assert_eq!(b.area(), 0.0);
        assert_eq!(b.centroid(), Point::new(2.5, 0.0));
    }

    #[test]
    fn dwell_completion() {
        let timed = Block::new("t", rect(0.0, 0.0, 1.0, 1.0), Some(10.0)).unwrap();
        assert!(!timed.dwell_complete(9.999));
        assert!(timed.dwell_complete(10.0));

        let untimed = Block::new("u", rect(0.0, 0.0, 1.0, 1.0), None).unwrap();
        assert!(!untimed.dwell_complete(f64::MAX));
    }
}

// ── BlockSequence ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sequence {
    use super::*;

    fn seq() -> BlockSequence {
        merge_records(&three_rooms(), &[]).sequence
    }

    #[test]
    fn entry_and_successors() {
        let s = seq();
        assert_eq!(s.len(), 3);
        assert_eq!(s.entry().unwrap().name(), "1-1");

        let (id, next) = s.next_after(BlockId::ENTRY).unwrap();
        assert_eq!(id, BlockId(1));
        assert_eq!(next.name(), "1-2");

        assert!(s.next_after(BlockId(2)).is_none());
        assert!(s.get(BlockId(3)).is_none());
    }

    #[test]
    fn iter_yields_ids_in_order() {
        let names: Vec<(u32, String)> = seq()
            .iter()
            .map(|(id, b)| (id.0, b.name().to_owned()))
            .collect();
        assert_eq!(
            names,
            vec![(0, "1-1".into()), (1, "1-2".into()), (2, "2-1".into())]
        );
    }

    #[test]
    fn bounds_cover_every_block() {
        let b = seq().bounds().unwrap();
        assert_eq!(b.min, Point::new(0.0, 0.0));
        assert_eq!(b.max, Point::new(50.0, 10.0));
        assert!(BlockSequence::empty().bounds().is_none());
    }

    #[test]
    fn clones_share_storage() {
        let a = seq();
        let b = a.clone();
        assert!(std::ptr::eq(a.as_slice(), b.as_slice()));
    }
}

// ── merge_records ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod merge {
    use super::*;

    #[test]
    fn matches_durations_by_name() {
        let durations = vec![
            DurationRecord::new("2-1", 90.0),
            DurationRecord::new("1-1", 30.0),
            DurationRecord::new("1-2", 60.0),
        ];
        let out = merge_records(&three_rooms(), &durations);
        assert!(out.is_clean());
        let got: Vec<Option<f64>> = out.sequence.iter().map(|(_, b)| b.duration_secs()).collect();
        assert_eq!(got, vec![Some(30.0), Some(60.0), Some(90.0)]);
    }

    #[test]
    fn unmatched_blocks_are_kept_without_duration() {
        let durations = vec![DurationRecord::new("1-1", 30.0)];
        let out = merge_records(&three_rooms(), &durations);
        assert_eq!(out.sequence.len(), 3);
        assert_eq!(out.unmatched, vec!["1-2".to_owned(), "2-1".to_owned()]);
        assert_eq!(out.sequence.get(BlockId(1)).unwrap().duration_secs(), None);
        assert!(!out.is_clean());
    }

    #[test]
    fn first_duplicate_duration_wins() {
        let durations = vec![
            DurationRecord::new("1-1", 30.0),
            DurationRecord::new("1-1", 999.0),
        ];
        let out = merge_records(&three_rooms()[..1], &durations);
        assert_eq!(out.sequence.entry().unwrap().duration_secs(), Some(30.0));
    }

    #[test]
    fn empty_polygons_are_excluded() {
        let mut areas = three_rooms();
        areas.insert(1, PlayAreaRecord::new("void", Vec::new()));
        let out = merge_records(&areas, &[]);
        assert_eq!(out.sequence.len(), 3);
        assert_eq!(out.excluded.len(), 1);
        assert!(matches!(&out.excluded[0], VenueError::Geometry { name, .. } if name == "void"));
        // The remaining blocks close ranks in order.
        assert_eq!(out.sequence.get(BlockId(1)).unwrap().name(), "1-2");
    }

    #[test]
    fn unusable_durations_keep_the_block() {
        let durations = vec![
            DurationRecord::new("1-1", 30.0),
            DurationRecord::new("1-2", -5.0),
            DurationRecord::new("2-1", f64::NAN),
            DurationRecord::new("2-1", 45.0),
        ];
        let out = merge_records(&three_rooms(), &durations);
        assert_eq!(out.sequence.len(), 3);
        assert!(out.excluded.is_empty());
        assert_eq!(out.unmatched, vec!["1-2".to_owned()]);
        assert_eq!(out.sequence.get(BlockId(1)).unwrap().duration_secs(), None);
        // The first usable record wins.
        assert_eq!(out.sequence.get(BlockId(2)).unwrap().duration_secs(), Some(45.0));
        assert_eq!(out.rejected.len(), 2);
        assert!(matches!(&out.rejected[0], VenueError::InvalidDuration { name, .. } if name == "1-2"));
        assert!(!out.is_clean());
    }

    #[test]
    fn stray_duration_records_are_ignored() {
        let durations = vec![DurationRecord::new("nowhere", 5.0)];
        let out = merge_records(&three_rooms(), &durations);
        assert_eq!(out.sequence.len(), 3);
        assert_eq!(out.unmatched.len(), 3);
    }
}

// ── serde decoding ────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod decode {
    use super::*;

    #[test]
    fn decodes_floor_plan_shape() {
        let json = r#"[{
            "Name": "1-1",
            "Index": 0,
            "Points": [
                { "Point": { "X": 0,   "Y": 0 } },
                { "Point": { "X": 100, "Y": 0 } },
                { "Point": { "X": 100, "Y": 100 } },
                { "Point": { "X": 0,   "Y": 100 } }
            ],
            "Entrance": { "Point": { "X": 0,   "Y": 50 } },
            "Exit":     { "Point": { "X": 100, "Y": 50 } },
            "DeltaYaw": 90
        }]"#;
        let areas: Vec<PlayAreaRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(areas[0].name, "1-1");
        assert_eq!(areas[0].outline()[2], Point::new(100.0, 100.0));
        assert_eq!(areas[0].delta_yaw, 90.0);

        let durations: Vec<DurationRecord> =
            serde_json::from_str(r#"[{ "BlockName": "1-1", "BlockDuration": 300 }]"#).unwrap();
        let out = merge_records(&areas, &durations);
        let block = out.sequence.entry().unwrap();
        assert_eq!(block.duration_secs(), Some(300.0));
        assert!((block.area() - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{ "Name": "x", "Points": [ { "Point": { "X": 1, "Y": 2 } } ] }"#;
        let area: PlayAreaRecord = serde_json::from_str(json).unwrap();
        assert!(area.entrance.is_none());
        assert_eq!(area.index, 0);
    }
}
