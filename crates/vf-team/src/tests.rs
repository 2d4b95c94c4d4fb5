//! Unit tests for vf-team.

use vf_core::{BlockId, MovementState, Point, TeamId};
use vf_venue::{Block, BlockSequence};

use crate::{Team, Transition};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A 2x2 square centred on (cx, cy).
fn square_at(cx: f64, cy: f64) -> Vec<Point> {
    vec![
        Point::new(cx - 1.0, cy - 1.0),
        Point::new(cx + 1.0, cy - 1.0),
        Point::new(cx + 1.0, cy + 1.0),
        Point::new(cx - 1.0, cy + 1.0),
    ]
}

/// Blocks centred at x = 0, 10, 20 on the x axis with the given durations.
fn corridor(durations: [Option<f64>; 3]) -> BlockSequence {
    let blocks = durations
        .iter()
        .enumerate()
        .map(|(i, &d)| Block::new(format!("B{i}"), square_at(10.0 * i as f64, 0.0), d).unwrap())
        .collect::<Vec<_>>();
    BlockSequence::new(blocks)
}

fn spawn(blocks: &BlockSequence, now: f64) -> Team {
    Team::spawn(TeamId(1), 2, blocks.entry().unwrap(), now)
}

// ── Team ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod team {
    use super::*;
    use crate::team::team_name;

    #[test]
    fn spawns_waiting_at_entry_centroid() {
        let blocks = corridor([Some(5.0), Some(5.0), Some(5.0)]);
        let t = spawn(&blocks, 7.0);
        assert_eq!(t.block, BlockId::ENTRY);
        assert_eq!(t.position, Point::new(0.0, 0.0));
        assert_eq!(t.position, t.target);
        assert_eq!(t.movement, MovementState::Waiting);
        assert_eq!(t.spawn_time, 7.0);
        assert_eq!(t.block_entry_time, 7.0);
        assert!(!t.finished);
    }

    #[test]
    fn names_are_zero_padded() {
        assert_eq!(team_name(TeamId(1)), "Team_01");
        assert_eq!(team_name(TeamId(12)), "Team_12");
        assert_eq!(team_name(TeamId(123)), "Team_123");
    }

    #[test]
    fn occupies_only_while_waiting() {
        let blocks = corridor([Some(5.0), Some(5.0), Some(5.0)]);
        let mut t = spawn(&blocks, 0.0);
        assert!(t.occupies(BlockId(0)));
        assert!(!t.occupies(BlockId(1)));

        t.movement = MovementState::Moving;
        t.block = BlockId(1);
        assert!(!t.occupies(BlockId(0)));
        assert!(!t.occupies(BlockId(1)));
    }

    #[test]
    fn time_in_field() {
        let blocks = corridor([None, None, None]);
        let t = spawn(&blocks, 30.0);
        assert_eq!(t.time_in_field(95.0), 65.0);
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod machine {
    use super::*;

    #[test]
    fn waits_until_duration_then_departs() {
        let blocks = corridor([Some(5.0), Some(5.0), Some(5.0)]);
        let mut t = spawn(&blocks, 0.0);

        assert_eq!(t.update(&blocks, 4.0, 4.0, 1.0), Transition::Stayed);
        assert_eq!(t.block, BlockId(0));

        assert_eq!(
            t.update(&blocks, 5.0, 1.0, 1.0),
            Transition::Departed { from: BlockId(0), to: BlockId(1) }
        );
        assert_eq!(t.block, BlockId(1));
        assert_eq!(t.target, Point::new(10.0, 0.0));
        assert_eq!(t.movement, MovementState::Moving);
        // Departure does not move the team yet.
        assert_eq!(t.position, Point::new(0.0, 0.0));
    }

    #[test]
    fn moves_at_constant_speed_without_overshoot() {
        let blocks = corridor([Some(0.0), Some(100.0), Some(100.0)]);
        let mut t = spawn(&blocks, 0.0);
        t.update(&blocks, 0.0, 0.0, 1.0); // depart toward x = 10

        let speed = 1.0;
        let mut now = 0.0;
        for step in 1..=10 {
            now += 1.0;
            assert_eq!(t.update(&blocks, now, 1.0, speed), Transition::Stayed);
            assert!(t.position.x <= 10.0 + 1e-9, "overshoot at step {step}: {}", t.position);
            assert!((t.position.x - step as f64).abs() < 1e-9);
        }
        // 10 units at 1 unit/s: on target after exactly 10 s.
        assert!(t.position.distance(t.target) < 1e-9);
        assert_eq!(t.movement, MovementState::Moving);

        now += 1.0;
        assert_eq!(t.update(&blocks, now, 1.0, speed), Transition::Arrived(BlockId(1)));
        assert_eq!(t.position, Point::new(10.0, 0.0));
        assert_eq!(t.movement, MovementState::Waiting);
        assert_eq!(t.block_entry_time, now);
    }

    #[test]
    fn large_step_lands_exactly_on_target() {
        let blocks = corridor([Some(0.0), Some(100.0), Some(100.0)]);
        let mut t = spawn(&blocks, 0.0);
        t.update(&blocks, 0.0, 0.0, 1.0);

        t.update(&blocks, 50.0, 50.0, 1.0);
        assert_eq!(t.position, Point::new(10.0, 0.0));
    }

    #[test]
    fn arrival_and_dwell_are_separate_ticks() {
        // Zero-length dwell in block 1: the team still spends its arrival
        // tick there before departing.
        let blocks = corridor([Some(0.0), Some(0.0), Some(0.0)]);
        let mut t = spawn(&blocks, 0.0);
        t.update(&blocks, 0.0, 0.0, 100.0);
        t.update(&blocks, 1.0, 1.0, 100.0); // lands on x = 10
        assert_eq!(t.update(&blocks, 2.0, 1.0, 100.0), Transition::Arrived(BlockId(1)));
        assert!(t.occupies(BlockId(1)));
        assert_eq!(
            t.update(&blocks, 3.0, 1.0, 100.0),
            Transition::Departed { from: BlockId(1), to: BlockId(2) }
        );
    }

    #[test]
    fn finishes_after_last_block() {
        let blocks = corridor([Some(0.0), Some(0.0), Some(3.0)]);
        let mut t = spawn(&blocks, 0.0);
        t.block = BlockId(2);
        t.block_entry_time = 10.0;

        assert_eq!(t.update(&blocks, 12.0, 2.0, 1.0), Transition::Stayed);
        assert_eq!(t.update(&blocks, 13.5, 1.5, 1.0), Transition::Finished);
        assert!(t.finished);
        // Finished teams are inert.
        assert_eq!(t.update(&blocks, 100.0, 1.0, 1.0), Transition::Stayed);
        assert!(!t.occupies(BlockId(2)));
    }

    #[test]
    fn block_without_duration_holds_forever() {
        let blocks = corridor([None, Some(1.0), Some(1.0)]);
        let mut t = spawn(&blocks, 0.0);
        for i in 1..=100 {
            let now = i as f64 * 1_000.0;
            assert_eq!(t.update(&blocks, now, 1_000.0, 1.0), Transition::Stayed);
        }
        assert_eq!(t.block, BlockId(0));
        assert!(!t.finished);
    }

    #[test]
    fn vanished_block_finishes_team() {
        let long = corridor([Some(0.0), Some(0.0), Some(0.0)]);
        let mut t = spawn(&long, 0.0);
        t.block = BlockId(2);

        let short = BlockSequence::new(long.as_slice()[..1].to_vec());
        assert_eq!(t.update(&short, 1.0, 1.0, 1.0), Transition::Finished);
        assert!(t.finished);
    }
}
