//! The per-tick team state machine.

use vf_core::{BlockId, MovementState};
use vf_venue::BlockSequence;

use crate::Team;

/// Distance (plan units) under which a moving team counts as arrived.
pub const ARRIVAL_EPSILON: f64 = 0.1;

/// What a single [`Team::update`] call changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Still walking, still dwelling, or already finished.
    Stayed,
    /// Reached the centroid of this block and started dwelling.
    Arrived(BlockId),
    /// Dwell complete; now walking to `to`.
    Departed { from: BlockId, to: BlockId },
    /// Left the last block (or its block no longer exists).
    Finished,
}

impl Team {
    /// Advance this team by one tick.
    ///
    /// - `now` — simulated time after this tick's clock advance.
    /// - `sim_dt` — simulated seconds covered by this tick.
    /// - `speed` — walking speed in plan units per simulated second.
    ///
    /// Never fails.  A team whose block index no longer exists in `blocks`
    /// (the sequence was replaced mid-run) finishes.
    pub fn update(
        &mut self,
        blocks: &BlockSequence,
        now:    f64,
        sim_dt: f64,
        speed:  f64,
    ) -> Transition {
        if self.finished {
            return Transition::Stayed;
        }

        match self.movement {
            MovementState::Moving => {
                if self.position.distance(self.target) <= ARRIVAL_EPSILON {
                    self.position         = self.target;
                    self.movement         = MovementState::Waiting;
                    self.block_entry_time = now;
                    Transition::Arrived(self.block)
                } else {
                    self.position = self.position.step_toward(self.target, speed * sim_dt);
                    Transition::Stayed
                }
            }

            MovementState::Waiting => {
                let Some(block) = blocks.get(self.block) else {
                    self.finished = true;
                    return Transition::Finished;
                };
                if !block.dwell_complete(now - self.block_entry_time) {
                    return Transition::Stayed;
                }
                match blocks.next_after(self.block) {
                    Some((next_id, next)) => {
                        let from = self.block;
                        self.block    = next_id;
                        self.target   = next.centroid();
                        self.movement = MovementState::Moving;
                        Transition::Departed { from, to: next_id }
                    }
                    None => {
                        self.finished = true;
                        Transition::Finished
                    }
                }
            }
        }
    }
}
