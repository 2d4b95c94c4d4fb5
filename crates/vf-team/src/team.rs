//! Per-team state.

use vf_core::{BlockId, MovementState, Point, TeamId};
use vf_venue::Block;

/// A group of 1–4 people traversing the block sequence as one unit.
///
/// Teams are owned by the stepper and only mutated inside a tick; everything
/// outside the engine sees them through immutable per-tick snapshots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub id:               TeamId,

    /// Display name, `Team_01`, `Team_02`, …
    pub name:             String,

    /// Head count, `1..=4`.
    pub size:             u8,

    /// The block the team is in, or walking to while `Moving`.
    pub block:            BlockId,

    pub position:         Point,

    /// Centroid of `block`.  Equals `position` once the team has arrived.
    pub target:           Point,

    /// Simulated time of spawn.
    pub spawn_time:       f64,

    /// Simulated time the team arrived in `block` (spawn time for block 0).
    pub block_entry_time: f64,

    pub movement:         MovementState,

    pub finished:         bool,
}

impl Team {
    /// A new team standing (already arrived) at the centroid of `entry`.
    pub fn spawn(id: TeamId, size: u8, entry: &Block, now: f64) -> Self {
        let at = entry.centroid();
        Self {
            id,
            name:             team_name(id),
            size,
            block:            BlockId::ENTRY,
            position:         at,
            target:           at,
            spawn_time:       now,
            block_entry_time: now,
            movement:         MovementState::Waiting,
            finished:         false,
        }
    }

    /// `true` while the team counts toward `block`'s occupancy: dwelling
    /// there and not finished.
    #[inline]
    pub fn occupies(&self, block: BlockId) -> bool {
        !self.finished && self.block == block && !self.movement.is_moving()
    }

    /// Simulated seconds since spawn.
    #[inline]
    pub fn time_in_field(&self, now: f64) -> f64 {
        now - self.spawn_time
    }
}

/// `Team_` followed by the id, zero-padded to two digits.
pub fn team_name(id: TeamId) -> String {
    format!("Team_{:02}", id.0)
}
