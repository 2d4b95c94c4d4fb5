//! Per-block occupancy and crowding.
//!
//! A team counts toward a block only while dwelling in it.  Teams walking
//! between blocks count nowhere, so a team is never counted twice during its
//! transit.

use vf_core::{BlockId, FlowConfig};
use vf_team::Team;
use vf_venue::BlockSequence;

/// Occupancy of one block at one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlockOccupancy {
    pub block:             BlockId,
    /// Block area in plan square units.
    pub area:              f64,
    /// People dwelling in the block.
    pub occupants:         u32,
    /// `area / occupants`; `+∞` when empty or when the area is zero.
    pub area_per_occupant: f64,
    pub is_crowded:        bool,
}

/// Recompute occupancy for every block from scratch.
///
/// Teams whose block index is out of range are ignored.  The result has one
/// entry per block, in sequence order.
pub fn evaluate(blocks: &BlockSequence, teams: &[Team], config: &FlowConfig) -> Vec<BlockOccupancy> {
    let mut occupants = vec![0u32; blocks.len()];
    for team in teams {
        if team.finished || team.movement.is_moving() {
            continue;
        }
        if let Some(n) = occupants.get_mut(team.block.index()) {
            *n += u32::from(team.size);
        }
    }

    let threshold = config.min_area_units();

    blocks
        .iter()
        .zip(occupants)
        .map(|((id, block), n)| {
            let area = block.area();
            let area_per_occupant = if n > 0 && area > 0.0 {
                area / f64::from(n)
            } else {
                f64::INFINITY
            };
            BlockOccupancy {
                block: id,
                area,
                occupants: n,
                area_per_occupant,
                is_crowded: n > 0 && area_per_occupant < threshold,
            }
        })
        .collect()
}
