//! Headline statistics for a statistics panel.

use vf_core::FlowConfig;
use vf_core::time::format_clock;
use vf_venue::BlockSequence;

use crate::TickSnapshot;

/// Venue-wide numbers for one tick.
///
/// `total_area_m2` is the floor plan's bounding box, not the sum of block
/// areas: it measures the floor the venue occupies, corridors included.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlowStats {
    pub simulated_time_secs: f64,
    pub team_count:          usize,
    /// People across all live teams, walking or dwelling.
    pub player_count:        u32,
    pub total_area_m2:       f64,
    /// `total_area_m2 / player_count` rounded to 0.1; `0.0` with no players.
    pub area_per_player_m2:  f64,
}

impl FlowStats {
    pub fn compute(snapshot: &TickSnapshot, blocks: &BlockSequence, config: &FlowConfig) -> Self {
        let player_count  = snapshot.player_count();
        let total_area_m2 = blocks
            .bounds()
            .map_or(0.0, |b| config.area_to_square_meters(b.area()));
        let area_per_player_m2 = if player_count > 0 {
            (total_area_m2 / f64::from(player_count) * 10.0).round() / 10.0
        } else {
            0.0
        };

        Self {
            simulated_time_secs: snapshot.simulated_time_secs,
            team_count: snapshot.teams.len(),
            player_count,
            total_area_m2,
            area_per_player_m2,
        }
    }

    /// Simulated time as `m:ss`.
    pub fn clock(&self) -> String {
        format_clock(self.simulated_time_secs)
    }
}
