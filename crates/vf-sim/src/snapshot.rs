//! Immutable per-tick published state.

use std::sync::Arc;

use vf_team::Team;

/// What the stepper publishes after every tick.
///
/// The team list is a fresh `Arc<[Team]>` each tick: readers may hold on to
/// it as long as they like and can never observe, or cause, a mutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TickSnapshot {
    /// Ticks processed since the last reset.
    pub tick:                u64,
    pub simulated_time_secs: f64,
    /// Live teams in spawn order.  Finished teams are never included.
    pub teams:               Arc<[Team]>,
    pub is_running:          bool,
}

impl TickSnapshot {
    /// The state before `start` and after `reset`.
    pub fn idle() -> Self {
        Self {
            tick:                0,
            simulated_time_secs: 0.0,
            teams:               Arc::from(Vec::new()),
            is_running:          false,
        }
    }

    /// Total people across all live teams.
    pub fn player_count(&self) -> u32 {
        self.teams.iter().map(|t| u32::from(t.size)).sum()
    }
}

impl Default for TickSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}
