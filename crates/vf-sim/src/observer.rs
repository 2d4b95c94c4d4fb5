//! Simulation observer trait for progress reporting and data collection.

use vf_team::Team;

use crate::TickSnapshot;

/// Callbacks invoked by [`Sim::advance_with`][crate::Sim::advance_with] at key
/// points in the tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — finish logger
///
/// ```rust,ignore
/// struct FinishLog(Vec<(String, f64)>);
///
/// impl SimObserver for FinishLog {
///     fn on_finish(&mut self, team: &Team, now: f64) {
///         self.0.push((team.name.clone(), team.time_in_field(now)));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the clock advances, before spawning.
    fn on_tick_start(&mut self, _tick: u64, _now: f64) {}

    /// Called once for each newly spawned team.
    fn on_spawn(&mut self, _team: &Team) {}

    /// Called once for each team that finished this tick, just before it is
    /// removed from the live set.
    fn on_finish(&mut self, _team: &Team, _now: f64) {}

    /// Called with the snapshot published at the end of the tick.
    fn on_tick_end(&mut self, _snapshot: &TickSnapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
