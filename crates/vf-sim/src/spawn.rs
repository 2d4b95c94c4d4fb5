//! `SpawnScheduler` — decides when a team enters block 0.
//!
//! # Cadence
//!
//! One team per `spawn_interval_secs` of simulated time, checked once per
//! tick.  A tick that covers several intervals (a long frame, a large time
//! scale) still spawns only one team and restarts the interval from that
//! tick's time: missed spawns are dropped, never queued.
//!
//! Arming sets `last_spawn_time = now − interval`, so the first poll after
//! [`Sim::start`][crate::Sim::start] spawns immediately.

use vf_core::config::MAX_TEAM_SIZE;
use vf_core::{FlowConfig, SimRng, TeamId, TeamSizeMode};
use vf_team::Team;
use vf_venue::BlockSequence;

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnScheduler {
    last_spawn_time: f64,
    next_id:         TeamId,
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self {
            last_spawn_time: 0.0,
            next_id:         TeamId::FIRST,
        }
    }
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare for a run starting at `now`: the next poll spawns, and ids
    /// restart at 1.
    pub fn arm(&mut self, now: f64, interval_secs: f64) {
        self.last_spawn_time = now - interval_secs;
        self.next_id         = TeamId::FIRST;
    }

    /// Spawn at most one team at `now`.
    ///
    /// Returns `None` when the interval has not elapsed or when `blocks` is
    /// empty (there is nowhere to spawn).
    pub fn poll(
        &mut self,
        now:    f64,
        config: &FlowConfig,
        blocks: &BlockSequence,
        rng:    &mut SimRng,
    ) -> Option<Team> {
        if now - self.last_spawn_time < config.spawn_interval_secs {
            return None;
        }
        let entry = blocks.entry()?;

        let size = match config.team_size {
            TeamSizeMode::Random   => rng.gen_range(1..=MAX_TEAM_SIZE),
            TeamSizeMode::Fixed(n) => n,
        };
        let team = Team::spawn(self.next_id, size, entry, now);

        self.last_spawn_time = now;
        self.next_id         = self.next_id.next();
        Some(team)
    }

    /// Simulated time of the most recent spawn (or of the virtual spawn one
    /// interval before the run started).
    #[inline]
    pub fn last_spawn_time(&self) -> f64 {
        self.last_spawn_time
    }

    /// The id the next spawned team will get.
    #[inline]
    pub fn next_id(&self) -> TeamId {
        self.next_id
    }
}
