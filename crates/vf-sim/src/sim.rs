//! The `Sim` struct and its tick.

use std::sync::Arc;

use tracing::{debug, info, warn};

use vf_core::{FlowConfig, SimClock, SimRng};
use vf_team::{Team, Transition};
use vf_venue::BlockSequence;

use crate::occupancy::{self, BlockOccupancy};
use crate::{FlowStats, NoopObserver, SimObserver, SimResult, SpawnScheduler, TickSnapshot};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One independent simulation.
///
/// `Sim` owns everything it mutates: configuration, block sequence, clock,
/// spawn state, RNG and the live team set.  Nothing is global, so any number
/// of simulations can run side by side.  Outside code reads published
/// [`TickSnapshot`]s and changes state only through [`start`](Self::start),
/// [`reset`](Self::reset), [`update_config`](Self::update_config) and
/// [`set_block_sequence`](Self::set_block_sequence), all of which take
/// `&mut self` and therefore can never interleave with a tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:   FlowConfig,
    pub(crate) blocks:   BlockSequence,
    pub(crate) clock:    SimClock,
    pub(crate) spawner:  SpawnScheduler,
    pub(crate) rng:      SimRng,
    /// Seed `rng` was built from; `reset` re-seeds with it.
    pub(crate) seed:     u64,
    /// Live teams in spawn order.
    pub(crate) teams:    Vec<Team>,
    pub(crate) running:  bool,
    pub(crate) snapshot: TickSnapshot,
}

impl Sim {
    // ── Control ───────────────────────────────────────────────────────────

    /// Start ticking.  No-op if already running.
    ///
    /// The spawn scheduler is armed so the first tick spawns a team.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.spawner.arm(self.clock.elapsed_secs, self.config.spawn_interval_secs);
        self.snapshot.is_running = true;
        info!(blocks = self.blocks.len(), at = self.clock.elapsed_secs, "simulation started");
    }

    /// Stop, clear every team and zero simulated time.  Configuration and
    /// block sequence are kept.  Idempotent.
    ///
    /// The RNG is re-seeded, so a run after `reset` replays the run after
    /// [`SimBuilder::build`][crate::SimBuilder::build] exactly.
    pub fn reset(&mut self) {
        if self.running || !self.teams.is_empty() || self.clock.tick > 0 {
            info!(tick = self.clock.tick, teams = self.teams.len(), "simulation reset");
        }
        self.running = false;
        self.clock.reset();
        self.spawner = SpawnScheduler::new();
        self.rng     = SimRng::new(self.seed);
        self.teams.clear();
        self.snapshot = TickSnapshot::idle();
    }

    /// Replace the configuration from the next tick on.
    ///
    /// Teams in flight keep their block and position; their speed, the crowd
    /// threshold and the size of the next spawn follow the new values.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`][crate::SimError::Config] if `config` fails
    /// validation.  The previous configuration stays in effect.
    pub fn update_config(&mut self, config: FlowConfig) -> SimResult<()> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected configuration update");
            return Err(e.into());
        }
        self.config = config;
        Ok(())
    }

    /// Replace the traversal sequence.
    ///
    /// Intended for a stopped simulation (typically followed by
    /// [`reset`](Self::reset)).  While running, teams keep their block index;
    /// any team whose index no longer exists finishes on its next update.
    pub fn set_block_sequence(&mut self, blocks: BlockSequence) {
        if self.running {
            warn!(
                old = self.blocks.len(),
                new = blocks.len(),
                teams = self.teams.len(),
                "block sequence replaced while running"
            );
        }
        self.blocks = blocks;
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one tick covering `real_dt` real seconds.  See
    /// [`advance_with`](Self::advance_with).
    pub fn advance(&mut self, real_dt: f64) -> &TickSnapshot {
        self.advance_with(real_dt, &mut NoopObserver)
    }

    /// Run one tick covering `real_dt` real seconds, reporting to `observer`.
    ///
    /// Returns the published snapshot.  Does nothing (and returns the current
    /// snapshot) while the simulation is not running.
    pub fn advance_with<O: SimObserver>(&mut self, real_dt: f64, observer: &mut O) -> &TickSnapshot {
        if !self.running {
            return &self.snapshot;
        }

        // ── ① Clock ───────────────────────────────────────────────────────
        let sim_dt = self.clock.advance(real_dt, self.config.time_scale);
        let now    = self.clock.elapsed_secs;
        observer.on_tick_start(self.clock.tick, now);

        // ── ② Spawn ───────────────────────────────────────────────────────
        if let Some(team) = self.spawner.poll(now, &self.config, &self.blocks, &mut self.rng) {
            debug!(team = %team.name, size = team.size, at = now, "team spawned");
            observer.on_spawn(&team);
            self.teams.push(team);
        }

        // ── ③ Teams ───────────────────────────────────────────────────────
        let speed = self.config.speed_units_per_sec();
        for team in &mut self.teams {
            match team.update(&self.blocks, now, sim_dt, speed) {
                Transition::Finished => {
                    debug!(team = %team.name, in_field = team.time_in_field(now), "team finished");
                    observer.on_finish(team, now);
                }
                Transition::Departed { from, to } => {
                    debug!(team = %team.name, %from, %to, "team departed");
                }
                Transition::Arrived(_) | Transition::Stayed => {}
            }
        }

        // ── ④ Retire ──────────────────────────────────────────────────────
        self.teams.retain(|t| !t.finished);

        // ── ⑤ Publish ─────────────────────────────────────────────────────
        self.snapshot = TickSnapshot {
            tick:                self.clock.tick,
            simulated_time_secs: now,
            teams:               Arc::from(self.teams.as_slice()),
            is_running:          true,
        };
        observer.on_tick_end(&self.snapshot);
        &self.snapshot
    }

    /// Run `n` ticks of `real_dt` real seconds each.
    ///
    /// Useful for tests and batch what-if runs.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, real_dt: f64, observer: &mut O) -> &TickSnapshot {
        for _ in 0..n {
            self.advance_with(real_dt, observer);
        }
        &self.snapshot
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The snapshot published by the most recent tick.
    #[inline]
    pub fn snapshot(&self) -> &TickSnapshot {
        &self.snapshot
    }

    /// Live teams.
    #[inline]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    #[inline]
    pub fn blocks(&self) -> &BlockSequence {
        &self.blocks
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn spawner(&self) -> &SpawnScheduler {
        &self.spawner
    }

    /// Occupancy of every block for the current team set.
    pub fn occupancy(&self) -> Vec<BlockOccupancy> {
        occupancy::evaluate(&self.blocks, &self.teams, &self.config)
    }

    /// Headline numbers for the current tick.
    pub fn stats(&self) -> FlowStats {
        FlowStats::compute(&self.snapshot, &self.blocks, &self.config)
    }
}
