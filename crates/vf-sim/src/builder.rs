//! Fluent builder for constructing a [`Sim`].

use vf_core::{FlowConfig, SimClock, SimRng};
use vf_venue::BlockSequence;

use crate::{Sim, SimResult, SpawnScheduler, TickSnapshot};

/// Seed used when [`SimBuilder::seed`] is not called.
pub const DEFAULT_SEED: u64 = 0;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`BlockSequence`] — from [`vf_venue::merge_records`] or built directly.
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                  |
/// |---------------|--------------------------|
/// | `.config(c)`  | `FlowConfig::default()`  |
/// | `.seed(s)`    | `DEFAULT_SEED`           |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(sequence)
///     .config(FlowConfig { spawn_interval_secs: 60.0, ..Default::default() })
///     .seed(42)
///     .build()?;
/// sim.start();
/// ```
pub struct SimBuilder {
    blocks: BlockSequence,
    config: Option<FlowConfig>,
    seed:   u64,
}

impl SimBuilder {
    pub fn new(blocks: BlockSequence) -> Self {
        Self {
            blocks,
            config: None,
            seed:   DEFAULT_SEED,
        }
    }

    pub fn config(mut self, config: FlowConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Seed for random team sizes.  Same seed, same run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate inputs and return a stopped [`Sim`] at time zero.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(Sim {
            config,
            blocks:   self.blocks,
            clock:    SimClock::new(),
            spawner:  SpawnScheduler::new(),
            rng:      SimRng::new(self.seed),
            seed:     self.seed,
            teams:    Vec::new(),
            running:  false,
            snapshot: TickSnapshot::idle(),
        })
    }
}
