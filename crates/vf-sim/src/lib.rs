//! `vf-sim` — the tick stepper for the venueflow crowd-flow engine.
//!
//! # Tick
//!
//! ```text
//! advance(real_dt):
//!   ① Clock     — sim_dt = real_dt × time_scale; now += sim_dt
//!   ② Spawn     — at most one new team at block 0 if now − last_spawn ≥ interval
//!   ③ Teams     — Team::update for every live team (move, arrive, dwell, depart)
//!   ④ Retire    — finished teams leave the live set this same tick
//!   ⑤ Publish   — a fresh immutable TickSnapshot; observers see it
//! ```
//!
//! Occupancy and summary statistics are derived on demand from the live team
//! set (`Sim::occupancy`, `Sim::stats`).
//!
//! The stepper does not own a timer.  A host calls [`Sim::advance`] from
//! whatever drives it: a render loop through [`FrameDriver`], a fixed-step
//! batch via [`Sim::run_ticks`], or a test.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vf_core::FlowConfig;
//! use vf_sim::{FrameDriver, NoopObserver, SimBuilder};
//! use vf_venue::merge_records;
//!
//! let loaded = merge_records(&areas, &durations);
//! let mut sim = SimBuilder::new(loaded.sequence)
//!     .config(FlowConfig::default())
//!     .seed(7)
//!     .build()?;
//! let mut driver = FrameDriver::new();
//! sim.start();
//! loop {
//!     driver.frame(&mut sim, &mut NoopObserver);
//!     render(sim.snapshot(), &sim.occupancy());
//! }
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod sim;
pub mod snapshot;
pub mod spawn;
pub mod stats;


pub use builder::SimBuilder;
pub use driver::FrameDriver;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use occupancy::BlockOccupancy;
pub use sim::Sim;
pub use snapshot::TickSnapshot;
pub use spawn::SpawnScheduler;
pub use stats::FlowStats;
