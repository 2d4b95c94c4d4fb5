//! `vf-core` — foundational types for the `venueflow` crowd-flow engine.
//!
//! This crate is a dependency of every other `vf-*` crate.  It has no `vf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TeamId`, `BlockId`                                   |
//! | [`geo`]         | `Point`, `Bounds`, polygon `centroid` / `area`        |
//! | [`time`]        | `SimClock` (simulated seconds + tick counter)         |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`movement`]    | `MovementState` enum                                  |
//! | [`config`]      | `FlowConfig`, `TeamSizeMode`                          |
//! | [`error`]       | `VfError`, `VfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod movement;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FlowConfig, TeamSizeMode};
pub use error::{VfError, VfResult};
pub use geo::{Bounds, Point};
pub use ids::{BlockId, TeamId};
pub use movement::MovementState;
pub use rng::SimRng;
pub use time::SimClock;
