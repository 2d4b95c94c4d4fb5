//! `vf-team` — team state and the per-team state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`team`]    | `Team` — identity, position, block progress             |
//! | [`machine`] | `Team::update`, `Transition`, `ARRIVAL_EPSILON`         |
//!
//! # State machine
//!
//! ```text
//!            spawn (at block 0 centroid)
//!                      │
//!                      ▼
//!   ┌──────────▶  Waiting ──── dwell ≥ duration, no next block ──▶ finished
//!   │                  │
//!   │   dwell ≥ duration, next block exists
//!   │   (block_index += 1, target = next centroid)
//!   │                  ▼
//!   └─ within ε ─── Moving
//! ```
//!
//! Exactly one branch runs per tick: a team that arrives this tick starts
//! dwelling on the next one.  Movement is straight-line at constant speed and
//! the last step lands exactly on the target.

pub mod machine;
pub mod team;

#[cfg(test)]
mod tests;

pub use machine::{Transition, ARRIVAL_EPSILON};
pub use team::Team;
