//! `vf-venue` — floor-plan blocks and the ordered sequence teams traverse.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`block`]    | `Block`, `BlockSequence`                                   |
//! | [`record`]   | `PlayAreaRecord`, `VertexRecord`, `DurationRecord`         |
//! | [`merge`]    | `merge_records`, `LoadOutcome`                             |
//! | [`error`]    | `VenueError`, `VenueResult<T>`                             |
//!
//! # Loading model
//!
//! The host decodes two inputs: the floor plan (one polygon per block, in
//! traversal order) and the duration table (`block name → dwell seconds`).
//! [`merge_records`] pairs them by name and precomputes each block's
//! centroid and area once, so the per-tick path never touches raw geometry.
//!
//! ```text
//! PlayAreaRecord[] ─┐
//!                   ├─ merge_records ─▶ LoadOutcome { sequence, excluded, unmatched, rejected }
//! DurationRecord[] ─┘
//! ```
//!
//! A polygon with no vertices is excluded (no centroid).  A polygon with no
//! matching duration record still becomes a block, but one whose dwell never
//! ends.  A duration record with a negative or non-finite value is rejected
//! and its block loads the same way.

pub mod block;
pub mod error;
pub mod merge;
pub mod record;

#[cfg(test)]
mod tests;

pub use block::{Block, BlockSequence};
pub use error::{VenueError, VenueResult};
pub use merge::{merge_records, LoadOutcome};
pub use record::{DurationRecord, PlanPoint, PlayAreaRecord, VertexRecord};
