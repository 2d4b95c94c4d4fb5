//! Engine error type.
//!
//! Sub-crates define their own error enums and wrap `VfError` via `From`.
//! Every variant here is a load-time or configuration-time failure; nothing
//! in the per-tick path produces an error.

use thiserror::Error;

/// The base error type for `vf-core` and a common variant for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VfError {
    /// A polygon has no vertex, so no centroid exists.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A configuration field is out of range.  The previous configuration
    /// stays in effect.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Shorthand result type for all `vf-*` crates.
pub type VfResult<T> = Result<T, VfError>;
