use thiserror::Error;
use vf_core::VfError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VenueError {
    #[error("block {name:?}: {source}")]
    Geometry {
        name:   String,
        #[source]
        source: VfError,
    },

    #[error("block {name:?}: duration must be finite and >= 0, got {duration}")]
    InvalidDuration { name: String, duration: f64 },
}

pub type VenueResult<T> = Result<T, VenueError>;
