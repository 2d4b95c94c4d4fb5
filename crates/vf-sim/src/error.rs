use thiserror::Error;
use vf_core::VfError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// The configuration was rejected; any previous configuration is kept.
    #[error("simulation configuration error: {0}")]
    Config(#[from] VfError),
}

pub type SimResult<T> = Result<T, SimError>;
