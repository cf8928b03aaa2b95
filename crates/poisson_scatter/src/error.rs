//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid sampling configuration, seed placement that failed to converge, and cancelled runs.
//! Rejected candidates during a run are never reported here.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("seed placement did not converge after {attempts} attempts")]
    Convergence { attempts: u32 },

    #[error("sampling run was cancelled")]
    Cancelled,
}

impl Error {
    /// Returns true for errors caused by the parameters rather than the run itself.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::InvalidConfig(_) | Error::Convergence { .. })
    }
}
