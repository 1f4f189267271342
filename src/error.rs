//! Error types for relativistic transforms.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelativityError {
    /// Velocity parameter outside the open interval (-1, 1).
    #[error("Invalid parameter: |beta| must be < 1, got {beta}")]
    InvalidParameter { beta: f64 },

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),
}

pub type Result<T> = std::result::Result<T, RelativityError>;

impl RelativityError {
    #[must_use]
    pub const fn invalid_parameter(beta: f64) -> Self {
        Self::InvalidParameter { beta }
    }

    #[must_use]
    pub fn invalid_sweep(msg: impl Into<String>) -> Self {
        Self::InvalidSweep(msg.into())
    }
}
