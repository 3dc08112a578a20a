use thiserror::Error;

/// Failures surfaced by terrain generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("terrain error: {0}")]
    InvalidConfig(String),

    /// Diamond–Square needs a `2^k + 1` lattice side.
    #[error("diamond-square size must be 2^k + 1, got {0}")]
    InvalidSize(usize),
}

impl TerrainError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        TerrainError::InvalidConfig(msg.into())
    }
}
