use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid matrix dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    #[error("Background task error: {0}")]
    Background(String),
}
