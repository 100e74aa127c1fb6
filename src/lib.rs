pub mod geometry;
pub mod parse;
pub mod tolerance;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("Dimension Mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Division By Zero: {0} requires a nonzero magnitude")]
    DivisionByZero(&'static str),
    #[error("Overflow: {0} produced a non-finite coordinate")]
    Overflow(&'static str),
}

impl VectorError {
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, VectorError::DivisionByZero(_))
    }
}

/// Reasons a coordinate sequence cannot become a [`Vector`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("the coordinates must not be empty")]
    Empty,
    #[error("coordinate {index} is not a number: {token:?}")]
    NotANumber { index: usize, token: String },
    #[error("coordinate {index} is not finite")]
    NonFinite { index: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use tolerance::{AngleUnit, Tolerance};
pub use utils::{generate_random_vectors, generate_random_vectors_with};
pub use vector::Vector;
