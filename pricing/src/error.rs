use std::fmt;

use rand_distr::{uniform::Error as UniformError, NormalError};

/// The pricing crate's result type.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Failures in the pricing pipeline.
#[derive(Debug)]
pub enum PricingError {
    /// A query field violates its declared bound.
    OutOfRange {
        what: &'static str,
        got: f64,
        min: f64,
        max: f64,
    },

    /// The normal equations are singular; no model can be served.
    DegenerateFit(&'static str),

    /// A sampling distribution could not be constructed.
    Synthesis(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::OutOfRange { what, got, min, max } => {
                write!(f, "{what} out of range: got {got}, expected [{min}, {max}]")
            }
            PricingError::DegenerateFit(msg) => write!(f, "degenerate fit: {msg}"),
            PricingError::Synthesis(msg) => write!(f, "synthesis failed: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

impl From<NormalError> for PricingError {
    fn from(value: NormalError) -> Self {
        Self::Synthesis(value.to_string())
    }
}

impl From<UniformError> for PricingError {
    fn from(value: UniformError) -> Self {
        Self::Synthesis(value.to_string())
    }
}
