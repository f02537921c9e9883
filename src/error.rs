use std::error::Error;
use std::fmt;

/// Failure modes of weight initialization.
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    /// The requested weight matrix has no elements.
    InvalidDimension { rows: usize, cols: usize },

    /// The random fill produced a matrix with zero norm, so the rescale
    /// is undefined.
    DegenerateNorm,

    /// The uniform fill was configured with `lower > upper`.
    InvalidBounds { lower: f32, upper: f32 },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(f, "invalid weight matrix dimensions: {rows}x{cols}")
            }
            Self::DegenerateNorm => {
                write!(f, "weight matrix norm is zero after random fill")
            }
            Self::InvalidBounds { lower, upper } => {
                write!(f, "invalid uniform bounds: [{lower}, {upper}]")
            }
        }
    }
}

impl Error for InitError {}
