//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Lattice`](crate::Lattice) constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// The requested side length is zero.
    EmptyLattice,
    /// The requested side length exceeds the coordinate range.
    DimensionTooLarge {
        /// The side length that was requested.
        value: u32,
        /// The maximum supported side length.
        max: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice side length must be at least 1"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "lattice side length {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for LatticeError {}
