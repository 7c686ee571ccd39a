//! Error types for raster construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Renderer`](crate::Renderer) and
/// [`PixelSurface`](crate::PixelSurface) constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The display size is zero — nothing to blit into.
    EmptySurface,
    /// The lattice side length is zero — nothing to map from.
    EmptyLattice,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySurface => write!(f, "display size must be at least 1 pixel"),
            Self::EmptyLattice => write!(f, "lattice side length must be at least 1"),
        }
    }
}

impl Error for RenderError {}
