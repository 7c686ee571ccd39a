//! The render seam.
//!
//! The engine never touches pixels; the driver pushes lattice state
//! through [`FrameSink`], and a raster backend (or nothing at all, for
//! headless runs) sits on the other side.

use spindle_lattice::Lattice;

/// Consumer of lattice state changes, called by the
/// [`FrameDriver`](crate::FrameDriver).
///
/// Implementations are pure state-to-output mappings: the driver
/// guarantees `draw_cell` coordinates are canonical (in `[0, N)`) and
/// that `present` is called exactly once per completed frame, including
/// no-op frames.
pub trait FrameSink {
    /// Rebuild the full output from the lattice. Called after
    /// initialize, resize, and reset.
    fn draw_all(&mut self, lattice: &Lattice);

    /// Redraw a single cell that flipped during a frame. Bounds output
    /// cost to the number of accepted flips rather than `N²`.
    fn draw_cell(&mut self, lattice: &Lattice, i: i32, j: i32);

    /// A frame is complete; publish whatever was drawn.
    fn present(&mut self);
}

/// A sink that discards everything — headless simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn draw_all(&mut self, _lattice: &Lattice) {}

    fn draw_cell(&mut self, _lattice: &Lattice, _i: i32, _j: i32) {}

    fn present(&mut self) {}
}
