//! Toroidal spin lattice for spindle Ising simulations.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`Spin`] — the two-valued site state — and [`Lattice`], a square grid
//! of spins under periodic (torus) boundary conditions. Every coordinate
//! accessor wraps modulo the lattice side, so callers never bounds-check.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;
pub mod spin;

pub use error::LatticeError;
pub use lattice::Lattice;
pub use spin::Spin;
