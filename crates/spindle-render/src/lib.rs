//! RGBA raster rendering of spindle lattice state.
//!
//! A pure state-to-pixel mapping: [`Renderer`] owns a [`PixelSurface`]
//! and paints each lattice cell as a solid block in the [`Palette`]
//! color for its spin sign. No simulation logic lives here, and the
//! crate can be swapped for any other raster target behind the
//! [`FrameSink`](spindle_engine::FrameSink) seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod palette;
pub mod renderer;
pub mod surface;

pub use error::RenderError;
pub use palette::Palette;
pub use renderer::{snapshot_name, Renderer};
pub use surface::PixelSurface;
