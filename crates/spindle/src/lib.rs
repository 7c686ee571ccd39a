//! Spindle: 2D Ising spin lattice Monte Carlo simulation with raster
//! rendering.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the spindle sub-crates. For most users, adding `spindle` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spindle::prelude::*;
//!
//! // A 32×32 ferromagnet at the critical temperature, 256 attempted
//! // flips per frame, rendered onto a 64×64 RGBA raster.
//! let config = EngineConfig {
//!     size: 32,
//!     temperature: 2.269,
//!     coupling: 1.0,
//!     steps_per_frame: 256,
//!     seed: 7,
//! };
//! let engine = Engine::new(config).unwrap();
//! let mut renderer = Renderer::new(64, engine.size()).unwrap();
//! let mut driver = FrameDriver::new(engine);
//!
//! // Paint the seeded lattice, then run a few host-driven ticks.
//! driver.reset(&mut renderer);
//! driver.toggle();
//! for _ in 0..12 {
//!     driver.tick(&mut renderer);
//! }
//!
//! // The stats feed a chart collaborator polls each tick:
//! let stats = driver.engine().stats();
//! assert_eq!(stats.time_display(), 3); // 12 × 256 / 32² = 3 sweeps
//! assert_eq!(renderer.as_rgba().len(), 64 * 64 * 4);
//! ```
//!
//! # Crates
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`lattice`] | `spindle-lattice` | [`Spin`], toroidal [`Lattice`] |
//! | [`engine`] | `spindle-engine` | [`Engine`], [`FrameDriver`], stats, config |
//! | [`render`] | `spindle-render` | [`Renderer`], [`Palette`], [`PixelSurface`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use spindle_engine::{
    ConfigError, Engine, EngineConfig, FrameDriver, FrameMetrics, FrameReport, FrameSink,
    NullSink, StatsTracker, StepOutcome,
};
pub use spindle_lattice::{Lattice, LatticeError, Spin};
pub use spindle_render::{snapshot_name, Palette, PixelSurface, RenderError, Renderer};

/// The `spindle-lattice` sub-crate.
pub mod lattice {
    pub use spindle_lattice::*;
}

/// The `spindle-engine` sub-crate.
pub mod engine {
    pub use spindle_engine::*;
}

/// The `spindle-render` sub-crate.
pub mod render {
    pub use spindle_render::*;
}

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use spindle_engine::{
        ConfigError, Engine, EngineConfig, FrameDriver, FrameMetrics, FrameSink, NullSink,
        StatsTracker, StepOutcome,
    };
    pub use spindle_lattice::{Lattice, Spin};
    pub use spindle_render::{Palette, Renderer};
}
