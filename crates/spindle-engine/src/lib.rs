//! Monte Carlo simulation engine and frame driver for spindle.
//!
//! [`Engine`] owns the lattice, the statistics accumulators, and a seeded
//! RNG, and implements the single-spin-flip Metropolis/Glauber update
//! rule. [`FrameDriver`] wraps it in a two-state (stopped/running)
//! machine driven by an external `tick()` at the host's refresh cadence —
//! the core never schedules itself, so headless and deterministic runs
//! are the default, not a special mode.
//!
//! Rendering is reached only through the [`FrameSink`] seam; the engine
//! itself has no raster dependency.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod engine;
pub mod metrics;
pub mod sink;
pub mod stats;

pub use config::{ConfigError, EngineConfig};
pub use driver::FrameDriver;
pub use engine::{Engine, FrameReport, StepOutcome};
pub use metrics::FrameMetrics;
pub use sink::{FrameSink, NullSink};
pub use stats::StatsTracker;
