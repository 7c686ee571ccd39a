//! Benchmark profiles for the spindle simulation workspace.
//!
//! Provides pre-built [`EngineConfig`] profiles shared by the criterion
//! benches:
//!
//! - [`reference_profile`]: 64×64 lattice (4K cells) at the critical
//!   temperature
//! - [`stress_profile`]: 256×256 lattice (64K cells), the reference
//!   display size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spindle_engine::EngineConfig;

/// Reference benchmark profile: 64×64 lattice (4K cells).
pub fn reference_profile(seed: u64) -> EngineConfig {
    EngineConfig {
        size: 64,
        temperature: 2.269,
        coupling: 1.0,
        steps_per_frame: 4096,
        seed,
    }
}

/// Stress benchmark profile: 256×256 lattice (64K cells), the default
/// interactive configuration.
pub fn stress_profile(seed: u64) -> EngineConfig {
    EngineConfig {
        size: 256,
        temperature: 2.269,
        coupling: 1.0,
        steps_per_frame: 10_000,
        seed,
    }
}
