//! The single-spin-flip Monte Carlo engine.
//!
//! [`Engine`] owns one [`Lattice`], one [`StatsTracker`], and a seeded
//! ChaCha8 RNG. [`step()`](Engine::step) performs one Metropolis/Glauber
//! trial; [`run_frame()`](Engine::run_frame) performs a bounded budget of
//! trials and reports the per-cell diffs a renderer needs.
//!
//! # Determinism
//!
//! All randomness flows through the one seeded RNG: identical seed and
//! identical call sequence reproduce identical spin and accumulator
//! trajectories. The acceptance draw is taken only when `ΔE > 0`, so the
//! RNG stream matches the reference trial-for-trial.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spindle_lattice::Lattice;

use crate::config::{
    validate_coupling, validate_temperature, ConfigError, EngineConfig,
};
use crate::metrics::FrameMetrics;
use crate::stats::StatsTracker;

// ── StepOutcome ──────────────────────────────────────────────────

/// Result of a single Monte Carlo trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// The proposed flip was accepted and applied.
    Flipped {
        /// Wrapped first coordinate of the flipped site, in `[0, N)`.
        i: i32,
        /// Wrapped second coordinate of the flipped site, in `[0, N)`.
        j: i32,
        /// The local energy change `2·J·s·Σ_neighbours` of the flip.
        delta_e: f64,
    },
    /// The proposed flip was rejected; only simulated time advanced.
    Rejected,
}

// ── FrameReport ──────────────────────────────────────────────────

/// Result of a successful [`Engine::run_frame`] call.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    /// Sites flipped this frame, in acceptance order. These are the
    /// per-cell diffs a renderer redraws; a site may appear more than
    /// once if it flipped repeatedly within the frame.
    pub flipped: Vec<(i32, i32)>,
    /// Counters and wall-clock timing for this frame.
    pub metrics: FrameMetrics,
}

// ── Engine ───────────────────────────────────────────────────────

/// Single-threaded Ising Monte Carlo engine.
///
/// Owns all simulation state; the lattice is mutated only through the
/// engine's flip path, so the ±1 invariant and the accumulator contract
/// hold for any call sequence. Configuration setters validate before
/// mutating and leave state untouched on rejection — nothing fails
/// mid-step.
#[derive(Clone, Debug)]
pub struct Engine {
    lattice: Lattice,
    stats: StatsTracker,
    temperature: f64,
    coupling: f64,
    steps_per_frame: u32,
    rng: ChaCha8Rng,
}

impl Engine {
    /// Construct an engine from a validated [`EngineConfig`].
    ///
    /// Seeds the RNG from `config.seed` and draws the initial lattice
    /// from it, so the starting state is part of the deterministic
    /// trajectory.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let lattice = Lattice::random(config.size, &mut rng)?;
        Ok(Self {
            lattice,
            stats: StatsTracker::new(),
            temperature: config.temperature,
            coupling: config.coupling,
            steps_per_frame: config.steps_per_frame,
            rng,
        })
    }

    /// Construct an engine around an existing lattice.
    ///
    /// The lattice's side length overrides `config.size`. Used by tests
    /// and fixtures that need an exact starting state.
    pub fn from_parts(lattice: Lattice, config: EngineConfig) -> Result<Self, ConfigError> {
        validate_temperature(config.temperature)?;
        validate_coupling(config.coupling)?;
        Ok(Self {
            lattice,
            stats: StatsTracker::new(),
            temperature: config.temperature,
            coupling: config.coupling,
            steps_per_frame: config.steps_per_frame,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        })
    }

    /// One Monte Carlo trial at a uniformly random site.
    pub fn step(&mut self) -> StepOutcome {
        let n = self.lattice.size() as i32;
        let i = self.rng.gen_range(0..n);
        let j = self.rng.gen_range(0..n);
        self.attempt(i, j)
    }

    /// One Monte Carlo trial at the given site (coordinates wrap).
    ///
    /// Computes `ΔE = 2·J·s(i,j)·Σ_neighbours`, accepts unconditionally
    /// when `ΔE <= 0` and with probability `exp(-ΔE/T)` otherwise. On
    /// acceptance the site flips, `E` gains `ΔE/N²`, and `M` gains the
    /// reference-cell increment `2·s'(i,j)·s'(N-1,N-1)/N²` (post-flip
    /// values). Simulated time advances `1/N²` either way.
    pub fn attempt(&mut self, i: i32, j: i32) -> StepOutcome {
        let site = self.lattice.get(i, j).value_f64();
        let delta_e =
            2.0 * self.coupling * site * f64::from(self.lattice.neighbour_sum(i, j));

        let accepted = delta_e <= 0.0
            || self.rng.gen::<f64>() < (-delta_e / self.temperature).exp();

        let cell_count = self.lattice.cell_count() as f64;
        let outcome = if accepted {
            self.lattice.flip(i, j);
            let edge = self.lattice.size() as i32 - 1;
            let reference = self.lattice.get(edge, edge).value_f64();
            let flipped = self.lattice.get(i, j).value_f64();
            self.stats
                .record_flip(delta_e / cell_count, 2.0 * flipped * reference / cell_count);

            let n = self.lattice.size() as i32;
            StepOutcome::Flipped {
                i: i.rem_euclid(n),
                j: j.rem_euclid(n),
                delta_e,
            }
        } else {
            StepOutcome::Rejected
        };

        self.stats.advance_time(1.0 / cell_count);
        outcome
    }

    /// Run exactly `budget` sequential trials and report the per-cell
    /// diffs.
    ///
    /// A budget of zero performs no simulation work and reports an empty
    /// diff — an idempotent no-op frame.
    pub fn run_frame(&mut self, budget: u32) -> FrameReport {
        let start = Instant::now();
        let mut flipped = Vec::new();
        for _ in 0..budget {
            if let StepOutcome::Flipped { i, j, .. } = self.step() {
                flipped.push((i, j));
            }
        }
        let metrics = FrameMetrics {
            attempted: budget,
            accepted: flipped.len() as u32,
            total_us: start.elapsed().as_micros() as u64,
        };
        FrameReport { flipped, metrics }
    }

    /// Reseed the lattice at the current size and zero all statistics.
    pub fn reset(&mut self) {
        self.lattice.reseed(&mut self.rng);
        self.stats.reset();
    }

    /// Reallocate and reseed the lattice at `new_size`, zeroing all
    /// statistics. State is untouched if `new_size` is invalid.
    pub fn resize(&mut self, new_size: u32) -> Result<(), ConfigError> {
        crate::config::validate_size(new_size)?;
        self.lattice = Lattice::random(new_size, &mut self.rng)?;
        self.stats.reset();
        Ok(())
    }

    /// Set the temperature. Rejects non-finite or non-positive values
    /// without mutating anything — the pathology is caught here, never
    /// at step time.
    pub fn set_temperature(&mut self, value: f64) -> Result<(), ConfigError> {
        validate_temperature(value)?;
        self.temperature = value;
        Ok(())
    }

    /// Set the coupling constant and zero `E`/`M` — accumulated energy
    /// and magnetization are meaningless across a coupling change. The
    /// lattice and elapsed time are preserved. State is untouched if the
    /// value is invalid.
    pub fn set_coupling(&mut self, value: f64) -> Result<(), ConfigError> {
        validate_coupling(value)?;
        self.coupling = value;
        self.stats.reset_accumulators();
        Ok(())
    }

    /// Set the per-frame step budget. Any `u32` is valid; zero yields
    /// no-op frames.
    pub fn set_steps_per_frame(&mut self, value: u32) {
        self.steps_per_frame = value;
    }

    /// The lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The statistics accumulators.
    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Current temperature `T`.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Current coupling constant `J`.
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Current per-frame step budget.
    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    /// Lattice side length `N`.
    pub fn size(&self) -> u32 {
        self.lattice.size()
    }

    #[cfg(test)]
    pub(crate) fn lattice_mut(&mut self) -> &mut Lattice {
        &mut self.lattice
    }
}
