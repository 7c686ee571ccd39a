//! Cumulative simulation statistics.

/// Running statistics accumulated as the simulation evolves.
///
/// Three scalars: cumulative energy density `E`, cumulative
/// magnetization density `M`, and elapsed simulated time `t` in Monte
/// Carlo sweeps (one sweep = `N²` attempted flips).
///
/// `t` is monotone and advances by exactly `1/N²` per attempted update
/// regardless of acceptance; `E` and `M` change only on accepted flips.
/// `E` is the running sum of accepted `ΔE/N²` starting from zero, not
/// the absolute Hamiltonian. `M` accumulates the reference-cell
/// correlation statistic `2·s(i,j)·s(N-1,N-1)/N²` — a compatibility
/// choice, not the lattice-averaged magnetization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatsTracker {
    energy: f64,
    magnetisation: f64,
    time: f64,
}

impl StatsTracker {
    /// A fresh tracker with all accumulators at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative energy density `E`.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Cumulative magnetization density `M`.
    pub fn magnetisation(&self) -> f64 {
        self.magnetisation
    }

    /// Elapsed simulated time in sweeps.
    pub fn time_sweeps(&self) -> f64 {
        self.time
    }

    /// `E` rounded to 5 decimal places for display feeds.
    pub fn energy_display(&self) -> f64 {
        round5(self.energy)
    }

    /// `M` rounded to 5 decimal places for display feeds.
    pub fn magnetisation_display(&self) -> f64 {
        round5(self.magnetisation)
    }

    /// Elapsed time rounded to whole sweeps for display feeds.
    pub fn time_display(&self) -> u64 {
        self.time.round() as u64
    }

    /// Record an accepted flip's contribution to `E` and `M`.
    pub fn record_flip(&mut self, energy_delta: f64, magnetisation_delta: f64) {
        self.energy += energy_delta;
        self.magnetisation += magnetisation_delta;
    }

    /// Advance simulated time by `dt` sweeps (called once per attempted
    /// update, accepted or not).
    pub fn advance_time(&mut self, dt: f64) {
        self.time += dt;
    }

    /// Zero all three accumulators (full reset).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zero `E` and `M` but preserve `t` — used when the coupling
    /// changes and the energy landscape shifts discontinuously.
    pub fn reset_accumulators(&mut self) {
        self.energy = 0.0;
        self.magnetisation = 0.0;
    }
}

fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}
