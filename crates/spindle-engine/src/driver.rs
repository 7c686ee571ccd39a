//! Frame driver: the externally ticked run loop.
//!
//! [`FrameDriver`] is a two-state machine (stopped/running) around an
//! [`Engine`]. The host calls [`tick()`](FrameDriver::tick) once per
//! display-refresh period; the driver never schedules itself, which
//! keeps the loop headless-testable and deterministic.

use crate::config::ConfigError;
use crate::engine::Engine;
use crate::metrics::FrameMetrics;
use crate::sink::FrameSink;

/// Cooperative frame loop over an [`Engine`] and a [`FrameSink`].
///
/// Starts stopped. While running, each `tick()` spends the engine's
/// per-frame step budget and pushes the resulting cell diffs to the
/// sink. Configuration setters are safe to call in either state.
#[derive(Debug)]
pub struct FrameDriver {
    engine: Engine,
    running: bool,
}

impl FrameDriver {
    /// Wrap an engine. The driver starts in the stopped state.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            running: false,
        }
    }

    /// Flip between stopped and running. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Whether the driver is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame if running; no-op when stopped.
    ///
    /// Runs the engine for its step budget, redraws each flipped cell,
    /// and presents the frame. A zero budget still presents (idempotent
    /// no-op frame). Returns the frame metrics, or `None` when stopped.
    pub fn tick(&mut self, sink: &mut dyn FrameSink) -> Option<FrameMetrics> {
        if !self.running {
            return None;
        }
        let budget = self.engine.steps_per_frame();
        let report = self.engine.run_frame(budget);
        for &(i, j) in &report.flipped {
            sink.draw_cell(self.engine.lattice(), i, j);
        }
        sink.present();
        Some(report.metrics)
    }

    /// Resize the lattice: forces the stopped state, reseeds at the new
    /// size, zeroes all statistics, and rebuilds the full output.
    ///
    /// On rejection nothing changes — including the running state.
    pub fn resize(&mut self, new_size: u32, sink: &mut dyn FrameSink) -> Result<(), ConfigError> {
        self.engine.resize(new_size)?;
        self.running = false;
        sink.draw_all(self.engine.lattice());
        sink.present();
        Ok(())
    }

    /// Reseed the lattice at the current size, zero all statistics, and
    /// rebuild the full output. The running state is untouched.
    pub fn reset(&mut self, sink: &mut dyn FrameSink) {
        self.engine.reset();
        sink.draw_all(self.engine.lattice());
        sink.present();
    }

    /// Set the temperature; safe while running.
    pub fn set_temperature(&mut self, value: f64) -> Result<(), ConfigError> {
        self.engine.set_temperature(value)
    }

    /// Set the coupling constant; safe while running. Zeroes the
    /// energy/magnetization accumulators but preserves the lattice and
    /// elapsed time.
    pub fn set_coupling(&mut self, value: f64) -> Result<(), ConfigError> {
        self.engine.set_coupling(value)
    }

    /// Set the per-frame step budget; safe while running.
    pub fn set_steps_per_frame(&mut self, value: u32) {
        self.engine.set_steps_per_frame(value);
    }

    /// The wrapped engine, for stats polling and lattice reads.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::stats::StatsTracker;
    use spindle_lattice::Lattice;

    /// Records every sink call for assertions.
    #[derive(Default)]
    struct RecordingSink {
        draw_all_calls: u32,
        cells: Vec<(i32, i32)>,
        presents: u32,
    }

    impl FrameSink for RecordingSink {
        fn draw_all(&mut self, _lattice: &Lattice) {
            self.draw_all_calls += 1;
        }

        fn draw_cell(&mut self, _lattice: &Lattice, i: i32, j: i32) {
            self.cells.push((i, j));
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    fn driver(steps_per_frame: u32) -> FrameDriver {
        let config = EngineConfig {
            size: 8,
            steps_per_frame,
            seed: 17,
            ..Default::default()
        };
        FrameDriver::new(Engine::new(config).unwrap())
    }

    // ── State machine tests ─────────────────────────────────────

    #[test]
    fn starts_stopped_and_toggles() {
        let mut driver = driver(100);
        assert!(!driver.is_running());
        assert!(driver.toggle());
        assert!(driver.is_running());
        assert!(!driver.toggle());
        assert!(!driver.is_running());
    }

    #[test]
    fn tick_while_stopped_is_noop() {
        let mut driver = driver(100);
        let mut sink = RecordingSink::default();
        assert!(driver.tick(&mut sink).is_none());
        assert_eq!(sink.presents, 0);
        assert_eq!(driver.engine().stats().time_sweeps(), 0.0);
    }

    #[test]
    fn tick_while_running_spends_budget_and_presents() {
        let mut driver = driver(200);
        let mut sink = RecordingSink::default();
        driver.toggle();
        let metrics = driver.tick(&mut sink).unwrap();
        assert_eq!(metrics.attempted, 200);
        assert_eq!(metrics.accepted as usize, sink.cells.len());
        assert_eq!(sink.presents, 1);
        let expected = 200.0 / 64.0;
        assert!((driver.engine().stats().time_sweeps() - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_budget_tick_still_presents() {
        let mut driver = driver(0);
        let mut sink = RecordingSink::default();
        driver.toggle();
        let metrics = driver.tick(&mut sink).unwrap();
        assert_eq!(metrics.attempted, 0);
        assert!(sink.cells.is_empty());
        assert_eq!(sink.presents, 1);
        assert_eq!(driver.engine().stats().time_sweeps(), 0.0);
    }

    // ── Lifecycle tests ─────────────────────────────────────────

    #[test]
    fn resize_forces_stopped_and_redraws() {
        let mut driver = driver(100);
        let mut sink = RecordingSink::default();
        driver.toggle();
        driver.resize(16, &mut sink).unwrap();
        assert!(!driver.is_running());
        assert_eq!(driver.engine().size(), 16);
        assert_eq!(driver.engine().stats(), &StatsTracker::new());
        assert_eq!(sink.draw_all_calls, 1);
        assert_eq!(sink.presents, 1);
    }

    #[test]
    fn failed_resize_leaves_running_state() {
        let mut driver = driver(100);
        let mut sink = RecordingSink::default();
        driver.toggle();
        assert!(driver.resize(0, &mut sink).is_err());
        assert!(driver.is_running());
        assert_eq!(driver.engine().size(), 8);
        assert_eq!(sink.draw_all_calls, 0);
    }

    #[test]
    fn reset_preserves_running_state() {
        let mut driver = driver(100);
        let mut sink = RecordingSink::default();
        driver.toggle();
        driver.tick(&mut sink);
        driver.reset(&mut sink);
        assert!(driver.is_running());
        assert_eq!(driver.engine().stats(), &StatsTracker::new());
        assert_eq!(sink.draw_all_calls, 1);
    }

    #[test]
    fn setters_safe_while_running() {
        let mut driver = driver(100);
        let mut sink = RecordingSink::default();
        driver.toggle();
        driver.tick(&mut sink);
        driver.set_temperature(3.0).unwrap();
        driver.set_steps_per_frame(50);
        driver.set_coupling(-1.0).unwrap();
        assert!(driver.is_running());
        let metrics = driver.tick(&mut sink).unwrap();
        assert_eq!(metrics.attempted, 50);
        // Coupling change zeroed E/M but time kept flowing.
        assert!(driver.engine().stats().time_sweeps() > 0.0);
    }
}
