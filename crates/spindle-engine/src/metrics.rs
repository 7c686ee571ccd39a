//! Per-frame performance metrics.

/// Counters and timing collected during a single
/// [`run_frame()`](crate::Engine::run_frame) call.
///
/// Consumers (telemetry, adaptive budget tuning) read these from the
/// most recent frame; the engine overwrites them each call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    /// Attempted flips this frame (equals the requested budget).
    pub attempted: u32,
    /// Accepted flips this frame. Bounds the rendering cost: only
    /// accepted flips produce per-cell redraws.
    pub accepted: u32,
    /// Wall-clock time for the whole frame, in microseconds.
    pub total_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = FrameMetrics::default();
        assert_eq!(m.attempted, 0);
        assert_eq!(m.accepted, 0);
        assert_eq!(m.total_us, 0);
    }
}
