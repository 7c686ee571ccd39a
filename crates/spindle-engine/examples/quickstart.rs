//! Spindle quickstart — a headless critical-temperature quench.
//!
//! Demonstrates:
//!   1. Building an engine from an [`EngineConfig`]
//!   2. Driving it with a [`FrameDriver`] and a [`NullSink`]
//!   3. Polling the stats feed the way a chart collaborator would
//!
//! Run with:
//!   cargo run --example quickstart

use spindle_engine::{Engine, EngineConfig, FrameDriver, NullSink};

fn main() {
    let config = EngineConfig {
        size: 64,
        temperature: 2.269,
        coupling: 1.0,
        steps_per_frame: 4096,
        seed: 2024,
    };
    let engine = Engine::new(config).expect("default-shaped config is valid");
    let mut driver = FrameDriver::new(engine);
    let mut sink = NullSink;

    driver.toggle();
    for frame in 0..120 {
        let metrics = driver.tick(&mut sink).expect("driver is running");
        if frame % 20 == 0 {
            let stats = driver.engine().stats();
            println!(
                "frame {frame:3}  t = {:4} sweeps  E = {:+.5}  M = {:+.5}  ({} / {} flips accepted)",
                stats.time_display(),
                stats.energy_display(),
                stats.magnetisation_display(),
                metrics.accepted,
                metrics.attempted,
            );
        }
    }

    let up = driver.engine().lattice().up_fraction();
    println!("final up-spin fraction: {up:.3}");
}
