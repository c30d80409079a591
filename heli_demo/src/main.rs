//! Headless helicopter demo
//!
//! Loads an optional config file (TOML or RON), plays a scripted flight
//! through the frame driver against a recording renderer and logs a summary
//! every simulated second.
//!
//! Usage: `heli_demo [config.toml|config.ron] [frames]`

mod script;

use heli_engine::config::{Config, ConfigError};
use heli_engine::core::config::SimulationConfig;
use heli_engine::foundation::logging;
use heli_engine::render::{DrawMode, RecordingRenderer};
use heli_engine::{EngineError, FrameDriver};
use thiserror::Error;

const DEFAULT_FRAMES: u64 = 1500;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid frame count '{0}'")]
    InvalidFrameCount(String),
}

fn main() -> Result<(), DemoError> {
    let (config, frames) = match parse_args(std::env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(e) => {
            logging::init(DEFAULT_LOG_LEVEL);
            log::error!("Heli demo failed to start: {e}");
            return Err(e);
        }
    };

    logging::init(&config.logging.level);
    log::info!("Starting heli demo for {frames} frames");

    let result = run(config, frames);
    if let Err(e) = &result {
        log::error!("Heli demo failed: {e}");
    }
    result
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(SimulationConfig, u64), DemoError> {
    let config = match args.next() {
        Some(path) => SimulationConfig::load_from_file(&path)?,
        None => SimulationConfig::default(),
    };
    let frames = match args.next() {
        Some(raw) => raw.parse::<u64>().map_err(|_| DemoError::InvalidFrameCount(raw))?,
        None => DEFAULT_FRAMES,
    };
    Ok((config, frames))
}

fn run(config: SimulationConfig, frames: u64) -> Result<(), DemoError> {
    let steps_per_second = (1.0 / config.frame.time_step).round().max(1.0) as u64;
    let mut driver = FrameDriver::new(config)?;
    let mut renderer = RecordingRenderer::new();
    let plan = script::flight_plan();

    for frame in 0..frames {
        for event in script::due(&plan, frame) {
            log::debug!("Frame {frame}: {event:?}");
            driver.handle_event(event);
        }

        let report = driver.frame(&mut renderer)?;

        if report.frame_index % steps_per_second == 0 {
            let flight = &driver.state().flight;
            let filled = renderer
                .calls()
                .iter()
                .filter(|call| call.mode == DrawMode::Filled)
                .count();
            log::info!(
                "t={:>6.2}s {:?}: {} draws ({} filled), {} orbs | alt {:.1} vel {:.1} pos {:.1} tilt {:.1}",
                report.time,
                report.camera_mode,
                report.draw_calls,
                filled,
                report.live_projectiles,
                flight.altitude,
                flight.angular_velocity,
                flight.angular_position,
                flight.tilt
            );
        }
    }

    log::info!("Heli demo finished after {} frames", renderer.frames_finished());
    Ok(())
}
