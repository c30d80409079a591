//! Simulation state
//!
//! Everything that changes while the program runs lives in one
//! [`SimulationState`] value owned by the frame driver; there are no
//! module-level singletons.

pub mod flight;
pub mod projectiles;

pub use flight::{ControlFlags, FlightModel, FlightState};
pub use projectiles::{orb_colour, Orb, ProjectileManager};

use crate::core::config::SimulationConfig;
use crate::foundation::time::SimulationClock;
use crate::render::{CameraController, DrawMode};
use crate::scene::palette::GROUND_HEIGHT;

/// Mutable per-session state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Fixed-step clock
    pub clock: SimulationClock,
    /// Helicopter flight state
    pub flight: FlightState,
    /// Live orbs
    pub projectiles: ProjectileManager,
    /// Camera mode and panel parameters
    pub camera: CameraController,
    /// Global draw mode
    pub draw_mode: DrawMode,
}

impl SimulationState {
    /// Fresh state: time zero, craft grounded, no orbs, axonometric wireframe view
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            clock: SimulationClock::new(config.frame.time_step),
            flight: FlightState::new(),
            projectiles: ProjectileManager::new(config.projectiles.clone(), &config.flight, GROUND_HEIGHT),
            camera: CameraController::new(&config.camera),
            draw_mode: DrawMode::default(),
        }
    }

    /// Current simulation time in seconds
    pub fn time(&self) -> f64 {
        self.clock.total_time()
    }
}
