//! # Heli Engine
//!
//! Deterministic transform and animation core for a helicopter scene: a
//! hierarchical transform stack, a five-mode camera, a helicopter flight
//! model, time-bounded projectiles ("orbs") and a scene assembler that turns
//! it all into draw calls for an external renderer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heli_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     let mut driver = FrameDriver::new(SimulationConfig::default())?;
//!     let mut renderer = RecordingRenderer::new();
//!
//!     driver.handle_event(InputEvent::KeyPressed { key: KeyCode::ArrowUp, repeat: false });
//!     for _ in 0..120 {
//!         driver.frame(&mut renderer)?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::must_use_candidate
)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;
pub mod simulation;

mod engine;

pub use engine::{EngineError, FrameDriver, FrameReport};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::SimulationConfig,
        foundation::math::{Mat4, Mat4Ext, Vec3},
        input::{Action, InputEvent, KeyCode},
        render::{
            CameraMode, Colour, DrawCall, DrawMode, Primitive, RecordingRenderer, RenderError,
            Renderer,
        },
        scene::{CraftPose, SceneAssembler, TransformStack},
        simulation::{ControlFlags, FlightState, SimulationState},
        EngineError, FrameDriver, FrameReport,
    };
}

#[cfg(test)]
mod tests;
