//! Frame Driver
//!
//! One call to [`FrameDriver::frame`] is one displayed frame: the clock steps
//! by the fixed Δt, the flight model and orbs are integrated, the camera is
//! resolved against this frame's helicopter pose, and the assembled scene is
//! handed to the renderer. Input events are applied between frames.

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::config::SimulationConfig;
use crate::input::{map_event, Action, InputEvent};
use crate::render::{CameraMode, DrawCall, RenderError, Renderer};
use crate::scene::{SceneAssembler, SceneItem, TransformStackError};
use crate::simulation::{FlightModel, SimulationState};

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scene traversal left the transform stack inconsistent
    #[error("Scene assembly error: {0}")]
    TransformStack(#[from] TransformStackError),

    /// The renderer rejected a frame
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Summary of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Number of frames rendered so far, this one included
    pub frame_index: u64,
    /// Simulation time of this frame
    pub time: f64,
    /// Draw calls submitted
    pub draw_calls: usize,
    /// Orbs alive after this frame's update
    pub live_projectiles: usize,
    /// Camera mode used
    pub camera_mode: CameraMode,
}

/// Owns the simulation and drives it one frame at a time
pub struct FrameDriver {
    state: SimulationState,
    flight_model: FlightModel,
    assembler: SceneAssembler,
    viewport: (u32, u32),
}

impl FrameDriver {
    /// Validate `config` and set up a fresh simulation
    pub fn new(config: SimulationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing frame driver: dt={:.4}s, viewport {}x{}",
            config.frame.time_step,
            config.viewport.width,
            config.viewport.height
        );

        Ok(Self {
            state: SimulationState::new(&config),
            flight_model: FlightModel::new(config.flight.clone()),
            assembler: SceneAssembler::new(&config.flight, &config.camera),
            viewport: (config.viewport.width, config.viewport.height),
        })
    }

    /// Current simulation state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable simulation state, e.g. for the parameter panel
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Viewport width over height
    pub fn aspect(&self) -> f32 {
        let (width, height) = self.viewport;
        width as f32 / height as f32
    }

    /// Viewport notification; zero-sized viewports are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring resize to {width}x{height}");
            return;
        }
        log::debug!("Viewport resized to {width}x{height}");
        self.viewport = (width, height);
    }

    /// Handle one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(action) = map_event(event) {
            self.apply(action);
        }
    }

    /// Apply an engine action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetDrawMode(mode) => {
                log::debug!("Draw mode {mode:?}");
                self.state.draw_mode = mode;
            }
            Action::SetCameraMode(mode) => self.state.camera.set_mode(mode),
            Action::Hold(control) => {
                self.state.flight.press(control, self.flight_model.config());
            }
            Action::Release(control) => self.state.flight.release(control),
            Action::SpawnOrb => {
                self.spawn_orb();
            }
            Action::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Drop an orb from the helicopter's current position
    ///
    /// Returns whether an orb was spawned; nothing happens while grounded.
    pub fn spawn_orb(&mut self) -> bool {
        let pose = self.assembler.craft_pose(&self.state.flight);
        let now = self.state.clock.total_time();
        let dt = self.state.clock.time_step();
        self.state
            .projectiles
            .spawn(&self.state.flight, pose.position, now, dt)
            .is_some()
    }

    /// Advance one fixed step and render the result
    ///
    /// The whole draw list is built before anything is submitted, so a scene
    /// assembly failure leaves the renderer untouched.
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> Result<FrameReport, EngineError> {
        let dt = self.state.clock.time_step();
        let time = self.state.clock.advance();

        self.flight_model.update(&mut self.state.flight, dt);
        self.state.projectiles.update(time, dt);

        let pose = self.assembler.craft_pose(&self.state.flight);
        let camera = self.state.camera.resolve(&pose);
        let view = self.state.camera.compute_view(&camera);
        let projection = self.state.camera.compute_projection(&camera, self.aspect());

        let items = self
            .assembler
            .assemble(&view, &self.state.flight, &self.state.projectiles, time)
            .map_err(|e| {
                log::error!("Aborting frame {}: {e}", self.state.clock.frame_count());
                e
            })?;

        let draw_mode = self.state.draw_mode;
        let calls: Vec<DrawCall> = items
            .iter()
            .map(|item: &SceneItem| DrawCall {
                primitive: item.shape.primitive,
                mode: item.shape.resolve_mode(draw_mode),
                model_view: item.transform,
                projection,
                colour: item.shape.colour,
            })
            .collect();

        renderer.begin_frame()?;
        for call in &calls {
            renderer.draw(call)?;
        }
        renderer.end_frame()?;

        let report = FrameReport {
            frame_index: self.state.clock.frame_count(),
            time,
            draw_calls: calls.len(),
            live_projectiles: self.state.projectiles.len(),
            camera_mode: self.state.camera.mode(),
        };
        log::trace!("{report:?}");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::render::{DrawMode, Primitive, RecordingRenderer};

    fn driver() -> FrameDriver {
        FrameDriver::new(SimulationConfig::default()).unwrap()
    }

    fn press(key: KeyCode) -> InputEvent {
        InputEvent::KeyPressed { key, repeat: false }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SimulationConfig::default();
        config.frame.time_step = 0.0;
        assert!(matches!(FrameDriver::new(config), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_frame_submits_whole_scene() {
        let mut driver = driver();
        let mut renderer = RecordingRenderer::new();

        let report = driver.frame(&mut renderer).unwrap();

        assert_eq!(report.frame_index, 1);
        assert_eq!(report.draw_calls, renderer.calls().len());
        assert_eq!(renderer.frames_begun(), 1);
        assert_eq!(renderer.frames_finished(), 1);
        assert_eq!(renderer.count(Primitive::Sphere), 9);
    }

    #[test]
    fn test_filled_mode_keeps_outer_crystals_wireframe() {
        let mut driver = driver();
        let mut renderer = RecordingRenderer::new();
        driver.handle_event(press(KeyCode::S));
        driver.frame(&mut renderer).unwrap();

        let wireframe = renderer
            .calls()
            .iter()
            .filter(|call| call.mode == DrawMode::Wireframe)
            .count();
        // Outer and middle layer on each of six pillars
        assert_eq!(wireframe, 12);
    }

    #[test]
    fn test_grounded_controls_are_gated() {
        let mut driver = driver();
        driver.handle_event(press(KeyCode::ArrowLeft));
        driver.handle_event(press(KeyCode::ArrowDown));
        assert!(driver.state().flight.controls.is_empty());
        assert!(!driver.spawn_orb());
    }

    #[test]
    fn test_liftoff_then_spawn() {
        let mut driver = driver();
        let mut renderer = RecordingRenderer::new();

        driver.handle_event(press(KeyCode::ArrowUp));
        for _ in 0..60 {
            driver.frame(&mut renderer).unwrap();
        }
        driver.handle_event(InputEvent::KeyReleased(KeyCode::ArrowUp));
        assert!(driver.state().flight.is_airborne());

        driver.handle_event(press(KeyCode::Space));
        let report = driver.frame(&mut renderer).unwrap();
        assert_eq!(report.live_projectiles, 1);
    }

    #[test]
    fn test_zero_resize_is_ignored() {
        let mut driver = driver();
        let before = driver.aspect();
        driver.handle_event(InputEvent::Resized { width: 0, height: 300 });
        assert_eq!(driver.aspect(), before);

        driver.resize(400, 400);
        assert_eq!(driver.aspect(), 1.0);
    }

    #[test]
    fn test_camera_key_switches_mode() {
        let mut driver = driver();
        let mut renderer = RecordingRenderer::new();
        driver.handle_event(press(KeyCode::Digit5));
        let report = driver.frame(&mut renderer).unwrap();
        assert_eq!(report.camera_mode, CameraMode::FirstPerson);
    }
}
