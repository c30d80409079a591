//! # Camera Controller
//!
//! Five discrete camera modes, switched instantaneously:
//!
//! - **Axonometric**: orthographic, eye on a sphere of radius `D` placed by the
//!   azimuth θ and elevation γ panel parameters
//! - **Front / Top / Right**: orthographic, fixed eye and up presets
//! - **First person**: perspective, eye riding on the helicopter fuselage
//!
//! Matrices are recomputed from scratch every frame and never cached.

use crate::core::config::CameraConfig;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use crate::scene::CraftPose;

/// Discrete camera mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Orthographic view from (θ, γ)
    #[default]
    Axonometric,
    /// Orthographic view along -Z
    Front,
    /// Orthographic view along -X
    Right,
    /// Orthographic view straight down
    Top,
    /// Perspective view from the helicopter
    FirstPerson,
}

/// Declared bounds of an adjustable panel parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    /// Lowest accepted value
    pub min: f32,
    /// Highest accepted value
    pub max: f32,
    /// Granularity
    pub step: f32,
}

impl ParameterRange {
    /// Clamp `value` into range and snap it to the nearest step
    pub fn apply(&self, value: f32) -> f32 {
        let snapped = self.min + ((value - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }
}

/// Axonometric azimuth range (degrees)
pub const THETA_RANGE: ParameterRange = ParameterRange { min: 0.0, max: 180.0, step: 0.5 };

/// Axonometric elevation range (degrees)
pub const GAMMA_RANGE: ParameterRange = ParameterRange { min: 0.0, max: 180.0, step: 0.5 };

/// First-person field-of-view range (degrees)
pub const FOV_RANGE: ParameterRange = ParameterRange { min: 30.0, max: 120.0, step: 1.0 };

/// Values exposed on the parameter panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParameters {
    theta: f32,
    gamma: f32,
    fov: f32,
}

impl CameraParameters {
    /// Create panel values, clamped to their ranges
    pub fn new(theta: f32, gamma: f32, fov: f32) -> Self {
        Self {
            theta: THETA_RANGE.apply(theta),
            gamma: GAMMA_RANGE.apply(gamma),
            fov: FOV_RANGE.apply(fov),
        }
    }

    /// Axonometric azimuth (degrees)
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Axonometric elevation (degrees)
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// First-person field of view (degrees)
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Set the azimuth
    pub fn set_theta(&mut self, theta: f32) {
        self.theta = THETA_RANGE.apply(theta);
    }

    /// Set the elevation
    pub fn set_gamma(&mut self, gamma: f32) {
        self.gamma = GAMMA_RANGE.apply(gamma);
    }

    /// Set the field of view
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = FOV_RANGE.apply(fov);
    }
}

/// Fully resolved camera for one frame
///
/// Each variant carries only what its projection needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraState {
    /// Orthographic camera looking at the origin
    Orthographic {
        /// Eye position
        eye: Vec3,
        /// Up vector
        up: Vec3,
    },
    /// Perspective camera attached to the helicopter
    FirstPerson {
        /// Eye position (fuselage centre)
        eye: Vec3,
        /// Point ahead of the fuselage
        target: Vec3,
        /// Vertical field of view (degrees)
        fov: f32,
        /// Craft tilt (degrees), rolled into the projection
        tilt: f32,
    },
}

impl CameraState {
    /// Eye position
    pub fn eye(&self) -> Vec3 {
        match *self {
            Self::Orthographic { eye, .. } | Self::FirstPerson { eye, .. } => eye,
        }
    }

    /// Look-at target
    pub fn target(&self) -> Vec3 {
        match *self {
            Self::Orthographic { .. } => Vec3::zeros(),
            Self::FirstPerson { target, .. } => target,
        }
    }

    /// Up vector
    pub fn up(&self) -> Vec3 {
        match *self {
            Self::Orthographic { up, .. } => up,
            Self::FirstPerson { .. } => Vec3::y(),
        }
    }
}

/// Camera controller
#[derive(Debug, Clone)]
pub struct CameraController {
    mode: CameraMode,
    parameters: CameraParameters,
    distance: f32,
    near: f32,
}

impl CameraController {
    /// Create a controller in axonometric mode with the configured initial values
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            mode: CameraMode::Axonometric,
            parameters: CameraParameters::new(
                config.initial_theta,
                config.initial_gamma,
                config.default_fov,
            ),
            distance: config.viewport_distance,
            near: config.perspective_near,
        }
    }

    /// Current mode
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switch modes (instantaneous cut)
    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            log::debug!("Camera mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Panel parameters
    pub fn parameters(&self) -> &CameraParameters {
        &self.parameters
    }

    /// Mutable panel parameters
    pub fn parameters_mut(&mut self) -> &mut CameraParameters {
        &mut self.parameters
    }

    /// Orthographic viewing distance `D`
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Axonometric eye position for the current θ and γ
    pub fn axonometric_eye(&self) -> Vec3 {
        let theta = utils::deg_to_rad(self.parameters.theta);
        let gamma = utils::deg_to_rad(self.parameters.gamma);
        let d = self.distance;
        Vec3::new(d * theta.sin(), d * gamma.sin(), -d * theta.cos() * gamma.cos())
    }

    /// Resolve the camera for this frame
    ///
    /// `craft` is the helicopter pose of the current frame; only first-person
    /// mode reads it.
    pub fn resolve(&self, craft: &CraftPose) -> CameraState {
        let d = self.distance;
        match self.mode {
            CameraMode::Axonometric => CameraState::Orthographic {
                eye: self.axonometric_eye(),
                up: Vec3::y(),
            },
            CameraMode::Front => CameraState::Orthographic {
                eye: Vec3::new(0.0, 0.0, d),
                up: Vec3::y(),
            },
            CameraMode::Top => CameraState::Orthographic {
                eye: Vec3::new(0.0, d, 0.0),
                up: Vec3::new(-1.0, 0.0, 0.0),
            },
            CameraMode::Right => CameraState::Orthographic {
                eye: Vec3::new(d, 0.0, 0.0),
                up: Vec3::y(),
            },
            CameraMode::FirstPerson => CameraState::FirstPerson {
                eye: craft.position,
                target: craft.look_target,
                fov: self.parameters.fov,
                tilt: craft.tilt,
            },
        }
    }

    /// View matrix for `state`
    pub fn compute_view(&self, state: &CameraState) -> Mat4 {
        let eye = state.eye();
        let target = state.target();
        Mat4::look_at(eye, target, non_degenerate_up(eye, target, state.up()))
    }

    /// Projection matrix for `state` at the given aspect ratio
    pub fn compute_projection(&self, state: &CameraState, aspect: f32) -> Mat4 {
        let d = self.distance;
        match *state {
            CameraState::Orthographic { .. } => {
                Mat4::ortho(-d * aspect, d * aspect, -d, d, -3.0 * d, 3.0 * d)
            }
            CameraState::FirstPerson { fov, tilt, .. } => {
                Mat4::perspective_deg(fov, aspect, self.near, 2.0 * d)
                    * Mat4::rotation_y_deg(90.0)
                    * Mat4::rotation_z_deg(tilt)
            }
        }
    }
}

/// Swap in another up vector when `up` is parallel to the viewing direction
fn non_degenerate_up(eye: Vec3, target: Vec3, up: Vec3) -> Vec3 {
    let forward = target - eye;
    if forward.cross(&up).norm_squared() > 1e-8 {
        return up;
    }
    // Looking straight along the up axis: fall back to a horizontal up
    if forward.cross(&Vec3::z()).norm_squared() > 1e-8 {
        Vec3::z()
    } else {
        Vec3::x()
    }
}
