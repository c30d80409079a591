//! # Simulation Configuration
//!
//! Tunables for every subsystem of the simulation, grouped per subsystem and
//! loadable from TOML or RON through [`Config`](crate::config::Config).
//!
//! Defaults reproduce the reference scene exactly; a config file only needs
//! the fields it wants to override.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};

/// Frame stepping parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameConfig {
    /// Simulation seconds advanced per displayed frame
    pub time_step: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { time_step: 1.0 / 60.0 }
    }
}

/// Camera tunables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance `D` of the orthographic cameras from the origin
    pub viewport_distance: f32,
    /// Initial axonometric azimuth (degrees)
    pub initial_theta: f32,
    /// Initial axonometric elevation (degrees)
    pub initial_gamma: f32,
    /// Initial first-person field of view (degrees)
    pub default_fov: f32,
    /// Near plane of the first-person perspective
    pub perspective_near: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_distance: 70.0,
            initial_theta: 45.0,
            initial_gamma: 35.0,
            default_fov: 60.0,
            perspective_near: 4.5,
        }
    }
}

impl CameraConfig {
    /// Vertical offset applied to the whole scene so the ground sits below centre
    pub fn scene_y_offset(&self) -> f32 {
        self.viewport_distance / 4.0
    }
}

/// Helicopter flight model tunables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlightConfig {
    /// Radius of the circular orbit around the portal
    pub orbit_radius: f32,
    /// Altitude ceiling
    pub max_altitude: f32,
    /// Altitude at or below which the craft must stop spinning before touching down
    pub landing_altitude: f32,
    /// Maximum forward tilt (degrees)
    pub max_tilt: f32,
    /// Maximum angular velocity (degrees per second)
    pub max_velocity: f32,
    /// Powered angular acceleration (degrees per second squared)
    pub acceleration: f32,
    /// Tilt rate (degrees per second)
    pub tilt_acceleration: f32,
    /// Vertical speed while ascending or descending
    pub lift_speed: f32,
    /// Orbit direction: -1 is clockwise seen from above
    pub forward_sign: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            orbit_radius: 30.0,
            max_altitude: 50.0,
            landing_altitude: 1.0,
            max_tilt: 30.0,
            max_velocity: 45.0,
            acceleration: 30.0,
            tilt_acceleration: 40.0,
            lift_speed: 5.0,
            forward_sign: -1.0,
        }
    }
}

/// Projectile ("orb") tunables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Seconds between spawn and removal
    pub lifespan: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Horizontal deceleration rate
    pub drag: f32,
    /// Orb radius
    pub radius: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            lifespan: 5.0,
            gravity: 9.8,
            drag: 10.0,
            radius: 1.0,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Initial viewport size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 1280, height: 720 }
    }
}

/// # Complete Simulation Configuration
///
/// Top-level configuration that encompasses all simulation subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Frame stepping
    pub frame: FrameConfig,
    /// Camera controller
    pub camera: CameraConfig,
    /// Flight model
    pub flight: FlightConfig,
    /// Projectile lifecycle
    pub projectiles: ProjectileConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Viewport
    pub viewport: ViewportConfig,
}

impl SimulationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }

        fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
            if value >= 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")))
            }
        }

        positive("frame.time_step", self.frame.time_step)?;
        positive("camera.viewport_distance", self.camera.viewport_distance)?;
        positive("camera.perspective_near", self.camera.perspective_near)?;
        positive("flight.orbit_radius", self.flight.orbit_radius)?;
        positive("flight.max_altitude", self.flight.max_altitude)?;
        positive("flight.max_velocity", self.flight.max_velocity)?;
        positive("flight.lift_speed", self.flight.lift_speed)?;
        positive("projectiles.lifespan", self.projectiles.lifespan)?;
        non_negative("flight.max_tilt", self.flight.max_tilt)?;
        non_negative("flight.acceleration", self.flight.acceleration)?;
        non_negative("flight.tilt_acceleration", self.flight.tilt_acceleration)?;
        non_negative("projectiles.gravity", self.projectiles.gravity)?;
        non_negative("projectiles.drag", self.projectiles.drag)?;
        non_negative("projectiles.radius", self.projectiles.radius)?;

        if self.camera.perspective_near >= 2.0 * self.camera.viewport_distance {
            return Err(ConfigError::Invalid(
                "camera.perspective_near must be closer than the far plane".to_string(),
            ));
        }

        if (self.flight.forward_sign.abs() - 1.0).abs() > f32::EPSILON {
            return Err(ConfigError::Invalid(format!(
                "flight.forward_sign must be 1 or -1, got {}",
                self.flight.forward_sign
            )));
        }

        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid("viewport dimensions must be non-zero".to_string()));
        }

        Ok(())
    }
}

impl Config for SimulationConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_forward_sign() {
        let mut config = SimulationConfig::default();
        config.flight.forward_sign = 0.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_time_step() {
        let mut config = SimulationConfig::default();
        config.frame.time_step = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_physics() {
        let mut config = SimulationConfig::default();
        config.projectiles.drag = -0.1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("projectiles.drag")));

        let mut config = SimulationConfig::default();
        config.projectiles.gravity = -9.8;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.flight.tilt_acceleration = -1.0;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.flight.max_tilt = -15.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_drag_is_allowed() {
        let mut config = SimulationConfig::default();
        config.projectiles.drag = 0.0;
        config.projectiles.gravity = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SimulationConfig = toml::from_str(
            "[flight]\nmax_altitude = 20.0\n\n[projectiles]\nlifespan = 2.5\n",
        )
        .unwrap();

        assert_eq!(config.flight.max_altitude, 20.0);
        assert_eq!(config.flight.orbit_radius, 30.0);
        assert_eq!(config.projectiles.lifespan, 2.5);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_ron_file_round_trip() {
        let path = std::env::temp_dir().join(format!("heli_engine_config_{}.ron", std::process::id()));
        let mut config = SimulationConfig::default();
        config.camera.default_fov = 75.0;

        config.save_to_file(&path).unwrap();
        let loaded = SimulationConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SimulationConfig::load_from_file("settings.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
