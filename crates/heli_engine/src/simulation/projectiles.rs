//! Projectile ("orb") lifecycle
//!
//! Orbs are dropped from the helicopter, inherit its orbital speed as a
//! horizontal velocity along the spawn heading, decelerate under drag and
//! fall under gravity until they rest on the ground. Each orb dies at an
//! absolute simulation time; expiry is applied by filtering the live set.

use crate::core::config::{FlightConfig, ProjectileConfig};
use crate::foundation::math::{utils, Vec3};
use crate::render::Colour;

use super::flight::FlightState;

const ORB_GREEN: [f32; 3] = [4.0, 252.0, 4.0];
const ORB_BLUE: [f32; 3] = [72.0, 232.0, 250.0];
const ORB_YELLOW: [f32; 3] = [204.0, 255.0, 0.0];

/// A live orb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Absolute simulation time at which the orb is removed
    pub time_of_death: f64,
    /// Heading at spawn (radians)
    pub azimuth: f32,
    /// Horizontal speed, decays to zero
    pub horizontal_speed: f32,
    /// Downward speed, grows with gravity
    pub vertical_speed: f32,
    /// Position as (x, altitude, z)
    pub position: Vec3,
}

impl Orb {
    /// Whether the orb is still alive at `now`
    pub fn is_alive(&self, now: f64) -> bool {
        now < self.time_of_death
    }
}

/// Owner of every live orb
#[derive(Debug, Clone)]
pub struct ProjectileManager {
    config: ProjectileConfig,
    orbit_radius: f32,
    rest_height: f32,
    orbs: Vec<Orb>,
}

impl ProjectileManager {
    /// Create an empty manager
    ///
    /// `ground_height` is the thickness of the ground slab the orbs come to rest on.
    pub fn new(config: ProjectileConfig, flight: &FlightConfig, ground_height: f32) -> Self {
        let rest_height = config.radius / 2.0 + ground_height / 2.0;
        Self {
            config,
            orbit_radius: flight.orbit_radius,
            rest_height,
            orbs: Vec::new(),
        }
    }

    /// Drop a new orb from the helicopter
    ///
    /// `craft_position` is the helicopter's world position this frame. Returns
    /// `None` (and spawns nothing) while the craft is grounded.
    pub fn spawn(
        &mut self,
        flight: &FlightState,
        craft_position: Vec3,
        now: f64,
        dt: f32,
    ) -> Option<&Orb> {
        if !flight.is_airborne() {
            log::debug!("Ignoring orb spawn while grounded");
            return None;
        }

        let orb = Orb {
            time_of_death: now + f64::from(self.config.lifespan),
            azimuth: utils::deg_to_rad(flight.angular_position),
            horizontal_speed: flight.angular_velocity * self.orbit_radius * dt,
            vertical_speed: 0.0,
            position: Vec3::new(craft_position.x, flight.altitude, craft_position.z),
        };
        log::debug!(
            "Spawned orb at ({:.2}, {:.2}, {:.2}), dies at t={:.2}",
            orb.position.x,
            orb.position.y,
            orb.position.z,
            orb.time_of_death
        );

        self.orbs.push(orb);
        self.orbs.last()
    }

    /// Remove expired orbs and integrate the survivors by one step
    pub fn update(&mut self, now: f64, dt: f32) {
        let before = self.orbs.len();
        self.orbs.retain(|orb| orb.is_alive(now));

        let expired = before - self.orbs.len();
        if expired > 0 {
            log::debug!("{expired} orb(s) expired at t={now:.2}");
        }

        let drag = self.config.drag;
        let gravity = self.config.gravity;
        let rest_height = self.rest_height;

        for orb in &mut self.orbs {
            if orb.horizontal_speed > 0.0 {
                orb.horizontal_speed = (orb.horizontal_speed - drag * dt).max(0.0);
            }
            orb.vertical_speed += gravity * dt;
            if orb.position.y > rest_height {
                orb.position.y = (orb.position.y - orb.vertical_speed * dt).max(rest_height);
            }
            orb.position.x += orb.azimuth.sin() * orb.horizontal_speed * dt;
            orb.position.z += orb.azimuth.cos() * orb.horizontal_speed * dt;
        }
    }

    /// Orbs to draw at `now`
    ///
    /// Entries that are past their time of death but not yet removed are skipped.
    pub fn visible(&self, now: f64) -> impl Iterator<Item = &Orb> + '_ {
        self.orbs.iter().filter(move |orb| orb.is_alive(now))
    }

    /// Every orb currently held, dead or alive
    pub fn live(&self) -> &[Orb] {
        &self.orbs
    }

    /// Number of orbs currently held
    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    /// Whether no orbs are held
    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    /// Height at which orbs stop falling
    pub fn rest_height(&self) -> f32 {
        self.rest_height
    }

    /// Orb radius
    pub fn radius(&self) -> f32 {
        self.config.radius
    }
}

/// Cycling orb colour at simulation time `now`
///
/// Two sine oscillators blend green, blue and yellow; the blend factors run
/// over `0..2`, so intermediate values extrapolate and are clamped per channel.
pub fn orb_colour(now: f64) -> Colour {
    let green_blue = utils::mix3(ORB_GREEN, ORB_BLUE, 1.0 + (now * 5.0).sin() as f32);
    Colour::from_unclamped(utils::mix3(green_blue, ORB_YELLOW, 1.0 + (now * 10.0).sin() as f32))
}
