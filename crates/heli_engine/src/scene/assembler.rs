//! Scene Assembler
//!
//! Builds the whole scene tree from the current flight state, live orbs and
//! simulation time, then flattens it on top of the view matrix. The scene is
//! shifted down by a quarter of the viewing distance and everything standing
//! on the ground is lifted by half the ground thickness.

use crate::core::config::{CameraConfig, FlightConfig};
use crate::foundation::math::{Mat4, Mat4Ext};
use crate::render::Primitive;
use crate::simulation::flight::FlightState;
use crate::simulation::projectiles::{orb_colour, ProjectileManager};

use super::helicopter::{helicopter, rig_transform, CraftPose};
use super::node::{SceneItem, SceneNode, Shape};
use super::palette::{END_STONE_COLOUR, GROUND_EDGE, GROUND_HEIGHT};
use super::pillars::pillar_set;
use super::portal::end_portal;
use super::transform_stack::TransformStackError;

/// Builds and flattens the scene each frame
#[derive(Debug, Clone)]
pub struct SceneAssembler {
    orbit_radius: f32,
    scene_y_offset: f32,
}

impl SceneAssembler {
    /// Create an assembler for the configured orbit and camera distance
    pub fn new(flight: &FlightConfig, camera: &CameraConfig) -> Self {
        Self {
            orbit_radius: flight.orbit_radius,
            scene_y_offset: camera.scene_y_offset(),
        }
    }

    fn scene_root(&self) -> Mat4 {
        Mat4::translation(0.0, -self.scene_y_offset, 0.0)
    }

    fn ground_top() -> Mat4 {
        Mat4::translation(0.0, GROUND_HEIGHT / 2.0, 0.0)
    }

    /// World pose of the fuselage for `flight`
    ///
    /// Uses the same composition as the rig inside [`build`](Self::build), so
    /// the camera and spawn point agree with what is drawn this frame.
    pub fn craft_pose(&self, flight: &FlightState) -> CraftPose {
        let world = self.scene_root() * Self::ground_top() * rig_transform(flight, self.orbit_radius);
        CraftPose::from_world(&world, flight.tilt)
    }

    /// Build the scene tree
    pub fn build(&self, flight: &FlightState, projectiles: &ProjectileManager, time: f64) -> SceneNode {
        let radius = projectiles.radius();
        let colour = orb_colour(time);
        let orbs = projectiles
            .visible(time)
            .map(|orb| {
                SceneNode::leaf(
                    "orb",
                    Mat4::translation(orb.position.x, orb.position.y, orb.position.z)
                        * Mat4::scaling(radius, radius, radius),
                    Shape::new(Primitive::Sphere, colour),
                )
            })
            .collect();

        SceneNode::group(
            "scene",
            self.scene_root(),
            vec![
                SceneNode::leaf(
                    "ground",
                    Mat4::scaling(GROUND_EDGE, GROUND_HEIGHT, GROUND_EDGE),
                    Shape::new(Primitive::Cube, END_STONE_COLOUR),
                ),
                SceneNode::group(
                    "above_ground",
                    Self::ground_top(),
                    vec![
                        helicopter(flight, self.orbit_radius, time),
                        pillar_set(time),
                        end_portal(),
                        SceneNode::group("orbs", Mat4::identity(), orbs),
                    ],
                ),
            ],
        )
    }

    /// Build and flatten the scene on top of `view`
    pub fn assemble(
        &self,
        view: &Mat4,
        flight: &FlightState,
        projectiles: &ProjectileManager,
        time: f64,
    ) -> Result<Vec<SceneItem>, TransformStackError> {
        let items = self.build(flight, projectiles, time).flatten_from(*view)?;
        log::trace!("Assembled {} scene items at t={time:.3}", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ProjectileConfig;
    use crate::foundation::math::{transform_point, Vec3};
    use approx::assert_relative_eq;

    /// Ground, helicopter, pillars and portal
    const STATIC_DRAWS: usize = 1 + 16 + 48 + 11;

    fn fixture() -> (SceneAssembler, ProjectileManager, FlightConfig) {
        let flight = FlightConfig::default();
        let assembler = SceneAssembler::new(&flight, &CameraConfig::default());
        let projectiles = ProjectileManager::new(ProjectileConfig::default(), &flight, GROUND_HEIGHT);
        (assembler, projectiles, flight)
    }

    #[test]
    fn test_empty_sky_draw_count() {
        let (assembler, projectiles, _) = fixture();
        let items = assembler
            .assemble(&Mat4::identity(), &FlightState::new(), &projectiles, 0.0)
            .unwrap();
        assert_eq!(items.len(), STATIC_DRAWS);
        assert_eq!(items[0].name, "ground");
    }

    #[test]
    fn test_orbs_add_one_draw_each() {
        let (assembler, mut projectiles, _) = fixture();
        let flight = FlightState {
            altitude: 10.0,
            angular_velocity: 20.0,
            ..FlightState::new()
        };
        let pose = assembler.craft_pose(&flight);
        projectiles.spawn(&flight, pose.position, 0.0, 1.0 / 60.0);
        projectiles.spawn(&flight, pose.position, 0.5, 1.0 / 60.0);

        let items = assembler
            .assemble(&Mat4::identity(), &flight, &projectiles, 1.0)
            .unwrap();
        assert_eq!(items.len(), STATIC_DRAWS + 2);
        assert!(items.iter().rev().take(2).all(|item| item.name == "orb"));
    }

    #[test]
    fn test_craft_pose_matches_drawn_fuselage() {
        let (assembler, projectiles, _) = fixture();
        let flight = FlightState {
            altitude: 12.0,
            angular_position: -73.0,
            tilt: 15.0,
            ..FlightState::new()
        };
        let items = assembler
            .assemble(&Mat4::identity(), &flight, &projectiles, 2.0)
            .unwrap();
        let fuselage = items.iter().find(|item| item.name == "fuselage").unwrap();

        let pose = assembler.craft_pose(&flight);
        assert_relative_eq!(
            pose.position,
            transform_point(&fuselage.transform, Vec3::zeros()),
            epsilon = 1e-4
        );
        assert_relative_eq!(pose.tilt, 15.0);
    }

    #[test]
    fn test_scene_is_shifted_below_centre() {
        let (assembler, projectiles, _) = fixture();
        let items = assembler
            .assemble(&Mat4::identity(), &FlightState::new(), &projectiles, 0.0)
            .unwrap();
        let ground = transform_point(&items[0].transform, Vec3::zeros());
        assert_relative_eq!(ground, Vec3::new(0.0, -70.0 / 4.0, 0.0), epsilon = 1e-5);
    }
}
