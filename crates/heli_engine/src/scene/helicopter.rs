//! Helicopter rig
//!
//! The rig hangs off an orbit transform (yaw around the portal, lift, tilt)
//! and is built from the fuselage, a three-blade main rotor, the tail
//! (boom, rudder and two-blade tail rotor) and mirrored landing skids.
//! Rotors only spin while the craft is airborne.

use crate::foundation::math::{transform_point, utils, Mat4, Mat4Ext, Vec3};
use crate::render::Primitive;
use crate::simulation::flight::FlightState;

use super::node::{SceneNode, Shape};
use super::palette::*;

/// World-space pose of the fuselage
///
/// Drives the first-person camera and the spawn point of new orbs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraftPose {
    /// Fuselage centre
    pub position: Vec3,
    /// Point two units ahead of the fuselage along its forward axis
    pub look_target: Vec3,
    /// Forward tilt (degrees)
    pub tilt: f32,
}

impl CraftPose {
    /// Derive the pose from the fuselage's world transform
    pub fn from_world(fuselage: &Mat4, tilt: f32) -> Self {
        Self {
            position: transform_point(fuselage, Vec3::zeros()),
            look_target: transform_point(fuselage, Vec3::new(0.0, 0.0, 2.0)),
            tilt,
        }
    }
}

/// Orbit transform placing the rig at the craft's angular position, altitude and tilt
pub fn rig_transform(flight: &FlightState, orbit_radius: f32) -> Mat4 {
    Mat4::rotation_y_deg(flight.angular_position)
        * Mat4::translation(orbit_radius, flight.altitude + HELI_CLIPPING_THRESHOLD, 0.0)
        * Mat4::rotation_x_deg(flight.tilt)
        * Mat4::rotation_y_deg(90.0)
}

/// Build the rig for simulation time `time`
pub fn helicopter(flight: &FlightState, orbit_radius: f32, time: f64) -> SceneNode {
    let spin = |rps: f32| {
        if flight.is_airborne() {
            utils::spin_deg(-rps, time)
        } else {
            0.0
        }
    };

    SceneNode::group(
        "helicopter",
        rig_transform(flight, orbit_radius),
        vec![
            SceneNode::leaf(
                "fuselage",
                Mat4::scaling(FUSELAGE_LENGTH, FUSELAGE_HEIGHT, FUSELAGE_WIDTH),
                Shape::new(Primitive::Sphere, HELI_BASE_COLOUR),
            ),
            main_rotor(spin(MAIN_ROTOR_RPS)),
            tail(spin(TAIL_ROTOR_RPS)),
            landing_gear(),
        ],
    )
}

fn main_rotor(spin: f32) -> SceneNode {
    let mut children = vec![SceneNode::leaf(
        "main_axle",
        Mat4::scaling(MAIN_AXLE_LENGTH, MAIN_AXLE_HEIGHT, MAIN_AXLE_WIDTH),
        Shape::new(Primitive::Cylinder, HELI_NEUTRAL_COLOUR),
    )];
    children.extend([0.0, 120.0, -120.0].into_iter().map(|angle| {
        SceneNode::leaf(
            "main_blade",
            Mat4::rotation_y_deg(angle)
                * Mat4::translation(MAIN_BLADE_LENGTH / 2.0, 0.0, 0.0)
                * Mat4::rotation_x_deg(MAIN_BLADE_PITCH)
                * Mat4::scaling(MAIN_BLADE_LENGTH, MAIN_BLADE_HEIGHT, MAIN_BLADE_WIDTH),
            Shape::new(Primitive::Sphere, HELI_ACCENT_COLOUR),
        )
    }));

    SceneNode::group(
        "main_rotor",
        Mat4::translation(0.0, FUSELAGE_HEIGHT / 2.0 + MAIN_AXLE_HEIGHT * 2.0 / 5.0, 0.0)
            * Mat4::rotation_y_deg(spin),
        children,
    )
}

fn tail(spin: f32) -> SceneNode {
    SceneNode::group(
        "tail",
        Mat4::translation(FUSELAGE_LENGTH / 2.0 + BOOM_LENGTH / 5.0, TAIL_Y_OFFSET, 0.0),
        vec![
            SceneNode::leaf(
                "tail_boom",
                Mat4::scaling(BOOM_LENGTH, BOOM_HEIGHT, BOOM_WIDTH),
                Shape::new(Primitive::Sphere, HELI_BASE_COLOUR),
            ),
            SceneNode::group(
                "rudder",
                Mat4::translation(BOOM_LENGTH / 2.0, 0.2, 0.0) * Mat4::rotation_z_deg(RUDDER_ANGLE),
                vec![
                    SceneNode::leaf(
                        "rudder_fin",
                        Mat4::scaling(RUDDER_LENGTH, RUDDER_HEIGHT, RUDDER_WIDTH),
                        Shape::new(Primitive::Sphere, HELI_BASE_COLOUR),
                    ),
                    tail_rotor(spin),
                ],
            ),
        ],
    )
}

fn tail_rotor(spin: f32) -> SceneNode {
    let blades = [0.0, 180.0]
        .into_iter()
        .map(|angle| {
            SceneNode::leaf(
                "tail_blade",
                Mat4::rotation_y_deg(angle)
                    * Mat4::translation(TAIL_BLADE_LENGTH / 2.0, 0.0, 0.0)
                    * Mat4::rotation_x_deg(TAIL_BLADE_PITCH)
                    * Mat4::scaling(TAIL_BLADE_LENGTH, TAIL_BLADE_HEIGHT, TAIL_BLADE_WIDTH),
                Shape::new(Primitive::Sphere, HELI_ACCENT_COLOUR),
            )
        })
        .collect();

    SceneNode::group(
        "tail_rotor",
        Mat4::translation(0.0, 0.0, TAIL_AXLE_HEIGHT - RUDDER_WIDTH / 2.0)
            * Mat4::rotation_x_deg(90.0)
            * Mat4::rotation_y_deg(spin),
        vec![
            SceneNode::leaf(
                "tail_axle",
                Mat4::scaling(TAIL_AXLE_LENGTH, TAIL_AXLE_HEIGHT, TAIL_AXLE_WIDTH),
                Shape::new(Primitive::Cylinder, HELI_NEUTRAL_COLOUR),
            ),
            SceneNode::group(
                "tail_blades",
                Mat4::translation(0.0, TAIL_AXLE_HEIGHT / 4.0, 0.0),
                blades,
            ),
        ],
    )
}

fn landing_gear() -> SceneNode {
    SceneNode::group(
        "landing_gear",
        Mat4::translation(0.0, -LANDING_SKID_Y_OFFSET, 0.0),
        vec![
            skid(Mat4::identity()),
            skid(Mat4::rotation_y_deg(180.0)),
        ],
    )
}

fn skid(side: Mat4) -> SceneNode {
    let leg = |x: f32| {
        SceneNode::leaf(
            "leg",
            Mat4::translation(x, 0.0, 0.0)
                * Mat4::rotation_x_deg(leg_lean())
                * Mat4::translation(0.0, LANDING_SKID_Y_OFFSET / 2.0 + LANDING_SKID_WIDTH / 2.0, 0.0)
                * Mat4::scaling(LEG_LENGTH, leg_height(), LEG_WIDTH),
            Shape::new(Primitive::Cylinder, HELI_NEUTRAL_COLOUR),
        )
    };

    SceneNode::group(
        "skid",
        side * Mat4::translation(0.0, 0.0, LANDING_SKID_Z_OFFSET),
        vec![
            SceneNode::leaf(
                "skid_rail",
                Mat4::rotation_z_deg(90.0)
                    * Mat4::scaling(LANDING_SKID_LENGTH, LANDING_SKID_HEIGHT, LANDING_SKID_WIDTH),
                Shape::new(Primitive::Cylinder, HELI_BASE_COLOUR),
            ),
            leg(-LEG_DISTANCE / 2.0),
            leg(LEG_DISTANCE / 2.0),
        ],
    )
}
