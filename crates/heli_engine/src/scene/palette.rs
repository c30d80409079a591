//! Fixed dimensions and colours of every scene module

use crate::render::Colour;

// Ground
pub const GROUND_EDGE: f32 = 120.0;
pub const GROUND_HEIGHT: f32 = 1.0;
pub const END_STONE_COLOUR: Colour = Colour::rgb(184, 176, 155);

// Helicopter
pub const HELI_BASE_COLOUR: Colour = Colour::rgb(140, 123, 22);
pub const HELI_ACCENT_COLOUR: Colour = Colour::rgb(112, 242, 255);
pub const HELI_NEUTRAL_COLOUR: Colour = Colour::rgb(90, 90, 90);

pub const FUSELAGE_HEIGHT: f32 = 1.7;
pub const FUSELAGE_LENGTH: f32 = 4.0;
pub const FUSELAGE_WIDTH: f32 = 1.8;

pub const MAIN_AXLE_LENGTH: f32 = 0.25;
pub const MAIN_AXLE_HEIGHT: f32 = 0.5;
pub const MAIN_AXLE_WIDTH: f32 = 0.25;
/// Main rotor revolutions per second
pub const MAIN_ROTOR_RPS: f32 = 3.0;

pub const MAIN_BLADE_LENGTH: f32 = 4.0;
pub const MAIN_BLADE_HEIGHT: f32 = 0.1;
pub const MAIN_BLADE_WIDTH: f32 = 0.5;
/// Blade pitch (degrees)
pub const MAIN_BLADE_PITCH: f32 = -20.0;

pub const TAIL_Y_OFFSET: f32 = 0.25;

pub const BOOM_LENGTH: f32 = 5.0;
pub const BOOM_HEIGHT: f32 = 0.5;
pub const BOOM_WIDTH: f32 = 0.4;

/// Rudder sweep (degrees)
pub const RUDDER_ANGLE: f32 = 60.0;
pub const RUDDER_LENGTH: f32 = 1.5;
pub const RUDDER_HEIGHT: f32 = 0.5;
pub const RUDDER_WIDTH: f32 = 0.4;

pub const TAIL_AXLE_LENGTH: f32 = 0.15;
pub const TAIL_AXLE_HEIGHT: f32 = 0.4;
pub const TAIL_AXLE_WIDTH: f32 = 0.15;
/// Tail rotor revolutions per second
pub const TAIL_ROTOR_RPS: f32 = 4.0;

pub const TAIL_BLADE_LENGTH: f32 = 0.7;
pub const TAIL_BLADE_HEIGHT: f32 = 0.05;
pub const TAIL_BLADE_WIDTH: f32 = 0.25;
/// Tail blade pitch (degrees)
pub const TAIL_BLADE_PITCH: f32 = 10.0;

pub const LANDING_SKID_LENGTH: f32 = 0.2;
pub const LANDING_SKID_HEIGHT: f32 = 4.0;
pub const LANDING_SKID_WIDTH: f32 = 0.2;

pub const LANDING_GEAR_HEIGHT: f32 = 0.6;

pub const LANDING_SKID_Z_OFFSET: f32 = FUSELAGE_WIDTH / 2.0;
pub const LANDING_SKID_Y_OFFSET: f32 =
    LANDING_GEAR_HEIGHT + FUSELAGE_HEIGHT / 2.0 - LANDING_SKID_WIDTH / 2.0;

pub const LEG_LENGTH: f32 = 0.1;
pub const LEG_WIDTH: f32 = 0.1;
pub const LEG_DISTANCE: f32 = 1.5;

/// Height of the fuselage centre above the pad when the skids touch it
pub const HELI_CLIPPING_THRESHOLD: f32 = LANDING_SKID_Y_OFFSET + LANDING_SKID_WIDTH / 2.0;

/// Length of a leg strut running from the skid to the fuselage
pub fn leg_height() -> f32 {
    LANDING_SKID_Y_OFFSET.hypot(LANDING_SKID_Z_OFFSET) - LANDING_SKID_WIDTH / 2.0
}

/// Inward lean of a leg strut (degrees)
pub fn leg_lean() -> f32 {
    -(LANDING_SKID_Z_OFFSET / LANDING_SKID_Y_OFFSET).atan().to_degrees()
}

// End pillars
pub const OBSIDIAN_COLOUR: Colour = Colour::rgb(8, 7, 12);
pub const STONE_COLOUR: Colour = Colour::rgb(82, 82, 82);
pub const CRYSTAL_OUTER_COLOUR: Colour = Colour::rgb(189, 245, 255);
pub const CRYSTAL_CORE_COLOUR: Colour = Colour::rgb(201, 59, 217);

pub const OUTER_COLUMN_LENGTH: f32 = 15.0;
pub const OBSIDIAN_COLUMN_HEIGHT: f32 = 50.0;
pub const OUTER_COLUMN_WIDTH: f32 = OUTER_COLUMN_LENGTH / 2.0;
pub const INNER_COLUMN_EDGE: f32 = OUTER_COLUMN_LENGTH * 4.0 / 5.0;

pub const PEDESTAL_BASE_EDGE: f32 = 3.0;
pub const PEDESTAL_BASE_HEIGHT: f32 = 0.6;
pub const PEDESTAL_HEIGHT: f32 = PEDESTAL_BASE_HEIGHT * 2.0;
pub const PEDESTAL_COLUMN_EDGE: f32 = PEDESTAL_BASE_EDGE * 4.0 / 5.0;

pub const OUTER_CRYSTAL_EDGE: f32 = 3.0;
pub const MIDDLE_CRYSTAL_EDGE: f32 = OUTER_CRYSTAL_EDGE * 4.0 / 5.0;
pub const INNER_CRYSTAL_EDGE: f32 = MIDDLE_CRYSTAL_EDGE * 4.0 / 5.0;
pub const OUTER_CRYSTAL_RPS: f32 = 1.0 / 10.0;
pub const MIDDLE_CRYSTAL_RPS: f32 = 3.0 / 2.0 * OUTER_CRYSTAL_RPS;
pub const INNER_CRYSTAL_RPS: f32 = 3.0 / 2.0 * MIDDLE_CRYSTAL_RPS;

pub const PILLAR_OFFSET_RADIUS: f32 = GROUND_EDGE * 2.0 / 5.0;
/// Angle between neighbouring pillars (degrees)
pub const PILLAR_ROTATION: f32 = 60.0;
pub const PILLAR_COUNT: usize = 6;

// End portal
pub const PORTAL_SCREEN_COLOUR: Colour = Colour::rgb(0, 0, 0);

pub const PORTAL_PILLAR_EDGE: f32 = 2.0;
pub const PORTAL_PILLAR_HEIGHT: f32 = 8.0;

pub const PORTAL_SCREEN_EDGE: f32 = 10.0;
pub const PORTAL_SCREEN_HEIGHT: f32 = 0.1;

pub const PORTAL_BORDER_EDGE_LENGTH: f32 = PORTAL_SCREEN_EDGE - 4.0;
pub const PORTAL_BORDER_HEIGHT: f32 = 2.0;
pub const PORTAL_BORDER_WIDTH: f32 = 2.0;
pub const PORTAL_BORDER_CORNER_LENGTH: f32 = 2.0;

pub const DRAGON_EGG_RADIUS: f32 = 2.0;
pub const DRAGON_EGG_HEIGHT: f32 = 2.5;
