//! Helicopter flight model
//!
//! Altitude, spin and tilt are three independent first-order integrators,
//! each gated on the held control flags and on whether the craft is airborne
//! (altitude above zero). The craft is confined to a fixed-radius orbit, so
//! its horizontal motion reduces to an angular position around the origin.

use bitflags::bitflags;

use crate::core::config::FlightConfig;

bitflags! {
    /// Control inputs currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ControlFlags: u8 {
        /// Spin up along the orbit
        const ACCELERATING = 0b001;
        /// Climb
        const ASCENDING = 0b010;
        /// Sink
        const DESCENDING = 0b100;
    }
}

/// Mutable flight state, created grounded and at rest
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightState {
    /// Height above the landing pad, `0..=max_altitude`
    pub altitude: f32,
    /// Orbit angular velocity (degrees per second), `0..=max_velocity`
    pub angular_velocity: f32,
    /// Orbit angular position (degrees), unbounded
    pub angular_position: f32,
    /// Forward tilt (degrees), `0..=max_tilt`
    pub tilt: f32,
    /// Held controls
    pub controls: ControlFlags,
}

impl FlightState {
    /// Create a grounded craft at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the craft is off the ground
    pub fn is_airborne(&self) -> bool {
        self.altitude > 0.0
    }

    /// Whether the craft is still moving along its orbit
    pub fn is_rotating(&self) -> bool {
        self.angular_velocity > 0.0
    }

    /// Press a control, subject to its gate
    ///
    /// Spinning up and descending need the craft airborne; climbing needs it
    /// below the ceiling. Returns whether the control is now held.
    pub fn press(&mut self, control: ControlFlags, config: &FlightConfig) -> bool {
        let allowed = if control == ControlFlags::ASCENDING {
            self.altitude < config.max_altitude
        } else {
            self.is_airborne()
        };

        if allowed {
            self.controls.insert(control);
        } else {
            log::trace!("Control {control:?} gated at altitude {:.2}", self.altitude);
        }
        self.controls.contains(control)
    }

    /// Release a control
    pub fn release(&mut self, control: ControlFlags) {
        self.controls.remove(control);
    }
}

/// Per-tick integrator for [`FlightState`]
#[derive(Debug, Clone)]
pub struct FlightModel {
    config: FlightConfig,
}

impl FlightModel {
    /// Create a model with the given tunables
    pub fn new(config: FlightConfig) -> Self {
        Self { config }
    }

    /// Tunables in use
    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Advance `state` by one step of `dt` seconds
    pub fn update(&self, state: &mut FlightState, dt: f32) {
        let was_airborne = state.is_airborne();

        self.update_altitude(state, dt);
        self.update_angular_velocity(state, was_airborne, dt);
        self.update_tilt(state, was_airborne, dt);

        state.angular_position += self.config.forward_sign * state.angular_velocity * dt;

        match (was_airborne, state.is_airborne()) {
            (false, true) => log::debug!("Liftoff at angular position {:.1}", state.angular_position),
            (true, false) => log::debug!("Touchdown at angular position {:.1}", state.angular_position),
            _ => {}
        }
    }

    fn update_altitude(&self, state: &mut FlightState, dt: f32) {
        let controls = state.controls;
        let ascending = controls.contains(ControlFlags::ASCENDING);
        let descending = controls.contains(ControlFlags::DESCENDING);
        let at_landing_altitude = state.altitude.round() <= self.config.landing_altitude;

        let direction = if state.is_airborne() {
            if descending && (!at_landing_altitude || !state.is_rotating()) {
                -1.0
            } else if !descending && ascending && state.altitude < self.config.max_altitude {
                1.0
            } else {
                // Either idle, or hovering at the landing threshold until the rotation stops
                0.0
            }
        } else if ascending && !descending {
            1.0
        } else {
            0.0
        };

        state.altitude = (state.altitude + direction * self.config.lift_speed * dt)
            .clamp(0.0, self.config.max_altitude);
    }

    fn update_angular_velocity(&self, state: &mut FlightState, airborne: bool, dt: f32) {
        if !airborne {
            return;
        }

        if state.controls.contains(ControlFlags::ACCELERATING) {
            if state.angular_velocity < self.config.max_velocity {
                state.angular_velocity = (state.angular_velocity + self.config.acceleration * dt)
                    .min(self.config.max_velocity);
            }
        } else if state.angular_velocity > 0.0 {
            // Unpowered deceleration is half the powered rate
            state.angular_velocity =
                (state.angular_velocity - self.config.acceleration / 2.0 * dt).max(0.0);
        }
    }

    fn update_tilt(&self, state: &mut FlightState, airborne: bool, dt: f32) {
        if !airborne {
            return;
        }

        if state.controls.contains(ControlFlags::ACCELERATING) {
            if state.tilt < self.config.max_tilt {
                state.tilt = (state.tilt + self.config.tilt_acceleration * dt).min(self.config.max_tilt);
            }
        } else if state.tilt > 0.0 {
            state.tilt = (state.tilt - self.config.tilt_acceleration * dt).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DT: f32 = 1.0 / 60.0;

    fn model() -> FlightModel {
        FlightModel::new(FlightConfig::default())
    }

    fn airborne_state(altitude: f32) -> FlightState {
        FlightState { altitude, ..FlightState::new() }
    }

    #[test]
    fn test_liftoff_and_climb_is_linear() {
        let model = model();
        let mut state = FlightState::new();
        state.controls = ControlFlags::ASCENDING;

        for _ in 0..120 {
            model.update(&mut state, DT);
        }

        assert_abs_diff_eq!(state.altitude, 120.0 * 5.0 * DT, epsilon = 1e-3);
    }

    #[test]
    fn test_climb_saturates_at_ceiling() {
        let model = model();
        let mut state = FlightState::new();
        state.controls = ControlFlags::ASCENDING;

        // 50 units at 5 u/s takes 600 ticks; go well past it
        for _ in 0..700 {
            model.update(&mut state, DT);
        }

        assert_abs_diff_eq!(state.altitude, 50.0, epsilon = 1e-6);
    }

    #[test]
    fn test_altitude_holds_when_released() {
        let model = model();
        let mut state = airborne_state(12.0);

        for _ in 0..30 {
            model.update(&mut state, DT);
        }

        assert_abs_diff_eq!(state.altitude, 12.0, epsilon = 1e-6);
    }

    #[test]
    fn test_grounded_ignores_spin_and_descent() {
        let model = model();
        let mut state = FlightState::new();
        state.controls = ControlFlags::ACCELERATING | ControlFlags::DESCENDING;

        model.update(&mut state, DT);

        assert_eq!(state.altitude, 0.0);
        assert_eq!(state.angular_velocity, 0.0);
        assert_eq!(state.tilt, 0.0);
    }

    #[test]
    fn test_spin_up_saturates_in_expected_ticks() {
        let model = model();
        let mut state = airborne_state(10.0);
        state.controls = ControlFlags::ACCELERATING;

        let mut ticks = 0;
        while state.angular_velocity < 45.0 && ticks < 1000 {
            model.update(&mut state, DT);
            ticks += 1;
        }

        // 45 / (30 * DT) = 90
        assert!((89..=91).contains(&ticks), "saturated after {ticks} ticks");
        assert_abs_diff_eq!(state.angular_velocity, 45.0, epsilon = 1e-6);

        model.update(&mut state, DT);
        assert_abs_diff_eq!(state.angular_velocity, 45.0, epsilon = 1e-6);
    }

    #[test]
    fn test_coast_down_is_half_rate_and_stops_at_zero() {
        let model = model();
        let mut state = airborne_state(10.0);
        state.angular_velocity = 1.0;

        model.update(&mut state, DT);
        assert_abs_diff_eq!(state.angular_velocity, 1.0 - 15.0 * DT, epsilon = 1e-6);

        for _ in 0..10 {
            model.update(&mut state, DT);
        }
        assert_eq!(state.angular_velocity, 0.0);
    }

    #[test]
    fn test_tilt_follows_acceleration() {
        let model = model();
        let mut state = airborne_state(10.0);
        state.controls = ControlFlags::ACCELERATING;

        for _ in 0..120 {
            model.update(&mut state, DT);
        }
        assert_abs_diff_eq!(state.tilt, 30.0, epsilon = 1e-6);

        state.controls = ControlFlags::empty();
        for _ in 0..120 {
            model.update(&mut state, DT);
        }
        assert_eq!(state.tilt, 0.0);
    }

    #[test]
    fn test_orbit_runs_clockwise() {
        let model = model();
        let mut state = airborne_state(10.0);
        state.angular_velocity = 30.0;
        state.controls = ControlFlags::ACCELERATING;

        model.update(&mut state, DT);

        assert!(state.angular_position < 0.0);
    }

    #[test]
    fn test_landing_waits_for_rotation_to_stop() {
        let model = model();
        let mut state = airborne_state(1.0);
        state.angular_velocity = 0.5;
        state.controls = ControlFlags::DESCENDING;

        model.update(&mut state, DT);
        assert_abs_diff_eq!(state.altitude, 1.0, epsilon = 1e-6);

        // Rotation decays to zero, then the descent resumes down to the ground
        for _ in 0..120 {
            model.update(&mut state, DT);
        }
        assert_eq!(state.angular_velocity, 0.0);
        assert_eq!(state.altitude, 0.0);
    }

    #[test]
    fn test_press_gates() {
        let config = FlightConfig::default();
        let mut state = FlightState::new();

        assert!(!state.press(ControlFlags::ACCELERATING, &config));
        assert!(!state.press(ControlFlags::DESCENDING, &config));
        assert!(state.press(ControlFlags::ASCENDING, &config));

        let mut ceiling = airborne_state(50.0);
        assert!(!ceiling.press(ControlFlags::ASCENDING, &config));
        assert!(ceiling.press(ControlFlags::ACCELERATING, &config));
        assert!(ceiling.press(ControlFlags::DESCENDING, &config));

        ceiling.release(ControlFlags::ACCELERATING);
        assert_eq!(ceiling.controls, ControlFlags::DESCENDING);
    }

    #[test]
    fn test_descent_never_goes_negative() {
        let model = model();
        let mut state = airborne_state(0.05);
        state.controls = ControlFlags::DESCENDING;

        model.update(&mut state, DT);

        assert_eq!(state.altitude, 0.0);
        assert!(!state.is_airborne());
    }
}
