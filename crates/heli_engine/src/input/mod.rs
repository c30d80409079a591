//! Keyboard input mapping
//!
//! Raw key events from the windowing layer are translated into engine
//! [`Action`]s here. Gating that depends on flight state (e.g. no spin-up on
//! the ground) is applied by the frame driver when the action is handled.

use crate::render::{CameraMode, DrawMode};
use crate::simulation::flight::ControlFlags;

/// Key codes the windowing layer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// S key
    S,
    /// 1 key
    Digit1,
    /// 2 key
    Digit2,
    /// 3 key
    Digit3,
    /// 4 key
    Digit4,
    /// 5 key
    Digit5,
    /// Left arrow
    ArrowLeft,
    /// Right arrow
    ArrowRight,
    /// Up arrow
    ArrowUp,
    /// Down arrow
    ArrowDown,
    /// Space bar
    Space,
    /// Escape key
    Escape,
    /// Any key without a dedicated variant
    Unknown,
}

/// Events delivered by the input and viewport collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key went down
    KeyPressed {
        /// The key
        key: KeyCode,
        /// Auto-repeat while held
        repeat: bool,
    },
    /// Key went up
    KeyReleased(KeyCode),
    /// Canvas was resized
    Resized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

/// Engine-level action produced by an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch the global draw mode
    SetDrawMode(DrawMode),
    /// Switch the camera mode
    SetCameraMode(CameraMode),
    /// Start holding a flight control
    Hold(ControlFlags),
    /// Stop holding a flight control
    Release(ControlFlags),
    /// Drop an orb
    SpawnOrb,
    /// Recompute the aspect ratio
    Resize {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

fn control_for(key: KeyCode) -> Option<ControlFlags> {
    match key {
        KeyCode::ArrowLeft => Some(ControlFlags::ACCELERATING),
        KeyCode::ArrowUp => Some(ControlFlags::ASCENDING),
        KeyCode::ArrowDown => Some(ControlFlags::DESCENDING),
        _ => None,
    }
}

/// Translate an input event, `None` for keys the engine ignores
///
/// Auto-repeat re-applies held controls but never spawns a second orb.
pub fn map_event(event: InputEvent) -> Option<Action> {
    match event {
        InputEvent::KeyPressed { key, repeat } => match key {
            KeyCode::W => Some(Action::SetDrawMode(DrawMode::Wireframe)),
            KeyCode::S => Some(Action::SetDrawMode(DrawMode::Filled)),
            KeyCode::Digit1 => Some(Action::SetCameraMode(CameraMode::Axonometric)),
            KeyCode::Digit2 => Some(Action::SetCameraMode(CameraMode::Front)),
            KeyCode::Digit3 => Some(Action::SetCameraMode(CameraMode::Top)),
            KeyCode::Digit4 => Some(Action::SetCameraMode(CameraMode::Right)),
            KeyCode::Digit5 => Some(Action::SetCameraMode(CameraMode::FirstPerson)),
            KeyCode::Space if !repeat => Some(Action::SpawnOrb),
            other => control_for(other).map(Action::Hold),
        },
        InputEvent::KeyReleased(key) => control_for(key).map(Action::Release),
        InputEvent::Resized { width, height } => Some(Action::Resize { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: KeyCode) -> InputEvent {
        InputEvent::KeyPressed { key, repeat: false }
    }

    #[test]
    fn test_camera_keys() {
        assert_eq!(map_event(press(KeyCode::Digit1)), Some(Action::SetCameraMode(CameraMode::Axonometric)));
        assert_eq!(map_event(press(KeyCode::Digit3)), Some(Action::SetCameraMode(CameraMode::Top)));
        assert_eq!(map_event(press(KeyCode::Digit5)), Some(Action::SetCameraMode(CameraMode::FirstPerson)));
    }

    #[test]
    fn test_draw_mode_keys() {
        assert_eq!(map_event(press(KeyCode::W)), Some(Action::SetDrawMode(DrawMode::Wireframe)));
        assert_eq!(map_event(press(KeyCode::S)), Some(Action::SetDrawMode(DrawMode::Filled)));
    }

    #[test]
    fn test_controls_hold_and_release() {
        assert_eq!(map_event(press(KeyCode::ArrowUp)), Some(Action::Hold(ControlFlags::ASCENDING)));
        assert_eq!(
            map_event(InputEvent::KeyReleased(KeyCode::ArrowLeft)),
            Some(Action::Release(ControlFlags::ACCELERATING))
        );
        // Releasing a non-control key does nothing
        assert_eq!(map_event(InputEvent::KeyReleased(KeyCode::Space)), None);
    }

    #[test]
    fn test_space_ignores_repeat() {
        assert_eq!(map_event(press(KeyCode::Space)), Some(Action::SpawnOrb));
        assert_eq!(map_event(InputEvent::KeyPressed { key: KeyCode::Space, repeat: true }), None);
        assert_eq!(
            map_event(InputEvent::KeyPressed { key: KeyCode::ArrowDown, repeat: true }),
            Some(Action::Hold(ControlFlags::DESCENDING))
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_event(press(KeyCode::ArrowRight)), None);
        assert_eq!(map_event(press(KeyCode::Escape)), None);
        assert_eq!(map_event(press(KeyCode::Unknown)), None);
    }
}
