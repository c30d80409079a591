//! Scripted key timeline standing in for a keyboard

use heli_engine::input::{InputEvent, KeyCode};

/// An input event due at a given frame
#[derive(Debug, Clone, Copy)]
pub struct ScriptedEvent {
    pub frame: u64,
    pub event: InputEvent,
}

fn press(frame: u64, key: KeyCode) -> ScriptedEvent {
    ScriptedEvent { frame, event: InputEvent::KeyPressed { key, repeat: false } }
}

fn release(frame: u64, key: KeyCode) -> ScriptedEvent {
    ScriptedEvent { frame, event: InputEvent::KeyReleased(key) }
}

/// Take off, circle the portal dropping orbs, ride along in first person, then land
pub fn flight_plan() -> Vec<ScriptedEvent> {
    vec![
        press(0, KeyCode::ArrowUp),
        release(240, KeyCode::ArrowUp),
        press(240, KeyCode::ArrowLeft),
        press(420, KeyCode::Space),
        press(480, KeyCode::Digit5),
        press(540, KeyCode::Space),
        press(600, KeyCode::S),
        ScriptedEvent { frame: 660, event: InputEvent::Resized { width: 1920, height: 1080 } },
        press(720, KeyCode::Digit3),
        release(780, KeyCode::ArrowLeft),
        press(840, KeyCode::Digit1),
        press(840, KeyCode::W),
        press(900, KeyCode::ArrowDown),
    ]
}

/// Events due at `frame`, in script order
pub fn due(script: &[ScriptedEvent], frame: u64) -> impl Iterator<Item = InputEvent> + '_ {
    script.iter().filter(move |entry| entry.frame == frame).map(|entry| entry.event)
}
