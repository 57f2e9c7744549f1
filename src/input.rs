//! Keyboard bindings and per-frame input mapping
//!
//! The platform hands over a snapshot of held keys plus the queue of
//! discrete events for the frame; `InputMapper` turns that into a sim
//! `TickInput`.

use serde::{Deserialize, Serialize};

use crate::sim::{PlayerCommand, TickInput};

/// Keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    W,
    A,
    S,
    D,
    Q,
    E,
    Space,
    Enter,
    Escape,
}

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close / quit signal
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Everything the platform observed this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    /// Keys currently held down
    pub held: Vec<Key>,
    /// Events in arrival order
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Key binding table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub rotate_anticlockwise: Key,
    pub rotate_clockwise: Key,
    pub move_up: Key,
    pub move_down: Key,
    pub move_left: Key,
    pub move_right: Key,
    pub fire: Key,
    pub quit: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate_anticlockwise: Key::Left,
            rotate_clockwise: Key::Right,
            move_up: Key::W,
            move_down: Key::S,
            move_left: Key::A,
            move_right: Key::D,
            fire: Key::Space,
            quit: Key::Escape,
        }
    }
}

impl KeyBindings {
    /// Continuous bindings in application order
    pub fn commands(&self) -> [(Key, PlayerCommand); 6] {
        [
            (self.rotate_anticlockwise, PlayerCommand::RotateAntiClockwise),
            (self.rotate_clockwise, PlayerCommand::RotateClockwise),
            (self.move_up, PlayerCommand::MoveUp),
            (self.move_left, PlayerCommand::MoveLeft),
            (self.move_down, PlayerCommand::MoveDown),
            (self.move_right, PlayerCommand::MoveRight),
        ]
    }
}

/// Maps raw frames to tick input; holds the fire latch across frames
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    pub bindings: KeyBindings,
    /// Fire key pressed and not yet released (one shot per press)
    fire_latched: bool,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            fire_latched: false,
        }
    }

    pub fn map(&mut self, frame: &InputFrame) -> TickInput {
        let mut input = TickInput::default();

        for event in &frame.events {
            match *event {
                InputEvent::Quit => input.quit = true,
                InputEvent::KeyDown(key) if key == self.bindings.fire => {
                    if !self.fire_latched {
                        input.fire = true;
                        self.fire_latched = true;
                    }
                }
                InputEvent::KeyUp(key) if key == self.bindings.fire => {
                    self.fire_latched = false;
                }
                _ => {}
            }
        }

        if frame.is_held(self.bindings.quit) {
            input.quit = true;
        }

        input.commands = self
            .bindings
            .commands()
            .into_iter()
            .filter(|(key, _)| frame.is_held(*key))
            .map(|(_, command)| command)
            .collect();

        input
    }
}
