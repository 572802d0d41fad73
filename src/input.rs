use std::collections::HashMap;

use sdl2::keyboard::{Keycode, Scancode};
use strum::EnumCount;

use crate::map::direction::Direction;

/// One step key per direction; diagonals sit on the corners of the WASD cluster.
pub const STEP_KEYS: [(Keycode, Direction); Direction::COUNT] = [
    (Keycode::W, Direction::Up),
    (Keycode::S, Direction::Down),
    (Keycode::A, Direction::Left),
    (Keycode::D, Direction::Right),
    (Keycode::Q, Direction::UpLeft),
    (Keycode::E, Direction::UpRight),
    (Keycode::Z, Direction::DownLeft),
    (Keycode::C, Direction::DownRight),
];

/// Key presses that step the player one cell on the tile map.
#[derive(Debug, Clone)]
pub struct StepBindings {
    key_bindings: HashMap<Keycode, Direction>,
}

impl Default for StepBindings {
    fn default() -> Self {
        Self {
            key_bindings: HashMap::from(STEP_KEYS),
        }
    }
}

impl StepBindings {
    pub fn direction(&self, key: Keycode) -> Option<Direction> {
        self.key_bindings.get(&key).copied()
    }
}

/// Held keys that walk the parallax character, highest priority first.
pub const WALK_BINDINGS: [([Scancode; 2], Direction); 4] = [
    ([Scancode::W, Scancode::Up], Direction::Up),
    ([Scancode::S, Scancode::Down], Direction::Down),
    ([Scancode::A, Scancode::Left], Direction::Left),
    ([Scancode::D, Scancode::Right], Direction::Right),
];

/// Picks the walking direction from the currently held keys. Only one
/// direction is taken per frame; earlier bindings win.
pub fn walk_direction(is_held: impl Fn(Scancode) -> bool) -> Option<Direction> {
    WALK_BINDINGS
        .iter()
        .find(|(keys, _)| keys.iter().any(|&key| is_held(key)))
        .map(|&(_, direction)| direction)
}
