//! Logical input keys
//!
//! The host samples raw keyboard state into a [`KeySet`] once per frame; the
//! simulation only ever sees that snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A logical key the simulation reacts to while held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

/// What a raw key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Key participates in the held-key snapshot
    Hold(Key),
    /// One-shot toggle of the hitbox overlay
    ToggleDebug,
}

/// Map a browser-style key name (`KeyboardEvent.key`) to its action
pub fn map_key(name: &str) -> Option<KeyAction> {
    let action = match name {
        "ArrowLeft" | "h" => KeyAction::Hold(Key::Left),
        "ArrowDown" | "j" => KeyAction::Hold(Key::Down),
        "ArrowUp" | "k" => KeyAction::Hold(Key::Up),
        "ArrowRight" | "l" => KeyAction::Hold(Key::Right),
        " " | "Enter" | "0" => KeyAction::Hold(Key::Fire),
        "d" => KeyAction::ToggleDebug,
        _ => return None,
    };
    Some(action)
}

/// Snapshot of currently held keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySet {
    held: HashSet<Key>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Signed axis value from a negative/positive key pair; `negative` wins ties
    pub fn axis(&self, negative: Key, positive: Key) -> f32 {
        if self.is_held(negative) {
            -1.0
        } else if self.is_held(positive) {
            1.0
        } else {
            0.0
        }
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}
