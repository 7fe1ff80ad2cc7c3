//! Keyboard abstraction
//!
//! The simulation only sees [`TickInput`]; backends report held keys through
//! [`KeySource`] and the mapping happens once per tick.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
}

impl Key {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }
}

/// Anything that can answer "is this key held right now"
pub trait KeySource {
    fn is_pressed(&self, key: Key) -> bool;
}

impl TickInput {
    /// Sample held keys: arrows steer and thrust, space fires, enter restarts
    pub fn from_keys<K: KeySource + ?Sized>(keys: &K) -> Self {
        Self {
            turn_left: keys.is_pressed(Key::Left),
            turn_right: keys.is_pressed(Key::Right),
            thrust: keys.is_pressed(Key::Up),
            reverse: keys.is_pressed(Key::Down),
            fire: keys.is_pressed(Key::Space),
            restart: keys.is_pressed(Key::Enter),
        }
    }
}

/// Held-key set fed from key down/up events
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Apply a named key event; returns false for keys the game ignores
    pub fn handle_named(&mut self, name: &str, pressed: bool) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl KeySource for HeldKeys {
    fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// A key held over a half-open tick range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpan {
    pub key: Key,
    pub start: u64,
    pub end: u64,
}

impl KeySpan {
    pub fn new(key: Key, start: u64, end: u64) -> Self {
        Self { key, start, end }
    }

    fn covers(&self, tick: u64) -> bool {
        (self.start..self.end).contains(&tick)
    }
}

/// Replays a fixed key script, one tick at a time
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    spans: Vec<KeySpan>,
    tick: u64,
}

impl ScriptedKeys {
    pub fn new(spans: Vec<KeySpan>) -> Self {
        Self { spans, tick: 0 }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// True once every span has ended
    pub fn is_finished(&self) -> bool {
        self.spans.iter().all(|span| span.end <= self.tick)
    }

    /// Start the script over from tick 0
    pub fn rewind(&mut self) {
        self.tick = 0;
    }
}

impl KeySource for ScriptedKeys {
    fn is_pressed(&self, key: Key) -> bool {
        self.spans
            .iter()
            .any(|span| span.key == key && span.covers(self.tick))
    }
}
