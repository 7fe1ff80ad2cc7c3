//! Polyroids - A screen-wrapping vector asteroids game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (polygons, collisions, game state)
//! - `renderer`: Line-stroke drawing of the simulation and the vector font
//! - `input`: Keyboard abstraction mapped to per-tick input
//! - `tuning`: Data-driven game balance
//! - `settings`: Visual preferences

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Number of snapshots kept in a ghost trail
    pub const TRAIL_CAPACITY: usize = 5;
    /// A trail snapshot is taken every this many updates
    pub const TRAIL_SAMPLE_INTERVAL: u32 = 4;

    /// Cross products below this are treated as parallel segments
    pub const PARALLEL_EPSILON: f32 = 1e-10;
    /// Fade progress within this of 1.0 counts as finished
    pub const FADE_EPSILON: f32 = 1e-5;
}

/// Normalize an angle into [0, 2π) with a single correction step.
///
/// Only valid when the input is at most one turn outside the range, which
/// holds for per-tick rotation deltas.
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    if angle >= TAU {
        angle -= TAU;
    } else if angle < 0.0 {
        angle += TAU;
        // A tiny negative angle rounds up to exactly TAU in f32
        if angle >= TAU {
            angle = 0.0;
        }
    }
    angle
}

/// Unit vector a ship facing `rotation` points along.
///
/// Rotation 0 faces up the screen (negative y), increasing clockwise.
#[inline]
pub fn facing(rotation: f32) -> Vec2 {
    Vec2::new(rotation.sin(), -rotation.cos())
}
