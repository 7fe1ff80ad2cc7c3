//! Data-driven game balance
//!
//! Every gameplay constant the session reads lives here so that a run can be
//! re-tuned from JSON without touching the simulation. Missing fields fall
//! back to the defaults below.

use serde::{Deserialize, Serialize};

/// Gameplay tuning knobs (per-tick units at 60 Hz)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Ship ===
    /// Nose distance of the ship outline from its origin
    pub ship_size: f32,
    /// Radians turned per tick while a turn key is held
    pub turn_step: f32,
    /// Thrust acceleration (pixels/tick²)
    pub acceleration: f32,
    /// Reverse thrust as a fraction of forward thrust
    pub reverse_factor: f32,
    /// Velocity multiplier applied every tick
    pub friction: f32,
    /// Speed cap (pixels/tick)
    pub max_speed: f32,

    // === Weapons ===
    /// Distance from ship origin where bullets spawn
    pub nose_offset: f32,
    /// Bullet speed added along the facing (pixels/tick)
    pub muzzle_speed: f32,
    /// A shot needs strictly more than this many ticks since the last one
    pub fire_cooldown_ticks: u32,
    /// Bullets beyond the screen by more than this are removed
    pub bullet_margin: f32,

    // === Wave spawn ===
    pub initial_asteroids: usize,
    pub asteroid_radius_min: f32,
    pub asteroid_radius_max: f32,
    pub asteroid_irregularity_min: f32,
    pub asteroid_irregularity_max: f32,
    pub asteroid_vertices_min: usize,
    pub asteroid_vertices_max: usize,
    /// Keep spawns this far from the screen edges
    pub spawn_margin: f32,
    /// Each velocity axis is drawn from ±this
    pub asteroid_drift: f32,
    /// Spin is drawn from ±this (radians/tick)
    pub asteroid_spin: f32,

    // === Splitting ===
    /// Asteroids smaller than this approximate radius are destroyed outright
    pub split_min_size: f32,
    /// Child radius as a fraction of the parent's approximate radius
    pub split_ratio: f32,
    /// Child irregularity as a fraction of the child radius
    pub split_irregularity: f32,
    pub split_vertices_min: usize,
    pub split_vertices_max: usize,
    /// Each child velocity axis gets the parent's plus ±this
    pub split_velocity_spread: f32,
    /// Child spin is drawn from ±this (radians/tick)
    pub split_spin: f32,
    /// Ticks for a fresh child to fade from its tint back to white
    pub split_fade_ticks: u32,

    // === Game over ===
    /// Ticks for the destroyed ship to fade from the flash color to blue
    pub death_fade_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,

            ship_size: 20.0,
            turn_step: 0.1,
            acceleration: 0.2,
            reverse_factor: 0.5,
            friction: 0.98,
            max_speed: 5.0,

            nose_offset: 15.0,
            muzzle_speed: 8.0,
            fire_cooldown_ticks: 6, // 100ms
            bullet_margin: 50.0,

            initial_asteroids: 3,
            asteroid_radius_min: 20.0,
            asteroid_radius_max: 50.0,
            asteroid_irregularity_min: 5.0,
            asteroid_irregularity_max: 15.0,
            asteroid_vertices_min: 6,
            asteroid_vertices_max: 12,
            spawn_margin: 50.0,
            asteroid_drift: 2.0,
            asteroid_spin: 0.05,

            split_min_size: 15.0,
            split_ratio: 0.6,
            split_irregularity: 0.3,
            split_vertices_min: 6,
            split_vertices_max: 10,
            split_velocity_spread: 1.0,
            split_spin: 0.075,
            split_fade_ticks: 120, // 2 seconds

            death_fade_ticks: 60, // 1 second
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values into ranges the simulation can use
    pub fn sanitized(mut self) -> Self {
        self.screen_width = self.screen_width.max(1.0);
        self.screen_height = self.screen_height.max(1.0);

        self.asteroid_radius_max = self.asteroid_radius_max.max(self.asteroid_radius_min);
        self.asteroid_irregularity_max = self
            .asteroid_irregularity_max
            .max(self.asteroid_irregularity_min);

        self.asteroid_vertices_min = self.asteroid_vertices_min.max(3);
        self.asteroid_vertices_max = self.asteroid_vertices_max.max(self.asteroid_vertices_min);
        self.split_vertices_min = self.split_vertices_min.max(3);
        self.split_vertices_max = self.split_vertices_max.max(self.split_vertices_min);

        // Spawn area must stay non-empty
        let max_margin = (self.screen_width.min(self.screen_height) / 2.0).max(0.0);
        self.spawn_margin = self.spawn_margin.clamp(0.0, max_margin);

        self.asteroid_drift = self.asteroid_drift.abs();
        self.asteroid_spin = self.asteroid_spin.abs();
        self.split_velocity_spread = self.split_velocity_spread.abs();
        self.split_spin = self.split_spin.abs();

        self.split_fade_ticks = self.split_fade_ticks.max(1);
        self.death_fade_ticks = self.death_fade_ticks.max(1);
        self
    }

    /// Center of the playfield
    pub fn screen_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}
