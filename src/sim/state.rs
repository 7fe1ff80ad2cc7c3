//! Game state and core simulation types
//!
//! The session owns every entity by value along with the seeded RNG, so a
//! run is fully determined by its seed, its tuning and the input sequence.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::color::Color;
use super::polygon::PolygonObject;
use crate::tuning::Tuning;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The ship touched an asteroid
    ShipDestroyed,
    /// Every asteroid was destroyed
    FieldCleared,
}

impl GameOverReason {
    /// Banner text shown on the game-over screen
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::ShipDestroyed => "GAME OVER",
            GameOverReason::FieldCleared => "YOU WIN!",
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart input
    GameOver(GameOverReason),
}

/// A projectile fired by the ship
#[derive(Debug, Clone)]
pub struct Bullet {
    pub polygon: PolygonObject,
}

impl Bullet {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        let mut polygon = PolygonObject::bullet();
        polygon.set_position(position);
        polygon.set_velocity(velocity);
        Self { polygon }
    }

    /// Whether the bullet has left the screen by more than `margin`
    pub fn is_out_of_bounds(&self, screen_width: f32, screen_height: f32, margin: f32) -> bool {
        let pos = self.polygon.position;
        pos.x < -margin
            || pos.x > screen_width + margin
            || pos.y < -margin
            || pos.y > screen_height + margin
    }
}

/// Result of splitting an asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitOutcome {
    /// Too small to split; removed with no replacement
    Destroyed { size: f32 },
    /// Replaced by two children of `child_radius`
    Split { size: f32, child_radius: f32 },
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Gameplay constants for this run
    pub tuning: Tuning,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: PolygonObject,
    /// Order matters only for collision resolution (see `tick`)
    pub asteroids: Vec<PolygonObject>,
    pub bullets: Vec<Bullet>,
    /// Tick of the most recent shot (or restart)
    pub last_shot_tick: u64,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session and spawn the opening field
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: spawn_player(&tuning),
            tuning,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            last_shot_tick: 0,
        };

        state.restart();
        state
    }

    /// Reset to a fresh run: score 0, no bullets, ship centered, new field.
    ///
    /// The RNG stream continues, so each restart produces a different field.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.bullets.clear();
        self.asteroids.clear();
        self.last_shot_tick = self.time_ticks;

        self.player = spawn_player(&self.tuning);

        for _ in 0..self.tuning.initial_asteroids {
            let asteroid = random_asteroid(&mut self.rng, &self.tuning);
            self.asteroids.push(asteroid);
        }

        log::info!(
            "Run started (seed {}, tick {}): {} asteroids",
            self.seed,
            self.time_ticks,
            self.asteroids.len()
        );
    }

    /// Whether the run is still in progress
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Banner text if the run has ended
    pub fn game_over_message(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::GameOver(reason) => Some(reason.message()),
        }
    }

    /// Destroy the asteroid at `index`, replacing it with two smaller ones
    /// unless it is already below the minimum size.
    ///
    /// Children are appended to the end of the roster.
    pub fn split_asteroid(&mut self, index: usize) -> SplitOutcome {
        let parent = self.asteroids.remove(index);

        let bbox = parent.bounding_box();
        let size = (bbox.width() + bbox.height()) / 4.0;

        if size < self.tuning.split_min_size {
            log::debug!("Asteroid destroyed (size {:.1})", size);
            return SplitOutcome::Destroyed { size };
        }

        let t = &self.tuning;
        let child_radius = size * t.split_ratio;
        let irregularity = child_radius * t.split_irregularity;
        let vertex_count = self
            .rng
            .random_range(t.split_vertices_min..=t.split_vertices_max);

        // Offset the children to opposite sides of the parent's center
        for side in [-1.0f32, 1.0] {
            let mut child = PolygonObject::asteroid(child_radius, irregularity, vertex_count);
            child.set_position(parent.position + Vec2::splat(side * child_radius * 0.5));

            let spread = Vec2::new(
                symmetric(&mut self.rng, t.split_velocity_spread),
                symmetric(&mut self.rng, t.split_velocity_spread),
            );
            child.set_velocity(parent.velocity + spread);
            child.set_rotation_speed(symmetric(&mut self.rng, t.split_spin));

            child.set_color(Color::SPLIT_TINT);
            child.start_fade(Color::WHITE, t.split_fade_ticks);

            self.asteroids.push(child);
        }

        log::debug!(
            "Asteroid split (size {:.1}) into two of radius {:.1}",
            size,
            child_radius
        );
        SplitOutcome::Split { size, child_radius }
    }
}

/// Blue ship at the center of the screen, at rest
fn spawn_player(tuning: &Tuning) -> PolygonObject {
    let mut player = PolygonObject::ship(tuning.ship_size);
    player.set_position(tuning.screen_center());
    player.set_color(Color::BLUE);
    player
}

/// Random asteroid somewhere inside the spawn margin, drifting and spinning
pub fn random_asteroid<R: Rng>(rng: &mut R, tuning: &Tuning) -> PolygonObject {
    let base_radius = between(rng, tuning.asteroid_radius_min, tuning.asteroid_radius_max);
    let irregularity = between(
        rng,
        tuning.asteroid_irregularity_min,
        tuning.asteroid_irregularity_max,
    );
    let vertex_count =
        rng.random_range(tuning.asteroid_vertices_min..=tuning.asteroid_vertices_max);

    let mut asteroid = PolygonObject::asteroid(base_radius, irregularity, vertex_count);

    let margin = tuning.spawn_margin;
    asteroid.set_position(Vec2::new(
        between(rng, margin, tuning.screen_width - margin),
        between(rng, margin, tuning.screen_height - margin),
    ));
    asteroid.set_rotation(between(rng, 0.0, std::f32::consts::TAU));
    asteroid.set_velocity(Vec2::new(
        symmetric(rng, tuning.asteroid_drift),
        symmetric(rng, tuning.asteroid_drift),
    ));
    asteroid.set_rotation_speed(symmetric(rng, tuning.asteroid_spin));
    asteroid.set_color(Color::WHITE);
    asteroid
}

/// Uniform value in [min, max), or `min` when the range is empty or inverted
#[inline]
fn between<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max.max(min) - min)
}

/// Uniform value in [-half_width, half_width)
#[inline]
fn symmetric<R: Rng>(rng: &mut R, half_width: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * 2.0 * half_width
}
