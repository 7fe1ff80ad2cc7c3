//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one frame. Order within a
//! playing tick: ship input, motion of every polygon, bullet pruning,
//! collision resolution, then the win check.

use super::collision::polygons_collide;
use super::color::Color;
use super::state::{Bullet, GameOverReason, GamePhase, GameState};
use crate::facing;

/// Input commands for a single tick (held-key state)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    /// Thrust along the facing
    pub thrust: bool,
    /// Reverse thrust
    pub reverse: bool,
    pub fire: bool,
    /// Start a new run (only honored after game over)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if let GamePhase::GameOver(_) = state.phase {
        if input.restart {
            state.restart();
        } else {
            // Let the death flash play out while the field is frozen
            state.player.advance_fade();
        }
        return;
    }

    steer_ship(state, input);
    if input.fire {
        try_fire(state);
    }

    let (w, h) = (state.tuning.screen_width, state.tuning.screen_height);
    state.player.update(w, h, true);
    for asteroid in &mut state.asteroids {
        asteroid.update(w, h, true);
    }

    update_bullets(state);
    resolve_collisions(state);

    if state.is_playing() && state.asteroids.is_empty() {
        state.phase = GamePhase::GameOver(GameOverReason::FieldCleared);
        log::info!("Field cleared at tick {} with score {}", state.time_ticks, state.score);
    }
}

/// Turn, thrust, friction and speed cap for the player ship
fn steer_ship(state: &mut GameState, input: &TickInput) {
    let t = &state.tuning;
    let ship = &mut state.player;

    if input.turn_left {
        ship.rotate(-t.turn_step);
    }
    if input.turn_right {
        ship.rotate(t.turn_step);
    }

    let forward = facing(ship.rotation);
    if input.thrust {
        ship.velocity += forward * t.acceleration;
    }
    if input.reverse {
        ship.velocity -= forward * t.acceleration * t.reverse_factor;
    }

    ship.velocity *= t.friction;

    let speed = ship.velocity.length();
    if speed > t.max_speed {
        ship.velocity = ship.velocity / speed * t.max_speed;
    }
}

/// Spawn a bullet at the ship's nose if the cooldown has elapsed
fn try_fire(state: &mut GameState) -> bool {
    let since_last = state.time_ticks.saturating_sub(state.last_shot_tick);
    if since_last <= u64::from(state.tuning.fire_cooldown_ticks) {
        return false;
    }

    let ship = &state.player;
    let forward = facing(ship.rotation);
    let position = ship.position + forward * state.tuning.nose_offset;
    let velocity = forward * state.tuning.muzzle_speed + ship.velocity;

    state.bullets.push(Bullet::new(position, velocity));
    state.last_shot_tick = state.time_ticks;
    log::trace!("Bullet fired at {:?} with velocity {:?}", position, velocity);
    true
}

/// Move bullets (no wrap) and drop the ones that left the playfield
fn update_bullets(state: &mut GameState) {
    let t = &state.tuning;
    for bullet in &mut state.bullets {
        bullet.polygon.update(t.screen_width, t.screen_height, false);
    }
    state
        .bullets
        .retain(|b| !b.is_out_of_bounds(t.screen_width, t.screen_height, t.bullet_margin));
}

/// Bullet hits score and split asteroids; an asteroid touching the ship ends
/// the run.
///
/// Bullets are checked newest first, and each bullet against asteroids from
/// the back of the roster. A bullet destroys at most one asteroid per tick.
fn resolve_collisions(state: &mut GameState) {
    for i in (0..state.bullets.len()).rev() {
        let bullet = &state.bullets[i].polygon;
        let hit = (0..state.asteroids.len())
            .rev()
            .find(|&j| polygons_collide(bullet, &state.asteroids[j]));

        if let Some(j) = hit {
            state.bullets.remove(i);
            state.score += 1;
            state.split_asteroid(j);
        }
    }

    let crashed = state
        .asteroids
        .iter()
        .any(|asteroid| polygons_collide(&state.player, asteroid));
    if crashed {
        state.phase = GamePhase::GameOver(GameOverReason::ShipDestroyed);
        state.player.set_color(Color::RED_FLASH);
        state
            .player
            .start_fade(Color::BLUE, state.tuning.death_fade_ticks);
        log::info!(
            "Ship destroyed at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::polygon::PolygonObject;
    use crate::sim::state::SplitOutcome;
    use glam::Vec2;

    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.asteroids.clear();
        state
    }

    fn rock_at(radius: f32, position: Vec2) -> PolygonObject {
        let mut rock = PolygonObject::asteroid(radius, 0.0, 8);
        rock.set_position(position);
        rock
    }

    fn fire_input() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_turning_changes_rotation() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));
        let input = TickInput {
            turn_right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!((state.player.rotation - 0.1).abs() < 1e-6);

        let input = TickInput {
            turn_left: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        tick(&mut state, &input);
        // Normalized into [0, 2π) by the update step
        assert!((state.player.rotation - (std::f32::consts::TAU - 0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_turning_back_to_start_stays_below_full_turn() {
        use std::f32::consts::TAU;

        for turns in [1, 7, 20, 63] {
            let mut state = quiet_state(1);
            state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));
            let right = TickInput {
                turn_right: true,
                ..Default::default()
            };
            let left = TickInput {
                turn_left: true,
                ..Default::default()
            };
            for _ in 0..turns {
                tick(&mut state, &right);
            }
            for _ in 0..turns {
                tick(&mut state, &left);
                let rotation = state.player.rotation;
                assert!((0.0..TAU).contains(&rotation), "rotation {rotation} out of range");
            }
        }
    }

    #[test]
    fn test_thrust_moves_ship_up() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        // 0.2 * 0.98 upward at rotation 0
        assert!((state.player.velocity.y + 0.196).abs() < 1e-5);
        assert!(state.player.velocity.x.abs() < 1e-6);
        assert!(state.player.position.y < 300.0);
    }

    #[test]
    fn test_reverse_is_half_thrust() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));
        let input = TickInput {
            reverse: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!((state.player.velocity.y - 0.098).abs() < 1e-5);
    }

    #[test]
    fn test_speed_is_capped() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));
        state.player.set_velocity(Vec2::new(30.0, 40.0));
        tick(&mut state, &TickInput::default());
        assert!((state.player.velocity.length() - 5.0).abs() < 1e-4);
        // Direction preserved
        let dir = state.player.velocity.normalize();
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-4);
    }

    #[test]
    fn test_friction_decays_velocity() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));
        state.player.set_velocity(Vec2::new(1.0, 0.0));
        tick(&mut state, &TickInput::default());
        assert!((state.player.velocity.x - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));

        // Cooldown runs from the restart
        for _ in 0..6 {
            tick(&mut state, &fire_input());
        }
        assert!(state.bullets.is_empty());

        tick(&mut state, &fire_input());
        assert_eq!(state.bullets.len(), 1);

        for _ in 0..6 {
            tick(&mut state, &fire_input());
        }
        assert_eq!(state.bullets.len(), 1);

        tick(&mut state, &fire_input());
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_bullet_spawns_at_nose_with_inherited_velocity() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));
        state.last_shot_tick = 0;
        state.time_ticks = 100;
        state.player.set_velocity(Vec2::new(1.0, 0.0));

        tick(&mut state, &fire_input());

        let bullet = &state.bullets[0].polygon;
        let ship_velocity = Vec2::new(0.98, 0.0);
        let expected_velocity = Vec2::new(0.0, -8.0) + ship_velocity;
        assert!((bullet.velocity - expected_velocity).length() < 1e-5);
        // Spawned 15 above the pre-move ship center, then moved one step
        let expected_position = Vec2::new(400.0, 285.0) + expected_velocity;
        assert!((bullet.position - expected_position).length() < 1e-4);
    }

    #[test]
    fn test_bullets_leave_playfield() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 500.0)));
        state
            .bullets
            .push(Bullet::new(Vec2::new(790.0, 20.0), Vec2::new(0.0, -8.0)));

        for _ in 0..8 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.bullets.len(), 1);
        // y = 20 - 8 * 9 = -52, beyond the 50px margin; no wrap for bullets
        tick(&mut state, &TickInput::default());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_bullet_hit_scores_and_splits() {
        let mut state = quiet_state(1);
        let target = Vec2::new(600.0, 300.0);
        state.asteroids.push(rock_at(40.0, target));
        state.bullets.push(Bullet::new(target, Vec2::ZERO));

        tick(&mut state, &TickInput::default());

        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 1);
        assert_eq!(state.asteroids.len(), 2);
        assert!(state.is_playing());
    }

    #[test]
    fn test_bullet_hit_on_small_rock_clears_field() {
        let mut state = quiet_state(1);
        let target = Vec2::new(600.0, 300.0);
        state.asteroids.push(rock_at(10.0, target));
        state.bullets.push(Bullet::new(target, Vec2::ZERO));

        tick(&mut state, &TickInput::default());

        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 1);
        assert!(state.asteroids.is_empty());
        assert_eq!(
            state.phase,
            GamePhase::GameOver(GameOverReason::FieldCleared)
        );
    }

    #[test]
    fn test_one_asteroid_per_bullet_and_every_bullet_checked() {
        let mut state = quiet_state(1);
        // Two small overlapping rocks, two bullets inside both
        let spot = Vec2::new(600.0, 300.0);
        state.asteroids.push(rock_at(10.0, spot));
        state.asteroids.push(rock_at(10.0, spot + Vec2::new(2.0, 0.0)));
        state.asteroids.push(rock_at(10.0, Vec2::new(100.0, 500.0)));
        state.bullets.push(Bullet::new(spot, Vec2::ZERO));
        state.bullets.push(Bullet::new(spot + Vec2::new(1.0, 0.0), Vec2::ZERO));

        tick(&mut state, &TickInput::default());

        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 2);
        // Only the far rock survives
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].position, Vec2::new(100.0, 500.0));
    }

    #[test]
    fn test_bullet_hits_last_asteroid_first() {
        let mut state = quiet_state(1);
        let spot = Vec2::new(600.0, 300.0);
        state.asteroids.push(rock_at(10.0, spot));
        state.asteroids.push(rock_at(12.0, spot));
        state.bullets.push(Bullet::new(spot, Vec2::ZERO));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.asteroids.len(), 1);
        // The radius-10 rock (index 0) is the survivor
        let bbox = state.asteroids[0].bounding_box();
        assert!((bbox.width() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_crash_ends_run_with_flash() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(30.0, state.tuning.screen_center()));

        tick(&mut state, &TickInput::default());

        assert_eq!(
            state.phase,
            GamePhase::GameOver(GameOverReason::ShipDestroyed)
        );
        assert_eq!(state.player.color, Color::RED_FLASH);
        assert!(state.player.is_fading());
        assert_eq!(state.player.fade.end, Color::BLUE);

        // Field is frozen but the flash keeps fading
        let rock_position = state.asteroids[0].position;
        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.asteroids[0].position, rock_position);
        assert_eq!(state.player.color, Color::BLUE);
        assert!(!state.player.is_fading());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(30.0, state.tuning.screen_center()));
        tick(&mut state, &TickInput::default());
        assert!(!state.is_playing());

        // Other input does nothing while the run is over
        tick(&mut state, &fire_input());
        assert!(!state.is_playing());
        assert!(state.bullets.is_empty());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert!(state.is_playing());
        assert_eq!(state.score, 0);
        assert_eq!(state.asteroids.len(), 3);
        assert_eq!(state.player.color, Color::BLUE);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = quiet_state(1);
        state.asteroids.push(rock_at(20.0, Vec2::new(100.0, 100.0)));
        state.score = 4;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert_eq!(state.score, 4);
        assert_eq!(state.asteroids.len(), 1);
    }

    #[test]
    fn test_fire_into_stationary_asteroid_end_to_end() {
        let mut state = quiet_state(2024);
        // Directly above the ship, in the bullet's path
        let mut rock = rock_at(40.0, Vec2::new(400.0, 200.0));
        rock.set_velocity(Vec2::ZERO);
        state.asteroids.push(rock);

        let mut fired = false;
        for _ in 0..40 {
            tick(&mut state, &fire_input());
            if state.score > 0 {
                fired = true;
                break;
            }
        }

        assert!(fired, "bullet never reached the asteroid");
        assert_eq!(state.score, 1);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 2);
        assert!(state.is_playing());
    }

    #[test]
    fn test_split_outcome_sizes() {
        let mut state = quiet_state(8);
        state.asteroids.push(rock_at(40.0, Vec2::new(300.0, 300.0)));
        let SplitOutcome::Split { child_radius, .. } = state.split_asteroid(0) else {
            panic!("large rock should split");
        };
        assert!((child_radius - 24.0).abs() < 0.1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed and inputs produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                turn_left: true,
                thrust: true,
                ..Default::default()
            },
            fire_input(),
            TickInput {
                turn_right: true,
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.asteroids.len(), state2.asteroids.len());
        assert_eq!(state1.bullets.len(), state2.bullets.len());
        assert_eq!(state1.player.position, state2.player.position);
    }
}
