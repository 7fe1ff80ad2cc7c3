//! Polyroids headless runner
//!
//! Plays a session with a scripted pilot, tessellating every frame into a
//! vertex batch the way a GPU backend would consume it, and logs a summary.
//!
//! Usage: polyroids [--seed N] [--ticks N] [--tuning FILE] [--settings FILE] [--quality LEVEL]

use std::path::Path;

use polyroids::consts::TICKS_PER_SECOND;
use polyroids::input::{HeldKeys, Key, KeySource, KeySpan, ScriptedKeys};
use polyroids::renderer::{LineBatch, SceneRenderer};
use polyroids::settings::QualityPreset;
use polyroids::sim::{GameOverReason, GamePhase, GameState, TickInput, tick};
use polyroids::{Settings, Tuning};

/// Ticks to wait on the game-over screen before pressing enter
const RESTART_DELAY: u64 = 90;

#[derive(Debug)]
struct Options {
    seed: u64,
    ticks: u64,
    tuning: Option<String>,
    settings: Option<String>,
    quality: Option<QualityPreset>,
}

impl Options {
    fn from_args(args: impl Iterator<Item = String>) -> Self {
        let mut options = Options {
            seed: rand::random(),
            ticks: 60 * TICKS_PER_SECOND as u64,
            tuning: None,
            settings: None,
            quality: None,
        };

        let mut args = args.peekable();
        while let Some(arg) = args.next() {
            let value = args.next_if(|next| !next.starts_with("--"));
            match (arg.as_str(), value) {
                ("--seed", Some(v)) => match v.parse() {
                    Ok(seed) => options.seed = seed,
                    Err(_) => log::warn!("Ignoring invalid seed {:?}", v),
                },
                ("--ticks", Some(v)) => match v.parse() {
                    Ok(ticks) => options.ticks = ticks,
                    Err(_) => log::warn!("Ignoring invalid tick count {:?}", v),
                },
                ("--tuning", Some(v)) => options.tuning = Some(v),
                ("--settings", Some(v)) => options.settings = Some(v),
                ("--quality", Some(v)) => {
                    options.quality = QualityPreset::from_str(&v);
                    if options.quality.is_none() {
                        log::warn!("Unknown quality {:?}, keeping default", v);
                    }
                }
                (other, _) => log::warn!("Ignoring argument {:?}", other),
            }
        }
        options
    }
}

/// Read a JSON file and parse it, falling back to defaults on any failure
fn load_or_default<T: Default>(
    path: Option<&str>,
    what: &str,
    parse: impl FnOnce(&str) -> Result<T, serde_json::Error>,
) -> T {
    let Some(path) = path else {
        return T::default();
    };
    match std::fs::read_to_string(Path::new(path)) {
        Ok(json) => match parse(&json) {
            Ok(value) => {
                log::info!("Loaded {} from {}", what, path);
                value
            }
            Err(e) => {
                log::warn!("Invalid {} in {}: {}", what, path, e);
                T::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {} from {}: {}", what, path, e);
            T::default()
        }
    }
}

/// Length of one pass of the flight script
const FLIGHT_TICKS: u64 = 120;

/// Spin and fire throughout, thrusting for the first quarter and braking in
/// the third
fn flight_script() -> ScriptedKeys {
    ScriptedKeys::new(vec![
        KeySpan::new(Key::Right, 0, FLIGHT_TICKS),
        KeySpan::new(Key::Space, 0, FLIGHT_TICKS),
        KeySpan::new(Key::Up, 0, FLIGHT_TICKS / 4),
        KeySpan::new(Key::Down, FLIGHT_TICKS / 2, FLIGHT_TICKS * 3 / 4),
    ])
}

/// Replays the flight script on a loop; presses enter a while after each
/// game over
#[derive(Debug)]
struct Autopilot {
    script: ScriptedKeys,
    held: HeldKeys,
    game_over_since: Option<u64>,
}

impl Autopilot {
    fn new() -> Self {
        Self {
            script: flight_script(),
            held: HeldKeys::new(),
            game_over_since: None,
        }
    }

    fn input(&mut self, state: &GameState) -> TickInput {
        if self.script.is_finished() {
            self.script.rewind();
        }

        let t = state.time_ticks;
        let restart = match state.phase {
            GamePhase::Playing => {
                self.game_over_since = None;
                false
            }
            GamePhase::GameOver(_) => {
                let since = *self.game_over_since.get_or_insert(t);
                t - since >= RESTART_DELAY
            }
        };
        self.held.set(Key::Enter, restart);

        let input = TickInput::from_keys(&*self);
        self.script.advance();
        input
    }
}

impl KeySource for Autopilot {
    fn is_pressed(&self, key: Key) -> bool {
        self.script.is_pressed(key) || self.held.is_pressed(key)
    }
}

#[derive(Debug, Default)]
struct Summary {
    frames: u64,
    strokes: usize,
    bytes: usize,
    runs_won: u32,
    runs_lost: u32,
    best_score: u64,
}

fn main() {
    env_logger::init();

    let options = Options::from_args(std::env::args().skip(1));
    log::info!("Polyroids (headless) starting with seed: {}", options.seed);

    let tuning = load_or_default(options.tuning.as_deref(), "tuning", Tuning::from_json);
    let mut settings = load_or_default(options.settings.as_deref(), "settings", Settings::from_json);
    if let Some(preset) = options.quality {
        settings.apply_preset(preset);
    }
    log::info!("Quality preset: {}", settings.quality.as_str());

    let mut state = GameState::with_tuning(options.seed, tuning);
    let renderer = SceneRenderer::new(settings);
    let mut batch = LineBatch::new();
    let mut pilot = Autopilot::new();
    let mut summary = Summary::default();

    for _ in 0..options.ticks {
        let was_playing = state.is_playing();
        let input = pilot.input(&state);
        tick(&mut state, &input);

        if was_playing {
            match state.phase {
                GamePhase::GameOver(reason) => {
                    log::info!(
                        "{} at tick {} with score {}",
                        reason.message(),
                        state.time_ticks,
                        state.score
                    );
                    summary.best_score = summary.best_score.max(state.score);
                    match reason {
                        GameOverReason::FieldCleared => summary.runs_won += 1,
                        GameOverReason::ShipDestroyed => summary.runs_lost += 1,
                    }
                }
                GamePhase::Playing => {}
            }
        }

        batch.clear();
        renderer.draw(&mut batch, &state);
        summary.frames += 1;
        summary.strokes += batch.stroke_count();
        summary.bytes += batch.as_bytes().len();
    }
    summary.best_score = summary.best_score.max(state.score);

    let seconds = summary.frames as f64 / TICKS_PER_SECOND as f64;
    log::info!(
        "Simulated {} frames ({:.1}s): {} won, {} lost, best score {}",
        summary.frames,
        seconds,
        summary.runs_won,
        summary.runs_lost,
        summary.best_score
    );
    log::info!(
        "Tessellated {} strokes ({} KiB of vertex data), {} asteroids on screen at exit",
        summary.strokes,
        summary.bytes / 1024,
        state.asteroids.len()
    );
}
