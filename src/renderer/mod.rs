//! Drawing the game session
//!
//! Everything here reads `GameState` and emits stroked lines into a
//! [`Surface`]. `LineBatch` is the bundled surface, tessellating strokes into
//! GPU-ready vertices; a windowed backend can implement the trait directly.

pub mod font;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{Color, GameState};

pub use font::VectorFont;
pub use shapes::{OutlineStyle, draw_polygon, wrap_offsets};
pub use vertex::{LineBatch, Vertex};

/// Line-drawing backend
pub trait Surface {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, antialias: bool);
}

const RESTART_PROMPT: &str = "PRESS ENTER TO RESTART";

/// Draws the playfield, HUD and game-over overlay
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    pub settings: Settings,
    font: VectorFont,
}

impl SceneRenderer {
    pub fn new(settings: Settings) -> Self {
        let font = VectorFont::new(
            settings.font_width,
            settings.font_height,
            settings.font_line_width,
            Color::WHITE,
        );
        Self { settings, font }
    }

    pub fn font(&self) -> &VectorFont {
        &self.font
    }

    /// Draw one frame: player, asteroids, bullets, score, then the overlay
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, state: &GameState) {
        let screen = Vec2::new(state.tuning.screen_width, state.tuning.screen_height);
        let wrapped = OutlineStyle {
            wrap: self.settings.wrap_drawing.then_some(screen),
            trail_snapshots: self.settings.effective_trail_snapshots(),
            antialias: self.settings.antialias(),
        };
        let plain = OutlineStyle {
            wrap: None,
            ..wrapped
        };

        draw_polygon(surface, &state.player, &wrapped);
        for asteroid in &state.asteroids {
            draw_polygon(surface, asteroid, &wrapped);
        }
        for bullet in &state.bullets {
            draw_polygon(surface, &bullet.polygon, &plain);
        }

        if self.settings.show_score {
            self.draw_score(surface, state.score, screen.x);
        }

        if let Some(message) = state.game_over_message() {
            self.draw_game_over(surface, message, state.score, screen * 0.5);
        }
    }

    fn draw_score<S: Surface + ?Sized>(&self, surface: &mut S, score: u64, screen_width: f32) {
        let text = score.to_string();
        let margin = self.settings.hud_margin;
        let x = screen_width - self.font.text_width(&text) - margin;
        self.font.draw_text(surface, &text, Vec2::new(x, margin));
    }

    fn draw_game_over<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        message: &str,
        score: u64,
        center: Vec2,
    ) {
        let score_text = format!("SCORE: {score}");
        let lines = [
            (message, -60.0),
            (score_text.as_str(), -20.0),
            (RESTART_PROMPT, 40.0),
        ];
        for (text, dy) in lines {
            let x = center.x - self.font.text_width(text) / 2.0;
            self.font.draw_text(surface, text, Vec2::new(x, center.y + dy));
        }
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
