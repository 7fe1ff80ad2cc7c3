//! 8-bit RGBA colors and linear interpolation between them

use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Player flash on death
    pub const RED_FLASH: Color = Color::rgb(255, 50, 50);
    /// Freshly split asteroid tint
    pub const SPLIT_TINT: Color = Color::rgb(255, 100, 100);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel linear interpolation, rounded to the nearest channel value.
    ///
    /// `t` is clamped to [0, 1], so 0 returns `self` and 1 returns `to` exactly.
    pub fn lerp(self, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, to.r),
            g: mix(self.g, to.g),
            b: mix(self.b, to.b),
            a: mix(self.a, to.a),
        }
    }

    /// Darken toward black by `brightness` (1 = unchanged), keeping full alpha
    pub fn dimmed(self, brightness: f32) -> Color {
        let opaque = Color { a: 255, ..self };
        Color::BLACK.lerp(opaque, brightness)
    }

    /// Normalized float channels for vertex data
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
