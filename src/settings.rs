//! Visual preferences
//!
//! Nothing here affects the simulation; a run plays out identically under any
//! settings.

use serde::{Deserialize, Serialize};

use crate::consts::TRAIL_CAPACITY;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Ghost trail snapshots drawn per object
    pub fn trail_snapshots(&self) -> usize {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium | QualityPreset::High => TRAIL_CAPACITY,
        }
    }

    /// Whether polygon outlines ask the backend for antialiasing
    pub fn antialias(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }
}

/// Rendering preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Ghost trails behind moving polygons
    pub trails: bool,
    /// Draw extra copies of objects straddling a screen edge
    pub wrap_drawing: bool,

    // === HUD ===
    /// Show the score in the top-right corner
    pub show_score: bool,
    /// Glyph cell width in pixels
    pub font_width: f32,
    /// Glyph cell height in pixels
    pub font_height: f32,
    /// Font stroke width in pixels
    pub font_line_width: f32,
    /// Distance of the score from the top and right edges
    pub hud_margin: f32,

    // === Accessibility ===
    /// Reduced motion (no ghost trails)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            trails: true,
            wrap_drawing: true,

            show_score: true,
            font_width: 16.0,
            font_height: 24.0,
            font_line_width: 3.0,
            hud_margin: 20.0,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset disables trails for performance
        if preset == QualityPreset::Low {
            self.trails = false;
        }
    }

    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Trail snapshots to draw per object (respects reduced_motion)
    pub fn effective_trail_snapshots(&self) -> usize {
        if !self.trails || self.reduced_motion {
            0
        } else {
            self.quality.trail_snapshots()
        }
    }

    pub fn antialias(&self) -> bool {
        self.quality.antialias()
    }
}
