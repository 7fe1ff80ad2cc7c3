//! Transformable polygon objects
//!
//! Every on-screen entity (ship, asteroid, bullet) is a closed polygon defined
//! in local space and placed in the world by scale, rotation and translation.
//! World-space vertices are recomputed from that state on every request.

use glam::Vec2;
use std::f32::consts::TAU;

use super::color::Color;
use super::geometry::BoundingBox;
use crate::consts::{FADE_EPSILON, TRAIL_CAPACITY, TRAIL_SAMPLE_INTERVAL};
use crate::wrap_angle;

/// Timed linear color transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub start: Color,
    pub end: Color,
    /// 0 at start, 1 when finished
    pub progress: f32,
    /// Progress added per tick (1 / duration)
    pub step: f32,
    pub active: bool,
}

impl Default for Fade {
    fn default() -> Self {
        Self {
            start: Color::WHITE,
            end: Color::WHITE,
            progress: 0.0,
            step: 0.0,
            active: false,
        }
    }
}

impl Fade {
    /// Advance one tick, returning the color to show now (None when idle)
    fn advance(&mut self) -> Option<Color> {
        if !self.active {
            return None;
        }

        self.progress += self.step;
        // Summing 1/n in f32 can stop just short of 1.0 after n steps
        if self.progress >= 1.0 - FADE_EPSILON {
            self.progress = 1.0;
            self.active = false;
            return Some(self.end);
        }
        Some(self.start.lerp(self.end, self.progress))
    }
}

/// A closed polygon entity
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonObject {
    /// Local-space vertices; order is winding order
    pub vertices: Vec<Vec2>,
    /// World-space origin
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    /// Radians, kept in [0, 2π) by `update`
    pub rotation: f32,
    /// Radians per tick
    pub rotation_speed: f32,
    pub scale: f32,
    pub color: Color,
    pub line_width: f32,
    pub fade: Fade,
    /// Past world-space silhouettes, newest first
    pub trail: Vec<Vec<Vec2>>,
    trail_counter: u32,
}

impl PolygonObject {
    /// Wrap local-space vertices in an object at the origin with default styling
    pub fn from_vertices(vertices: Vec<Vec2>) -> Self {
        Self {
            vertices,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            scale: 1.0,
            color: Color::WHITE,
            line_width: 1.0,
            fade: Fade::default(),
            trail: Vec::with_capacity(TRAIL_CAPACITY),
            trail_counter: 0,
        }
    }

    /// Lumpy asteroid outline.
    ///
    /// Vertex radius varies as `base_radius + (sin 3θ + cos 5θ) * irregularity`,
    /// so an irregularity of 0 yields a regular polygon.
    pub fn asteroid(base_radius: f32, irregularity: f32, vertex_count: usize) -> Self {
        let step = TAU / vertex_count.max(1) as f32;
        let vertices = (0..vertex_count)
            .map(|i| {
                let angle = i as f32 * step;
                let radius = base_radius + ((angle * 3.0).sin() + (angle * 5.0).cos()) * irregularity;
                Vec2::new(angle.cos() * radius, angle.sin() * radius)
            })
            .collect();
        Self::from_vertices(vertices)
    }

    /// Arrowhead ship pointing up (negative y), nose at `size` from the origin
    pub fn ship(size: f32) -> Self {
        Self::from_vertices(vec![
            Vec2::new(0.0, -size),
            Vec2::new(size * 0.6, size * 0.7),
            Vec2::new(0.0, size * 0.35),
            Vec2::new(-size * 0.6, size * 0.7),
        ])
    }

    /// 2x2 square projectile
    pub fn bullet() -> Self {
        Self::from_vertices(vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ])
    }

    /// Whether the polygon has enough vertices to draw or collide
    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Vertices in world space: scale, then rotate, then translate
    pub fn transformed_vertices(&self) -> Vec<Vec2> {
        let rotation = Vec2::from_angle(self.rotation);
        self.vertices
            .iter()
            .map(|v| self.position + rotation.rotate(*v * self.scale))
            .collect()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.transformed_vertices())
    }

    /// Advance one tick: integrate motion, run the fade, sample the trail and
    /// optionally wrap around the screen.
    ///
    /// Wrapping is a single correction per axis, so a position more than one
    /// screen outside the playfield stays outside.
    pub fn update(&mut self, screen_width: f32, screen_height: f32, wrap: bool) {
        self.position += self.velocity;
        self.rotation = wrap_angle(self.rotation + self.rotation_speed);

        self.advance_fade();

        if wrap {
            self.position.x = wrap_axis(self.position.x, screen_width);
            self.position.y = wrap_axis(self.position.y, screen_height);
        }

        self.sample_trail();
    }

    /// Run one tick of the active fade without moving the object
    pub fn advance_fade(&mut self) {
        if let Some(color) = self.fade.advance() {
            self.color = color;
        }
    }

    /// Begin fading from the current color to `target` over `duration_ticks`
    pub fn start_fade(&mut self, target: Color, duration_ticks: u32) {
        self.fade = Fade {
            start: self.color,
            end: target,
            progress: 0.0,
            step: 1.0 / duration_ticks.max(1) as f32,
            active: true,
        };
    }

    pub fn is_fading(&self) -> bool {
        self.fade.active
    }

    fn sample_trail(&mut self) {
        if !self.is_renderable() {
            return;
        }
        self.trail_counter = self.trail_counter.wrapping_add(1);
        if self.trail_counter % TRAIL_SAMPLE_INTERVAL == 0 {
            self.trail.insert(0, self.transformed_vertices());
            self.trail.truncate(TRAIL_CAPACITY);
        }
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
        self.trail_counter = 0;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Set the color outright, cancelling any fade in progress
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.fade.active = false;
    }

    /// Add to the rotation; normalization happens on the next `update`
    pub fn rotate(&mut self, angle: f32) {
        self.rotation += angle;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed;
    }
}

#[inline]
fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        value + extent
    } else if value > extent {
        value - extent
    } else {
        value
    }
}
