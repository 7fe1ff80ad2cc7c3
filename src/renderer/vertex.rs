//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::Surface;
use crate::sim::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Collects stroked lines for one frame as a triangle list.
///
/// Each stroke becomes a quad (two triangles) of the requested width.
/// Antialiasing is left to the backend's multisampling; the flag is counted
/// so a backend can pick a pipeline.
#[derive(Debug, Default)]
pub struct LineBatch {
    vertices: Vec<Vertex>,
    antialiased_strokes: usize,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's geometry, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.antialiased_strokes = 0;
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of strokes in the batch
    pub fn stroke_count(&self) -> usize {
        self.vertices.len() / 6
    }

    pub fn antialiased_strokes(&self) -> usize {
        self.antialiased_strokes
    }
}

impl Surface for LineBatch {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, antialias: bool) {
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO {
            return; // Zero-length stroke
        }

        let half = Vec2::new(-dir.y, dir.x) * (width * 0.5);
        let color = color.to_array();

        let a1 = from + half;
        let a2 = from - half;
        let b1 = to + half;
        let b2 = to - half;

        // Two triangles
        self.vertices.push(Vertex::new(a1.x, a1.y, color));
        self.vertices.push(Vertex::new(a2.x, a2.y, color));
        self.vertices.push(Vertex::new(b1.x, b1.y, color));

        self.vertices.push(Vertex::new(b1.x, b1.y, color));
        self.vertices.push(Vertex::new(a2.x, a2.y, color));
        self.vertices.push(Vertex::new(b2.x, b2.y, color));

        if antialias {
            self.antialiased_strokes += 1;
        }
    }
}
