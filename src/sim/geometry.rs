//! Geometry kernel
//!
//! Point containment, segment intersection and axis-aligned bounds over
//! world-space vertex lists.

use glam::Vec2;

use crate::consts::PARALLEL_EPSILON;

/// Axis-aligned bounding box, derived from transformed vertices on demand
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Tightest box around `points`, or the zero box when there are none
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        rest.iter().fold(
            Self::new(first.x, first.y, first.x, first.y),
            |bbox, p| Self {
                min_x: bbox.min_x.min(p.x),
                min_y: bbox.min_y.min(p.y),
                max_x: bbox.max_x.max(p.x),
                max_y: bbox.max_y.max(p.y),
            },
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Open-interval overlap on both axes: boxes that only touch do not overlap
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}

/// Even-odd ray cast: count edge crossings of a ray from `point` toward +x.
///
/// Polygons with fewer than 3 vertices contain nothing.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];

        // Horizontal edges never pass this filter, so vj.y != vi.y below
        if (vi.y > point.y) != (vj.y > point.y) {
            let crossing_x = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Whether segment p1-p2 intersects segment p3-p4.
///
/// Parallel segments, collinear overlapping ones included, report no
/// intersection.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denom = d1.perp_dot(d2);
    if denom.abs() < PARALLEL_EPSILON {
        return false;
    }

    let offset = p3 - p1;
    let t = offset.perp_dot(d2) / denom;
    let u = offset.perp_dot(d1) / denom;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}
