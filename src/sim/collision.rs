//! Polygon-polygon collision detection
//!
//! Detection only: callers decide what a hit means. The test is exact for
//! simple polygons, convex or not, apart from collinear edge overlap (see
//! `segments_intersect`).

use glam::Vec2;

use super::geometry::{BoundingBox, point_in_polygon, segments_intersect};
use super::polygon::PolygonObject;

/// Check whether two polygon objects overlap in world space
///
/// 1. Bounding boxes must overlap (cheap rejection for the common case)
/// 2. A vertex of either polygon inside the other catches full engulfment
/// 3. Any edge crossing catches partial overlap
pub fn polygons_collide(a: &PolygonObject, b: &PolygonObject) -> bool {
    let verts_a = a.transformed_vertices();
    let verts_b = b.transformed_vertices();

    if !BoundingBox::from_points(&verts_a).overlaps(&BoundingBox::from_points(&verts_b)) {
        return false;
    }

    vertex_sets_collide(&verts_a, &verts_b)
}

/// Exact overlap test on world-space vertex lists, without the bounds check
pub fn vertex_sets_collide(verts_a: &[Vec2], verts_b: &[Vec2]) -> bool {
    if verts_a.len() < 3 || verts_b.len() < 3 {
        return false;
    }

    if verts_a.iter().any(|v| point_in_polygon(*v, verts_b))
        || verts_b.iter().any(|v| point_in_polygon(*v, verts_a))
    {
        return true;
    }

    edges(verts_a).any(|(a1, a2)| edges(verts_b).any(|(b1, b2)| segments_intersect(a1, a2, b1, b2)))
}

/// Closed edge loop: (v0,v1), (v1,v2), ..., (vn,v0)
fn edges(verts: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    verts
        .iter()
        .zip(verts.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}
