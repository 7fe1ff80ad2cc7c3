//! Polygon outlines, screen-wrap copies and ghost trails

use glam::Vec2;

use super::Surface;
use crate::sim::{BoundingBox, Color, PolygonObject};

/// How a single polygon should be drawn
#[derive(Debug, Clone, Copy)]
pub struct OutlineStyle {
    /// Screen size for wrap copies, or None to draw only in place
    pub wrap: Option<Vec2>,
    /// Ghost trail snapshots to draw beneath the live outline
    pub trail_snapshots: usize,
    pub antialias: bool,
}

/// Draw offsets for a shape with bounds `bbox` on a `width` x `height` screen.
///
/// Always starts with the zero offset. A shape straddling the left or right
/// edge gets a copy shifted by ±width, one straddling the top or bottom edge
/// gets a copy of every horizontal offset shifted by ±height, so a shape in a
/// corner is drawn four times.
pub fn wrap_offsets(bbox: &BoundingBox, width: f32, height: f32) -> Vec<Vec2> {
    let mut offsets = vec![Vec2::ZERO];

    if bbox.min_x < 0.0 && bbox.max_x > 0.0 {
        offsets.push(Vec2::new(width, 0.0));
    } else if bbox.max_x > width && bbox.min_x < width {
        offsets.push(Vec2::new(-width, 0.0));
    }

    let dy = if bbox.min_y < 0.0 && bbox.max_y > 0.0 {
        Some(height)
    } else if bbox.max_y > height && bbox.min_y < height {
        Some(-height)
    } else {
        None
    };
    if let Some(dy) = dy {
        let vertical: Vec<Vec2> = offsets.iter().map(|o| Vec2::new(o.x, dy)).collect();
        offsets.extend(vertical);
    }

    offsets
}

/// Brightness of the trail snapshot at `rank` (0 = most recent) out of `count`
#[inline]
pub fn trail_brightness(rank: usize, count: usize) -> f32 {
    (count - rank.min(count)) as f32 / (count + 1) as f32
}

/// Stroke a closed outline through `points`, shifted by `offset`.
///
/// Fewer than three points draw nothing.
pub fn stroke_outline<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Vec2],
    offset: Vec2,
    width: f32,
    color: Color,
    antialias: bool,
) {
    if points.len() < 3 {
        return;
    }
    let next = points.iter().cycle().skip(1);
    for (&from, &to) in points.iter().zip(next) {
        surface.stroke_line(from + offset, to + offset, width, color, antialias);
    }
}

fn stroke_wrapped<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Vec2],
    width: f32,
    color: Color,
    style: &OutlineStyle,
) {
    match style.wrap {
        Some(screen) => {
            let bbox = BoundingBox::from_points(points);
            for offset in wrap_offsets(&bbox, screen.x, screen.y) {
                stroke_outline(surface, points, offset, width, color, style.antialias);
            }
        }
        None => stroke_outline(surface, points, Vec2::ZERO, width, color, style.antialias),
    }
}

/// Draw a polygon's ghost trail (oldest first) and then its live outline
pub fn draw_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    polygon: &PolygonObject,
    style: &OutlineStyle,
) {
    if !polygon.is_renderable() {
        return;
    }

    let count = style.trail_snapshots.min(polygon.trail.len());
    for (rank, snapshot) in polygon.trail[..count].iter().enumerate().rev() {
        let color = polygon.color.dimmed(trail_brightness(rank, count));
        stroke_wrapped(surface, snapshot, polygon.line_width, color, style);
    }

    let points = polygon.transformed_vertices();
    stroke_wrapped(surface, &points, polygon.line_width, polygon.color, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::Recorder;

    fn square(size: f32) -> PolygonObject {
        let h = size / 2.0;
        PolygonObject::from_vertices(vec![
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(h, h),
            Vec2::new(-h, h),
        ])
    }

    #[test]
    fn test_wrap_offsets_inside() {
        let bbox = BoundingBox::new(100.0, 100.0, 150.0, 150.0);
        assert_eq!(wrap_offsets(&bbox, 800.0, 600.0), vec![Vec2::ZERO]);
    }

    #[test]
    fn test_wrap_offsets_edges() {
        let left = BoundingBox::new(-10.0, 100.0, 10.0, 120.0);
        assert_eq!(
            wrap_offsets(&left, 800.0, 600.0),
            vec![Vec2::ZERO, Vec2::new(800.0, 0.0)]
        );

        let bottom = BoundingBox::new(100.0, 590.0, 120.0, 610.0);
        assert_eq!(
            wrap_offsets(&bottom, 800.0, 600.0),
            vec![Vec2::ZERO, Vec2::new(0.0, -600.0)]
        );
    }

    #[test]
    fn test_wrap_offsets_corner() {
        let corner = BoundingBox::new(790.0, -5.0, 810.0, 5.0);
        let offsets = wrap_offsets(&corner, 800.0, 600.0);
        assert_eq!(offsets.len(), 4);
        assert!(offsets.contains(&Vec2::new(-800.0, 0.0)));
        assert!(offsets.contains(&Vec2::new(0.0, 600.0)));
        assert!(offsets.contains(&Vec2::new(-800.0, 600.0)));
    }

    #[test]
    fn test_wrap_offsets_touching_edge() {
        // Touching is not straddling
        let bbox = BoundingBox::new(0.0, 0.0, 20.0, 20.0);
        assert_eq!(wrap_offsets(&bbox, 800.0, 600.0), vec![Vec2::ZERO]);
    }

    #[test]
    fn test_trail_brightness_ranks() {
        assert!((trail_brightness(0, 5) - 5.0 / 6.0).abs() < 1e-6);
        assert!((trail_brightness(4, 5) - 1.0 / 6.0).abs() < 1e-6);
        assert!(trail_brightness(0, 5) > trail_brightness(1, 5));
    }

    #[test]
    fn test_degenerate_outline_draws_nothing() {
        let mut recorder = Recorder::default();
        stroke_outline(
            &mut recorder,
            &[Vec2::ZERO, Vec2::X],
            Vec2::ZERO,
            1.0,
            Color::WHITE,
            true,
        );
        assert!(recorder.lines.is_empty());

        let mut polygon = square(10.0);
        polygon.vertices.truncate(2);
        let style = OutlineStyle {
            wrap: None,
            trail_snapshots: 5,
            antialias: true,
        };
        draw_polygon(&mut recorder, &polygon, &style);
        assert!(recorder.lines.is_empty());
    }

    #[test]
    fn test_draw_polygon_closes_outline() {
        let mut recorder = Recorder::default();
        let mut polygon = square(10.0);
        polygon.set_position(Vec2::new(50.0, 50.0));
        let style = OutlineStyle {
            wrap: Some(Vec2::new(800.0, 600.0)),
            trail_snapshots: 0,
            antialias: true,
        };
        draw_polygon(&mut recorder, &polygon, &style);

        assert_eq!(recorder.lines.len(), 4);
        let last = &recorder.lines[3];
        assert_eq!(last.to, recorder.lines[0].from);
        assert!(recorder.lines.iter().all(|l| l.antialias));
    }

    #[test]
    fn test_draw_polygon_wraps_at_corner() {
        let mut recorder = Recorder::default();
        let mut polygon = square(20.0);
        polygon.set_position(Vec2::new(0.0, 0.0));
        let style = OutlineStyle {
            wrap: Some(Vec2::new(800.0, 600.0)),
            trail_snapshots: 0,
            antialias: false,
        };
        draw_polygon(&mut recorder, &polygon, &style);
        assert_eq!(recorder.lines.len(), 16);

        // Authoritative position untouched
        assert_eq!(polygon.position, Vec2::ZERO);
    }

    #[test]
    fn test_trail_drawn_oldest_first_and_dimmed() {
        let mut polygon = square(10.0);
        polygon.set_position(Vec2::new(100.0, 100.0));
        polygon.set_velocity(Vec2::new(1.0, 0.0));
        for _ in 0..40 {
            polygon.update(800.0, 600.0, true);
        }
        assert_eq!(polygon.trail.len(), 5);

        let mut recorder = Recorder::default();
        let style = OutlineStyle {
            wrap: None,
            trail_snapshots: 3,
            antialias: true,
        };
        draw_polygon(&mut recorder, &polygon, &style);

        // Three snapshots plus the live outline
        assert_eq!(recorder.lines.len(), 16);
        let shades: Vec<u8> = recorder.lines.chunks(4).map(|edges| edges[0].color.r).collect();
        assert!(shades[0] < shades[1]);
        assert!(shades[1] < shades[2]);
        assert_eq!(shades[3], 255);
        assert!(recorder.lines.iter().all(|l| l.color.a == 255));
    }
}
