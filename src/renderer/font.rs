//! Stroke font for HUD text
//!
//! Glyphs are fixed lists of line segments in a unit cell (x right, y down),
//! scaled to the font's cell size when drawn.

use glam::Vec2;

use super::Surface;
use crate::sim::Color;

/// Horizontal gap between glyph cells, in pixels
pub const GLYPH_GAP: f32 = 4.0;

/// Line segment in unit-cell coordinates
type Segment = [(f32, f32); 2];

const fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
    [(x1, y1), (x2, y2)]
}

// Seven-segment pieces:
//  AAA
// F   B
//  GGG
// E   C
//  DDD
const A: Segment = seg(0.0, 0.0, 1.0, 0.0);
const B: Segment = seg(1.0, 0.0, 1.0, 0.5);
const C: Segment = seg(1.0, 0.5, 1.0, 1.0);
const D: Segment = seg(1.0, 1.0, 0.0, 1.0);
const E: Segment = seg(0.0, 1.0, 0.0, 0.5);
const F: Segment = seg(0.0, 0.5, 0.0, 0.0);
const G: Segment = seg(0.0, 0.5, 1.0, 0.5);

const LEFT: Segment = seg(0.0, 0.0, 0.0, 1.0);
const RIGHT: Segment = seg(1.0, 0.0, 1.0, 1.0);
const STEM: Segment = seg(0.5, 0.0, 0.5, 1.0);

/// Glyph lookup table, fixed at compile time
static GLYPHS: &[(char, &[Segment])] = &[
    ('0', &[A, B, C, D, E, F]),
    ('1', &[B, C]),
    ('2', &[A, B, G, E, D]),
    ('3', &[A, B, G, C, D]),
    ('4', &[F, G, B, C]),
    ('5', &[A, F, G, C, D]),
    ('6', &[A, F, G, E, D, C]),
    ('7', &[A, B, C]),
    ('8', &[A, B, C, D, E, F, G]),
    ('9', &[A, B, C, D, F, G]),
    (
        'A',
        &[
            seg(0.0, 1.0, 0.5, 0.0),
            seg(0.5, 0.0, 1.0, 1.0),
            seg(0.25, 0.5, 0.75, 0.5),
        ],
    ),
    (
        'B',
        &[
            LEFT,
            seg(0.0, 0.0, 0.8, 0.0),
            seg(0.8, 0.0, 0.8, 0.5),
            G,
            C,
            D,
        ],
    ),
    ('C', &[A, LEFT, D]),
    (
        'D',
        &[
            LEFT,
            seg(0.0, 0.0, 0.6, 0.0),
            seg(0.6, 0.0, 1.0, 0.4),
            seg(1.0, 0.4, 1.0, 0.6),
            seg(1.0, 0.6, 0.6, 1.0),
            seg(0.6, 1.0, 0.0, 1.0),
        ],
    ),
    ('E', &[LEFT, A, seg(0.0, 0.5, 0.75, 0.5), D]),
    ('F', &[LEFT, A, seg(0.0, 0.5, 0.75, 0.5)]),
    ('G', &[A, LEFT, D, C, seg(1.0, 0.5, 0.5, 0.5)]),
    ('H', &[LEFT, RIGHT, G]),
    ('I', &[A, D, STEM]),
    ('J', &[RIGHT, D, seg(0.0, 1.0, 0.0, 0.6)]),
    ('K', &[LEFT, seg(0.0, 0.5, 1.0, 0.0), seg(0.0, 0.5, 1.0, 1.0)]),
    ('L', &[LEFT, D]),
    (
        'M',
        &[
            LEFT,
            RIGHT,
            seg(0.0, 0.0, 0.5, 0.5),
            seg(0.5, 0.5, 1.0, 0.0),
        ],
    ),
    ('N', &[LEFT, RIGHT, seg(0.0, 0.0, 1.0, 1.0)]),
    ('O', &[A, RIGHT, D, LEFT]),
    ('P', &[LEFT, A, B, G]),
    ('Q', &[A, RIGHT, D, LEFT, seg(0.6, 0.6, 1.0, 1.0)]),
    ('R', &[LEFT, A, B, G, seg(0.4, 0.5, 1.0, 1.0)]),
    ('S', &[A, F, G, C, D]),
    ('T', &[A, STEM]),
    ('U', &[LEFT, RIGHT, D]),
    ('V', &[seg(0.0, 0.0, 0.5, 1.0), seg(0.5, 1.0, 1.0, 0.0)]),
    (
        'W',
        &[
            LEFT,
            RIGHT,
            seg(0.0, 1.0, 0.5, 0.5),
            seg(0.5, 0.5, 1.0, 1.0),
        ],
    ),
    ('X', &[seg(0.0, 0.0, 1.0, 1.0), seg(1.0, 0.0, 0.0, 1.0)]),
    (
        'Y',
        &[
            seg(0.0, 0.0, 0.5, 0.5),
            seg(1.0, 0.0, 0.5, 0.5),
            seg(0.5, 0.5, 0.5, 1.0),
        ],
    ),
    ('Z', &[A, seg(1.0, 0.0, 0.0, 1.0), D]),
    ('!', &[seg(0.5, 0.0, 0.5, 0.7), seg(0.5, 0.9, 0.5, 1.0)]),
    (':', &[seg(0.5, 0.2, 0.5, 0.3), seg(0.5, 0.7, 0.5, 0.8)]),
    ('-', &[G]),
    (' ', &[]),
];

/// Segments for `c` (case-insensitive), or None if the font lacks it
pub fn glyph(c: char) -> Option<&'static [Segment]> {
    let c = c.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, segments)| *segments)
}

/// Stroke font with a fixed glyph cell
#[derive(Debug, Clone)]
pub struct VectorFont {
    pub cell_width: f32,
    pub cell_height: f32,
    pub line_width: f32,
    pub color: Color,
}

impl VectorFont {
    pub fn new(cell_width: f32, cell_height: f32, line_width: f32, color: Color) -> Self {
        Self {
            cell_width,
            cell_height,
            line_width,
            color,
        }
    }

    /// Distance from one glyph's left edge to the next
    #[inline]
    pub fn advance(&self) -> f32 {
        self.cell_width + GLYPH_GAP
    }

    /// Pixel width of `text` when drawn: cells plus the gaps between them
    pub fn text_width(&self, text: &str) -> f32 {
        let count = text.chars().count();
        if count == 0 {
            return 0.0;
        }
        count as f32 * self.cell_width + (count - 1) as f32 * GLYPH_GAP
    }

    /// Draw `text` with its top-left corner at `origin`.
    ///
    /// Characters missing from the font leave an empty cell.
    pub fn draw_text<S: Surface + ?Sized>(&self, surface: &mut S, text: &str, origin: Vec2) {
        let cell = Vec2::new(self.cell_width, self.cell_height);

        for (i, c) in text.chars().enumerate() {
            let Some(segments) = glyph(c) else {
                continue;
            };
            let cell_origin = origin + Vec2::new(i as f32 * self.advance(), 0.0);
            for [(x1, y1), (x2, y2)] in segments {
                surface.stroke_line(
                    cell_origin + Vec2::new(*x1, *y1) * cell,
                    cell_origin + Vec2::new(*x2, *y2) * cell,
                    self.line_width,
                    self.color,
                    false,
                );
            }
        }
    }
}
