//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` per frame)
//! - Seeded RNG only, owned by the game state
//! - Stable iteration order (index order, as documented per pass)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod geometry;
pub mod polygon;
pub mod state;
pub mod tick;

pub use collision::polygons_collide;
pub use color::Color;
pub use geometry::{BoundingBox, point_in_polygon, segments_intersect};
pub use polygon::{Fade, PolygonObject};
pub use state::{Bullet, GameOverReason, GamePhase, GameState, SplitOutcome};
pub use tick::{TickInput, tick};
