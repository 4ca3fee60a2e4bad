//! Row-based triangle/trapezoid tiling patterns.
//!
//! One pass turns three numbers (width, height, resolution) into a planar
//! mesh outline set:
//! - `grid`: randomized shape-kind grid honoring the tiling rules (no two
//!   adjacent triangles, tilt parity matching between rows).
//! - `layout`: deterministic corner-point placement plus the connector
//!   parallelograms bridging adjacent rows.
//! - `tables`: the three host-facing tables (points, vertices, primitives).
//!
//! Randomness is injected: callers pass any `rand::Rng`, or use
//! `generate_seeded` for reproducible output.

pub mod grid;
pub mod layout;
pub mod pattern;
pub mod tables;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use pattern::{generate, generate_seeded, Pattern, PatternError, PatternParams};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{generate_grid, match_tilt, ShapeGrid, ShapeKind};
    pub use crate::layout::{layout_points, Outline, OutlineKind, Point};
    pub use crate::pattern::{generate, generate_seeded, Pattern, PatternError, PatternParams};
    pub use crate::tables::{build_tables, PatternTables};
    pub use nalgebra::Vector2 as Vec2;
}
