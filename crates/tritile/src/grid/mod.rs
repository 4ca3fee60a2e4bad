//! Shape grids: which shape occupies each (row, column) cell.
//!
//! Purpose
//! - Provide `ShapeKind` (the four tile variants with their tilt parity) and
//!   `ShapeGrid` (row-major storage with explicit row/column addressing).
//! - Provide `generate_grid`, the randomized rule-based generator that fills
//!   a grid so every cell tilt-matches the cell above it and no row contains
//!   two adjacent triangles.
//!
//! Why this design
//! - The generator is generic over `rand::Rng`; callers own the randomness
//!   source, so seeded and unseeded use are both one call away.
//! - Addressing is (row, column) throughout; flat indices appear only at the
//!   table-export boundary.

mod rand;
mod types;

pub use self::rand::{generate_grid, match_tilt};
pub use types::{ShapeGrid, ShapeKind};
