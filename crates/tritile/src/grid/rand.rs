//! Randomized shape-sequence generation.
//!
//! Model
//! - Fill the grid row by row. Within a row, each cell is chosen from the
//!   cell to its left (never two adjacent triangles, a trapezoid's flat face
//!   always gets a triangle pointing at it) and the cell above it
//!   (`match_tilt`, tilt parity must agree).
//! - A `triangle_left` flag alternates per row, starting false at row 0. It
//!   picks which triangle orientation fills non-forced slots and, later,
//!   which trapezoid offset convention the layout uses.
//! - Row 0 has no row above; each cell past the first tilt-matches against a
//!   synthetic parity coin standing in for row -1, with triangles disallowed
//!   on that path.

use rand::Rng;

use super::types::{ShapeGrid, ShapeKind};
use crate::pattern::PatternError;

/// Pick the shape below `above` so the slanted edges line up.
///
/// Even-class `above` forces a right tilt (`\ \` or `>`), odd-class a left
/// tilt (`/ /` or `<`). The triangle option is only on the table when the
/// row's flag points the right way and `can_be_tri` holds; otherwise the
/// matching trapezoid is forced. When a triangle is possible the draw is
/// 50/50.
pub fn match_tilt<R: Rng>(
    above: ShapeKind,
    triangle_left: bool,
    can_be_tri: bool,
    rng: &mut R,
) -> ShapeKind {
    if above.tilts_right() {
        if triangle_left || !can_be_tri {
            ShapeKind::TrapezoidDown
        } else if rng.gen::<bool>() {
            ShapeKind::TriangleRight
        } else {
            ShapeKind::TrapezoidDown
        }
    } else if !triangle_left || !can_be_tri {
        ShapeKind::TrapezoidUp
    } else if rng.gen::<bool>() {
        ShapeKind::TriangleLeft
    } else {
        ShapeKind::TrapezoidUp
    }
}

/// Generate a `rows` x `columns` grid honoring the adjacency rules.
///
/// Pure function of its inputs and the RNG; callers wanting reproducibility
/// pass a seeded `StdRng`.
pub fn generate_grid<R: Rng>(
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<ShapeGrid, PatternError> {
    if rows == 0 || columns == 0 {
        return Err(PatternError::invalid(format!(
            "grid needs at least one row and one column (got {rows} x {columns})"
        )));
    }
    let mut grid = ShapeGrid::with_capacity(rows, columns);
    let mut triangle_left = false;
    for i in 0..rows {
        let mut row: Vec<ShapeKind> = Vec::with_capacity(columns);
        let first = if i == 0 {
            // Free choice for the very first cell. The first two branches
            // collapse onto the same triangle while the flag is down.
            match rng.gen_range(0..3u8) {
                0 => ShapeKind::row_triangle(triangle_left),
                1 => ShapeKind::TriangleRight,
                _ => ShapeKind::TrapezoidDown,
            }
        } else {
            match_tilt(grid.get(i - 1, 0), triangle_left, true, rng)
        };
        row.push(first);
        for j in 1..columns {
            let (above, above_next) = if i == 0 {
                // Synthetic row above: a parity coin stands in for row -1.
                let coin = if rng.gen::<bool>() {
                    ShapeKind::TriangleRight
                } else {
                    ShapeKind::TriangleLeft
                };
                (coin, coin)
            } else {
                let above = grid.get(i - 1, j);
                // The last column reuses `above` as its own lookahead.
                let above_next = if j == columns - 1 {
                    above
                } else {
                    grid.get(i - 1, j + 1)
                };
                (above, above_next)
            };
            let next = if row[j - 1].is_trapezoid() {
                // A trapezoid's flat face gets a triangle pointing at it.
                ShapeKind::row_triangle(triangle_left)
            } else if j > 1 && row[j - 2].is_triangle() {
                // Two triangles back to back; the third cell must not be one.
                match_tilt(above, triangle_left, false, rng)
            } else {
                match_tilt(above, triangle_left, above_next.is_trapezoid(), rng)
            };
            row.push(next);
        }
        grid.push_row(row);
        triangle_left = !triangle_left;
    }
    Ok(grid)
}
