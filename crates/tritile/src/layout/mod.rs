//! Deterministic point layout for a shape grid.
//!
//! Purpose
//! - Turn a `ShapeGrid` plus (width, height) into the final ordered outline
//!   sequence: every tile's corner points, with connective parallelograms
//!   spliced in between vertically adjacent rows.
//!
//! Model
//! - Tiles are laid out top to bottom, y decreasing. Each row advances the
//!   cursor by `shape_size + gap_height`; within a row the cursor advances
//!   by `tri_width` per tile.
//! - Triangles are equilateral: `shape_size = tri_width * sqrt(3) / 2`.
//! - A connector quad bridges each tile (row > 0) to the tile directly above
//!   it, reading the tile's own last two points and two points of the tile
//!   above, picked by the above tile's kind.
//! - No randomness: identical inputs give bit-identical coordinates.

use nalgebra::Vector2;

use crate::grid::{ShapeGrid, ShapeKind};
use crate::pattern::PatternError;

/// Planar point; z is implicitly 0.
pub type Point = Vector2<f64>;

/// What an emitted outline is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutlineKind {
    /// A tile from the grid.
    Shape(ShapeKind),
    /// A synthesized parallelogram bridging two rows.
    Connector,
}

/// One closed polygon of the final sequence (3 or 4 points, fixed winding).
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    pub kind: OutlineKind,
    pub points: Vec<Point>,
}

/// Lay out every tile of `grid` and splice in the row connectors.
///
/// Connectors for the boundary above row r are emitted immediately before
/// row r's own tiles; row 0 has none. A single-row grid produces no
/// connectors and never computes a row gap.
pub fn layout_points(
    grid: &ShapeGrid,
    width: f64,
    height: f64,
) -> Result<Vec<Outline>, PatternError> {
    if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
        return Err(PatternError::invalid(format!(
            "width and height must be finite and > 0 (got {width} x {height})"
        )));
    }
    let rows = grid.rows();
    let columns = grid.columns();
    if rows == 0 || columns == 0 {
        return Err(PatternError::invalid("cannot lay out an empty grid"));
    }

    let tri_width = width / columns as f64;
    let shape_size = tri_width * 3.0_f64.sqrt() / 2.0;
    let gap_height = if rows > 1 {
        (height - shape_size * rows as f64) / (rows as f64 - 1.0)
    } else {
        0.0
    };

    // Tile outlines first, row-major.
    let mut tiles: Vec<Vec<Point>> = Vec::with_capacity(rows * columns);
    let mut cur_y = 1.0 - shape_size / 2.0;
    for row in grid.iter_rows() {
        let triangle_left = row.contains(&ShapeKind::TriangleLeft);
        let mut cur_x = 0.0;
        for &shape in row {
            tiles.push(tile_points(
                shape,
                cur_x,
                cur_y,
                tri_width,
                shape_size,
                triangle_left,
            ));
            cur_x += tri_width;
        }
        cur_y -= shape_size + gap_height;
    }

    // Connector quads for every tile below row 0, same order as the tiles.
    let mut connectors: Vec<Vec<Point>> = Vec::with_capacity((rows - 1) * columns);
    for r in 1..rows {
        for c in 0..columns {
            let cur = &tiles[r * columns + c];
            let above = &tiles[(r - 1) * columns + c];
            let mut quad = Vec::with_capacity(4);
            quad.push(cur[cur.len() - 1]);
            quad.push(cur[cur.len() - 2]);
            if grid.get(r - 1, c) == ShapeKind::TriangleLeft {
                quad.push(above[0]);
                quad.push(above[2]);
            } else {
                quad.push(above[1]);
                quad.push(above[0]);
            }
            connectors.push(quad);
        }
    }

    // Splice: each row boundary's connectors precede that row's tiles.
    let mut out = Vec::with_capacity(tiles.len() + connectors.len());
    let mut conn = connectors.into_iter();
    for (i, points) in tiles.into_iter().enumerate() {
        let (r, c) = (i / columns, i % columns);
        if r > 0 && c == 0 {
            out.extend(conn.by_ref().take(columns).map(|points| Outline {
                kind: OutlineKind::Connector,
                points,
            }));
        }
        out.push(Outline {
            kind: OutlineKind::Shape(grid.get(r, c)),
            points,
        });
    }
    Ok(out)
}

/// Corner points for one tile, winding fixed per kind.
fn tile_points(
    shape: ShapeKind,
    cur_x: f64,
    cur_y: f64,
    tri_width: f64,
    h: f64,
    triangle_left: bool,
) -> Vec<Point> {
    let p = |x: f64, y: f64| Vector2::new(x, y);
    match shape {
        ShapeKind::TriangleLeft => vec![
            p(cur_x + tri_width, cur_y - h / 2.0),
            p(cur_x + tri_width, cur_y + h / 2.0),
            p(cur_x, cur_y),
        ],
        ShapeKind::TriangleRight => vec![
            p(cur_x, cur_y - h / 2.0),
            p(cur_x + tri_width, cur_y),
            p(cur_x, cur_y + h / 2.0),
        ],
        ShapeKind::TrapezoidUp => {
            let add_y = if triangle_left { 0.0 } else { -h / 2.0 };
            vec![
                p(cur_x, cur_y - h / 2.0 + add_y),
                p(cur_x + tri_width, cur_y + add_y),
                p(cur_x + tri_width, cur_y + h + add_y),
                p(cur_x, cur_y + h / 2.0 + add_y),
            ]
        }
        ShapeKind::TrapezoidDown => {
            let add_y = if triangle_left { 0.0 } else { h / 2.0 };
            vec![
                p(cur_x, cur_y - h / 2.0 + add_y),
                p(cur_x + tri_width, cur_y - h + add_y),
                p(cur_x + tri_width, cur_y + add_y),
                p(cur_x, cur_y + h / 2.0 + add_y),
            ]
        }
    }
}
