//! Flattening the outline sequence into the three host-facing tables.
//!
//! The host consumes three ordered tables: one row per point (positions),
//! one row per point (UVs), one row per outline (primitive index lists).
//! Rows are kept as typed structs; `to_row` renders the textual cells in
//! table order, matching the headers exported here.

use crate::layout::Outline;

/// Points-table header: position, weight, normal, groups.
pub const POINTS_HEADER: [&str; 9] = [
    "index", "P(0)", "P(1)", "P(2)", "Pw", "N(0)", "N(1)", "N(2)", "groups",
];

/// Vertex-table header: owning outline, vertex index, UVs.
pub const VERTICES_HEADER: [&str; 5] = ["index", "vindex", "uv(0)", "uv(1)", "uv(2)"];

/// Primitives-table header: outline index, point indices, closed flag, groups.
pub const PRIMITIVES_HEADER: [&str; 4] = ["index", "vertices", "close", "groups"];

/// One point of one outline. `index` is the point's position within its
/// outline; the pattern is planar, so `position[2] = 0` and the normal is +z.
#[derive(Clone, Debug, PartialEq)]
pub struct PointRow {
    pub index: usize,
    pub position: [f64; 3],
    pub weight: f64,
    pub normal: [f64; 3],
    pub groups: String,
}

impl PointRow {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.position[0].to_string(),
            self.position[1].to_string(),
            self.position[2].to_string(),
            self.weight.to_string(),
            self.normal[0].to_string(),
            self.normal[1].to_string(),
            self.normal[2].to_string(),
            self.groups.clone(),
        ]
    }
}

/// One vertex record. `index` is the owning outline's position in the final
/// sequence, `vindex` the point's position within it. UVs are clamped to
/// [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct VertexRow {
    pub index: usize,
    pub vindex: usize,
    pub uv: [f64; 3],
}

impl VertexRow {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.vindex.to_string(),
            self.uv[0].to_string(),
            self.uv[1].to_string(),
            self.uv[2].to_string(),
        ]
    }
}

/// One closed polygon. `vertices` holds contiguous global point indices in
/// emission order; the textual cell is space-separated.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveRow {
    pub index: usize,
    pub vertices: Vec<usize>,
    pub close: u8,
    pub groups: String,
}

impl PrimitiveRow {
    pub fn to_row(&self) -> Vec<String> {
        let verts = self
            .vertices
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            self.index.to_string(),
            verts,
            self.close.to_string(),
            self.groups.clone(),
        ]
    }
}

/// The three parallel output tables for one generation pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternTables {
    pub points: Vec<PointRow>,
    pub vertices: Vec<VertexRow>,
    pub primitives: Vec<PrimitiveRow>,
}

/// Flatten `outlines` into the three tables. `width`/`height` only feed the
/// UV normalization; callers validate them upstream.
pub fn build_tables(outlines: &[Outline], width: f64, height: f64) -> PatternTables {
    let total_points: usize = outlines.iter().map(|o| o.points.len()).sum();
    let mut tables = PatternTables {
        points: Vec::with_capacity(total_points),
        vertices: Vec::with_capacity(total_points),
        primitives: Vec::with_capacity(outlines.len()),
    };
    let mut global = 0usize;
    for (i, outline) in outlines.iter().enumerate() {
        let mut verts = Vec::with_capacity(outline.points.len());
        for (j, point) in outline.points.iter().enumerate() {
            tables.points.push(PointRow {
                index: j,
                position: [point.x, point.y, 0.0],
                weight: 1.0,
                normal: [0.0, 0.0, 1.0],
                groups: String::new(),
            });
            tables.vertices.push(VertexRow {
                index: i,
                vindex: j,
                uv: [
                    (point.x / width).clamp(0.0, 1.0),
                    (point.y / height).clamp(0.0, 1.0),
                    0.0,
                ],
            });
            verts.push(global);
            global += 1;
        }
        tables.primitives.push(PrimitiveRow {
            index: i,
            vertices: verts,
            close: 1,
            groups: String::new(),
        });
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Outline, OutlineKind};
    use crate::grid::ShapeKind;
    use nalgebra::Vector2;

    fn sample_outlines() -> Vec<Outline> {
        vec![
            Outline {
                kind: OutlineKind::Shape(ShapeKind::TriangleRight),
                points: vec![
                    Vector2::new(0.0, -0.5),
                    Vector2::new(1.0, 0.0),
                    Vector2::new(0.0, 0.5),
                ],
            },
            Outline {
                kind: OutlineKind::Connector,
                points: vec![
                    Vector2::new(0.0, 0.0),
                    Vector2::new(1.0, 0.0),
                    Vector2::new(1.0, 1.0),
                    Vector2::new(0.0, 1.0),
                ],
            },
        ]
    }

    #[test]
    fn point_rows_index_within_outline() {
        let tables = build_tables(&sample_outlines(), 1.0, 1.0);
        assert_eq!(tables.points.len(), 7);
        let indices: Vec<usize> = tables.points.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 0, 1, 2, 3]);
        for row in &tables.points {
            assert_eq!(row.position[2], 0.0);
            assert_eq!(row.weight, 1.0);
            assert_eq!(row.normal, [0.0, 0.0, 1.0]);
            assert!(row.groups.is_empty());
        }
    }

    #[test]
    fn vertex_rows_track_owner_and_clamp_uvs() {
        let tables = build_tables(&sample_outlines(), 1.0, 1.0);
        assert_eq!(tables.vertices.len(), 7);
        assert_eq!(tables.vertices[0].index, 0);
        assert_eq!(tables.vertices[3].index, 1);
        assert_eq!(tables.vertices[3].vindex, 0);
        for row in &tables.vertices {
            assert!(row.uv[0] >= 0.0 && row.uv[0] <= 1.0);
            assert!(row.uv[1] >= 0.0 && row.uv[1] <= 1.0);
            assert_eq!(row.uv[2], 0.0);
        }
        // y = -0.5 would map below 0 unclamped.
        assert_eq!(tables.vertices[0].uv[1], 0.0);
    }

    #[test]
    fn uvs_clamped_for_coordinates_beyond_bounds() {
        let outlines = vec![Outline {
            kind: OutlineKind::Connector,
            points: vec![
                Vector2::new(5.0, -3.0),
                Vector2::new(-1.0, 2.0),
                Vector2::new(0.25, 0.25),
                Vector2::new(0.5, 0.5),
            ],
        }];
        let tables = build_tables(&outlines, 2.0, 1.0);
        assert_eq!(tables.vertices[0].uv, [1.0, 0.0, 0.0]);
        assert_eq!(tables.vertices[1].uv, [0.0, 1.0, 0.0]);
        assert_eq!(tables.vertices[2].uv, [0.125, 0.25, 0.0]);
    }

    #[test]
    fn primitive_rows_are_contiguous_and_closed() {
        let tables = build_tables(&sample_outlines(), 1.0, 1.0);
        assert_eq!(tables.primitives.len(), 2);
        assert_eq!(tables.primitives[0].vertices, vec![0, 1, 2]);
        assert_eq!(tables.primitives[1].vertices, vec![3, 4, 5, 6]);
        for prim in &tables.primitives {
            assert_eq!(prim.close, 1);
            assert!(prim.groups.is_empty());
        }
        let row = tables.primitives[1].to_row();
        assert_eq!(row, vec!["1", "3 4 5 6", "1", ""]);
    }

    #[test]
    fn textual_rows_match_headers() {
        let tables = build_tables(&sample_outlines(), 1.0, 1.0);
        assert_eq!(tables.points[0].to_row().len(), POINTS_HEADER.len());
        assert_eq!(tables.vertices[0].to_row().len(), VERTICES_HEADER.len());
        assert_eq!(tables.primitives[0].to_row().len(), PRIMITIVES_HEADER.len());
    }
}
