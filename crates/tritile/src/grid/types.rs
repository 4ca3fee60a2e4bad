//! Shape kinds and their grid.
//!
//! - `ShapeKind`: four tile variants. Discriminant parity encodes the tilt
//!   class used for vertical matching, so the explicit values matter.
//! - `ShapeGrid`: row-major cells with (row, column) accessors.

use std::fmt;

use crate::pattern::PatternError;

/// One tile of the pattern.
///
/// Discriminants are load-bearing: `value % 2 == 0` (TriangleLeft,
/// TrapezoidDown) is the "tilt right" class, the rest tilt left. Vertical
/// adjacency is decided purely by this parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    /// `<` — apex points left.
    TriangleLeft = 0,
    /// `>` — apex points right.
    TriangleRight = 1,
    /// `\ \` — slants down to the right.
    TrapezoidDown = 2,
    /// `/ /` — slants up to the right.
    TrapezoidUp = 3,
}

impl ShapeKind {
    #[inline]
    pub fn is_triangle(self) -> bool {
        matches!(self, Self::TriangleLeft | Self::TriangleRight)
    }

    #[inline]
    pub fn is_trapezoid(self) -> bool {
        !self.is_triangle()
    }

    /// Tilt class for vertical matching: even discriminants slant right.
    #[inline]
    pub fn tilts_right(self) -> bool {
        (self as u8) % 2 == 0
    }

    /// Triangle orientation selected by a row's `triangle_left` flag.
    #[inline]
    pub fn row_triangle(triangle_left: bool) -> Self {
        if triangle_left {
            Self::TriangleLeft
        } else {
            Self::TriangleRight
        }
    }

    /// Outline point count: 3 for triangles, 4 for trapezoids.
    #[inline]
    pub fn point_count(self) -> usize {
        if self.is_triangle() {
            3
        } else {
            4
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::TriangleLeft => "<",
            Self::TriangleRight => ">",
            Self::TrapezoidDown => "\\ \\",
            Self::TrapezoidUp => "/ /",
        };
        f.write_str(glyph)
    }
}

/// Row-major grid of shape kinds.
///
/// Invariants:
/// - At least one row and one column.
/// - Every row has exactly `columns` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeGrid {
    columns: usize,
    cells: Vec<ShapeKind>,
}

impl ShapeGrid {
    /// Build a grid from explicit rows. All rows must be non-empty and of
    /// equal length.
    pub fn from_rows(rows: Vec<Vec<ShapeKind>>) -> Result<Self, PatternError> {
        let columns = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.is_empty() || columns == 0 {
            return Err(PatternError::invalid(
                "grid needs at least one row and one column",
            ));
        }
        if rows.iter().any(|r| r.len() != columns) {
            return Err(PatternError::invalid("grid rows must have equal length"));
        }
        Ok(Self {
            columns,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn with_capacity(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            cells: Vec::with_capacity(rows * columns),
        }
    }

    /// Append a finished row. Callers guarantee `row.len() == columns`.
    pub(crate) fn push_row(&mut self, row: Vec<ShapeKind>) {
        debug_assert_eq!(row.len(), self.columns);
        self.cells.extend(row);
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// Cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()` or `col >= self.columns()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> ShapeKind {
        self.cells[row * self.columns + col]
    }

    /// All cells of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[ShapeKind] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[ShapeKind]> {
        self.cells.chunks_exact(self.columns)
    }
}
