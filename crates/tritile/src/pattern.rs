//! Parameters, error type, and the one-shot generation pass.
//!
//! The host supplies three numbers (width, height, resolution) and gets back
//! a complete pattern: the shape grid, the outline sequence, and the three
//! output tables. One call is one atomic pass; nothing is retained between
//! calls except the caller-owned RNG.

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{generate_grid, ShapeGrid};
use crate::layout::{layout_points, Outline};
use crate::tables::{build_tables, PatternTables};

/// Error type for the whole crate.
#[derive(Debug)]
pub enum PatternError {
    /// Width/height not finite-positive, or a degenerate grid shape.
    InvalidDimension { reason: String },
}

impl PatternError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { reason } => write!(f, "invalid dimension: {reason}"),
        }
    }
}

impl std::error::Error for PatternError {}

/// Host-facing configuration for one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternParams {
    pub width: f64,
    pub height: f64,
    /// Drives both column count (`max(1, resolution)`) and row count
    /// (`round(resolution / 4) + 1`); the unrelated formulas keep the
    /// pattern roughly square.
    pub resolution: u32,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            resolution: 10,
        }
    }
}

impl PatternParams {
    pub fn validate(&self) -> Result<(), PatternError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PatternError::invalid(format!(
                "width must be finite and > 0 (got {})",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(PatternError::invalid(format!(
                "height must be finite and > 0 (got {})",
                self.height
            )));
        }
        Ok(())
    }

    /// Row count: `round(resolution / 4) + 1`, rounding ties to even so the
    /// established row counts are kept (resolution 10 gives 3 rows, not 4).
    #[inline]
    pub fn rows(&self) -> usize {
        (self.resolution as f64 / 4.0).round_ties_even() as usize + 1
    }

    /// Column count: `max(1, resolution)`.
    #[inline]
    pub fn columns(&self) -> usize {
        (self.resolution as usize).max(1)
    }
}

/// Result of one generation pass.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub grid: ShapeGrid,
    pub outlines: Vec<Outline>,
    width: f64,
    height: f64,
}

impl Pattern {
    /// Flatten the outline sequence into the three host tables.
    pub fn tables(&self) -> PatternTables {
        build_tables(&self.outlines, self.width, self.height)
    }
}

/// Run one full pass: validate, generate the grid, lay out the points.
///
/// Fails fast before producing any output; there is no partial result. The
/// RNG is the only randomness source, so a seeded one makes the pass
/// reproducible.
pub fn generate<R: Rng>(
    params: &PatternParams,
    rng: &mut R,
) -> Result<Pattern, PatternError> {
    params.validate()?;
    let rows = params.rows();
    let columns = params.columns();
    let grid = generate_grid(rows, columns, rng)?;
    let outlines = layout_points(&grid, params.width, params.height)?;
    debug!(
        "generated pattern: {rows} rows x {columns} columns, {} outlines",
        outlines.len()
    );
    Ok(Pattern {
        grid,
        outlines,
        width: params.width,
        height: params.height,
    })
}

/// Reproducible pass from a seed.
pub fn generate_seeded(params: &PatternParams, seed: u64) -> Result<Pattern, PatternError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(params, &mut rng)
}
