//! Error types for the core engine.
//!
//! These cover construction-time validation and direct coordinate access.
//! Invalid *player* input (selecting outside the grid, selecting an empty
//! cell, selecting while a turn resolves) is never an error; the controller
//! ignores it.

use thiserror::Error;

/// Fatal core errors. There is no retry policy: every pipeline step is a
/// pure in-memory transformation, so nothing here is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Grid construction with a non-positive dimension.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// Direct coordinate access outside the grid. Never silently clamped;
    /// a clamp would corrupt the match and fall invariants.
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    /// Controller construction with no gem kinds to refill from.
    #[error("gem palette is empty, refill cannot produce gems")]
    EmptyPalette,
}
