//! Core match-three logic - pure, deterministic, and testable
//!
//! This crate contains the grid, the match and gravity rules, and the turn
//! state machine. It performs no I/O and drives no timing of its own,
//! making it:
//!
//! - **Deterministic**: the RNG is injected and seedable; the same seed
//!   produces the same fill and refill sequences
//! - **Testable**: every rule has unit coverage, plus property tests
//! - **Portable**: runs headless or behind any presentation layer
//!
//! # Module Structure
//!
//! - [`grid`]: cell storage and the cell/world coordinate mapping
//! - [`matches`]: run detection (three or more same-kind gems in a line)
//! - [`gravity`]: per-column downward compaction with movement records
//! - [`turn`]: the selection/swap/resolve state machine and effect stream
//! - [`config`]: the board configuration surface
//! - [`rng`]: seedable gem generator
//! - [`error`]: fatal core errors
//!
//! # Turn pipeline
//!
//! A turn runs swap, match-detect, explode, fall, refill, strictly in that
//! order, as resumable steps. The controller rejects input while a turn is
//! resolving and never cascades: runs created by falling or refilled gems
//! wait for the next player move.
//!
//! # Example
//!
//! ```
//! use tui_match_core::{BoardConfig, TurnController};
//! use tui_match_types::CellPos;
//!
//! let mut game = TurnController::new(BoardConfig::default()).unwrap();
//! game.start();
//!
//! game.select_cell(CellPos::new(3, 3));
//! game.select_cell(CellPos::new(4, 3));
//! let output = game.resolve_to_idle();
//!
//! assert!(game.grid().is_settled());
//! assert!(!output.cues.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod gravity;
pub mod grid;
pub mod matches;
pub mod rng;
pub mod turn;

pub use tui_match_types as types;

// Re-export commonly used types for convenience
pub use config::BoardConfig;
pub use error::CoreError;
pub use gravity::{apply_gravity, FallMove};
pub use grid::Grid;
pub use matches::{find_matches, MatchSet};
pub use rng::GemRng;
pub use turn::{Phase, StepOutput, TurnController};
