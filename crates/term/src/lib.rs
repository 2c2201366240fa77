//! Terminal presentation for the match-three engine.
//!
//! This crate is the presentation collaborator: it draws the grid, the
//! cursor, and the selection, and it decides how long to linger on each
//! pipeline step. The core never waits on it; the board state it renders
//! is already authoritative.

pub mod board_view;
pub mod renderer;

pub use board_view::{encode_frame, gem_color, gem_glyph, step_delay, ViewState};
pub use renderer::TerminalRenderer;
