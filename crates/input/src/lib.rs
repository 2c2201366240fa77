//! Terminal input module.
//!
//! Maps `crossterm` key events onto cursor movements and a confirm action.
//! The engine itself only understands "select at world point"; the runner
//! turns the confirmed cursor cell into a world point before handing it to
//! the core.

pub mod map;

pub use tui_match_types as types;

pub use map::{handle_key_event, should_quit, CursorAction};
