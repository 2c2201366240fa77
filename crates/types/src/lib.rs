//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions
pub const DEFAULT_GRID_WIDTH: i32 = 8;
pub const DEFAULT_GRID_HEIGHT: i32 = 8;

/// Default world-space cell size
pub const DEFAULT_CELL_SIZE: f32 = 1.0;

/// Default presentation delays per effect category (seconds)
pub const DEFAULT_SWAP_SECS: f32 = 0.5;
pub const DEFAULT_EXPLODE_STEP_SECS: f32 = 0.1;
pub const DEFAULT_FALL_STEP_SECS: f32 = 0.1;
pub const DEFAULT_REFILL_STEP_SECS: f32 = 0.1;

/// Gem kinds (match categories)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemKind {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl GemKind {
    /// All kinds, in palette order
    pub const ALL: [GemKind; 6] = [
        GemKind::Red,
        GemKind::Orange,
        GemKind::Yellow,
        GemKind::Green,
        GemKind::Blue,
        GemKind::Purple,
    ];

    /// Parse gem kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(GemKind::Red),
            "orange" => Some(GemKind::Orange),
            "yellow" => Some(GemKind::Yellow),
            "green" => Some(GemKind::Green),
            "blue" => Some(GemKind::Blue),
            "purple" => Some(GemKind::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GemKind::Red => "red",
            GemKind::Orange => "orange",
            GemKind::Yellow => "yellow",
            GemKind::Green => "green",
            GemKind::Blue => "blue",
            GemKind::Purple => "purple",
        }
    }
}

/// A gem placed in one grid cell.
///
/// Gems carry no position of their own; position is implied by the cell
/// that holds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gem {
    pub kind: GemKind,
}

impl Gem {
    pub fn new(kind: GemKind) -> Self {
        Self { kind }
    }
}

/// Cell on the grid (None = empty, Some = holds a gem)
pub type Cell = Option<Gem>;

/// Integer grid coordinate. (0, 0) is the bottom-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// World-space position (cell centers, input points)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Per-step presentation delays (seconds).
///
/// These are what the presentation layer waits between pipeline steps;
/// the core never sleeps on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTimings {
    pub swap: f32,
    pub explode_per_cell: f32,
    pub fall_per_move: f32,
    pub refill_per_cell: f32,
}

impl Default for StepTimings {
    fn default() -> Self {
        Self {
            swap: DEFAULT_SWAP_SECS,
            explode_per_cell: DEFAULT_EXPLODE_STEP_SECS,
            fall_per_move: DEFAULT_FALL_STEP_SECS,
            refill_per_cell: DEFAULT_REFILL_STEP_SECS,
        }
    }
}

/// Visual effect emitted by one pipeline step, consumed by the
/// presentation collaborator in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// A gem travels from one cell center to another (swap or fall).
    Moved {
        gem: Gem,
        from: CellPos,
        to: CellPos,
        duration: f32,
    },
    /// A matched gem leaves the board.
    Removed { gem: Gem, at: CellPos },
    /// A refill gem appears in a cell.
    Spawned { gem: Gem, at: CellPos },
}

/// Discrete audio cue. Purely observational; never feeds back into
/// the core state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Select,
    Deselect,
    MatchFound,
    NoMatch,
    Pop,
    Woosh,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Select => "select",
            Cue::Deselect => "deselect",
            Cue::MatchFound => "match_found",
            Cue::NoMatch => "no_match",
            Cue::Pop => "pop",
            Cue::Woosh => "woosh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gem_kind_str_roundtrip() {
        for kind in GemKind::ALL {
            assert_eq!(GemKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(GemKind::from_str("RED"), Some(GemKind::Red));
        assert_eq!(GemKind::from_str("chartreuse"), None);
    }

    #[test]
    fn test_default_timings() {
        let t = StepTimings::default();
        assert_eq!(t.swap, 0.5);
        assert_eq!(t.explode_per_cell, 0.1);
        assert_eq!(t.fall_per_move, 0.1);
        assert_eq!(t.refill_per_cell, 0.1);
    }
}
