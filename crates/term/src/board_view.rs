//! Board view: encodes the grid, cursor and selection into a frame.
//!
//! The board is drawn with the highest row on top, matching the core's
//! y-grows-upward convention. Each cell is three columns wide; the cursor
//! cell is bracketed, the selected cell is parenthesized.

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_match_core::{Grid, Phase, StepOutput};
use tui_match_types::{CellPos, Effect, GemKind, StepTimings};

/// What the runner wants on screen besides the grid itself.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub cursor: CellPos,
    pub phase: Phase,
}

/// Terminal color for a gem kind.
pub fn gem_color(kind: GemKind) -> Color {
    match kind {
        GemKind::Red => Color::Red,
        GemKind::Orange => Color::Rgb { r: 255, g: 150, b: 40 },
        GemKind::Yellow => Color::Yellow,
        GemKind::Green => Color::Green,
        GemKind::Blue => Color::Blue,
        GemKind::Purple => Color::Magenta,
    }
}

/// Glyph for a gem kind (color-blind fallback: initials).
pub fn gem_glyph(kind: GemKind) -> char {
    match kind {
        GemKind::Red => 'R',
        GemKind::Orange => 'O',
        GemKind::Yellow => 'Y',
        GemKind::Green => 'G',
        GemKind::Blue => 'B',
        GemKind::Purple => 'P',
    }
}

/// How long the presentation lingers on one pipeline step.
///
/// Removals and spawns accumulate per cell; movements animate within the
/// longest single duration of the step.
pub fn step_delay(out: &StepOutput, timings: StepTimings) -> f32 {
    let mut per_cell = 0.0f32;
    let mut longest_move = 0.0f32;
    for effect in &out.effects {
        match effect {
            Effect::Moved { duration, .. } => longest_move = longest_move.max(*duration),
            Effect::Removed { .. } => per_cell += timings.explode_per_cell,
            Effect::Spawned { .. } => per_cell += timings.refill_per_cell,
        }
    }
    per_cell + longest_move
}

/// Encode a full frame of crossterm commands for the given board state.
pub fn encode_frame(grid: &Grid, view: ViewState, status: &str) -> Result<Vec<u8>> {
    let mut out: Vec<u8> = Vec::with_capacity(4 * 1024);
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(ResetColor)?;

    let selected = match view.phase {
        Phase::Selected(pos) => Some(pos),
        _ => None,
    };

    // Top row of the grid first.
    for y in (0..grid.height()).rev() {
        let row = (grid.height() - 1 - y) as u16;
        out.queue(cursor::MoveTo(0, row))?;
        for x in 0..grid.width() {
            let pos = CellPos::new(x, y);
            let (open, close) = if pos == view.cursor {
                ('[', ']')
            } else if Some(pos) == selected {
                ('(', ')')
            } else {
                (' ', ' ')
            };

            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(ResetColor)?;
            out.queue(Print(open))?;
            match grid.get(x, y).ok().flatten() {
                Some(gem) => {
                    out.queue(SetForegroundColor(gem_color(gem.kind)))?;
                    if Some(pos) == selected {
                        out.queue(SetAttribute(Attribute::Bold))?;
                    }
                    out.queue(Print(gem_glyph(gem.kind)))?;
                    out.queue(ResetColor)?;
                    out.queue(SetAttribute(Attribute::Reset))?;
                }
                None => {
                    out.queue(Print('.'))?;
                }
            }
            out.queue(Print(close))?;
        }
    }

    out.queue(cursor::MoveTo(0, grid.height() as u16 + 1))?;
    out.queue(Print(status))?;
    out.queue(cursor::MoveTo(0, grid.height() as u16 + 2))?;
    out.queue(Print(
        "arrows/hjkl move  enter/space select  q quit",
    ))?;

    Ok(out)
}
