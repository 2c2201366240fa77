//! Turn controller - the game-loop state machine
//!
//! Owns the grid, the selection, and the RNG, and runs the turn pipeline:
//! swap, match-detect, explode, fall, refill. The pipeline is a resumable
//! step machine: selecting the second gem enters `Resolving` and performs
//! the swap; the caller then drives [`TurnController::advance`] through the
//! remaining stages, interleaving its own presentation waits between calls.
//! Every step is synchronous and advances the authoritative grid state
//! immediately; the presentation layer catches up visually.
//!
//! Two reference behaviors are preserved on purpose (see DESIGN.md):
//! swaps are not validated for adjacency, and a run created by fall or
//! refill is not auto-resolved. It persists until the next player move.

use tracing::debug;
use tui_match_types::{CellPos, Cue, Effect, GemKind, Point, StepTimings};

use crate::config::BoardConfig;
use crate::error::CoreError;
use crate::gravity::apply_gravity;
use crate::grid::Grid;
use crate::matches::find_matches;
use crate::rng::GemRng;

/// Controller phase. Input is only accepted in `Idle` and `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selected(CellPos),
    Resolving,
}

/// Everything one pipeline step produced: visual effects for the
/// presentation collaborator and cues for the audio collaborator, both in
/// emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutput {
    pub effects: Vec<Effect>,
    pub cues: Vec<Cue>,
}

impl StepOutput {
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.cues.is_empty()
    }

    fn append(&mut self, mut other: StepOutput) {
        self.effects.append(&mut other.effects);
        self.cues.append(&mut other.cues);
    }
}

/// Pending pipeline stage while `Resolving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Swap { a: CellPos, b: CellPos },
    Explode,
    Fall,
    Refill,
}

/// The turn-resolution state machine.
pub struct TurnController {
    grid: Grid,
    rng: GemRng,
    palette: Vec<GemKind>,
    timings: StepTimings,
    phase: Phase,
    stage: Option<Stage>,
}

impl TurnController {
    /// Create a controller with an empty grid.
    ///
    /// Call [`start`](Self::start) to perform the initial fill.
    pub fn new(config: BoardConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height, config.cell_size, config.origin)?;
        Ok(Self {
            grid,
            rng: GemRng::new(config.seed),
            palette: config.palette,
            timings: config.timings,
            phase: Phase::Idle,
            stage: None,
        })
    }

    /// Create a controller over an existing board layout.
    ///
    /// The grid is taken as-is (its own dimensions win); palette, timings
    /// and seed come from `config`. Used for predefined boards.
    pub fn from_grid(grid: Grid, config: &BoardConfig) -> Result<Self, CoreError> {
        if config.palette.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        Ok(Self {
            grid,
            rng: GemRng::new(config.seed),
            palette: config.palette.clone(),
            timings: config.timings,
            phase: Phase::Idle,
            stage: None,
        })
    }

    /// Fill every empty cell with a random gem, emitting a `Spawned` effect
    /// per cell in column-major ascending order.
    pub fn start(&mut self) -> StepOutput {
        let mut out = StepOutput::default();
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                if self.grid.at(x, y).is_none() {
                    let gem = self.rng.draw(&self.palette);
                    self.grid.put(x, y, Some(gem));
                    out.effects.push(Effect::Spawned {
                        gem,
                        at: CellPos::new(x, y),
                    });
                }
            }
        }
        out
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn timings(&self) -> StepTimings {
        self.timings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_resolving(&self) -> bool {
        self.phase == Phase::Resolving
    }

    /// Handle a "select at world point" input event.
    ///
    /// Converts the point to a cell coordinate and validates it; anything
    /// out of range is ignored.
    pub fn select_at_world(&mut self, point: Point) -> StepOutput {
        let pos = self.grid.cell_from_world(point);
        self.select_cell(pos)
    }

    /// Handle selection of a grid cell.
    ///
    /// Invalid input (out of range, empty cell, or any input while a turn
    /// resolves) is a no-op, not an error.
    pub fn select_cell(&mut self, pos: CellPos) -> StepOutput {
        if self.phase == Phase::Resolving {
            debug!(x = pos.x, y = pos.y, "input ignored while resolving");
            return StepOutput::default();
        }
        if !self.grid.in_bounds(pos) || self.grid.is_empty(pos) {
            debug!(x = pos.x, y = pos.y, "select ignored: no gem at cell");
            return StepOutput::default();
        }

        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Selected(pos);
                StepOutput {
                    effects: Vec::new(),
                    cues: vec![Cue::Select],
                }
            }
            Phase::Selected(current) if current == pos => {
                self.phase = Phase::Idle;
                StepOutput {
                    effects: Vec::new(),
                    cues: vec![Cue::Deselect],
                }
            }
            Phase::Selected(current) => {
                // Second gem picked: the turn begins with the swap step.
                // Adjacency is deliberately not checked.
                self.phase = Phase::Resolving;
                self.stage = Some(Stage::Swap { a: current, b: pos });
                self.advance()
            }
            Phase::Resolving => unreachable!("guarded above"),
        }
    }

    /// Execute the next pipeline step.
    ///
    /// Returns that step's effects and cues; a no-op outside `Resolving`.
    /// The caller may wait between calls (animation pacing) without
    /// desynchronizing the grid: state is already advanced on return.
    pub fn advance(&mut self) -> StepOutput {
        let Some(stage) = self.stage else {
            return StepOutput::default();
        };
        match stage {
            Stage::Swap { a, b } => self.step_swap(a, b),
            Stage::Explode => self.step_explode(),
            Stage::Fall => self.step_fall(),
            Stage::Refill => self.step_refill(),
        }
    }

    /// Drain the pipeline to `Idle`, concatenating every remaining step's
    /// output. Convenience for headless use and tests.
    pub fn resolve_to_idle(&mut self) -> StepOutput {
        let mut out = StepOutput::default();
        while self.is_resolving() {
            out.append(self.advance());
        }
        out
    }

    /// Swap the gems at the two selected cells, unconditionally.
    fn step_swap(&mut self, a: CellPos, b: CellPos) -> StepOutput {
        let gem_a = self.grid.at(a.x, a.y);
        let gem_b = self.grid.at(b.x, b.y);
        self.grid.put(a.x, a.y, gem_b);
        self.grid.put(b.x, b.y, gem_a);

        let mut out = StepOutput::default();
        let duration = self.timings.swap;
        if let Some(gem) = gem_a {
            out.effects.push(Effect::Moved {
                gem,
                from: a,
                to: b,
                duration,
            });
        }
        if let Some(gem) = gem_b {
            out.effects.push(Effect::Moved {
                gem,
                from: b,
                to: a,
                duration,
            });
        }

        self.stage = Some(Stage::Explode);
        out
    }

    /// Detect runs on the post-swap grid and clear every matched cell.
    fn step_explode(&mut self) -> StepOutput {
        let matched = find_matches(&self.grid);

        let mut out = StepOutput::default();
        out.cues.push(if matched.is_empty() {
            Cue::NoMatch
        } else {
            Cue::MatchFound
        });

        for pos in matched.iter() {
            // Matched cells are populated by construction of the finder.
            if let Some(gem) = self.grid.at(pos.x, pos.y) {
                self.grid.put(pos.x, pos.y, None);
                out.effects.push(Effect::Removed { gem, at: pos });
                out.cues.push(Cue::Pop);
            }
        }

        self.stage = Some(Stage::Fall);
        out
    }

    /// One gravity pass over the post-explode grid.
    fn step_fall(&mut self) -> StepOutput {
        let moves = apply_gravity(&mut self.grid);

        let mut out = StepOutput::default();
        let duration = self.timings.fall_per_move;
        for fall in moves {
            out.effects.push(Effect::Moved {
                gem: fall.gem,
                from: fall.from,
                to: fall.to,
                duration,
            });
            out.cues.push(Cue::Woosh);
        }

        self.stage = Some(Stage::Refill);
        out
    }

    /// Populate every remaining empty cell and return to `Idle`.
    ///
    /// No cascade: if the refill happens to create a fresh run, it stays on
    /// the board until the next player move touches it.
    fn step_refill(&mut self) -> StepOutput {
        let mut out = StepOutput::default();
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                if self.grid.at(x, y).is_none() {
                    let gem = self.rng.draw(&self.palette);
                    self.grid.put(x, y, Some(gem));
                    out.effects.push(Effect::Spawned {
                        gem,
                        at: CellPos::new(x, y),
                    });
                    out.cues.push(Cue::Pop);
                }
            }
        }

        self.stage = None;
        self.phase = Phase::Idle;
        out
    }
}
