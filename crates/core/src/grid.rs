//! Grid module - manages the board cells and the cell/world mapping
//!
//! The grid is a width x height container where each cell is empty or holds
//! a gem. Uses a flat vector for cache locality; callers always address
//! cells by (x, y), cells know nothing about their own position.
//! Coordinates: (0, 0) is the bottom-left cell, y grows upward.

use tui_match_types::{Cell, CellPos, Point};

use crate::error::CoreError;

/// The game grid plus its world-space placement (origin and cell size).
///
/// The placement is pure configuration: it only exists so the presentation
/// layer can be told where cell centers sit.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: f32,
    origin: Point,
    /// Flat cell storage, row-major from the bottom: index = y * width + x
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid.
    ///
    /// Fails with [`CoreError::InvalidDimension`] when either dimension is
    /// not positive.
    pub fn new(width: i32, height: i32, cell_size: f32, origin: Point) -> Result<Self, CoreError> {
        if width <= 0 || height <= 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cell_size,
            origin,
            cells: vec![None; (width * height) as usize],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get cell at (x, y).
    ///
    /// Fails with [`CoreError::OutOfBounds`] outside the grid; never clamps.
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, CoreError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(CoreError::OutOfBounds { x, y })
    }

    /// Overwrite cell at (x, y). No side effects beyond storage.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), CoreError> {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                Ok(())
            }
            None => Err(CoreError::OutOfBounds { x, y }),
        }
    }

    /// Infallible access for in-crate callers that have already validated
    /// coordinates. An out-of-range hit here is a programming error.
    #[inline]
    pub(crate) fn at(&self, x: i32, y: i32) -> Cell {
        let idx = (y * self.width + x) as usize;
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn put(&mut self, x: i32, y: i32, cell: Cell) {
        let idx = (y * self.width + x) as usize;
        self.cells[idx] = cell;
    }

    /// Check if (x, y) lies inside the grid.
    pub fn in_bounds(&self, pos: CellPos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Check if position is inside the grid and empty.
    pub fn is_empty(&self, pos: CellPos) -> bool {
        matches!(self.get(pos.x, pos.y), Ok(None))
    }

    /// Check if position is inside the grid and holds a gem.
    pub fn is_occupied(&self, pos: CellPos) -> bool {
        matches!(self.get(pos.x, pos.y), Ok(Some(_)))
    }

    /// A settled grid has no empty cells. A full turn resolution must leave
    /// the grid settled before new input is accepted.
    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// World-space center of cell (x, y).
    ///
    /// `origin + (x, y) * cell_size + half-cell offset`, a pure function of
    /// the grid configuration. Not bounds-checked: the mapping extends
    /// beyond the grid and callers validate coordinates separately.
    pub fn world_position(&self, x: i32, y: i32) -> Point {
        Point::new(
            self.origin.x + x as f32 * self.cell_size + self.cell_size * 0.5,
            self.origin.y + y as f32 * self.cell_size + self.cell_size * 0.5,
        )
    }

    /// Inverse of [`world_position`](Self::world_position): the cell whose
    /// square contains `point`. May return out-of-range coordinates, which
    /// callers must validate before use.
    pub fn cell_from_world(&self, point: Point) -> CellPos {
        CellPos::new(
            ((point.x - self.origin.x) / self.cell_size).floor() as i32,
            ((point.y - self.origin.y) / self.cell_size).floor() as i32,
        )
    }

    /// Raw cell slice, row-major from the bottom row up (for views/tests).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
