//! Match detection - finds runs of three or more same-kind gems
//!
//! Scans a settled grid row by row and column by column with a window of
//! three. Every member of every qualifying window lands in the result set,
//! which dedupes the overlap inside longer runs and at L-intersections.
//! The finder never loops or cascades; re-resolution is the caller's call.

use tui_match_types::CellPos;

use crate::grid::Grid;

/// Set of unique matched cell coordinates.
///
/// Keeps insertion order (rows-then-columns scan order) so effect emission
/// is deterministic. Order does not affect the final grid state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    cells: Vec<CellPos>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a coordinate, ignoring duplicates.
    pub fn insert(&mut self, pos: CellPos) {
        if !self.cells.contains(&pos) {
            self.cells.push(pos);
        }
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells.iter().copied()
    }

    /// Matched coordinates in insertion order.
    pub fn positions(&self) -> &[CellPos] {
        &self.cells
    }
}

/// Find every cell participating in a horizontal or vertical run of three
/// or more gems of the same kind.
///
/// Empty cells never participate and break the run they would have
/// extended. Pure read; calling it twice on an unmodified grid returns the
/// same set.
pub fn find_matches(grid: &Grid) -> MatchSet {
    let mut matches = MatchSet::new();
    let width = grid.width();
    let height = grid.height();

    // Horizontal
    for y in 0..height {
        for x in 0..width.saturating_sub(2) {
            let (Some(a), Some(b), Some(c)) = (grid.at(x, y), grid.at(x + 1, y), grid.at(x + 2, y))
            else {
                continue;
            };
            if a.kind == b.kind && b.kind == c.kind {
                matches.insert(CellPos::new(x, y));
                matches.insert(CellPos::new(x + 1, y));
                matches.insert(CellPos::new(x + 2, y));
            }
        }
    }

    // Vertical
    for x in 0..width {
        for y in 0..height.saturating_sub(2) {
            let (Some(a), Some(b), Some(c)) = (grid.at(x, y), grid.at(x, y + 1), grid.at(x, y + 2))
            else {
                continue;
            };
            if a.kind == b.kind && b.kind == c.kind {
                matches.insert(CellPos::new(x, y));
                matches.insert(CellPos::new(x, y + 1));
                matches.insert(CellPos::new(x, y + 2));
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_match_types::{Gem, GemKind, Point};

    fn empty_grid(w: i32, h: i32) -> Grid {
        Grid::new(w, h, 1.0, Point::default()).unwrap()
    }

    fn place(grid: &mut Grid, x: i32, y: i32, kind: GemKind) {
        grid.set(x, y, Some(Gem::new(kind))).unwrap();
    }

    fn fill_row(grid: &mut Grid, y: i32, kinds: &[GemKind]) {
        for (x, kind) in kinds.iter().enumerate() {
            place(grid, x as i32, y, *kind);
        }
    }

    #[test]
    fn test_horizontal_run_of_three() {
        use GemKind::{Blue, Red};
        let mut grid = empty_grid(4, 1);
        fill_row(&mut grid, 0, &[Red, Red, Red, Blue]);

        let matches = find_matches(&grid);
        assert_eq!(matches.len(), 3);
        assert!(matches.contains(CellPos::new(0, 0)));
        assert!(matches.contains(CellPos::new(1, 0)));
        assert!(matches.contains(CellPos::new(2, 0)));
        assert!(!matches.contains(CellPos::new(3, 0)));
    }

    #[test]
    fn test_non_contiguous_duplicates_do_not_match() {
        use GemKind::{Blue, Red};
        let mut grid = empty_grid(4, 1);
        fill_row(&mut grid, 0, &[Red, Red, Blue, Red]);

        assert!(find_matches(&grid).is_empty());
    }

    #[test]
    fn test_run_of_four_matches_all_members() {
        let mut grid = empty_grid(5, 1);
        fill_row(&mut grid, 0, &[GemKind::Green; 4]);
        place(&mut grid, 4, 0, GemKind::Red);

        let matches = find_matches(&grid);
        assert_eq!(matches.len(), 4);
        for x in 0..4 {
            assert!(matches.contains(CellPos::new(x, 0)));
        }
    }

    #[test]
    fn test_vertical_run_of_three() {
        let mut grid = empty_grid(3, 4);
        for y in 1..4 {
            place(&mut grid, 2, y, GemKind::Purple);
        }

        let matches = find_matches(&grid);
        assert_eq!(matches.len(), 3);
        for y in 1..4 {
            assert!(matches.contains(CellPos::new(2, y)));
        }
    }

    #[test]
    fn test_l_intersection_shares_corner_once() {
        // Horizontal run along y=0 and vertical run along x=0 of the same
        // kind, meeting at (0, 0).
        let mut grid = empty_grid(3, 3);
        for x in 0..3 {
            place(&mut grid, x, 0, GemKind::Yellow);
        }
        for y in 1..3 {
            place(&mut grid, 0, y, GemKind::Yellow);
        }

        let matches = find_matches(&grid);
        // 3 horizontal + 3 vertical - 1 shared corner
        assert_eq!(matches.len(), 5);
        assert!(matches.contains(CellPos::new(0, 0)));
    }

    #[test]
    fn test_empty_cell_breaks_run() {
        let mut grid = empty_grid(5, 1);
        place(&mut grid, 0, 0, GemKind::Red);
        place(&mut grid, 1, 0, GemKind::Red);
        // (2, 0) left empty
        place(&mut grid, 3, 0, GemKind::Red);
        place(&mut grid, 4, 0, GemKind::Red);

        assert!(find_matches(&grid).is_empty());
    }

    #[test]
    fn test_idempotent_on_unmodified_grid() {
        use GemKind::{Blue, Green, Red};
        let mut grid = empty_grid(4, 4);
        fill_row(&mut grid, 0, &[Red, Red, Red, Blue]);
        fill_row(&mut grid, 1, &[Blue, Green, Blue, Green]);
        fill_row(&mut grid, 2, &[Green, Blue, Green, Blue]);
        fill_row(&mut grid, 3, &[Blue, Green, Blue, Green]);

        let first = find_matches(&grid);
        let second = find_matches(&grid);
        assert_eq!(first, second);
    }

    #[test]
    fn test_grid_narrower_than_three() {
        let mut grid = empty_grid(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                place(&mut grid, x, y, GemKind::Red);
            }
        }
        assert!(find_matches(&grid).is_empty());
    }

    #[test]
    fn test_match_set_dedupes() {
        let mut set = MatchSet::new();
        set.insert(CellPos::new(1, 1));
        set.insert(CellPos::new(1, 1));
        set.insert(CellPos::new(2, 1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.positions(), &[CellPos::new(1, 1), CellPos::new(2, 1)]);
    }
}
