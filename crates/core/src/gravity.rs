//! Gravity - compacts each column so gems fall into empty cells below
//!
//! Each column is independent. Scanning from the bottom up, every empty
//! cell searches upward for the nearest gem above it and pulls that gem
//! down, recording the movement for the presentation layer. The repeated
//! nearest-above search (rather than one linear compaction sweep) matches
//! the movement list the animation expects; the final arrangement is a
//! stable downward compaction either way.

use tui_match_types::{CellPos, Gem};

use crate::grid::Grid;

/// One recorded gem movement, used to animate a fall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallMove {
    pub gem: Gem,
    pub from: CellPos,
    pub to: CellPos,
}

/// Let every gem fall as far down its column as it can.
///
/// Destinations are visited in ascending y within each column, columns in
/// ascending x. Returns the movements in that visitation order; tests
/// should assert final grid state, not this order.
pub fn apply_gravity(grid: &mut Grid) -> Vec<FallMove> {
    let mut moves = Vec::new();

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.at(x, y).is_some() {
                continue;
            }
            // Nearest populated cell above this gap, if any.
            for above in (y + 1)..grid.height() {
                if let Some(gem) = grid.at(x, above) {
                    grid.put(x, y, Some(gem));
                    grid.put(x, above, None);
                    moves.push(FallMove {
                        gem,
                        from: CellPos::new(x, above),
                        to: CellPos::new(x, y),
                    });
                    break;
                }
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_match_types::{GemKind, Point};

    fn column_grid(cells: &[Option<GemKind>]) -> Grid {
        let mut grid = Grid::new(1, cells.len() as i32, 1.0, Point::default()).unwrap();
        for (y, kind) in cells.iter().enumerate() {
            grid.set(0, y as i32, kind.map(Gem::new)).unwrap();
        }
        grid
    }

    fn column_kinds(grid: &Grid, x: i32) -> Vec<Option<GemKind>> {
        (0..grid.height())
            .map(|y| grid.get(x, y).unwrap().map(|g| g.kind))
            .collect()
    }

    #[test]
    fn test_column_compacts_downward_preserving_order() {
        use GemKind::{Blue, Red};
        // Index 0 = bottom: [A, _, B, _, _]
        let mut grid = column_grid(&[Some(Red), None, Some(Blue), None, None]);

        let moves = apply_gravity(&mut grid);

        assert_eq!(
            column_kinds(&grid, 0),
            vec![Some(Red), Some(Blue), None, None, None]
        );
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from, CellPos::new(0, 2));
        assert_eq!(moves[0].to, CellPos::new(0, 1));
        assert_eq!(moves[0].gem.kind, Blue);
    }

    #[test]
    fn test_stacked_gaps_each_find_their_own_gem() {
        use GemKind::{Blue, Green, Red};
        // [_, _, A, _, B, C]
        let mut grid = column_grid(&[
            None,
            None,
            Some(Red),
            None,
            Some(Blue),
            Some(Green),
        ]);

        let moves = apply_gravity(&mut grid);

        assert_eq!(
            column_kinds(&grid, 0),
            vec![Some(Red), Some(Blue), Some(Green), None, None, None]
        );
        assert_eq!(moves.len(), 3);
        // Every move targets the lowest gap open at the time it is visited.
        assert_eq!(moves[0].to, CellPos::new(0, 0));
        assert_eq!(moves[1].to, CellPos::new(0, 1));
        assert_eq!(moves[2].to, CellPos::new(0, 2));
    }

    #[test]
    fn test_full_column_is_untouched() {
        use GemKind::Red;
        let mut grid = column_grid(&[Some(Red), Some(Red), Some(Red)]);
        let moves = apply_gravity(&mut grid);
        assert!(moves.is_empty());
        assert_eq!(column_kinds(&grid, 0), vec![Some(Red); 3]);
    }

    #[test]
    fn test_empty_column_is_untouched() {
        let mut grid = column_grid(&[None, None, None]);
        assert!(apply_gravity(&mut grid).is_empty());
    }

    #[test]
    fn test_columns_are_independent() {
        use GemKind::{Blue, Red};
        let mut grid = Grid::new(2, 3, 1.0, Point::default()).unwrap();
        // Column 0: [_, A, _], column 1: [B, _, B]
        grid.set(0, 1, Some(Gem::new(Red))).unwrap();
        grid.set(1, 0, Some(Gem::new(Blue))).unwrap();
        grid.set(1, 2, Some(Gem::new(Blue))).unwrap();

        apply_gravity(&mut grid);

        assert_eq!(column_kinds(&grid, 0), vec![Some(Red), None, None]);
        assert_eq!(column_kinds(&grid, 1), vec![Some(Blue), Some(Blue), None]);
    }
}
