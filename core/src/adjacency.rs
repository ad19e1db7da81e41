use crate::*;

/// Writes the neighbouring mine count of every safe cell.
///
/// Counts derive only from the mine markers, so calling this again on the
/// same layout changes nothing. Mines keep a count of zero, which is never
/// read.
pub fn annotate(grid: &mut Grid) {
    let (rows, columns) = grid.size();
    for row in 0..rows {
        for column in 0..columns {
            let coords = (row, column);
            let count = if grid.cell(coords).is_mine {
                0
            } else {
                grid.count_neighbors(coords, Cell::is_mine)
            };
            grid.cell_mut(coords).adjacent_mines = count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotated(size: Coord2, mines: &[Coord2]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &coords in mines {
            grid.cell_mut(coords).is_mine = true;
        }
        annotate(&mut grid);
        grid
    }

    fn count_at(grid: &Grid, coords: Coord2) -> u8 {
        grid.get(coords).unwrap().adjacent_mines()
    }

    #[test]
    fn counts_match_direct_enumeration() {
        let grid = annotated((4, 5), &[(0, 0), (1, 2), (3, 4), (2, 2)]);

        grid.for_each_cell(|coords, cell| {
            if cell.is_mine() {
                return;
            }
            let expected = grid
                .neighbors(coords)
                .unwrap()
                .iter()
                .filter(|&&pos| grid.get(pos).unwrap().is_mine())
                .count() as u8;
            assert_eq!(cell.adjacent_mines(), expected, "at {:?}", coords);
        });
    }

    #[test]
    fn single_center_mine_surrounds_with_ones() {
        let grid = annotated((3, 3), &[(1, 1)]);

        for coords in grid.neighbors((1, 1)).unwrap() {
            assert_eq!(count_at(&grid, coords), 1);
        }
    }

    #[test]
    fn corner_mine_touches_three_cells() {
        let grid = annotated((3, 3), &[(2, 2)]);

        assert_eq!(count_at(&grid, (1, 1)), 1);
        assert_eq!(count_at(&grid, (1, 2)), 1);
        assert_eq!(count_at(&grid, (2, 1)), 1);
        assert_eq!(count_at(&grid, (0, 0)), 0);

        let total: u32 = grid
            .iter()
            .filter(|(_, cell)| !cell.is_mine())
            .map(|(_, cell)| u32::from(cell.adjacent_mines()))
            .sum();
        // 8 per mine, minus the 5 neighbours a corner loses
        assert_eq!(total, 3);
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let mines = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        let grid = annotated((3, 3), &mines);

        assert_eq!(count_at(&grid, (1, 1)), 8);
    }

    #[test]
    fn annotate_is_idempotent() {
        let mut grid = annotated((5, 5), &[(0, 4), (2, 2), (4, 0)]);
        let once = grid.clone();

        annotate(&mut grid);

        assert_eq!(grid, once);
    }
}
