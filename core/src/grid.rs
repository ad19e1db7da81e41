use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// In-bounds neighbours of a cell, at most 8.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// Rectangular cell storage addressed by `(row, column)`.
///
/// Knows nothing about game rules, only which coordinates exist. Every public
/// accessor checks bounds; the crate-internal ones expect coordinates that
/// already went through [`Grid::validate_coords`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new((rows, columns): Coord2) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        Ok(Self {
            cells: Array2::default((rows, columns).to_nd_index()),
        })
    }

    pub fn size(&self) -> Coord2 {
        shape_of(&self.cells)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, columns) = self.size();
        mult(rows, columns)
    }

    pub fn contains(&self, (row, column): Coord2) -> bool {
        let (rows, columns) = self.size();
        row < rows && column < columns
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cell(coords))
    }

    /// Moore neighbourhood of `coords`, clipped to the board.
    pub fn neighbors(&self, coords: Coord2) -> Result<Neighbors> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords).collect())
    }

    /// Visits every cell in row-major order.
    pub fn for_each_cell(&self, mut visitor: impl FnMut(Coord2, &Cell)) {
        for (coords, cell) in self.iter() {
            visitor(coords, cell);
        }
    }

    /// Row-major iterator over every cell with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        // ndarray iterates standard layout arrays in logical (row-major) order
        self.cells
            .indexed_iter()
            .map(|((row, column), cell)| ((row as Coord, column as Coord), cell))
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn count_in_state(&self, state: CellState) -> CellCount {
        self.count_where(|cell| cell.state == state)
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|&cell| predicate(cell)).count();
        // bounded by rows * columns, which fits by construction
        count as CellCount
    }

    pub(crate) fn cell(&self, coords: Coord2) -> &Cell {
        &self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn count_neighbors(&self, coords: Coord2, predicate: impl Fn(&Cell) -> bool) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| predicate(self.cell(pos)))
            .count();
        // at most 8 neighbours
        count as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn new_rejects_empty_dimensions() {
        let err = GameError::InvalidConfiguration(ConfigError::EmptyBoard);
        assert_eq!(Grid::new((0, 3)), Err(err));
        assert_eq!(Grid::new((3, 0)), Err(err));
    }

    #[test]
    fn fresh_grid_is_hidden_and_mine_free() {
        let grid = Grid::new((2, 3)).unwrap();

        assert_eq!(grid.size(), (2, 3));
        assert_eq!(grid.total_cells(), 6);
        assert_eq!(grid.mine_count(), 0);
        assert_eq!(grid.count_in_state(CellState::Hidden), 6);
    }

    #[test]
    fn get_checks_bounds() {
        let grid = Grid::new((2, 3)).unwrap();

        assert!(grid.get((1, 2)).is_ok());
        assert_eq!(grid.get((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(grid.get((0, 3)), Err(GameError::OutOfBounds));
        assert_eq!(grid.neighbors((5, 5)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn neighbors_are_clipped_to_bounds() {
        let grid = Grid::new((2, 3)).unwrap();

        assert_eq!(grid.neighbors((0, 0)).unwrap().as_slice(), &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.neighbors((0, 1)).unwrap().len(), 5);
    }

    #[test]
    fn for_each_cell_is_row_major() {
        let grid = Grid::new((2, 3)).unwrap();
        let mut seen = Vec::new();

        grid.for_each_cell(|coords, _| seen.push(coords));

        assert_eq!(seen, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
