use crate::*;

/// Toggles the flag on an unrevealed cell and returns its new state.
pub fn toggle_flag(grid: &mut Grid, coords: Coord2) -> Result<CellState> {
    let coords = grid.validate_coords(coords)?;
    let cell = grid.cell_mut(coords);

    cell.state = match cell.state {
        CellState::Hidden => CellState::Flagged,
        CellState::Flagged => CellState::Hidden,
        CellState::Revealed => return Err(GameError::AlreadyRevealed),
    };
    Ok(cell.state)
}

/// Flags every hidden neighbour of a revealed number whose unrevealed
/// neighbours must all be mines. Returns the newly flagged cells.
pub fn chord_flag(grid: &mut Grid, coords: Coord2) -> Result<Neighbors> {
    let coords = grid.validate_coords(coords)?;
    let cell = *grid.cell(coords);

    if cell.state != CellState::Revealed || cell.adjacent_mines == 0 {
        return Ok(Neighbors::new());
    }
    if grid.count_neighbors(coords, |cell| cell.state.is_unrevealed()) != cell.adjacent_mines {
        return Ok(Neighbors::new());
    }

    let hidden: Neighbors = grid
        .iter_neighbors(coords)
        .filter(|&pos| grid.cell(pos).state == CellState::Hidden)
        .collect();
    for &pos in &hidden {
        grid.cell_mut(pos).state = CellState::Flagged;
    }
    Ok(hidden)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_between_hidden_and_flagged() {
        let mut grid = Grid::new((2, 2)).unwrap();

        assert_eq!(toggle_flag(&mut grid, (0, 1)), Ok(CellState::Flagged));
        assert_eq!(grid.get((0, 1)).unwrap().state(), CellState::Flagged);
        assert_eq!(toggle_flag(&mut grid, (0, 1)), Ok(CellState::Hidden));
    }

    #[test]
    fn revealed_cells_cannot_be_flagged() {
        let mut grid = Grid::new((2, 2)).unwrap();
        grid.cell_mut((1, 1)).state = CellState::Revealed;

        assert_eq!(toggle_flag(&mut grid, (1, 1)), Err(GameError::AlreadyRevealed));
        assert_eq!(grid.get((1, 1)).unwrap().state(), CellState::Revealed);
    }

    #[test]
    fn flags_are_not_limited_by_mine_count() {
        let mut grid = Grid::new((2, 2)).unwrap();

        for coords in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            toggle_flag(&mut grid, coords).unwrap();
        }

        assert_eq!(grid.count_in_state(CellState::Flagged), 4);
    }

    #[test]
    fn chord_flag_marks_remaining_hidden_neighbors() {
        let mut grid = Grid::new((4, 1)).unwrap();
        grid.cell_mut((0, 0)).is_mine = true;
        grid.cell_mut((2, 0)).is_mine = true;
        annotate(&mut grid);
        reveal(&mut grid, (1, 0)).unwrap();

        let flagged = chord_flag(&mut grid, (1, 0)).unwrap();

        assert_eq!(flagged.as_slice(), &[(0, 0), (2, 0)]);
        assert_eq!(grid.get((2, 0)).unwrap().state(), CellState::Flagged);
    }

    #[test]
    fn chord_flag_ignores_ambiguous_numbers() {
        let mut grid = Grid::new((3, 3)).unwrap();
        grid.cell_mut((0, 0)).is_mine = true;
        annotate(&mut grid);
        reveal(&mut grid, (1, 1)).unwrap();

        assert!(chord_flag(&mut grid, (1, 1)).unwrap().is_empty());
        assert_eq!(grid.count_in_state(CellState::Flagged), 0);
    }
}
