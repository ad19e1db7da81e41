use alloc::collections::{BTreeSet, VecDeque};
use hashbrown::HashSet;

use crate::*;

/// Cells one reveal turned from hidden to revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    pub cells: BTreeSet<Coord2>,
    pub hit_mine: bool,
}

impl Reveal {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn single(coords: Coord2, hit_mine: bool) -> Self {
        Self {
            cells: BTreeSet::from([coords]),
            hit_mine,
        }
    }

    fn merge(&mut self, other: Reveal) {
        self.cells.extend(other.cells);
        self.hit_mine |= other.hit_mine;
    }
}

/// Reveals `start`, cascading through zero cells.
///
/// Only hidden cells are touched: revealing a flagged or revealed cell is a
/// no-op, and the cascade never opens a flagged cell. A mine is revealed on
/// its own. A numbered cell is revealed on its own. A zero cell opens its
/// whole zero region plus the numbered cells bordering it.
pub fn reveal(grid: &mut Grid, start: Coord2) -> Result<Reveal> {
    let start = grid.validate_coords(start)?;
    let cell = *grid.cell(start);

    if cell.state != CellState::Hidden {
        return Ok(Reveal::default());
    }

    if cell.is_mine || cell.adjacent_mines > 0 {
        grid.cell_mut(start).state = CellState::Revealed;
        return Ok(Reveal::single(start, cell.is_mine));
    }

    let mut revealed = BTreeSet::new();
    let mut visited = HashSet::new();
    let mut to_visit = VecDeque::from([start]);
    visited.insert(start);

    while let Some(visit_coords) = to_visit.pop_front() {
        let visit_cell = grid.cell_mut(visit_coords);
        if visit_cell.state != CellState::Hidden {
            continue;
        }
        visit_cell.state = CellState::Revealed;
        let is_zero = visit_cell.is_zero();
        revealed.insert(visit_coords);
        log::trace!("Cascade reveals {:?}", visit_coords);

        if !is_zero {
            continue;
        }
        for neighbor in grid.iter_neighbors(visit_coords) {
            if grid.cell(neighbor).state == CellState::Hidden && visited.insert(neighbor) {
                to_visit.push_back(neighbor);
            }
        }
    }

    log::debug!("Cascade from {:?} revealed {} cells", start, revealed.len());
    Ok(Reveal {
        cells: revealed,
        hit_mine: false,
    })
}

/// Reveals every hidden neighbour of a revealed number whose flags already
/// account for all of its mines. Elsewhere behaves like [`reveal`].
pub fn chord_reveal(grid: &mut Grid, coords: Coord2) -> Result<Reveal> {
    let coords = grid.validate_coords(coords)?;
    let cell = *grid.cell(coords);

    if cell.state != CellState::Revealed {
        return reveal(grid, coords);
    }

    let flagged = grid.count_neighbors(coords, |cell| cell.state == CellState::Flagged);
    if cell.adjacent_mines == 0 || flagged != cell.adjacent_mines {
        return Ok(Reveal::default());
    }

    let mut outcome = Reveal::default();
    for neighbor in grid.iter_neighbors(coords) {
        outcome.merge(reveal(grid, neighbor)?);
    }
    Ok(outcome)
}
