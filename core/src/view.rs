use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the presentation layer may know about one cell.
///
/// Mine and count are withheld until the cell is revealed or the game is
/// lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub state: CellState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mine: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacent_mines: Option<u8>,
}

impl CellView {
    pub fn new(cell: &Cell, phase: GamePhase) -> Self {
        let disclosed = cell.state == CellState::Revealed || phase == GamePhase::Lost;
        if !disclosed {
            return Self {
                state: cell.state,
                is_mine: None,
                adjacent_mines: None,
            };
        }
        Self {
            state: cell.state,
            is_mine: Some(cell.is_mine),
            adjacent_mines: (!cell.is_mine).then_some(cell.adjacent_mines),
        }
    }

    pub const fn is_disclosed(&self) -> bool {
        self.is_mine.is_some()
    }
}

/// A cell that became revealed, as reported to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    pub coords: Coord2,
    pub is_mine: bool,
    /// `None` for mines.
    pub adjacent_mines: Option<u8>,
}

impl RevealedCell {
    pub(crate) fn new(coords: Coord2, cell: &Cell) -> Self {
        Self {
            coords,
            is_mine: cell.is_mine,
            adjacent_mines: (!cell.is_mine).then_some(cell.adjacent_mines),
        }
    }
}

/// Result of a reveal request: every cell it revealed, row-major, and the
/// phase afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealReport {
    pub cells: Vec<RevealedCell>,
    pub phase: GamePhase,
}

impl RevealReport {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.iter().any(|cell| cell.coords == coords)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagReport {
    pub coords: Coord2,
    pub state: CellState,
}

/// Whole-board view with the same disclosure rule as [`CellView`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub flags_placed: CellCount,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_game<P>(game: &Game<P>) -> Self {
        let grid = game.grid();
        let phase = game.phase();
        let cells = Array2::from_shape_fn(grid.size().to_nd_index(), |(row, column)| {
            CellView::new(grid.cell((row as Coord, column as Coord)), phase)
        });

        Self {
            config: game.config(),
            phase,
            flags_placed: game.flags_placed(),
            triggered_mine: game.triggered_mine(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&CellView> {
        self.cells.get(coords.to_nd_index())
    }
}
