use alloc::collections::BTreeSet;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Set of mine coordinates chosen by a placer, ordered row-major.
pub type MineSet = BTreeSet<Coord2>;

/// Lays mines on a fresh grid once the first reveal is known.
pub trait MinePlacer {
    /// Picks exactly `mines` distinct coordinates other than `excluded`, marks
    /// them on `grid`, and returns them.
    ///
    /// On error the grid is left untouched.
    fn place(&mut self, grid: &mut Grid, mines: CellCount, excluded: Coord2) -> Result<MineSet>;
}

impl<P: MinePlacer + ?Sized> MinePlacer for &mut P {
    fn place(&mut self, grid: &mut Grid, mines: CellCount, excluded: Coord2) -> Result<MineSet> {
        (**self).place(grid, mines, excluded)
    }
}

/// Which cells around the first reveal are kept free of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartPolicy {
    /// Only the revealed cell is guaranteed safe.
    #[default]
    SafeCell,
    /// The revealed cell and its neighbours are safe, so the first reveal
    /// always cascades.
    ZeroCell,
}

/// Largest mine count a grid can hold while keeping one cell safe.
pub const fn max_mines(total_cells: CellCount) -> CellCount {
    total_cells.saturating_sub(1)
}

fn check_request(grid: &Grid, mines: CellCount, excluded: Coord2) -> Result<()> {
    grid.validate_coords(excluded)?;
    let max = max_mines(grid.total_cells());
    if mines > max {
        return Err(ConfigError::TooManyMines {
            requested: mines,
            max,
        }
        .into());
    }
    Ok(())
}

/// Overwrites every cell's mine marker so exactly `mines` are set.
fn lay_mines(grid: &mut Grid, mines: &MineSet) {
    for cell in grid.cells_mut() {
        cell.is_mine = false;
    }
    for &coords in mines {
        grid.cell_mut(coords).is_mine = true;
    }
}
