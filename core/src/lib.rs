#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use flag::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use types::*;
pub use view::*;

mod adjacency;
mod cell;
mod engine;
mod error;
mod flag;
mod generator;
mod grid;
mod reveal;
mod types;
mod view;

/// Board shape and mine count for one game.
///
/// Fields are public so configs can come from anywhere (including serde),
/// every entry point re-validates with [`GameConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, columns, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    /// At least one row and column, and at least one cell left without a mine.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        let max = max_mines(self.total_cells());
        if self.mines > max {
            return Err(ConfigError::TooManyMines {
                requested: self.mines,
                max,
            }
            .into());
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}
