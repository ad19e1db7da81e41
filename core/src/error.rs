use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Too many mines, requested {requested} but at most {max} fit")]
    TooManyMines { requested: CellCount, max: CellCount },
    #[error("Mine layout has {actual} mines but {requested} were requested")]
    MineCountMismatch { requested: CellCount, actual: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Whether the call was well-formed but not allowed in the current state.
    pub const fn is_invalid_operation(self) -> bool {
        matches!(self, Self::AlreadyRevealed | Self::AlreadyEnded)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
