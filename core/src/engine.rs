use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::num::Saturating;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No mines placed yet, waiting for the first reveal.
    #[default]
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from the first reveal to a win or loss.
///
/// Sole owner of the grid: every mutation goes through `reveal`,
/// `chord_reveal`, `toggle_flag`, `chord_flag` or `reset`, and each of them
/// either applies completely or returns an error before touching anything.
/// Mines are laid lazily on the first reveal so that cell is never a mine.
#[derive(Clone, Debug)]
pub struct Game<P = RandomPlacer<SmallRng>> {
    config: GameConfig,
    grid: Grid,
    placer: P,
    phase: GamePhase,
    safe_revealed: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    triggered_mine: Option<Coord2>,
}

impl Game {
    /// Game with uniformly random mines drawn from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_placer(config, RandomPlacer::seeded(seed))
    }
}

impl<P> Game<P> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count.0 as isize)
    }

    /// Safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.safe_revealed.0
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn placer(&self) -> &P {
        &self.placer
    }

    /// Everything the presentation layer may know about one cell.
    pub fn query_cell(&self, coords: Coord2) -> Result<CellView> {
        let cell = self.grid.get(coords)?;
        Ok(CellView::new(cell, self.phase))
    }

    pub fn snapshot(&self) -> BoardView {
        BoardView::from_game(self)
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl<P: MinePlacer> Game<P> {
    pub fn with_placer(config: GameConfig, placer: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(config.size())?,
            placer,
            phase: GamePhase::NotStarted,
            safe_revealed: Saturating(0),
            flagged_count: Saturating(0),
            triggered_mine: None,
        })
    }

    /// Discards the board and starts over with `config`.
    ///
    /// An invalid config is rejected and the current game carries on.
    pub fn reset(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        let grid = Grid::new(config.size())?;

        self.config = config;
        self.grid = grid;
        self.phase = GamePhase::NotStarted;
        self.safe_revealed = Saturating(0);
        self.flagged_count = Saturating(0);
        self.triggered_mine = None;
        log::debug!("New game: {:?}", config);
        Ok(())
    }

    /// Starts over with the current configuration.
    pub fn restart(&mut self) -> Result<()> {
        self.reset(self.config)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.grid.cell(coords).state != CellState::Hidden {
            return Ok(self.report(BTreeSet::new()));
        }

        self.ensure_mines(coords)?;
        let outcome = reveal(&mut self.grid, coords)?;
        Ok(self.apply(outcome))
    }

    /// Reveals the neighbours of a satisfied number, see [`chord_reveal`].
    /// Before the first reveal this is a plain reveal.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.phase.is_started() {
            return self.reveal(coords);
        }

        let outcome = chord_reveal(&mut self.grid, coords)?;
        Ok(self.apply(outcome))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagReport> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        let state = toggle_flag(&mut self.grid, coords)?;
        match state {
            CellState::Flagged => self.flagged_count += 1,
            CellState::Hidden => self.flagged_count -= 1,
            CellState::Revealed => {}
        }
        Ok(FlagReport { coords, state })
    }

    /// Flags the hidden neighbours of a number they fully account for.
    pub fn chord_flag(&mut self, coords: Coord2) -> Result<Vec<FlagReport>> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        let flagged = chord_flag(&mut self.grid, coords)?;
        self.flagged_count += flagged.len() as CellCount;
        Ok(flagged
            .into_iter()
            .map(|coords| FlagReport {
                coords,
                state: CellState::Flagged,
            })
            .collect())
    }

    fn ensure_mines(&mut self, first: Coord2) -> Result<()> {
        if self.phase.is_started() {
            return Ok(());
        }

        self.placer.place(&mut self.grid, self.config.mines, first)?;
        annotate(&mut self.grid);
        self.phase = GamePhase::Playing;
        log::debug!(
            "Game started at {:?} with {} mines on {:?}",
            first,
            self.config.mines,
            self.config.size()
        );
        Ok(())
    }

    fn apply(&mut self, outcome: Reveal) -> RevealReport {
        let Reveal {
            mut cells,
            hit_mine,
        } = outcome;

        let safe = cells
            .iter()
            .filter(|&&coords| !self.grid.cell(coords).is_mine)
            .count();
        self.safe_revealed += safe as CellCount;

        if hit_mine {
            self.triggered_mine = cells
                .iter()
                .copied()
                .find(|&coords| self.grid.cell(coords).is_mine);
            cells.extend(self.reveal_all_mines());
            self.end_game(false);
        } else if self.safe_revealed.0 == self.config.safe_cells() {
            self.end_game(true);
        }

        self.report(cells)
    }

    /// Shows every mine after a loss, flagged ones included.
    fn reveal_all_mines(&mut self) -> Vec<Coord2> {
        let mines: Vec<Coord2> = self
            .grid
            .iter()
            .filter(|(_, cell)| cell.is_mine && cell.state != CellState::Revealed)
            .map(|(coords, _)| coords)
            .collect();

        for &coords in &mines {
            let cell = self.grid.cell_mut(coords);
            if cell.state == CellState::Flagged {
                self.flagged_count -= 1;
            }
            cell.state = CellState::Revealed;
        }
        mines
    }

    fn end_game(&mut self, won: bool) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = if won { GamePhase::Won } else { GamePhase::Lost };
        if won {
            self.triggered_mine = None;
        }
        log::debug!("Game over: {:?}", self.phase);
    }

    fn report(&self, cells: BTreeSet<Coord2>) -> RevealReport {
        RevealReport {
            cells: cells
                .into_iter()
                .map(|coords| RevealedCell::new(coords, self.grid.cell(coords)))
                .collect(),
            phase: self.phase,
        }
    }
}
