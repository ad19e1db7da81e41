use super::*;

/// Places a predetermined layout.
///
/// A mine sitting on the first reveal is moved to the first free cell in
/// row-major order, so the first reveal stays safe.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPlacer {
    layout: MineSet,
}

impl FixedPlacer {
    pub fn new(mine_coords: &[Coord2]) -> Self {
        Self {
            layout: mine_coords.iter().copied().collect(),
        }
    }

    pub fn layout(&self) -> &MineSet {
        &self.layout
    }
}

impl MinePlacer for FixedPlacer {
    fn place(&mut self, grid: &mut Grid, mines: CellCount, excluded: Coord2) -> Result<MineSet> {
        check_request(grid, mines, excluded)?;

        if let Some(&coords) = self.layout.iter().find(|&&coords| !grid.contains(coords)) {
            log::debug!("Fixed layout has {:?} outside {:?}", coords, grid.size());
            return Err(GameError::OutOfBounds);
        }

        let actual = self.layout.len() as CellCount;
        if actual != mines {
            return Err(ConfigError::MineCountMismatch {
                requested: mines,
                actual,
            }
            .into());
        }

        let mut chosen = self.layout.clone();
        if chosen.remove(&excluded) {
            let relocated = grid
                .iter()
                .map(|(coords, _)| coords)
                .find(|&coords| coords != excluded && !chosen.contains(&coords));
            // check_request guarantees a free cell besides `excluded`
            if let Some(relocated) = relocated {
                log::debug!("Moved mine from {:?} to {:?}", excluded, relocated);
                chosen.insert(relocated);
            }
        }

        lay_mines(grid, &chosen);
        Ok(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_layout_verbatim() {
        let mut grid = Grid::new((3, 3)).unwrap();

        let placed = FixedPlacer::new(&[(2, 2)]).place(&mut grid, 1, (0, 0)).unwrap();

        assert_eq!(placed, MineSet::from([(2, 2)]));
        assert!(grid.get((2, 2)).unwrap().is_mine());
    }

    #[test]
    fn moves_mine_off_the_first_reveal() {
        let mut grid = Grid::new((2, 2)).unwrap();

        let placed = FixedPlacer::new(&[(0, 0), (0, 1)])
            .place(&mut grid, 2, (0, 0))
            .unwrap();

        assert_eq!(placed, MineSet::from([(0, 1), (1, 0)]));
        assert!(!grid.get((0, 0)).unwrap().is_mine());
    }

    #[test]
    fn rejects_count_mismatch_and_out_of_bounds() {
        let mut grid = Grid::new((2, 2)).unwrap();

        assert_eq!(
            FixedPlacer::new(&[(0, 1)]).place(&mut grid, 2, (0, 0)),
            Err(GameError::InvalidConfiguration(
                ConfigError::MineCountMismatch {
                    requested: 2,
                    actual: 1
                }
            ))
        );
        assert_eq!(
            FixedPlacer::new(&[(5, 0)]).place(&mut grid, 1, (0, 0)),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(grid.mine_count(), 0);
    }
}
