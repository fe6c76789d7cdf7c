use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a single game.
///
/// A game is `InProgress` from construction. Valid transitions:
/// - `InProgress -> Won` when the last safe cell is revealed
/// - `InProgress -> Lost` when a mine is revealed
///
/// Both end states are terminal; mutating calls on a finished game fail
/// with [`GameError::AlreadyEnded`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Complete state of one game: the hidden mine layout, the derived clue
/// grid, and the player-visible board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    mines: MineLayout,
    clues: ClueLayout,
    cells: Array2<CellState>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(mines: MineLayout) -> Self {
        let size = mines.size();
        let clues = ClueLayout::from_mine_layout(&mines);
        Self {
            mines,
            clues,
            cells: Array2::default(size.to_nd_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            status: Default::default(),
            triggered_mine: None,
        }
    }

    /// Starts a game on a freshly generated board. The same `config` and
    /// `seed` always produce the same game.
    pub fn generate(config: BoardConfig, seed: u64) -> Self {
        Self::new(BernoulliGenerator::new(seed).generate(config))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    pub fn size(&self) -> Coord2 {
        self.mines.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mines.mine_count()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.mines.safe_cell_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn mines_left(&self) -> isize {
        (self.mines.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    pub fn clue_at(&self, coords: Coord2) -> Clue {
        self.clues[coords]
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mines.contains_mine(coords)
    }

    /// The mine that ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use CellState::*;
        use FlagOutcome::*;

        let coords = self.mines.validate_coords(coords)?;
        self.check_in_progress()?;

        Ok(match self.cells[coords.to_nd_index()] {
            Hidden => {
                self.cells[coords.to_nd_index()] = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                self.cells[coords.to_nd_index()] = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed(_) => NoChange,
        })
    }

    /// Reveals a cell and, from a zero clue, its whole connected zero region
    /// plus the numbered boundary. The report lists exactly the cells that
    /// changed to revealed; a mine hit reveals nothing and loses the game.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        use RevealOutcome::*;

        let coords = self.mines.validate_coords(coords)?;
        self.check_in_progress()?;

        Ok(
            match (self.cells[coords.to_nd_index()], self.clues[coords]) {
                (CellState::Hidden, Clue::Mine) => {
                    self.triggered_mine = Some(coords);
                    self.finish(false);
                    RevealReport {
                        revealed: BTreeSet::new(),
                        outcome: HitMine,
                    }
                }
                (CellState::Hidden, Clue::Adjacent(count)) => {
                    log::debug!("Open cell at {:?}, adjacent mines: {}", coords, count);
                    let mut revealed = BTreeSet::from([coords]);
                    self.open_cell(coords, count);

                    if count == 0 {
                        self.expand_zero_region(coords, &mut revealed);
                    }

                    let outcome = if self.revealed_count == Saturating(self.mines.safe_cell_count())
                    {
                        self.finish(true);
                        Won
                    } else {
                        Revealed
                    };
                    RevealReport { revealed, outcome }
                }
                _ => RevealReport {
                    revealed: BTreeSet::new(),
                    outcome: NoChange,
                },
            },
        )
    }

    fn open_cell(&mut self, coords: Coord2, adjacent_mines: u8) {
        self.cells[coords.to_nd_index()] = CellState::Revealed(adjacent_mines);
        self.revealed_count += 1;
    }

    /// Breadth-first worklist expansion from a just-opened zero cell. Depth
    /// is bounded by the board size, never by the call stack.
    fn expand_zero_region(&mut self, start: Coord2, revealed: &mut BTreeSet<Coord2>) {
        let mut visited = BTreeSet::from([start]);
        let mut to_visit: VecDeque<_> = self
            .iter_neighbors(start)
            .filter(|&pos| matches!(self.cells[pos.to_nd_index()], CellState::Hidden))
            .collect();
        log::trace!(
            "Starting flood fill from {:?}, initial neighbors: {:?}",
            start,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            if !matches!(self.cells[visit_coords.to_nd_index()], CellState::Hidden) {
                continue;
            }

            // a zero cell has no mine neighbors, so the queue never holds one
            let Clue::Adjacent(count) = self.clues[visit_coords] else {
                continue;
            };

            log::trace!(
                "Flood opened cell at {:?}, adjacent mines: {}",
                visit_coords,
                count
            );
            self.open_cell(visit_coords, count);
            revealed.insert(visit_coords);

            if count == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| matches!(self.cells[pos.to_nd_index()], CellState::Hidden))
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn finish(&mut self, won: bool) {
        if self.status.is_finished() {
            return;
        }

        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
        log::debug!(
            "Game finished, won: {}, revealed {} of {} safe cells",
            won,
            self.revealed_count.0,
            self.mines.safe_cell_count()
        );
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.mines.size())
    }
}
