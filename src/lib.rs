#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Per-cell mine probability used by the stock presets: one cell in six.
pub const DEFAULT_MINE_PROBABILITY: f64 = 1.0 / 6.0;

/// Returns a probability usable by the generator: NaN falls back to the
/// default, anything else is clamped into `[0, 1]`.
pub(crate) fn normalize_mine_probability(p: f64) -> f64 {
    if (0.0..=1.0).contains(&p) {
        p
    } else if p.is_nan() {
        log::warn!(
            "Mine probability is NaN, using default {}",
            DEFAULT_MINE_PROBABILITY
        );
        DEFAULT_MINE_PROBABILITY
    } else {
        log::warn!("Mine probability {} outside [0, 1], clamping", p);
        p.clamp(0.0, 1.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board dimensions as `(rows, cols)`.
    pub size: Coord2,
    /// Independent per-cell chance of holding a mine, in `[0, 1]`.
    pub mine_probability: f64,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mine_probability: f64) -> Self {
        Self {
            size,
            mine_probability,
        }
    }

    /// Validated construction: both dimensions must be at least 1. The
    /// probability is normalized rather than rejected.
    pub fn new(size: Coord2, mine_probability: f64) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::new_unchecked(
            size,
            normalize_mine_probability(mine_probability),
        ))
    }

    pub const fn easy() -> Self {
        Self::new_unchecked((6, 15), DEFAULT_MINE_PROBABILITY)
    }

    pub const fn medium() -> Self {
        Self::new_unchecked((10, 25), DEFAULT_MINE_PROBABILITY)
    }

    pub const fn hard() -> Self {
        Self::new_unchecked((14, 35), DEFAULT_MINE_PROBABILITY)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Where the mines are: a rows x cols mask plus the realized mine count.
/// Generated once per game and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Wraps a mask, deriving the mine count from it.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines at exactly the given coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// The derived adjacency grid: `Clue::Mine` for mine cells, `Clue::Adjacent`
/// with the edge-clipped neighbor count for everything else. Immutable once
/// derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClueLayout {
    clues: Array2<Clue>,
}

impl ClueLayout {
    /// Derives the clue grid from a mine layout. Pure and deterministic;
    /// out-of-bounds neighbors are skipped, not treated as mines.
    pub fn from_mine_layout(mines: &MineLayout) -> Self {
        let size = mines.size();
        let clues = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if mines[coords] {
                Clue::Mine
            } else {
                let count = neighbors(coords, size).filter(|&pos| mines[pos]).count() as u8;
                Clue::Adjacent(count)
            }
        });
        Self { clues }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.clues.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn clue_at(&self, coords: Coord2) -> Clue {
        self[coords]
    }
}

impl Index<Coord2> for ClueLayout {
    type Output = Clue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.clues[coords.to_nd_index()]
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a reveal call, decided by the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// Target was already revealed or is flagged; nothing changed.
    NoChange,
    /// One or more safe cells were revealed and the game continues.
    Revealed,
    /// The target hid a mine; the game is lost.
    HitMine,
    /// The last safe cell was revealed; the game is won.
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Delta produced by one reveal call: the exact set of cells that moved to
/// revealed, plus the engine-decided outcome. The set is what a presentation
/// layer repaints.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealReport {
    pub revealed: BTreeSet<Coord2>,
    pub outcome: RevealOutcome,
}

impl RevealReport {
    pub fn has_update(&self) -> bool {
        self.outcome.has_update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(
            BoardConfig::new((0, 5), 0.1),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            BoardConfig::new((5, 0), 0.1),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            BoardConfig::new((0, 0), 0.1),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn config_normalizes_probability() {
        assert_eq!(BoardConfig::new((3, 3), 2.0).unwrap().mine_probability, 1.0);
        assert_eq!(
            BoardConfig::new((3, 3), -0.5).unwrap().mine_probability,
            0.0
        );
        assert_eq!(
            BoardConfig::new((3, 3), f64::NAN).unwrap().mine_probability,
            DEFAULT_MINE_PROBABILITY
        );
        assert_eq!(
            BoardConfig::new((3, 3), 0.25).unwrap().mine_probability,
            0.25
        );
    }

    #[test]
    fn presets_match_suggested_difficulties() {
        assert_eq!(BoardConfig::easy().size, (6, 15));
        assert_eq!(BoardConfig::medium().size, (10, 25));
        assert_eq!(BoardConfig::hard().size, (14, 35));
        assert_eq!(BoardConfig::hard().mine_probability, DEFAULT_MINE_PROBABILITY);
        assert_eq!(BoardConfig::easy().total_cells(), 90);
    }

    #[test]
    fn mine_layout_derives_count_from_mask() {
        let mut mask: Array2<bool> = Array2::default([2, 2]);
        mask[[0, 1]] = true;
        mask[[1, 0]] = true;

        let layout = MineLayout::from_mine_mask(mask);

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.total_cells(), 4);
        assert_eq!(layout.safe_cell_count(), 2);
        assert!(layout.contains_mine((0, 1)));
        assert!(!layout.contains_mine((0, 0)));
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(0, 2)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let layout = MineLayout::from_mine_coords((2, 3), &[]).unwrap();

        assert_eq!(layout.validate_coords((1, 2)), Ok((1, 2)));
        assert_eq!(layout.validate_coords((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(layout.validate_coords((0, 3)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn clue_layout_matches_fixed_three_by_three() {
        let mines = MineLayout::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
        let clues = ClueLayout::from_mine_layout(&mines);
        assert_eq!(clues.size(), (3, 3));

        let expected = [
            [Clue::Mine, Clue::Adjacent(1), Clue::Adjacent(0)],
            [Clue::Adjacent(1), Clue::Adjacent(1), Clue::Adjacent(0)],
            [Clue::Adjacent(0), Clue::Adjacent(0), Clue::Adjacent(0)],
        ];
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(
                    clues.clue_at((row, col)),
                    expected[row as usize][col as usize],
                    "clue mismatch at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn clue_counts_clip_at_edges() {
        // 1x3 strip with a mine in the middle: both ends see exactly one mine
        let mines = MineLayout::from_mine_coords((1, 3), &[(0, 1)]).unwrap();
        let clues = ClueLayout::from_mine_layout(&mines);

        assert_eq!(clues.clue_at((0, 0)), Clue::Adjacent(1));
        assert_eq!(clues.clue_at((0, 1)), Clue::Mine);
        assert_eq!(clues.clue_at((0, 2)), Clue::Adjacent(1));
    }

    #[test]
    fn clue_layout_is_all_zero_without_mines() {
        let mines = MineLayout::from_mine_coords((2, 2), &[]).unwrap();
        let clues = ClueLayout::from_mine_layout(&mines);

        for row in 0..2 {
            for col in 0..2 {
                assert!(clues.clue_at((row, col)).is_zero());
            }
        }
    }

    #[test]
    fn clue_helpers_expose_count_and_sentinel() {
        assert!(Clue::Mine.is_mine());
        assert_eq!(Clue::Mine.adjacent_count(), None);
        assert_eq!(Clue::Adjacent(3).adjacent_count(), Some(3));
        assert!(!Clue::Adjacent(3).is_zero());
        assert!(Clue::Adjacent(0).is_zero());
    }
}
