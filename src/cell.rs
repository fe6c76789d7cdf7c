use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
///
/// Revealing is one-way: a cell moves `Hidden -> Revealed` exactly once and
/// never reverts. Flags only exist on unrevealed cells.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed(u8),
    Flagged,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Hidden content of a cell, derived once from the mine layout: either the
/// mine sentinel or the number of mines in the edge-clipped 8-neighborhood.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Clue {
    Mine,
    Adjacent(u8),
}

impl Clue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Whether this is a zero-count cell, i.e. a flood-fill expansion point.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Adjacent(0))
    }

    /// The adjacent-mine count, or `None` for the mine sentinel.
    pub const fn adjacent_count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Adjacent(count) => Some(count),
        }
    }
}
