use crate::*;

pub use random::*;

mod random;

/// Strategy seam for producing mine layouts from a board configuration.
///
/// Implementations must honor `config.size` exactly; there is no reserved
/// safe cell, so the very first reveal can hit a mine.
pub trait MineLayoutGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}
