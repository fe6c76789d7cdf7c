use super::*;

/// Generation strategy that rolls an independent Bernoulli trial per cell.
/// The realized mine count varies from board to board around
/// `mine_probability * total_cells`; it is not fixed up front.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliGenerator {
    seed: u64,
}

impl BernoulliGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for BernoulliGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        use rand::prelude::*;

        let p = normalize_mine_probability(config.mine_probability);
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        // one draw per cell in row-major order; the mask is a pure function
        // of (seed, size, probability)
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for cell in mine_mask.iter_mut() {
            *cell = rng.random_bool(p);
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "Generated {}x{} layout with {} mines (p = {})",
            config.size.0,
            config.size.1,
            layout.mine_count(),
            p
        );
        layout
    }
}
