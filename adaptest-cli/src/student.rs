/// Virtual students for simulation runs.
///
/// A student has a fixed true ability the estimator never sees. Answers are
/// sampled from the same 4PL model the estimator uses, evaluated at the
/// true ability, so the simulation measures pure estimation/selection
/// quality with a perfectly specified model.
use adaptest_core::{success_probability, ObservationParams};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::bail;

pub struct VirtualStudent {
    pub true_ability: f64,
    rng: SmallRng,
}

impl VirtualStudent {
    pub fn new(true_ability: f64, seed: u64) -> Self {
        VirtualStudent {
            true_ability,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Answer one question: correct with probability
    /// P(correct | difficulty, true_ability).
    pub fn answer(&mut self, params: &ObservationParams, difficulty: f64) -> bool {
        let p = success_probability(params, difficulty, self.true_ability)
            .unwrap_or_else(|e| bail(format!("Simulated question rejected by the model: {e}")));
        self.rng.random::<f64>() < p
    }
}
