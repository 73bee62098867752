/// Discretized Bayesian ability estimator.
///
/// Holds a categorical belief over a fixed grid of ability hypotheses and
/// updates it by Bayes' rule as answers come in. `update_belief` is the only
/// mutating operation; everything else is a pure read of the current belief.
use crate::constants::{GRID_MAX, GRID_MIN};
use crate::error::EstimatorError;
use crate::model::{likelihood_over_grid, success_probability, ObservationParams};

pub struct AbilityEstimator {
    /// Ability hypotheses, evenly spaced over [GRID_MIN, GRID_MAX].
    /// Immutable after construction.
    grid: Vec<f64>,
    /// Categorical distribution over `grid`, index-aligned, sums to 1.
    belief: Vec<f64>,
    params: ObservationParams,
}

impl AbilityEstimator {
    /// Create an estimator with a uniform belief over `grid_size` hypotheses
    /// and the default guess/slip/discrimination constants.
    pub fn new(grid_size: usize) -> Result<Self, EstimatorError> {
        Self::with_params(grid_size, ObservationParams::default())
    }

    /// Create an estimator with explicit observation model constants.
    pub fn with_params(grid_size: usize, params: ObservationParams) -> Result<Self, EstimatorError> {
        if grid_size < 2 {
            return Err(EstimatorError::GridTooSmall(grid_size));
        }
        params.validate()?;

        let step = (GRID_MAX - GRID_MIN) / (grid_size - 1) as f64;
        let grid: Vec<f64> = (0..grid_size).map(|i| GRID_MIN + step * i as f64).collect();
        let belief = vec![1.0 / grid_size as f64; grid_size];

        Ok(AbilityEstimator { grid, belief, params })
    }

    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn belief(&self) -> &[f64] {
        &self.belief
    }

    pub fn params(&self) -> &ObservationParams {
        &self.params
    }

    /// P(correct | difficulty, ability) under this estimator's model
    /// constants. Pure; does not consult the belief.
    pub fn predict_success_probability(
        &self,
        difficulty: f64,
        ability: f64,
    ) -> Result<f64, EstimatorError> {
        success_probability(&self.params, difficulty, ability)
    }

    /// Absorb one observed answer: replace the belief with the normalized
    /// posterior and return the new point estimate.
    ///
    /// On any error the belief is left exactly as it was — the posterior is
    /// staged in a scratch buffer and committed only after the normalization
    /// is known to be sound.
    pub fn update_belief(&mut self, difficulty: f64, correct: bool) -> Result<f64, EstimatorError> {
        let likelihood = likelihood_over_grid(&self.params, difficulty, &self.grid)?;

        let mut posterior: Vec<f64> = self
            .belief
            .iter()
            .zip(likelihood.iter())
            .map(|(&b, &l)| b * if correct { l } else { 1.0 - l })
            .collect();

        let sum: f64 = posterior.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(EstimatorError::DegenerateNormalization(sum));
        }

        for p in &mut posterior {
            *p /= sum;
        }
        self.belief = posterior;

        Ok(self.estimated_ability())
    }

    /// Expectation of the belief: `Σ grid[i] * belief[i]`.
    pub fn estimated_ability(&self) -> f64 {
        self.grid
            .iter()
            .zip(self.belief.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    /// Shannon entropy of the belief in nats. 0 = point mass,
    /// ln(grid_size) = uniform.
    pub fn current_entropy(&self) -> f64 {
        shannon_entropy(&self.belief)
    }

    /// Expected reduction in entropy from asking a question of the given
    /// difficulty, before knowing the answer.
    ///
    /// Simulates both outcome branches on local copies; the belief is not
    /// touched. Exact arithmetic guarantees a non-negative result, floating
    /// point may dip below zero by an epsilon.
    pub fn expected_information_gain(&self, difficulty: f64) -> Result<f64, EstimatorError> {
        let likelihood = likelihood_over_grid(&self.params, difficulty, &self.grid)?;

        let p_correct: f64 = self
            .belief
            .iter()
            .zip(likelihood.iter())
            .map(|(&b, &l)| b * l)
            .sum();
        let p_wrong = 1.0 - p_correct;

        let h_now = shannon_entropy(&self.belief);

        // A branch with zero probability contributes nothing to the
        // expectation; skipping it also avoids normalizing an all-zero
        // posterior.
        let mut expected_posterior_entropy = 0.0;
        if p_correct > 0.0 {
            expected_posterior_entropy += p_correct * self.branch_entropy(&likelihood, true);
        }
        if p_wrong > 0.0 {
            expected_posterior_entropy += p_wrong * self.branch_entropy(&likelihood, false);
        }

        Ok(h_now - expected_posterior_entropy)
    }

    /// Reset to the uniform prior, keeping grid and model constants.
    pub fn reset(&mut self) {
        let n = self.grid.len() as f64;
        for b in &mut self.belief {
            *b = 1.0 / n;
        }
    }

    /// Entropy of the hypothetical posterior for one outcome branch,
    /// normalized on a local copy.
    fn branch_entropy(&self, likelihood: &[f64], correct: bool) -> f64 {
        let mut posterior: Vec<f64> = self
            .belief
            .iter()
            .zip(likelihood.iter())
            .map(|(&b, &l)| b * if correct { l } else { 1.0 - l })
            .collect();

        let sum: f64 = posterior.iter().sum();
        if sum <= 0.0 {
            // Callers only reach this branch with positive outcome
            // probability, so the sum is positive for any valid model.
            return 0.0;
        }
        for p in &mut posterior {
            *p /= sum;
        }
        shannon_entropy(&posterior)
    }
}

/// Shannon entropy in nats, with the `0 * ln(0) = 0` convention.
pub fn shannon_entropy(distribution: &[f64]) -> f64 {
    -distribution
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f64>()
}
