/// 4PL-style item response model with guessing and slipping floors.
///
/// Pure functions only — no belief state, no side effects. The grid form
/// exists because every belief update and every EIG evaluation needs the
/// whole likelihood vector in one call.
use crate::constants::{DEFAULT_DISCRIMINATION, DEFAULT_GUESS, DEFAULT_SLIP};
use crate::error::EstimatorError;

/// Constants of the observation model.
///
/// `guess` bounds success probability away from 0 (blind luck), `slip`
/// bounds it away from 1 (experts fumble too), `discrimination` is the
/// steepness of the logistic between those floors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationParams {
    pub guess: f64,
    pub slip: f64,
    pub discrimination: f64,
}

impl Default for ObservationParams {
    fn default() -> Self {
        ObservationParams {
            guess: DEFAULT_GUESS,
            slip: DEFAULT_SLIP,
            discrimination: DEFAULT_DISCRIMINATION,
        }
    }
}

impl ObservationParams {
    /// Check the constraints that keep `success_probability` inside [0, 1]:
    /// `guess >= 0`, `slip >= 0`, `guess + slip < 1`, `discrimination`
    /// finite and positive.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.guess.is_finite() || self.guess < 0.0 {
            return Err(EstimatorError::InvalidParams(format!(
                "guess must be finite and >= 0, got {}",
                self.guess
            )));
        }
        if !self.slip.is_finite() || self.slip < 0.0 {
            return Err(EstimatorError::InvalidParams(format!(
                "slip must be finite and >= 0, got {}",
                self.slip
            )));
        }
        if self.guess + self.slip >= 1.0 {
            return Err(EstimatorError::InvalidParams(format!(
                "guess + slip must be < 1, got {} + {}",
                self.guess, self.slip
            )));
        }
        if !self.discrimination.is_finite() || self.discrimination <= 0.0 {
            return Err(EstimatorError::InvalidParams(format!(
                "discrimination must be finite and > 0, got {}",
                self.discrimination
            )));
        }
        Ok(())
    }
}

/// P(correct | difficulty, ability) for a single ability hypothesis.
///
/// `guess + (1 - guess - slip) * sigmoid(k * (ability - difficulty))`.
/// Errors if either argument falls outside [0, 1].
pub fn success_probability(
    params: &ObservationParams,
    difficulty: f64,
    ability: f64,
) -> Result<f64, EstimatorError> {
    check_unit_interval(difficulty).map_err(EstimatorError::DifficultyOutOfRange)?;
    check_unit_interval(ability).map_err(EstimatorError::AbilityOutOfRange)?;
    Ok(success_probability_unchecked(params, difficulty, ability))
}

/// P(correct | difficulty, ability[i]) for every hypothesis on a grid.
///
/// The grid itself is constructed inside [0, 1], so only `difficulty` is
/// validated here.
pub fn likelihood_over_grid(
    params: &ObservationParams,
    difficulty: f64,
    grid: &[f64],
) -> Result<Vec<f64>, EstimatorError> {
    check_unit_interval(difficulty).map_err(EstimatorError::DifficultyOutOfRange)?;
    Ok(grid
        .iter()
        .map(|&a| success_probability_unchecked(params, difficulty, a))
        .collect())
}

pub(crate) fn success_probability_unchecked(
    params: &ObservationParams,
    difficulty: f64,
    ability: f64,
) -> f64 {
    let base = 1.0 / (1.0 + (-params.discrimination * (ability - difficulty)).exp());
    params.guess + (1.0 - params.guess - params.slip) * base
}

fn check_unit_interval(value: f64) -> Result<(), f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_expert_on_easiest_question() {
        let params = ObservationParams::default();
        let p = success_probability(&params, 0.0, 0.99).unwrap();
        // 0.25 + 0.70 * sigmoid(10 * 0.99) ≈ 0.9497, just below 1 - slip.
        assert!((p - 0.9497).abs() < 1e-3, "got {p}");
        assert!(p < 1.0 - params.slip);
    }

    #[test]
    fn test_novice_on_hardest_question() {
        let params = ObservationParams::default();
        let p = success_probability(&params, 0.99, 0.01).unwrap();
        // Near the guessing floor when ability << difficulty.
        assert!((p - 0.2503).abs() < 1e-3, "got {p}");
        assert!(p > params.guess);
    }

    #[test]
    fn test_matched_ability_and_difficulty() {
        let params = ObservationParams::default();
        let p = success_probability(&params, 0.5, 0.5).unwrap();
        // sigmoid(0) = 0.5, so exactly the midpoint of the effective band.
        assert!((p - (0.25 + 0.70 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_monotone_in_ability() {
        let params = ObservationParams::default();
        let mut prev = 0.0;
        for i in 0..=10 {
            let a = i as f64 / 10.0;
            let p = success_probability(&params, 0.5, a).unwrap();
            assert!(p > prev, "not increasing at ability {a}");
            prev = p;
        }
    }

    #[test]
    fn test_bounded_by_floors() {
        let params = ObservationParams::default();
        for i in 0..=20 {
            for j in 0..=20 {
                let d = i as f64 / 20.0;
                let a = j as f64 / 20.0;
                let p = success_probability(&params, d, a).unwrap();
                assert!(p > params.guess && p < 1.0 - params.slip);
            }
        }
    }

    #[test]
    fn test_rejects_out_of_range_inputs() {
        let params = ObservationParams::default();
        assert_eq!(
            success_probability(&params, 1.5, 0.5),
            Err(EstimatorError::DifficultyOutOfRange(1.5))
        );
        assert_eq!(
            success_probability(&params, 0.5, -0.1),
            Err(EstimatorError::AbilityOutOfRange(-0.1))
        );
        assert!(success_probability(&params, f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_params_validation() {
        assert!(ObservationParams::default().validate().is_ok());

        let bad_sum = ObservationParams { guess: 0.6, slip: 0.5, ..Default::default() };
        assert!(matches!(bad_sum.validate(), Err(EstimatorError::InvalidParams(_))));

        let negative = ObservationParams { guess: -0.1, ..Default::default() };
        assert!(negative.validate().is_err());

        let flat = ObservationParams { discrimination: 0.0, ..Default::default() };
        assert!(flat.validate().is_err());
    }

    #[test]
    fn test_grid_form_matches_scalar_form() {
        let params = ObservationParams::default();
        let grid = [0.01, 0.25, 0.5, 0.75, 0.99];
        let likelihood = likelihood_over_grid(&params, 0.4, &grid).unwrap();
        for (&a, &l) in grid.iter().zip(likelihood.iter()) {
            let scalar = success_probability(&params, 0.4, a).unwrap();
            assert_eq!(l, scalar);
        }
    }
}
