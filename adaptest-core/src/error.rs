/// Error taxonomy for the estimator.
///
/// Invalid inputs and degenerate normalization abort the call that received
/// them and leave the belief untouched. Running out of questions is NOT an
/// error — selection signals it with `Ok(None)`.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// Difficulty must lie in [0, 1].
    #[error("difficulty {0} is outside [0, 1]")]
    DifficultyOutOfRange(f64),

    /// Ability must lie in [0, 1].
    #[error("ability {0} is outside [0, 1]")]
    AbilityOutOfRange(f64),

    /// The ability grid needs at least two hypotheses to be a distribution
    /// worth updating.
    #[error("grid size {0} is too small (need at least 2 points)")]
    GridTooSmall(usize),

    /// Guess/slip/discrimination constraints violated: `guess >= 0`,
    /// `slip >= 0`, `guess + slip < 1`, `discrimination > 0` and finite.
    #[error("invalid observation model parameters: {0}")]
    InvalidParams(String),

    /// The unnormalized posterior summed to zero or a non-finite value.
    /// Propagating it would poison the belief with NaNs, so the update
    /// refuses instead.
    #[error("posterior normalization degenerated (sum = {0})")]
    DegenerateNormalization(f64),
}
