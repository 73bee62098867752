/// Number of grid points in the default ability hypothesis space.
/// 20 points over [0.01, 0.99] gives ~0.05 resolution, finer than any
/// convergence threshold used on top of this estimator.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Lowest ability hypothesis on the grid. Kept strictly above 0.0 so the
/// logistic never saturates to an exact endpoint.
pub const GRID_MIN: f64 = 0.01;

/// Highest ability hypothesis on the grid. Kept strictly below 1.0 for the
/// same reason as `GRID_MIN`.
pub const GRID_MAX: f64 = 0.99;

/// Steepness of the logistic item-response curve. Higher values make the
/// success probability switch more sharply around `ability == difficulty`.
pub const DEFAULT_DISCRIMINATION: f64 = 10.0;

/// Probability of answering correctly by pure chance. Questions are
/// 4-option multiple choice, so a blind guess succeeds 25% of the time.
pub const DEFAULT_GUESS: f64 = 0.25;

/// Probability that a respondent who knows the answer still gets it wrong
/// (misread the question, clicked the wrong option).
pub const DEFAULT_SLIP: f64 = 0.05;

/// Tolerance for the belief normalization invariant: after every update,
/// the belief entries must sum to 1 within this bound.
pub const BELIEF_SUM_TOLERANCE: f64 = 1e-9;
