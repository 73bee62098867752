/// adaptest-core: Pure-computation adaptive testing engine.
///
/// Binary answers → Bayesian belief over a discretized ability grid →
/// EIG-maximizing question selection. No IO, no HTTP, no filesystem — just
/// math. Bring your own question repository and presentation layer.
///
/// Questions are identified by caller-provided `i64` IDs. The estimator is
/// single-session: one learner, one `AbilityEstimator`, mutated once per
/// answered question and never shared across sessions.
///
/// # Quick start
///
/// ```rust
/// use std::collections::HashSet;
/// use adaptest_core::{select_next_question, AbilityEstimator, QuestionCandidate};
///
/// let mut estimator = AbilityEstimator::new(20)?;
///
/// let pool = vec![
///     QuestionCandidate { id: 100, difficulty: 0.2 },
///     QuestionCandidate { id: 200, difficulty: 0.5 },
///     QuestionCandidate { id: 300, difficulty: 0.8 },
/// ];
///
/// let mut answered = HashSet::new();
/// while let Some(selection) = select_next_question(&estimator, &pool, &answered)? {
///     let correct = true; // grade the learner's answer externally
///     let ability = estimator.update_belief(selection.candidate.difficulty, correct)?;
///     answered.insert(selection.candidate.id);
///     println!(
///         "ability ≈ {ability:.3}, entropy {:.3} nats",
///         estimator.current_entropy(),
///     );
/// }
/// # Ok::<(), adaptest_core::EstimatorError>(())
/// ```

pub mod constants;
pub mod error;
pub mod estimator;
pub mod model;
pub mod selection;
pub mod session;
pub mod types;

// Re-export primary public API at crate root.
pub use error::EstimatorError;
pub use estimator::{shannon_entropy, AbilityEstimator};
pub use model::{likelihood_over_grid, success_probability, ObservationParams};
pub use selection::select_next_question;
pub use session::LearnerSession;
pub use types::{AnswerRecord, Observation, QuestionCandidate, Selection};
