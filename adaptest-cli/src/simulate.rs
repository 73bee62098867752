/// Simulation study: adaptive EIG selection vs. a linear control group.
///
/// Populations of virtual students at known true abilities answer questions
/// until their estimate converges or the budget runs out. The adaptive arm
/// lets the estimator pick each question by expected information gain; the
/// linear arm walks the pool in ascending question-ID order, the way a
/// fixed-order quiz would.
use adaptest_core::{LearnerSession, ObservationParams, QuestionCandidate};
use serde::Serialize;

use crate::bail;
use crate::student::VirtualStudent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Adaptive,
    Linear,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Adaptive => "adaptive",
            Mode::Linear => "linear",
        }
    }
}

/// Knobs for one simulation run, after config/CLI merging.
pub struct SimulationSettings {
    pub grid_size: usize,
    pub params: ObservationParams,
    pub abilities: Vec<f64>,
    pub students_per_ability: usize,
    pub max_questions: usize,
    pub convergence_threshold: f64,
    pub seed: u64,
    pub verbose: bool,
}

/// Outcome of one virtual student's run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StudentOutcome {
    pub mode: Mode,
    pub true_ability: f64,
    /// First step (1-based) at which |estimate - truth| dropped below the
    /// threshold. None if the run never got there.
    pub convergence_step: Option<usize>,
    pub questions_used: usize,
    pub final_estimate: f64,
    pub final_error: f64,
    pub final_entropy: f64,
}

/// Aggregate over every student that ran in one mode.
#[derive(Debug, Clone, Serialize)]
pub struct ModeSummary {
    pub mode: Mode,
    pub students: usize,
    pub converged: usize,
    /// Mean convergence step over converged students only.
    pub mean_convergence_step: Option<f64>,
    pub mean_final_error: f64,
    pub mean_final_entropy: f64,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub pool_size: usize,
    pub max_questions: usize,
    pub convergence_threshold: f64,
    pub students_per_ability: usize,
    pub abilities: Vec<f64>,
    pub outcomes: Vec<StudentOutcome>,
    pub summaries: Vec<ModeSummary>,
}

/// Run the full adaptive-vs-linear study over the given question pool.
pub fn run_simulation(pool: &[QuestionCandidate], settings: &SimulationSettings) -> SimulationReport {
    let mut outcomes = Vec::new();
    let mut student_counter: u64 = 0;

    for &mode in &[Mode::Adaptive, Mode::Linear] {
        for &true_ability in &settings.abilities {
            for _ in 0..settings.students_per_ability {
                // Distinct deterministic seed per student, stable across runs.
                let seed = settings.seed + student_counter * 7;
                student_counter += 1;

                let outcome = run_one_student(pool, settings, mode, true_ability, seed);
                if settings.verbose {
                    eprintln!(
                        "  {} student (truth {:.2}): {} questions, final estimate {:.3}, {}",
                        mode.label(),
                        true_ability,
                        outcome.questions_used,
                        outcome.final_estimate,
                        match outcome.convergence_step {
                            Some(step) => format!("converged at step {step}"),
                            None => "did not converge".to_string(),
                        },
                    );
                }
                outcomes.push(outcome);
            }
        }
    }

    let summaries = vec![
        summarize(Mode::Adaptive, &outcomes),
        summarize(Mode::Linear, &outcomes),
    ];

    SimulationReport {
        pool_size: pool.len(),
        max_questions: settings.max_questions,
        convergence_threshold: settings.convergence_threshold,
        students_per_ability: settings.students_per_ability,
        abilities: settings.abilities.clone(),
        outcomes,
        summaries,
    }
}

fn run_one_student(
    pool: &[QuestionCandidate],
    settings: &SimulationSettings,
    mode: Mode,
    true_ability: f64,
    seed: u64,
) -> StudentOutcome {
    let mut session = LearnerSession::with_params(settings.grid_size, settings.params)
        .unwrap_or_else(|e| bail(format!("Failed to create session: {e}")));
    let mut student = VirtualStudent::new(true_ability, seed);
    let mut convergence_step = None;

    for step in 1..=settings.max_questions {
        let question = match mode {
            Mode::Adaptive => session
                .next_question(pool)
                .unwrap_or_else(|e| bail(format!("Question selection failed: {e}")))
                .map(|s| s.candidate),
            Mode::Linear => next_linear_question(pool, &session),
        };

        let Some(question) = question else {
            break; // pool exhausted
        };

        let correct = student.answer(&settings.params, question.difficulty);
        let estimate = session
            .record_answer(question.id, question.difficulty, correct)
            .unwrap_or_else(|e| bail(format!("Belief update failed: {e}")));

        if convergence_step.is_none()
            && (estimate - true_ability).abs() < settings.convergence_threshold
        {
            convergence_step = Some(step);
        }
    }

    let final_estimate = session.estimator().estimated_ability();
    StudentOutcome {
        mode,
        true_ability,
        convergence_step,
        questions_used: session.questions_answered(),
        final_estimate,
        final_error: (final_estimate - true_ability).abs(),
        final_entropy: session.estimator().current_entropy(),
    }
}

/// Control group: lowest unanswered question ID, ignoring the belief.
fn next_linear_question(
    pool: &[QuestionCandidate],
    session: &LearnerSession,
) -> Option<QuestionCandidate> {
    pool.iter()
        .filter(|q| !session.answered_ids().contains(&q.id))
        .min_by_key(|q| q.id)
        .copied()
}

fn summarize(mode: Mode, outcomes: &[StudentOutcome]) -> ModeSummary {
    let in_mode: Vec<&StudentOutcome> = outcomes.iter().filter(|o| o.mode == mode).collect();
    let students = in_mode.len();

    let converged_steps: Vec<usize> =
        in_mode.iter().filter_map(|o| o.convergence_step).collect();
    let converged = converged_steps.len();

    let mean = |values: &[f64]| -> f64 {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };

    let errors: Vec<f64> = in_mode.iter().map(|o| o.final_error).collect();
    let entropies: Vec<f64> = in_mode.iter().map(|o| o.final_entropy).collect();

    ModeSummary {
        mode,
        students,
        converged,
        mean_convergence_step: if converged > 0 {
            Some(converged_steps.iter().sum::<usize>() as f64 / converged as f64)
        } else {
            None
        },
        mean_final_error: mean(&errors),
        mean_final_entropy: mean(&entropies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SimulationSettings {
        SimulationSettings {
            grid_size: 20,
            params: ObservationParams::default(),
            abilities: vec![0.3, 0.7],
            students_per_ability: 4,
            max_questions: 30,
            convergence_threshold: 0.05,
            seed: 42,
            verbose: false,
        }
    }

    fn even_pool(n: usize) -> Vec<QuestionCandidate> {
        (0..n)
            .map(|i| QuestionCandidate {
                id: i as i64 + 1,
                difficulty: 0.05 + 0.9 * i as f64 / (n - 1) as f64,
            })
            .collect()
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let pool = even_pool(40);
        let s = settings();
        let a = run_simulation(&pool, &s);
        let b = run_simulation(&pool, &s);

        assert_eq!(a.outcomes.len(), b.outcomes.len());
        for (x, y) in a.outcomes.iter().zip(b.outcomes.iter()) {
            assert_eq!(x.convergence_step, y.convergence_step);
            assert_eq!(x.final_estimate, y.final_estimate);
        }
    }

    #[test]
    fn test_runs_both_modes_for_every_student() {
        let pool = even_pool(40);
        let s = settings();
        let report = run_simulation(&pool, &s);

        let expected_per_mode = s.abilities.len() * s.students_per_ability;
        assert_eq!(report.outcomes.len(), expected_per_mode * 2);
        for summary in &report.summaries {
            assert_eq!(summary.students, expected_per_mode);
        }
    }

    #[test]
    fn test_tiny_pool_exhausts_before_budget() {
        let pool = even_pool(5);
        let s = settings();
        let report = run_simulation(&pool, &s);
        for outcome in &report.outcomes {
            assert_eq!(outcome.questions_used, 5);
        }
    }

    #[test]
    fn test_estimates_land_near_truth() {
        let pool = even_pool(40);
        let mut s = settings();
        s.max_questions = 40;
        let report = run_simulation(&pool, &s);

        // With 40 informative questions the population mean error should be
        // well inside the grid resolution for both arms.
        for summary in &report.summaries {
            assert!(
                summary.mean_final_error < 0.15,
                "{} mean error {}",
                summary.mode.label(),
                summary.mean_final_error
            );
        }
    }
}
