/// Per-learner session context.
///
/// Owns exactly one estimator plus the bookkeeping around it: which
/// questions have been answered and what the estimator looked like after
/// each answer. One session per learner — concurrent learners each get
/// their own `LearnerSession`, never a shared registry.
use std::collections::HashSet;

use crate::error::EstimatorError;
use crate::estimator::AbilityEstimator;
use crate::model::ObservationParams;
use crate::selection::select_next_question;
use crate::types::{AnswerRecord, Observation, QuestionCandidate, Selection};

pub struct LearnerSession {
    estimator: AbilityEstimator,
    answered_ids: HashSet<i64>,
    records: Vec<AnswerRecord>,
}

impl LearnerSession {
    pub fn new(grid_size: usize) -> Result<Self, EstimatorError> {
        Ok(LearnerSession {
            estimator: AbilityEstimator::new(grid_size)?,
            answered_ids: HashSet::new(),
            records: Vec::new(),
        })
    }

    pub fn with_params(grid_size: usize, params: ObservationParams) -> Result<Self, EstimatorError> {
        Ok(LearnerSession {
            estimator: AbilityEstimator::with_params(grid_size, params)?,
            answered_ids: HashSet::new(),
            records: Vec::new(),
        })
    }

    pub fn estimator(&self) -> &AbilityEstimator {
        &self.estimator
    }

    pub fn answered_ids(&self) -> &HashSet<i64> {
        &self.answered_ids
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    pub fn questions_answered(&self) -> usize {
        self.records.len()
    }

    /// Absorb one graded answer: update the belief, mark the question as
    /// answered, and append a log record. On error nothing changes — not
    /// the belief, not the answered set, not the log.
    pub fn record_answer(
        &mut self,
        question_id: i64,
        difficulty: f64,
        correct: bool,
    ) -> Result<f64, EstimatorError> {
        let ability = self.estimator.update_belief(difficulty, correct)?;
        self.answered_ids.insert(question_id);
        self.records.push(AnswerRecord {
            question_id,
            difficulty,
            correct,
            estimated_ability: ability,
            entropy: self.estimator.current_entropy(),
        });
        Ok(ability)
    }

    /// Pick the most informative unanswered question from the pool, or
    /// `Ok(None)` when the session has exhausted it.
    pub fn next_question(
        &self,
        pool: &[QuestionCandidate],
    ) -> Result<Option<Selection>, EstimatorError> {
        select_next_question(&self.estimator, pool, &self.answered_ids)
    }

    /// Rebuild belief state from a historical log by applying the update
    /// once per observation, in order. Because each update depends only on
    /// the current belief and the new observation, this is equivalent to
    /// having maintained the belief continuously.
    ///
    /// Replayed observations carry no question IDs, so they do not touch
    /// the answered set; callers restoring a full session should use
    /// `record_answer` per historical row instead.
    pub fn replay(&mut self, observations: &[Observation]) -> Result<f64, EstimatorError> {
        let mut ability = self.estimator.estimated_ability();
        for obs in observations {
            ability = self.estimator.update_belief(obs.difficulty, obs.correct)?;
        }
        Ok(ability)
    }

    /// Back to a fresh uniform belief with empty history.
    pub fn reset(&mut self) {
        self.estimator.reset();
        self.answered_ids.clear();
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_answer_tracks_history() {
        let mut session = LearnerSession::new(20).unwrap();
        let a1 = session.record_answer(101, 0.5, true).unwrap();
        let a2 = session.record_answer(102, 0.6, false).unwrap();

        assert_eq!(session.questions_answered(), 2);
        assert!(session.answered_ids().contains(&101));
        assert!(session.answered_ids().contains(&102));

        let records = session.records();
        assert_eq!(records[0].estimated_ability, a1);
        assert_eq!(records[1].estimated_ability, a2);
        assert!(records[1].entropy < 20.0_f64.ln());
    }

    #[test]
    fn test_failed_answer_leaves_session_unchanged() {
        let mut session = LearnerSession::new(20).unwrap();
        session.record_answer(1, 0.5, true).unwrap();
        let belief_before = session.estimator().belief().to_vec();

        assert!(session.record_answer(2, 7.0, true).is_err());
        assert_eq!(session.questions_answered(), 1);
        assert!(!session.answered_ids().contains(&2));
        assert_eq!(session.estimator().belief(), &belief_before[..]);
    }

    #[test]
    fn test_replay_matches_live_session() {
        let observations = vec![
            Observation { difficulty: 0.4, correct: true },
            Observation { difficulty: 0.6, correct: true },
            Observation { difficulty: 0.8, correct: false },
            Observation { difficulty: 0.7, correct: true },
        ];

        let mut live = LearnerSession::new(20).unwrap();
        for (i, obs) in observations.iter().enumerate() {
            live.record_answer(i as i64, obs.difficulty, obs.correct).unwrap();
        }

        let mut replayed = LearnerSession::new(20).unwrap();
        let ability = replayed.replay(&observations).unwrap();

        assert_eq!(replayed.estimator().belief(), live.estimator().belief());
        assert_eq!(ability, live.estimator().estimated_ability());
    }

    #[test]
    fn test_next_question_skips_answered_and_exhausts() {
        let pool = vec![
            QuestionCandidate { id: 1, difficulty: 0.3 },
            QuestionCandidate { id: 2, difficulty: 0.5 },
        ];
        let mut session = LearnerSession::new(20).unwrap();

        let first = session.next_question(&pool).unwrap().unwrap();
        session.record_answer(first.candidate.id, first.candidate.difficulty, true).unwrap();

        let second = session.next_question(&pool).unwrap().unwrap();
        assert_ne!(second.candidate.id, first.candidate.id);
        session.record_answer(second.candidate.id, second.candidate.difficulty, false).unwrap();

        assert!(session.next_question(&pool).unwrap().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = LearnerSession::new(20).unwrap();
        session.record_answer(1, 0.5, true).unwrap();
        session.reset();

        assert_eq!(session.questions_answered(), 0);
        assert!(session.answered_ids().is_empty());
        assert!((session.estimator().current_entropy() - 20.0_f64.ln()).abs() < 1e-12);
    }
}
