/// Shared record types exchanged with calling code.
///
/// Questions are identified by caller-provided `i64` IDs. The core treats a
/// candidate as opaque except for its `difficulty` field.

/// A candidate question offered to the selection policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionCandidate {
    /// ID of the question. Any i64 value; uniqueness is the caller's job.
    pub id: i64,
    /// Difficulty on the same [0, 1] scale as ability.
    pub difficulty: f64,
}

/// One unit of evidence: a question's difficulty and whether the learner
/// answered it correctly. Not stored by the estimator — the caller owns
/// the history.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub difficulty: f64,
    pub correct: bool,
}

/// The winning candidate from `select_next_question`, together with the
/// expected information gain that made it win.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub candidate: QuestionCandidate,
    pub eig: f64,
}

/// One answered question in a session's log: the evidence plus the
/// estimator state right after consuming it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerRecord {
    pub question_id: i64,
    pub difficulty: f64,
    pub correct: bool,
    /// Point estimate of ability after this answer was absorbed.
    pub estimated_ability: f64,
    /// Belief entropy (nats) after this answer was absorbed.
    pub entropy: f64,
}
