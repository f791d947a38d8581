use serde::{Deserialize, Serialize};

/// Where the session stands in the question catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionPhase {
    /// No question asked yet
    NotStarted,
    /// At least one question asked, more remain
    InProgress,
    /// Every catalogue question has been asked
    Exhausted,
}

/// Snapshot of a running interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Overall interview score in [0, 100]
    pub aggregate_score: f64,

    /// Questions asked so far
    pub questions_asked: usize,

    /// Questions in the catalogue
    pub questions_total: usize,

    /// Answers the candidate has given
    pub answers_given: usize,

    /// Transcript entries so far
    pub transcript_len: usize,

    /// Whether an answer submission is in flight
    pub pending_request: bool,

    /// Question catalogue phase
    pub question_phase: QuestionPhase,
}
