use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default feedback substituted when the service answers with an empty
/// `response` field
pub const DEFAULT_FEEDBACK: &str =
    "That's a thoughtful answer! Let me provide some feedback...";

/// Request body for POST /api/assessment/message
#[derive(Debug, Serialize)]
pub struct AssessmentRequest {
    /// The candidate's answer text
    pub message: String,

    /// Session the answer belongs to
    pub session_id: String,
}

/// Response body from the assessment service
#[derive(Debug, Deserialize)]
pub struct AssessmentResponse {
    /// Coach feedback text
    pub response: Option<String>,

    /// Per-skill scores in [0, 10], keyed by skill name
    #[serde(default)]
    pub skill_scores: Option<HashMap<String, f64>>,
}

/// The assessment service's reply, normalized for the session engine
#[derive(Debug, Clone)]
pub struct AssessmentReply {
    /// Coach feedback text, never empty
    pub feedback: String,

    /// Per-skill scores, absent when the service awarded none
    pub skill_scores: Option<HashMap<String, f64>>,
}

impl AssessmentResponse {
    /// Normalize the wire response into a domain reply.
    ///
    /// A missing or blank `response` substitutes the default feedback
    /// line, and an empty score map counts as "no scores awarded".
    pub fn into_reply(self) -> AssessmentReply {
        let feedback = match self.response {
            Some(text) if !text.trim().is_empty() => text,
            _ => DEFAULT_FEEDBACK.to_string(),
        };

        let skill_scores = self.skill_scores.filter(|scores| !scores.is_empty());

        AssessmentReply {
            feedback,
            skill_scores,
        }
    }
}
