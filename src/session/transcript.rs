use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person being interviewed
    Candidate,
    /// The interview coach
    Coach,
}

/// One immutable entry in the interview transcript
///
/// Entries are append-only; insertion order is conversation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Unique entry id
    pub id: String,

    /// Speaker
    pub role: Role,

    /// Entry text
    pub content: String,

    /// When the entry was appended
    pub created_at: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn candidate(content: impl Into<String>) -> Self {
        Self::new(Role::Candidate, content)
    }

    pub fn coach(content: impl Into<String>) -> Self {
        Self::new(Role::Coach, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// One voice round trip: what the candidate said and what the coach
/// replied. Derived from the transcript, so the voice modality shares
/// the text session's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceTurn {
    /// The recognized utterance
    pub utterance: String,

    /// The coach feedback it received
    pub responded_with: String,
}
