use serde::{Deserialize, Serialize};

/// Opening coach message appended when a session starts
pub const DEFAULT_GREETING: &str = "Hello! I'm your AI Interview Coach. \
    I'll conduct a technical interview to assess your skills. Ready to begin?";

/// Configuration for an interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier sent with every assessment request
    pub session_id: String,

    /// Opening coach message
    pub greeting: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("interview-{}", uuid::Uuid::new_v4()),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl SessionConfig {
    /// Config with a fixed session id
    pub fn with_session_id(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Self::default()
        }
    }
}
