//! Interview session management
//!
//! This module provides the `InterviewSession` abstraction that manages:
//! - The append-only conversation transcript
//! - Question sequencing from the static catalogue
//! - Answer submission to the assessment backend
//! - Aggregate score accumulation
//! - Speech capture/playback coordination for the voice modality

mod config;
mod session;
mod stats;
mod transcript;

pub use config::{SessionConfig, DEFAULT_GREETING};
pub use session::{AskOutcome, InterviewSession, SubmitOutcome};
pub use stats::{QuestionPhase, SessionStats};
pub use transcript::{Role, TranscriptEntry, VoiceTurn};
