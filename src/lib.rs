pub mod assessment;
pub mod config;
pub mod questions;
pub mod session;
pub mod speech;

pub use assessment::{
    AssessmentBackend, AssessmentClient, AssessmentReply, AssessmentRequest, AssessmentResponse,
    FALLBACK_FEEDBACK,
};
pub use config::Config;
pub use questions::{Difficulty, InterviewQuestion, QuestionBank};
pub use session::{
    AskOutcome, InterviewSession, QuestionPhase, Role, SessionConfig, SessionStats, SubmitOutcome,
    TranscriptEntry, VoiceTurn,
};
pub use speech::{
    CaptureOutcome, CaptureSource, PlaybackSource, SpeechBackendFactory, SpeechCapture,
    SpeechPlayback, SpeechSettings,
};
