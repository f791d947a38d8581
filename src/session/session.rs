use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::config::SessionConfig;
use super::stats::{QuestionPhase, SessionStats};
use super::transcript::{Role, TranscriptEntry, VoiceTurn};
use crate::assessment::AssessmentBackend;
use crate::questions::{InterviewQuestion, QuestionBank};
use crate::speech::{CaptureOutcome, SpeechCapture, SpeechPlayback};

/// Outcome of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Answer assessed; one candidate and one coach entry appended
    Submitted,

    /// Empty or whitespace-only answer; state untouched
    EmptyAnswer,

    /// Another submission is in flight; state untouched
    SubmissionInFlight,

    /// Speech capture produced no usable utterance; state untouched
    NoSpeechInput,
}

/// Outcome of asking the next catalogue question
#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    /// Question appended to the transcript as a coach entry
    Asked(InterviewQuestion),

    /// Catalogue exhausted; state untouched
    Exhausted,
}

/// An interview session: transcript, question cursor, and aggregate score,
/// driven by candidate answers assessed over the `AssessmentBackend`.
///
/// Speech is optional on both sides. With a capture backend attached the
/// session accepts spoken answers; with a playback backend attached it
/// speaks every coach reply hands-free (the voice-assistant variant).
/// Text-only sessions never trigger playback.
pub struct InterviewSession {
    /// Session configuration
    config: SessionConfig,

    /// Assessment backend scoring each answer
    assessor: Arc<dyn AssessmentBackend>,

    /// Static question catalogue
    bank: QuestionBank,

    /// Optional speech input
    capture: Option<Arc<dyn SpeechCapture>>,

    /// Optional speech output
    playback: Option<Arc<dyn SpeechPlayback>>,

    /// Append-only conversation transcript
    transcript: Mutex<Vec<TranscriptEntry>>,

    /// Overall interview score in [0, 100]
    aggregate_score: Mutex<f64>,

    /// Index of the next unused catalogue question
    question_cursor: AtomicUsize,

    /// Single-flight guard for answer submissions
    pending_request: AtomicBool,
}

impl InterviewSession {
    /// Create a text-only session
    pub fn new(config: SessionConfig, assessor: Arc<dyn AssessmentBackend>, bank: QuestionBank) -> Self {
        Self {
            config,
            assessor,
            bank,
            capture: None,
            playback: None,
            transcript: Mutex::new(Vec::new()),
            aggregate_score: Mutex::new(0.0),
            question_cursor: AtomicUsize::new(0),
            pending_request: AtomicBool::new(false),
        }
    }

    /// Attach a speech input backend
    pub fn with_capture(mut self, capture: Arc<dyn SpeechCapture>) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Attach a speech output backend; coach replies are spoken hands-free
    pub fn with_playback(mut self, playback: Arc<dyn SpeechPlayback>) -> Self {
        self.playback = Some(playback);
        self
    }

    /// Start (or restart) the interview: reset all session state and open
    /// with the coach greeting
    pub async fn start(&self) {
        info!("Starting interview session: {}", self.config.session_id);

        {
            let mut transcript = self.transcript.lock().await;
            transcript.clear();
            transcript.push(TranscriptEntry::coach(self.config.greeting.clone()));
        }

        *self.aggregate_score.lock().await = 0.0;
        self.question_cursor.store(0, Ordering::SeqCst);
        self.pending_request.store(false, Ordering::SeqCst);
    }

    /// Submit one candidate answer for assessment.
    ///
    /// Appends the candidate entry, runs the assessment round trip, appends
    /// the coach reply, and folds any skill scores into the aggregate.
    /// Blank answers and overlapping submissions are rejected without
    /// touching session state.
    pub async fn submit_answer(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring empty answer");
            return SubmitOutcome::EmptyAnswer;
        }

        // Single-flight guard: serializing submissions keeps candidate and
        // coach entries paired in call order
        if self
            .pending_request
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Submission already in flight, rejecting answer");
            return SubmitOutcome::SubmissionInFlight;
        }

        {
            let mut transcript = self.transcript.lock().await;
            transcript.push(TranscriptEntry::candidate(trimmed));
        }

        let reply = self.assessor.submit(trimmed, &self.config.session_id).await;

        {
            let mut transcript = self.transcript.lock().await;
            transcript.push(TranscriptEntry::coach(reply.feedback.clone()));
        }

        if let Some(scores) = &reply.skill_scores {
            let mut aggregate = self.aggregate_score.lock().await;
            let updated = fold_skill_scores(*aggregate, scores);
            debug!("Aggregate score {:.1} -> {:.1}", *aggregate, updated);
            *aggregate = updated;
        }

        self.pending_request.store(false, Ordering::SeqCst);

        // Voice-assistant variant: the reply is spoken hands-free
        if let Some(playback) = &self.playback {
            playback.speak(&reply.feedback).await;
        }

        SubmitOutcome::Submitted
    }

    /// Append the next catalogue question as a coach entry and advance the
    /// cursor. No network call. A no-op once the catalogue is exhausted.
    pub async fn ask_next_question(&self) -> AskOutcome {
        let cursor = self.question_cursor.load(Ordering::SeqCst);
        let Some(question) = self.bank.next_question(cursor) else {
            debug!("Question catalogue exhausted ({} asked)", cursor);
            return AskOutcome::Exhausted;
        };

        let prompt = format!(
            "Question: {}\n\nCategory: {}\nDifficulty: {}",
            question.text, question.category, question.difficulty
        );

        {
            let mut transcript = self.transcript.lock().await;
            transcript.push(TranscriptEntry::coach(prompt));
        }
        self.question_cursor.store(cursor + 1, Ordering::SeqCst);

        info!(
            "Asked question {}/{} ({})",
            cursor + 1,
            self.bank.len(),
            question.category
        );

        AskOutcome::Asked(question.clone())
    }

    /// Capture one spoken utterance and submit it as the candidate answer.
    ///
    /// An unavailable engine, an overlapping capture, or a blank utterance
    /// produces no input and leaves session state untouched.
    pub async fn capture_spoken_answer(&self) -> SubmitOutcome {
        let Some(capture) = &self.capture else {
            debug!("No speech capture backend attached");
            return SubmitOutcome::NoSpeechInput;
        };

        // Capability check precedes any capture attempt
        if !capture.is_available() {
            warn!("Speech recognition unavailable ({} backend)", capture.name());
            return SubmitOutcome::NoSpeechInput;
        }

        match capture.capture().await {
            CaptureOutcome::Utterance(text) => self.submit_answer(&text).await,
            CaptureOutcome::Unavailable | CaptureOutcome::Busy => SubmitOutcome::NoSpeechInput,
        }
    }

    /// Speak the most recent coach reply through the attached playback.
    /// A no-op without playback or before any coach entry exists.
    pub async fn speak_last_reply(&self) {
        let Some(playback) = &self.playback else {
            return;
        };

        let feedback = {
            let transcript = self.transcript.lock().await;
            transcript
                .iter()
                .rev()
                .find(|entry| entry.role == Role::Coach)
                .map(|entry| entry.content.clone())
        };

        if let Some(text) = feedback {
            playback.speak(&text).await;
        }
    }

    /// One hands-free round trip: capture an utterance, submit it, and
    /// return what was said and what the coach replied
    pub async fn voice_turn(&self) -> Option<VoiceTurn> {
        match self.capture_spoken_answer().await {
            SubmitOutcome::Submitted => {
                let transcript = self.transcript.lock().await;
                let utterance = transcript
                    .iter()
                    .rev()
                    .find(|entry| entry.role == Role::Candidate)?
                    .content
                    .clone();
                let responded_with = transcript
                    .iter()
                    .rev()
                    .find(|entry| entry.role == Role::Coach)?
                    .content
                    .clone();
                Some(VoiceTurn {
                    utterance,
                    responded_with,
                })
            }
            _ => None,
        }
    }

    /// Current transcript, in conversation order
    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().await.clone()
    }

    /// Overall interview score in [0, 100]
    pub async fn aggregate_score(&self) -> f64 {
        *self.aggregate_score.lock().await
    }

    /// Whether an answer submission is in flight
    pub fn is_pending(&self) -> bool {
        self.pending_request.load(Ordering::SeqCst)
    }

    /// Where the session stands in the question catalogue
    pub fn question_phase(&self) -> QuestionPhase {
        let cursor = self.question_cursor.load(Ordering::SeqCst);
        if cursor >= self.bank.len() {
            QuestionPhase::Exhausted
        } else if cursor == 0 {
            QuestionPhase::NotStarted
        } else {
            QuestionPhase::InProgress
        }
    }

    /// Snapshot of the running session
    pub async fn stats(&self) -> SessionStats {
        let (transcript_len, answers_given) = {
            let transcript = self.transcript.lock().await;
            (
                transcript.len(),
                transcript
                    .iter()
                    .filter(|entry| entry.role == Role::Candidate)
                    .count(),
            )
        };

        SessionStats {
            aggregate_score: self.aggregate_score().await,
            questions_asked: self.question_cursor.load(Ordering::SeqCst),
            questions_total: self.bank.len(),
            answers_given,
            transcript_len,
            pending_request: self.is_pending(),
            question_phase: self.question_phase(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    pub fn question_bank(&self) -> &QuestionBank {
        &self.bank
    }
}

/// Fold per-skill scores into the running aggregate:
/// `min(100, aggregate + mean(scores) * 10)`.
///
/// Scores only ever add to the aggregate, clamped at the ceiling. An empty
/// map counts as no scores awarded.
fn fold_skill_scores(aggregate: f64, scores: &HashMap<String, f64>) -> f64 {
    if scores.is_empty() {
        return aggregate;
    }

    let mean = scores.values().sum::<f64>() / scores.len() as f64;
    (aggregate + mean * 10.0).min(100.0)
}
