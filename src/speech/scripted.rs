// Scripted speech backends for testing and batch demos.
//
// ScriptedCapture serves canned utterances in order, standing in for a
// recognition engine; ScriptedPlayback records what would have been
// spoken instead of producing audio.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::Notify;
use tracing::debug;

use super::backend::{CaptureOutcome, SpeechCapture, SpeechPlayback, SpeechSettings};

/// Capture backend fed from a fixed utterance script
pub struct ScriptedCapture {
    utterances: Mutex<VecDeque<String>>,
    capturing: AtomicBool,
    recognition_delay: Duration,
}

impl ScriptedCapture {
    pub fn new(utterances: Vec<String>) -> Self {
        Self {
            utterances: Mutex::new(utterances.into()),
            capturing: AtomicBool::new(false),
            recognition_delay: Duration::ZERO,
        }
    }

    /// Simulate engine latency between activation and the finalized result
    pub fn with_recognition_delay(mut self, delay: Duration) -> Self {
        self.recognition_delay = delay;
        self
    }

    /// Utterances left in the script
    pub fn remaining(&self) -> usize {
        self.utterances.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl SpeechCapture for ScriptedCapture {
    async fn capture(&self) -> CaptureOutcome {
        // Only one capture may be active at a time
        if self.capturing.swap(true, Ordering::SeqCst) {
            return CaptureOutcome::Busy;
        }

        if !self.recognition_delay.is_zero() {
            tokio::time::sleep(self.recognition_delay).await;
        }

        let next = self.utterances.lock().unwrap().pop_front();
        self.capturing.store(false, Ordering::SeqCst);

        match next {
            Some(text) => {
                debug!("Scripted capture recognized: {}", text);
                CaptureOutcome::Utterance(text)
            }
            // Script exhausted: the engine produced nothing
            None => CaptureOutcome::Unavailable,
        }
    }

    fn is_available(&self) -> bool {
        true
    }

    fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Playback backend that records spoken utterances
pub struct ScriptedPlayback {
    settings: SpeechSettings,
    spoken: Mutex<Vec<String>>,
    speaking: AtomicBool,
    interrupted: AtomicUsize,
    interrupt_signal: Notify,
    utterance_duration: Duration,
}

impl ScriptedPlayback {
    pub fn new(settings: SpeechSettings) -> Self {
        Self {
            settings,
            spoken: Mutex::new(Vec::new()),
            speaking: AtomicBool::new(false),
            interrupted: AtomicUsize::new(0),
            interrupt_signal: Notify::new(),
            utterance_duration: Duration::ZERO,
        }
    }

    /// Simulate audible playback time per utterance
    pub fn with_utterance_duration(mut self, duration: Duration) -> Self {
        self.utterance_duration = duration;
        self
    }

    /// Everything spoken so far, in order
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    /// How many utterances were cut off by a newer one or by cancel
    pub fn interrupted_count(&self) -> usize {
        self.interrupted.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SpeechPlayback for ScriptedPlayback {
    async fn speak(&self, text: &str) {
        // A newer utterance replaces the current one, it never queues
        if self.speaking.swap(true, Ordering::SeqCst) {
            self.interrupted.fetch_add(1, Ordering::SeqCst);
            self.interrupt_signal.notify_waiters();
        }

        debug!(
            "Speaking utterance ({} chars, rate={}, pitch={})",
            text.len(),
            self.settings.rate,
            self.settings.pitch
        );
        self.spoken.lock().unwrap().push(text.to_string());

        if !self.utterance_duration.is_zero() {
            tokio::select! {
                _ = tokio::time::sleep(self.utterance_duration) => {}
                // Interrupted: the replacing utterance owns the speaking flag
                _ = self.interrupt_signal.notified() => return,
            }
        }

        self.speaking.store(false, Ordering::SeqCst);
    }

    fn cancel(&self) {
        // Idempotent: only a live utterance needs cutting off
        if self.speaking.swap(false, Ordering::SeqCst) {
            self.interrupted.fetch_add(1, Ordering::SeqCst);
            self.interrupt_signal.notify_waiters();
        }
    }

    fn is_available(&self) -> bool {
        true
    }

    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
