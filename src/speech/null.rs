// Null backends for platforms without a speech engine.
//
// A missing engine is a normal, handled condition: capture yields
// "no input produced" and playback swallows the utterance.

use tracing::debug;

use super::backend::{CaptureOutcome, SpeechCapture, SpeechPlayback};

/// Capture backend for platforms without a recognition engine
pub struct NullCapture;

#[async_trait::async_trait]
impl SpeechCapture for NullCapture {
    async fn capture(&self) -> CaptureOutcome {
        debug!("Speech recognition unavailable, no input produced");
        CaptureOutcome::Unavailable
    }

    fn is_available(&self) -> bool {
        false
    }

    fn is_capturing(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "null"
    }
}

/// Playback backend for platforms without a synthesis engine
pub struct NullPlayback;

#[async_trait::async_trait]
impl SpeechPlayback for NullPlayback {
    async fn speak(&self, text: &str) {
        debug!("Speech synthesis unavailable, dropping utterance ({} chars)", text.len());
    }

    fn cancel(&self) {}

    fn is_available(&self) -> bool {
        false
    }

    fn is_speaking(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "null"
    }
}
