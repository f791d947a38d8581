/// Playback voice settings
#[derive(Debug, Clone)]
pub struct SpeechSettings {
    /// Recognition/synthesis language tag
    pub language: String,
    /// Speaking rate multiplier
    pub rate: f32,
    /// Voice pitch multiplier
    pub pitch: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

/// Outcome of one capture activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// One finalized utterance was recognized
    Utterance(String),

    /// The recognition engine is missing or reported an error; the
    /// session treats this as "no input produced"
    Unavailable,

    /// A capture is already in flight; only one may be active at a time
    Busy,
}

/// Speech-to-text backend trait
///
/// One activation produces at most one finalized utterance. Implementations
/// must reject an overlapping activation with `CaptureOutcome::Busy` rather
/// than interleaving recognition results.
///
/// Platform engines (the browser's Web Speech API in the original shell,
/// OS dictation services elsewhere) plug in by implementing this trait;
/// none ship with the engine crate itself.
#[async_trait::async_trait]
pub trait SpeechCapture: Send + Sync {
    /// Capture a single finalized utterance
    async fn capture(&self) -> CaptureOutcome;

    /// Whether a recognition engine is present on this platform
    fn is_available(&self) -> bool;

    /// Whether a capture is currently in flight
    fn is_capturing(&self) -> bool;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Text-to-speech backend trait
///
/// At most one utterance is audible at any time: `speak` interrupts and
/// replaces whatever is currently playing instead of queueing behind it.
#[async_trait::async_trait]
pub trait SpeechPlayback: Send + Sync {
    /// Speak one utterance, interrupting any utterance already playing
    async fn speak(&self, text: &str);

    /// Stop the current utterance. Idempotent; a no-op while idle.
    fn cancel(&self);

    /// Whether a synthesis engine is present on this platform
    fn is_available(&self) -> bool;

    /// Whether an utterance is currently playing
    fn is_speaking(&self) -> bool;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Capture backend selector
#[derive(Debug, Clone)]
pub enum CaptureSource {
    /// Canned utterances, served in order (testing/batch demos)
    Scripted(Vec<String>),

    /// No recognition engine; every activation yields `Unavailable`
    Disabled,
}

/// Playback backend selector
#[derive(Debug, Clone)]
pub enum PlaybackSource {
    /// In-memory playback that records spoken text (testing/batch demos)
    Scripted,

    /// No synthesis engine; speaking is a no-op
    Disabled,
}

/// Speech backend factory
pub struct SpeechBackendFactory;

impl SpeechBackendFactory {
    /// Create a capture backend for the given source
    pub fn create_capture(source: CaptureSource) -> Box<dyn SpeechCapture> {
        match source {
            CaptureSource::Scripted(utterances) => {
                Box::new(super::scripted::ScriptedCapture::new(utterances))
            }
            CaptureSource::Disabled => Box::new(super::null::NullCapture),
        }
    }

    /// Create a playback backend for the given source
    pub fn create_playback(source: PlaybackSource, settings: SpeechSettings) -> Box<dyn SpeechPlayback> {
        match source {
            PlaybackSource::Scripted => Box::new(super::scripted::ScriptedPlayback::new(settings)),
            PlaybackSource::Disabled => Box::new(super::null::NullPlayback),
        }
    }
}
