//! Speech capture and playback backends
//!
//! This module provides the speech-to-text and text-to-speech seams the
//! session engine coordinates:
//! - `SpeechCapture`: one finalized utterance per activation
//! - `SpeechPlayback`: one audible utterance at a time, cancelable
//!
//! Platform engines are host-provided trait implementations. The crate
//! ships a null backend for platforms without an engine (a handled
//! condition, not an error) and scripted backends for testing and
//! batch demos.

pub mod backend;
pub mod null;
pub mod scripted;

pub use backend::{
    CaptureOutcome, CaptureSource, PlaybackSource, SpeechBackendFactory, SpeechCapture,
    SpeechPlayback, SpeechSettings,
};
pub use null::{NullCapture, NullPlayback};
pub use scripted::{ScriptedCapture, ScriptedPlayback};
