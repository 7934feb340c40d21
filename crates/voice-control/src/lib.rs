//! Voice Control
//!
//! Hands-free start/stop for the announcer:
//! - Continuous recognition session with a fixed locale
//! - Only the latest recognized phrase is inspected
//! - "start" / "stop" substrings, case-insensitive

mod channel;
mod command;
mod listener;
mod recognizer;

pub use channel::ChannelRecognizer;
pub use command::VoiceCommand;
pub use listener::VoiceListener;
pub use recognizer::{Alternative, RecognitionEvent, RecognitionResult, SpeechRecognizer};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recognition error types
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("Speech recognition not available: {0}")]
    Unavailable(String),

    #[error("Microphone access denied")]
    PermissionDenied,

    #[error("Recognition session error: {0}")]
    Session(String),
}

/// Voice control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Listen for voice commands at all
    pub enabled: bool,
    /// Recognition locale, fixed for the session
    pub locale: String,
    /// Keep listening after each result
    pub continuous: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locale: "en-US".to_string(),
            continuous: true,
        }
    }
}
