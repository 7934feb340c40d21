//! Speech recognition service contract

use async_trait::async_trait;

use crate::{RecognitionError, VoiceConfig};

/// One candidate transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub transcript: String,
    pub confidence: Option<f32>,
}

/// A recognized phrase with its candidates, best first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionResult {
    pub alternatives: Vec<Alternative>,
}

impl RecognitionResult {
    /// Single-candidate result
    pub fn single(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![Alternative {
                transcript: transcript.into(),
                confidence: None,
            }],
        }
    }
}

/// Results of a continuous session so far, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionEvent {
    pub results: Vec<RecognitionResult>,
}

impl RecognitionEvent {
    /// Best candidate of the most recent result
    pub fn latest_transcript(&self) -> Option<&str> {
        self.results
            .last()
            .and_then(|r| r.alternatives.first())
            .map(|a| a.transcript.as_str())
    }
}

/// External speech recognition service.
///
/// Error recovery of the session belongs to the service; the listener only
/// logs errors it is handed and keeps reading.
#[async_trait]
pub trait SpeechRecognizer: Send {
    /// Begin a session with the configured locale and mode
    async fn start(&mut self, config: &VoiceConfig) -> Result<(), RecognitionError>;

    /// Next result event; `None` once the session has ended for good
    async fn next_event(&mut self) -> Option<Result<RecognitionEvent, RecognitionError>>;
}

#[async_trait]
impl<T: SpeechRecognizer + ?Sized> SpeechRecognizer for Box<T> {
    async fn start(&mut self, config: &VoiceConfig) -> Result<(), RecognitionError> {
        (**self).start(config).await
    }

    async fn next_event(&mut self) -> Option<Result<RecognitionEvent, RecognitionError>> {
        (**self).next_event().await
    }
}
