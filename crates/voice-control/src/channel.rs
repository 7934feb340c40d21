//! Channel-fed recognizer
//!
//! Stands in for a platform recognizer: whatever produces phrases (a console,
//! a test) pushes them into the channel, and the recognizer presents them as
//! a continuous session.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::info;

use crate::{
    RecognitionError, RecognitionEvent, RecognitionResult, SpeechRecognizer, VoiceConfig,
};

/// Recognizer reading phrases from an mpsc channel
pub struct ChannelRecognizer {
    phrases: mpsc::Receiver<Result<String, RecognitionError>>,
    session: RecognitionEvent,
    started: bool,
    continuous: bool,
    finished: bool,
}

impl ChannelRecognizer {
    pub fn new(phrases: mpsc::Receiver<Result<String, RecognitionError>>) -> Self {
        Self {
            phrases,
            session: RecognitionEvent::default(),
            started: false,
            continuous: true,
            finished: false,
        }
    }

    /// Recognizer plus the sender feeding it
    pub fn channel(buffer: usize) -> (mpsc::Sender<Result<String, RecognitionError>>, Self) {
        let (tx, rx) = mpsc::channel(buffer);
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl SpeechRecognizer for ChannelRecognizer {
    async fn start(&mut self, config: &VoiceConfig) -> Result<(), RecognitionError> {
        info!(
            "Recognition session started (locale {}, continuous {})",
            config.locale, config.continuous
        );
        self.started = true;
        self.continuous = config.continuous;
        self.finished = false;
        self.session = RecognitionEvent::default();
        Ok(())
    }

    async fn next_event(&mut self) -> Option<Result<RecognitionEvent, RecognitionError>> {
        if !self.started {
            return Some(Err(RecognitionError::Session("session not started".into())));
        }
        if self.finished {
            return None;
        }

        match self.phrases.recv().await? {
            Ok(phrase) => {
                self.session.results.push(RecognitionResult::single(phrase));
                if !self.continuous {
                    self.finished = true;
                }
                Some(Ok(self.session.clone()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_continuous_session_accumulates() {
        let (tx, mut recognizer) = ChannelRecognizer::channel(4);
        recognizer.start(&VoiceConfig::default()).await.unwrap();

        tx.send(Ok("hello".into())).await.unwrap();
        tx.send(Ok("stop".into())).await.unwrap();

        let first = recognizer.next_event().await.unwrap().unwrap();
        assert_eq!(first.results.len(), 1);
        let second = recognizer.next_event().await.unwrap().unwrap();
        assert_eq!(second.results.len(), 2);
        assert_eq!(second.latest_transcript(), Some("stop"));

        drop(tx);
        assert!(recognizer.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_single_shot_session_ends() {
        let (tx, mut recognizer) = ChannelRecognizer::channel(4);
        let config = VoiceConfig {
            continuous: false,
            ..Default::default()
        };
        recognizer.start(&config).await.unwrap();

        tx.send(Ok("start".into())).await.unwrap();
        tx.send(Ok("stop".into())).await.unwrap();

        assert!(recognizer.next_event().await.unwrap().is_ok());
        assert!(recognizer.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_requires_start() {
        let (_tx, mut recognizer) = ChannelRecognizer::channel(1);
        assert!(matches!(
            recognizer.next_event().await,
            Some(Err(RecognitionError::Session(_)))
        ));
    }
}
