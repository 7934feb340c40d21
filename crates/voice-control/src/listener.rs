//! Voice command listener task

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{RecognitionError, SpeechRecognizer, VoiceCommand, VoiceConfig};

/// Forwards recognized start/stop commands to the announcer
pub struct VoiceListener<R> {
    recognizer: R,
    config: VoiceConfig,
}

impl<R: SpeechRecognizer> VoiceListener<R> {
    pub fn new(recognizer: R, config: VoiceConfig) -> Self {
        Self { recognizer, config }
    }

    /// Listen until the session ends or the command receiver goes away.
    ///
    /// Only a failure to start the session is returned; errors reported by a
    /// running session are logged and listening continues.
    pub async fn run<T>(mut self, commands: mpsc::Sender<T>) -> Result<(), RecognitionError>
    where
        T: From<VoiceCommand> + Send,
    {
        self.recognizer.start(&self.config).await?;
        info!("Listening for voice commands ({})", self.config.locale);

        while let Some(event) = self.recognizer.next_event().await {
            let event = match event {
                Ok(event) => event,
                Err(e) => {
                    warn!("Speech recognition error: {}", e);
                    continue;
                }
            };

            let Some(transcript) = event.latest_transcript() else {
                continue;
            };
            info!("Voice command: {}", transcript);

            match VoiceCommand::parse(transcript) {
                Some(command) => {
                    if commands.send(T::from(command)).await.is_err() {
                        debug!("Command receiver dropped, voice listener exiting");
                        return Ok(());
                    }
                }
                None => debug!("Ignoring phrase: {}", transcript),
            }
        }

        info!("Speech recognition session ended");
        Ok(())
    }
}
