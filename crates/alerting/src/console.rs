//! Console-backed outputs
//!
//! Speech and vibration go to the log; the alert sound is held in memory and
//! falls back to the terminal bell when no asset is available.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::{AlertError, AlertSound, Haptics, SpeechSynthesizer, Utterance, VibrationPattern};

/// Speech output that logs each utterance
#[derive(Debug, Default)]
pub struct LogSpeech {
    spoken: u64,
}

impl LogSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Utterances issued so far
    pub fn spoken(&self) -> u64 {
        self.spoken
    }
}

impl SpeechSynthesizer for LogSpeech {
    fn speak(&mut self, utterance: Utterance) {
        self.spoken += 1;
        info!(target: "speech", "\"{}\"", utterance.text);
    }

    fn cancel(&mut self) {
        debug!(target: "speech", "Speech cancelled");
    }
}

/// Vibration motor that logs each pattern
#[derive(Debug)]
pub struct LogHaptics {
    supported: bool,
}

impl LogHaptics {
    pub fn new(supported: bool) -> Self {
        Self { supported }
    }
}

impl Haptics for LogHaptics {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn vibrate(&mut self, pattern: &VibrationPattern) {
        info!(target: "haptics", "Vibrate {:?}", pattern.steps());
    }
}

/// Alert sound loaded once at startup
pub struct AssetAlertSound {
    asset: Option<Vec<u8>>,
    plays: u64,
}

impl AssetAlertSound {
    /// Read the sound asset at `path`
    pub fn load(path: &str) -> Result<Self, AlertError> {
        let asset = std::fs::read(path).map_err(|e| AlertError::SoundAsset {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        info!("Alert sound loaded from {} ({} bytes)", path, asset.len());
        Ok(Self {
            asset: Some(asset),
            plays: 0,
        })
    }

    /// No asset: ring the terminal bell instead
    pub fn bell() -> Self {
        Self {
            asset: None,
            plays: 0,
        }
    }

    /// Load `path` if given, falling back to the bell on failure
    pub fn load_or_bell(path: Option<&str>) -> Self {
        match path.map(Self::load) {
            Some(Ok(sound)) => sound,
            Some(Err(e)) => {
                warn!("{}; using terminal bell", e);
                Self::bell()
            }
            None => Self::bell(),
        }
    }

    pub fn has_asset(&self) -> bool {
        self.asset.is_some()
    }

    pub fn plays(&self) -> u64 {
        self.plays
    }
}

impl AlertSound for AssetAlertSound {
    fn play(&mut self) {
        self.plays += 1;
        match &self.asset {
            Some(asset) => info!(target: "sound", "Alert sound ({} bytes)", asset.len()),
            None => {
                let mut stderr = std::io::stderr();
                let _ = stderr.write_all(b"\x07");
                let _ = stderr.flush();
            }
        }
    }
}
