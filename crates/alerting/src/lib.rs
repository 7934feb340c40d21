//! Alerting System
//!
//! Accessibility outputs and the policy deciding when to use them:
//! - Speech synthesis (announcements, confirmations)
//! - Haptic vibration pulses on supporting devices
//! - A proximity alert sound loaded once at startup

mod console;
mod outputs;
mod proximity;

pub use console::{AssetAlertSound, LogHaptics, LogSpeech};
pub use outputs::{AlertSound, Haptics, SpeechSynthesizer, Utterance, VibrationPattern};
pub use proximity::{AlertConfig, ProximityAlert, ProximityAlerter};

use thiserror::Error;

/// Alerting error types
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Failed to load alert sound {path}: {reason}")]
    SoundAsset { path: String, reason: String },
}
