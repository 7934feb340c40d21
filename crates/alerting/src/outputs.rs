//! Output device contracts

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default speech rate and pitch
const DEFAULT_RATE: f32 = 1.0;
const DEFAULT_PITCH: f32 = 1.0;

/// Text to be spoken
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    /// Utterance at default rate and pitch
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
        }
    }
}

/// Speech synthesis service
pub trait SpeechSynthesizer: Send {
    /// Queue an utterance
    fn speak(&mut self, utterance: Utterance);

    /// Drop every queued or playing utterance immediately
    fn cancel(&mut self);
}

/// Alternating on/off vibration durations, starting with "on"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct VibrationPattern(Vec<Duration>);

impl VibrationPattern {
    pub fn from_millis(millis: &[u64]) -> Self {
        Self(millis.iter().map(|&ms| Duration::from_millis(ms)).collect())
    }

    pub fn steps(&self) -> &[Duration] {
        &self.0
    }

    /// Total time the pattern runs
    pub fn total(&self) -> Duration {
        self.0.iter().sum()
    }
}

impl Default for VibrationPattern {
    /// on 300ms, off 100ms, on 300ms
    fn default() -> Self {
        Self::from_millis(&[300, 100, 300])
    }
}

impl From<Vec<u64>> for VibrationPattern {
    fn from(millis: Vec<u64>) -> Self {
        Self::from_millis(&millis)
    }
}

impl From<VibrationPattern> for Vec<u64> {
    fn from(pattern: VibrationPattern) -> Self {
        pattern.0.iter().map(|d| d.as_millis() as u64).collect()
    }
}

/// Device vibration motor
pub trait Haptics: Send {
    /// Whether this platform can vibrate at all
    fn is_supported(&self) -> bool;

    fn vibrate(&mut self, pattern: &VibrationPattern);
}

/// Alert sound player
pub trait AlertSound: Send {
    /// Play the alert; a trigger during playback restarts or overlaps it
    fn play(&mut self);
}

impl<T: SpeechSynthesizer + ?Sized> SpeechSynthesizer for Box<T> {
    fn speak(&mut self, utterance: Utterance) {
        (**self).speak(utterance)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

impl<T: Haptics + ?Sized> Haptics for Box<T> {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn vibrate(&mut self, pattern: &VibrationPattern) {
        (**self).vibrate(pattern)
    }
}

impl<T: AlertSound + ?Sized> AlertSound for Box<T> {
    fn play(&mut self) {
        (**self).play()
    }
}
