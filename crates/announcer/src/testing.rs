//! Recording collaborators for loop tests

use std::sync::{Arc, Mutex};

use alerting::{AlertSound, Haptics, SpeechSynthesizer, Utterance, VibrationPattern};
use async_trait::async_trait;
use camera_capture::{CameraConfig, CameraSource, SyntheticCamera, VideoFrame};
use object_detection::{BoundingBox, Detection, DetectionError, ObjectDetector, ScriptedDetector};
use overlay::Overlay;

use crate::{Announcer, AnnouncerConfig, Outputs};

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    Speak(String),
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    Resize(u32, u32),
    Clear,
    Rect(BoundingBox),
    Text(String, f64, f64),
}

#[derive(Default)]
struct Log {
    speech: Vec<SpeechEvent>,
    overlay: Vec<OverlayEvent>,
    vibrations: Vec<VibrationPattern>,
    sounds: usize,
    detect_calls: usize,
}

/// Shared view of everything the loop did
#[derive(Clone, Default)]
pub struct Probe(Arc<Mutex<Log>>);

impl Probe {
    fn with<R>(&self, f: impl FnOnce(&mut Log) -> R) -> R {
        f(&mut self.0.lock().unwrap())
    }

    pub fn speech(&self) -> Vec<SpeechEvent> {
        self.with(|log| log.speech.clone())
    }

    /// Texts spoken, in order
    pub fn spoken(&self) -> Vec<String> {
        self.speech()
            .into_iter()
            .filter_map(|e| match e {
                SpeechEvent::Speak(text) => Some(text),
                SpeechEvent::Cancel => None,
            })
            .collect()
    }

    pub fn overlay(&self) -> Vec<OverlayEvent> {
        self.with(|log| log.overlay.clone())
    }

    /// Nothing drawn since the last clear or resize
    pub fn overlay_is_clear(&self) -> bool {
        self.with(|log| {
            log.overlay
                .iter()
                .rev()
                .take_while(|e| !matches!(e, OverlayEvent::Clear | OverlayEvent::Resize(..)))
                .next()
                .is_none()
        })
    }

    pub fn vibrations(&self) -> Vec<VibrationPattern> {
        self.with(|log| log.vibrations.clone())
    }

    pub fn sounds(&self) -> usize {
        self.with(|log| log.sounds)
    }

    pub fn detect_calls(&self) -> usize {
        self.with(|log| log.detect_calls)
    }
}

struct RecordingSpeech(Probe);

impl SpeechSynthesizer for RecordingSpeech {
    fn speak(&mut self, utterance: Utterance) {
        self.0.with(|log| log.speech.push(SpeechEvent::Speak(utterance.text)));
    }

    fn cancel(&mut self) {
        self.0.with(|log| log.speech.push(SpeechEvent::Cancel));
    }
}

struct RecordingOverlay(Probe);

impl Overlay for RecordingOverlay {
    fn resize(&mut self, width: u32, height: u32) {
        self.0.with(|log| log.overlay.push(OverlayEvent::Resize(width, height)));
    }

    fn clear(&mut self) {
        self.0.with(|log| log.overlay.push(OverlayEvent::Clear));
    }

    fn stroke_rect(&mut self, bbox: &BoundingBox) {
        self.0.with(|log| log.overlay.push(OverlayEvent::Rect(*bbox)));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.0
            .with(|log| log.overlay.push(OverlayEvent::Text(text.to_string(), x, y)));
    }
}

struct RecordingHaptics(Probe);

impl Haptics for RecordingHaptics {
    fn is_supported(&self) -> bool {
        true
    }

    fn vibrate(&mut self, pattern: &VibrationPattern) {
        self.0.with(|log| log.vibrations.push(pattern.clone()));
    }
}

struct RecordingSound(Probe);

impl AlertSound for RecordingSound {
    fn play(&mut self) {
        self.0.with(|log| log.sounds += 1);
    }
}

struct CountingDetector {
    inner: ScriptedDetector,
    probe: Probe,
}

#[async_trait]
impl ObjectDetector for CountingDetector {
    async fn load(&mut self) -> Result<(), DetectionError> {
        self.inner.load().await
    }

    async fn detect(&mut self, frame: &VideoFrame) -> Result<Vec<Detection>, DetectionError> {
        self.probe.with(|log| log.detect_calls += 1);
        self.inner.detect(frame).await
    }
}

/// Announcer over a 1000x600 synthetic camera and the given script
pub async fn fixture(detector: ScriptedDetector) -> (Announcer, Probe) {
    fixture_with(AnnouncerConfig::default(), detector).await
}

pub async fn fixture_with(config: AnnouncerConfig, detector: ScriptedDetector) -> (Announcer, Probe) {
    let probe = Probe::default();

    let mut camera = SyntheticCamera::new();
    camera
        .open(&CameraConfig {
            width: 1000,
            height: 600,
            ..Default::default()
        })
        .await
        .unwrap();

    let mut detector = CountingDetector {
        inner: detector,
        probe: probe.clone(),
    };
    detector.load().await.unwrap();

    let outputs = Outputs {
        overlay: Box::new(RecordingOverlay(probe.clone())),
        speech: Box::new(RecordingSpeech(probe.clone())),
        haptics: Box::new(RecordingHaptics(probe.clone())),
        sound: Box::new(RecordingSound(probe.clone())),
    };

    let announcer = Announcer::new(config, Box::new(camera), Box::new(detector), outputs);
    (announcer, probe)
}
