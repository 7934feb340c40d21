//! One detection-and-announcement cycle

use alerting::{ProximityAlert, Utterance};
use guidance::{direction_of, Direction, Distance};
use metrics::counter;
use object_detection::{primary, retain_confident};
use tracing::{debug, error, warn};

use crate::runner::Announcer;

/// Spoken when the loop gives up after repeated failures
pub const PAUSED_NOTICE: &str = "Object detection paused after repeated errors";

/// What the primary detection of a frame produced
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub class: String,
    pub distance: Distance,
    pub direction: Direction,
    /// A new utterance was issued this frame
    pub announced: bool,
    pub alert: ProximityAlert,
}

/// Result of one cycle
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Loop not running; nothing was done
    Idle,
    /// No detections in the frame
    Empty,
    /// Primary detection drawn and evaluated
    Observed(Observation),
    /// Primary detection unusable (non-positive width)
    Skipped,
    /// Capture or detection failed; frame skipped
    Failed,
    /// Too many consecutive failures; loop went idle
    Paused,
}

/// Sentence spoken for a newly seen object
pub fn announcement(class: &str, direction: Direction, distance: Distance) -> String {
    format!(
        "{} is {} and about {} meters away",
        class,
        direction.phrase(),
        distance
    )
}

impl Announcer {
    /// Run one cycle if the loop is running
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        if !self.session.is_running() {
            return CycleOutcome::Idle;
        }
        counter!("sightline_frames_total").increment(1);

        let frame = match self.camera.next_frame().await {
            Ok(frame) => frame,
            Err(e) => return self.frame_failed(&format!("capture: {}", e)),
        };
        self.outputs.overlay.resize(frame.width, frame.height);

        let mut detections = match self.detector.detect(&frame).await {
            Ok(detections) => detections,
            Err(e) => return self.frame_failed(&format!("detection: {}", e)),
        };
        self.consecutive_failures = 0;
        if let Some(min_score) = self.min_score {
            retain_confident(&mut detections, min_score);
        }

        self.outputs.overlay.clear();

        let Some(detection) = primary(&detections) else {
            self.session.clear_announced();
            return CycleOutcome::Empty;
        };

        let bbox = detection.bbox;
        let distance = match self.estimator.estimate(bbox.width) {
            Ok(distance) => distance,
            Err(e) => {
                warn!("Skipping {} in frame {}: {}", detection.class, frame.sequence, e);
                return CycleOutcome::Skipped;
            }
        };

        let label = format!("{} ({}m)", detection.class, distance);
        self.outputs.overlay.draw_labelled_box(&bbox, &label);

        let direction = direction_of(bbox.center_x(), frame.horizontal_center());
        debug!(
            "Frame {}: {} {} at {} m",
            frame.sequence, detection.class, direction, distance
        );

        let announced = if self.session.should_announce(&detection.class) {
            self.outputs.speech.cancel();
            self.outputs.speech.speak(Utterance::new(announcement(
                &detection.class,
                direction,
                distance,
            )));
            self.session.mark_announced(&detection.class);
            counter!("sightline_announcements_total").increment(1);
            true
        } else {
            false
        };

        let alert = self.alerter.alert(
            distance,
            self.outputs.haptics.as_mut(),
            self.outputs.sound.as_mut(),
        );
        if alert.is_any() {
            counter!("sightline_proximity_alerts_total").increment(1);
        }

        CycleOutcome::Observed(Observation {
            class: detection.class.clone(),
            distance,
            direction,
            announced,
            alert,
        })
    }

    fn frame_failed(&mut self, reason: &str) -> CycleOutcome {
        counter!("sightline_detection_failures_total").increment(1);
        self.consecutive_failures += 1;
        warn!(
            "Frame skipped ({}/{} consecutive failures): {}",
            self.consecutive_failures, self.config.max_consecutive_failures, reason
        );

        if self.consecutive_failures < self.config.max_consecutive_failures {
            return CycleOutcome::Failed;
        }

        error!(
            "Pausing object detection after {} consecutive failures",
            self.consecutive_failures
        );
        self.consecutive_failures = 0;
        self.halt();
        self.say(PAUSED_NOTICE);
        CycleOutcome::Paused
    }
}
