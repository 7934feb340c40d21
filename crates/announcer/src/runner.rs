//! Announce loop orchestration

use alerting::{AlertConfig, AlertSound, Haptics, ProximityAlerter, SpeechSynthesizer, Utterance};
use camera_capture::CameraSource;
use guidance::DistanceEstimator;
use object_detection::ObjectDetector;
use overlay::Overlay;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};
use voice_control::VoiceCommand;

use crate::{AnnouncerConfig, Control, Origin, Session};

/// Accessibility outputs driven by the loop
pub struct Outputs {
    pub overlay: Box<dyn Overlay>,
    pub speech: Box<dyn SpeechSynthesizer>,
    pub haptics: Box<dyn Haptics>,
    pub sound: Box<dyn AlertSound>,
}

/// Whether the loop keeps going after a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Render/announce loop.
///
/// Expects an opened camera and a loaded detector (see [`crate::prepare`]).
pub struct Announcer {
    pub(crate) config: AnnouncerConfig,
    pub(crate) estimator: DistanceEstimator,
    pub(crate) alerter: ProximityAlerter,
    pub(crate) min_score: Option<f32>,
    pub(crate) camera: Box<dyn CameraSource>,
    pub(crate) detector: Box<dyn ObjectDetector>,
    pub(crate) outputs: Outputs,
    pub(crate) session: Session,
    pub(crate) consecutive_failures: u32,
}

impl Announcer {
    pub fn new(
        config: AnnouncerConfig,
        camera: Box<dyn CameraSource>,
        detector: Box<dyn ObjectDetector>,
        outputs: Outputs,
    ) -> Self {
        Self {
            config,
            estimator: DistanceEstimator::default(),
            alerter: ProximityAlerter::default(),
            min_score: None,
            camera,
            detector,
            outputs,
            session: Session::new(),
            consecutive_failures: 0,
        }
    }

    /// Use a different distance calibration
    pub fn with_estimator(mut self, estimator: DistanceEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// Use different proximity thresholds
    pub fn with_alerts(mut self, config: AlertConfig) -> Self {
        self.alerter = ProximityAlerter::new(config);
        self
    }

    /// Drop low-scoring detections before picking the primary one
    pub fn with_min_score(mut self, min_score: Option<f32>) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Apply a start/stop request.
    pub(crate) fn apply(&mut self, control: Control) -> Flow {
        match control {
            Control::Start(origin) => {
                if self.session.start() {
                    self.consecutive_failures = 0;
                    info!("Object detection started ({:?})", origin);
                } else {
                    debug!("Start ignored, already running");
                }
                if origin == Origin::Voice {
                    self.say(VoiceCommand::Start.confirmation());
                }
                Flow::Continue
            }
            Control::Stop(origin) => {
                self.halt();
                info!("Object detection stopped ({:?})", origin);
                if origin == Origin::Voice {
                    self.say(VoiceCommand::Stop.confirmation());
                }
                Flow::Continue
            }
            Control::Shutdown => {
                self.halt();
                info!("Announce loop shutting down");
                Flow::Exit
            }
        }
    }

    /// Apply a control outside the run loop
    pub fn handle(&mut self, control: Control) {
        self.apply(control);
    }

    /// Idle state: nothing drawn, nothing being said
    pub(crate) fn halt(&mut self) {
        self.session.stop();
        self.outputs.overlay.clear();
        self.outputs.speech.cancel();
    }

    pub(crate) fn say(&mut self, text: &str) {
        self.outputs.speech.speak(Utterance::new(text));
    }

    /// Run until shutdown or until every control sender is gone.
    ///
    /// While idle the loop only waits for controls. While running it
    /// performs one cycle per refresh tick; controls queued during a cycle
    /// are applied before the next one starts.
    pub async fn run(&mut self, mut controls: mpsc::Receiver<Control>) {
        let mut refresh = time::interval(self.config.refresh_interval());
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(
            "Announce loop ready ({:.0} Hz refresh)",
            self.config.refresh_hz
        );

        loop {
            if !self.session.is_running() {
                match controls.recv().await {
                    Some(control) => {
                        if self.apply(control) == Flow::Exit {
                            break;
                        }
                    }
                    None => break,
                }
                continue;
            }

            tokio::select! {
                biased;
                control = controls.recv() => match control {
                    Some(control) => {
                        if self.apply(control) == Flow::Exit {
                            break;
                        }
                    }
                    None => break,
                },
                _ = refresh.tick() => {
                    self.run_cycle().await;
                }
            }
        }

        if self.session.is_running() {
            self.halt();
        }
        info!("Announce loop exited");
    }
}
