//! Sightline Console Application
//!
//! Wires the camera, detector, accessibility outputs, voice listener and
//! operator console around the announce loop.

pub mod operator;
pub mod settings;

pub use settings::Settings;

use alerting::{AssetAlertSound, LogHaptics, LogSpeech};
use announcer::{prepare, Announcer, AnnouncerError, ControlHandle, Outputs};
use camera_capture::{CameraSource, SyntheticCamera};
use object_detection::{ObjectDetector, ReplayDetector, ScriptedDetector};
use overlay::RasterOverlay;
use tokio::io::AsyncRead;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use voice_control::{ChannelRecognizer, VoiceListener};

const CONTROL_BUFFER: usize = 16;
const VOICE_BUFFER: usize = 16;

/// Initialize logging
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let level = level.parse::<Level>().unwrap_or_else(|_| {
        eprintln!("Unknown log level {:?}, using info", level);
        Level::INFO
    });

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn detector_for(settings: &Settings) -> Box<dyn ObjectDetector> {
    match &settings.detection.replay_path {
        Some(path) => Box::new(ReplayDetector::from_path(path)),
        None => {
            warn!("No detection recording configured; every frame will be empty");
            Box::new(ScriptedDetector::new())
        }
    }
}

/// Run a session until the operator quits
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let camera: Box<dyn CameraSource> = Box::new(SyntheticCamera::new());
    let detector = detector_for(&settings);
    run_session(settings, camera, detector, tokio::io::stdin()).await
}

/// Run a session over the given camera, detector and operator input.
///
/// The voice listener starts while the camera and model are still being
/// prepared; commands it hears early are queued for the loop.
pub async fn run_session<R>(
    settings: Settings,
    mut camera: Box<dyn CameraSource>,
    mut detector: Box<dyn ObjectDetector>,
    input: R,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
{
    let (handle, controls) = ControlHandle::channel(CONTROL_BUFFER);
    let (phrases, recognizer) = ChannelRecognizer::channel(VOICE_BUFFER);
    let voice_task = if settings.voice.enabled {
        let listener = VoiceListener::new(recognizer, settings.voice.clone());
        let commands = handle.sender();
        Some(tokio::spawn(async move {
            if let Err(e) = listener.run(commands).await {
                warn!("Voice commands unavailable: {}", e);
            }
        }))
    } else {
        None
    };

    let sound = AssetAlertSound::load_or_bell(settings.alerts.sound_path.as_deref());
    if let Err(e) = prepare(camera.as_mut(), detector.as_mut(), &settings.camera).await {
        if matches!(e, AnnouncerError::Camera(_)) {
            eprintln!("Camera access denied or not available.");
        }
        drop(phrases);
        drop(controls);
        if let Some(task) = voice_task {
            task.await?;
        }
        return Err(e.into());
    }

    let outputs = Outputs {
        overlay: Box::new(RasterOverlay::new(settings.overlay.clone())),
        speech: Box::new(LogSpeech::new()),
        haptics: Box::new(LogHaptics::new(settings.haptics_supported)),
        sound: Box::new(sound),
    };
    let mut announcer = Announcer::new(settings.announcer.clone(), camera, detector, outputs)
        .with_estimator(settings.distance.clone())
        .with_alerts(settings.alerts.clone())
        .with_min_score(settings.detection.min_score);

    let announce_task = tokio::spawn(async move { announcer.run(controls).await });

    info!("Ready: type start, stop, say <phrase> or quit");
    let voice_input = voice_task.as_ref().map(|_| &phrases);
    operator::drive(input, &handle, voice_input).await?;

    drop(phrases);
    drop(handle);
    announce_task.await?;
    if let Some(task) = voice_task {
        task.await?;
    }

    info!("Session ended");
    Ok(())
}
