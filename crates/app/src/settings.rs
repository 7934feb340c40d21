//! Application settings
//!
//! Layered with the `config` crate: an optional TOML file, then environment
//! overrides such as `SIGHTLINE_ANNOUNCER__REFRESH_HZ=30`.

use alerting::AlertConfig;
use announcer::AnnouncerConfig;
use camera_capture::CameraConfig;
use config::{Config, ConfigError, Environment, File};
use guidance::DistanceEstimator;
use object_detection::DetectionConfig;
use overlay::OverlayConfig;
use serde::{Deserialize, Serialize};
use voice_control::VoiceConfig;

/// Default settings file, looked up in the working directory
const DEFAULT_FILE: &str = "sightline";

const ENV_PREFIX: &str = "SIGHTLINE";

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// trace, debug, info, warn or error
    pub log_level: String,
    /// Whether the device has a vibration motor
    pub haptics_supported: bool,
    pub camera: CameraConfig,
    pub detection: DetectionConfig,
    pub distance: DistanceEstimator,
    pub alerts: AlertConfig,
    pub overlay: OverlayConfig,
    pub voice: VoiceConfig,
    pub announcer: AnnouncerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            haptics_supported: false,
            camera: CameraConfig::default(),
            detection: DetectionConfig::default(),
            distance: DistanceEstimator::default(),
            alerts: AlertConfig::default(),
            overlay: OverlayConfig::default(),
            voice: VoiceConfig::default(),
            announcer: AnnouncerConfig::default(),
        }
    }
}

impl Settings {
    /// Load from `path` (required when given) or `./sightline.toml` (optional),
    /// then apply environment overrides
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camera_capture::Facing;

    #[test]
    fn test_defaults_match_calibration() {
        let settings = Settings::default();
        assert_eq!(settings.distance.reference_width_px, 200.0);
        assert_eq!(settings.distance.known_distance_m, 2.0);
        assert_eq!(settings.alerts.vibration_threshold_m, 1.0);
        assert_eq!(settings.alerts.sound_threshold_m, 1.0);
        assert_eq!(settings.camera.facing, Facing::Rear);
        assert_eq!(settings.voice.locale, "en-US");
        assert!(settings.voice.continuous);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("sightline-load-from-file-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
log_level = "debug"

[camera]
width = 1000
height = 600

[alerts]
sound_threshold_m = 0.5
vibration_pattern = [200, 50, 200]

[announcer]
refresh_hz = 30.0
"#,
        )
        .unwrap();

        let settings = Settings::load(path.to_str()).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!((settings.camera.width, settings.camera.height), (1000, 600));
        assert_eq!(settings.camera.facing, Facing::Rear);
        assert_eq!(settings.alerts.sound_threshold_m, 0.5);
        assert_eq!(settings.alerts.vibration_threshold_m, 1.0);
        assert_eq!(
            Vec::<u64>::from(settings.alerts.vibration_pattern.clone()),
            vec![200, 50, 200]
        );
        assert_eq!(settings.announcer.refresh_hz, 30.0);
        assert_eq!(settings.announcer.max_consecutive_failures, 30);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        assert!(Settings::load(Some("/nonexistent/sightline.toml")).is_err());
    }
}
