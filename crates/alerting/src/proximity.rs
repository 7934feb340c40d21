//! Proximity alert policy

use guidance::Distance;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{AlertSound, Haptics, VibrationPattern};

/// Proximity alert configuration
///
/// Both thresholds default to 1 m. The sound alert was once meant to fire
/// only under 0.5 m; that is a product decision, so it stays a knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Vibrate when closer than this (meters)
    pub vibration_threshold_m: f64,
    /// Play the alert sound when closer than this (meters)
    pub sound_threshold_m: f64,
    /// Vibration pattern (milliseconds, on/off alternating)
    pub vibration_pattern: VibrationPattern,
    /// Alert sound asset, loaded once at startup
    pub sound_path: Option<String>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            vibration_threshold_m: 1.0,
            sound_threshold_m: 1.0,
            vibration_pattern: VibrationPattern::default(),
            sound_path: None,
        }
    }
}

/// Which alerts a distance calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProximityAlert {
    pub vibrate: bool,
    pub sound: bool,
}

impl ProximityAlert {
    pub fn is_any(&self) -> bool {
        self.vibrate || self.sound
    }
}

/// Fires haptic and audible alerts for close objects.
///
/// There is no cooldown: every qualifying frame triggers again.
pub struct ProximityAlerter {
    config: AlertConfig,
    fired: u64,
}

impl ProximityAlerter {
    pub fn new(config: AlertConfig) -> Self {
        info!(
            "Proximity alerts: vibrate < {} m, sound < {} m",
            config.vibration_threshold_m, config.sound_threshold_m
        );
        Self { config, fired: 0 }
    }

    /// Decide which alerts apply, without firing them
    pub fn evaluate(&self, distance: Distance) -> ProximityAlert {
        ProximityAlert {
            vibrate: distance.is_within(self.config.vibration_threshold_m),
            sound: distance.is_within(self.config.sound_threshold_m),
        }
    }

    /// Fire the alerts `distance` calls for.
    ///
    /// Vibration is skipped silently on devices without a motor.
    pub fn alert(
        &mut self,
        distance: Distance,
        haptics: &mut dyn Haptics,
        sound: &mut dyn AlertSound,
    ) -> ProximityAlert {
        let alert = self.evaluate(distance);

        if alert.vibrate {
            if haptics.is_supported() {
                haptics.vibrate(&self.config.vibration_pattern);
            } else {
                debug!("Vibration not supported on this device");
            }
        }
        if alert.sound {
            sound.play();
        }
        if alert.is_any() {
            self.fired += 1;
            debug!("Proximity alert at {} m (total {})", distance, self.fired);
        }

        alert
    }

    /// Alerts fired so far
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

impl Default for ProximityAlerter {
    fn default() -> Self {
        Self::new(AlertConfig::default())
    }
}
