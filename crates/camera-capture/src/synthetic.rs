//! Synthetic camera source

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::{CameraConfig, CameraError, CameraSource, Facing, VideoFrame};

/// Camera that produces blank frames at the configured resolution.
///
/// It can be told which facings exist and whether permission is granted so
/// the setup failure paths can be exercised without hardware.
pub struct SyntheticCamera {
    available: Vec<Facing>,
    permission_granted: bool,
    opened: Option<CameraConfig>,
    sequence: u32,
    started: Instant,
}

impl SyntheticCamera {
    /// Device with both cameras and permission granted
    pub fn new() -> Self {
        Self {
            available: vec![Facing::Rear, Facing::Front],
            permission_granted: true,
            opened: None,
            sequence: 0,
            started: Instant::now(),
        }
    }

    /// Device exposing only the given facings
    pub fn with_facings(facings: Vec<Facing>) -> Self {
        Self {
            available: facings,
            ..Self::new()
        }
    }

    /// Device where the user refuses camera access
    pub fn denied() -> Self {
        Self {
            permission_granted: false,
            ..Self::new()
        }
    }

    /// Whether a stream is bound
    pub fn is_open(&self) -> bool {
        self.opened.is_some()
    }
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CameraSource for SyntheticCamera {
    async fn open(&mut self, config: &CameraConfig) -> Result<(), CameraError> {
        if !self.permission_granted {
            warn!("Camera permission denied");
            return Err(CameraError::PermissionDenied);
        }
        if !self.available.contains(&config.facing) {
            warn!("No {:?} camera on this device", config.facing);
            return Err(CameraError::Unavailable(format!(
                "no {:?} camera",
                config.facing
            )));
        }

        info!(
            "Synthetic {:?} camera opened at {}x{}",
            config.facing, config.width, config.height
        );
        self.opened = Some(config.clone());
        self.started = Instant::now();
        Ok(())
    }

    async fn next_frame(&mut self) -> Result<VideoFrame, CameraError> {
        let config = self.opened.as_ref().ok_or(CameraError::NotOpened)?;

        let mut frame = VideoFrame::blank(config.width, config.height, self.sequence);
        frame.timestamp_ns = self.started.elapsed().as_nanos() as u64;
        self.sequence = self.sequence.wrapping_add(1);

        debug!("Synthetic frame {}", frame.sequence);
        Ok(frame)
    }
}
