//! Session setup

use camera_capture::{CameraConfig, CameraSource};
use object_detection::ObjectDetector;
use tracing::{error, info};

use crate::AnnouncerError;

/// Open the camera and load the detection model concurrently.
///
/// Either failure is terminal for the session: there is no retry and the
/// loop must not be started.
pub async fn prepare(
    camera: &mut dyn CameraSource,
    detector: &mut dyn ObjectDetector,
    camera_config: &CameraConfig,
) -> Result<(), AnnouncerError> {
    let open_camera = async {
        camera.open(camera_config).await.map_err(|e| {
            error!("Error accessing camera: {}", e);
            AnnouncerError::Camera(e)
        })
    };
    let load_model = async {
        detector.load().await.map_err(|e| {
            error!("Detection model failed to load: {}", e);
            AnnouncerError::Model(e)
        })
    };

    tokio::try_join!(open_camera, load_model)?;
    info!("Camera open and detection model loaded");
    Ok(())
}
