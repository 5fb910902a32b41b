//! Scanner surface: owns the camera for as long as it is mounted
//!
//! Mounting binds the scan region and starts a camera. The returned
//! [`ScanSession`] tears the camera down when released or dropped, on every
//! exit path. Teardown runs detached and keeps the region bound until the
//! camera has cleared, so the next mount waits for it while mode changes do
//! not.

use crate::capture::{CameraDecoder, CameraFactory, RegionPermit, ScanEvent, ScanRegion};
use crate::config::ScannerConfig;
use crate::error::CaptureError;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// How a wait on a mounted scanner ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A symbol was decoded
    Decoded(String),
    /// The camera stopped producing frames
    Ended,
}

/// Mounts cameras on the scan region
pub struct Scanner {
    cameras: Box<dyn CameraFactory>,
    region: ScanRegion,
    config: ScannerConfig,
}

impl Scanner {
    /// Scanner building cameras with `cameras`, configured by `config`
    pub fn new(cameras: Box<dyn CameraFactory>, region: ScanRegion, config: ScannerConfig) -> Self {
        Self {
            cameras,
            region,
            config,
        }
    }

    /// Region cameras are bound to
    pub fn region(&self) -> &ScanRegion {
        &self.region
    }

    /// Bind the region (waiting out any pending teardown) and start a camera
    pub async fn mount(&self) -> Result<ScanSession, CaptureError> {
        let permit = self.region.acquire().await?;
        let mut camera = self.cameras.create(self.region.id(), &self.config)?;
        if let Err(err) = camera.render().await {
            teardown(camera, permit);
            return Err(err);
        }
        log::debug!("scanner mounted on '{}'", self.region.id());
        Ok(ScanSession {
            camera: Some(camera),
            permit: Some(permit),
        })
    }
}

/// A running camera bound to the scan region
pub struct ScanSession {
    camera: Option<Box<dyn CameraDecoder>>,
    permit: Option<RegionPermit>,
}

impl ScanSession {
    /// Wait for the next decoded symbol. Per-frame misses are logged and
    /// skipped.
    pub async fn next_outcome(&mut self) -> ScanOutcome {
        let Some(camera) = self.camera.as_mut() else {
            return ScanOutcome::Ended;
        };
        loop {
            match camera.next_event().await {
                Some(ScanEvent::Decoded(text)) => return ScanOutcome::Decoded(text),
                Some(ScanEvent::Miss(reason)) => log::debug!("QR scan error: {}", reason),
                None => return ScanOutcome::Ended,
            }
        }
    }

    /// Tear the camera down. The returned handle resolves once the region is
    /// free again; callers are not required to wait for it.
    pub fn release(mut self) -> Option<JoinHandle<()>> {
        self.take_and_teardown()
    }

    fn take_and_teardown(&mut self) -> Option<JoinHandle<()>> {
        let camera = self.camera.take()?;
        let permit = self.permit.take()?;
        teardown(camera, permit)
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.take_and_teardown();
    }
}

fn teardown(mut camera: Box<dyn CameraDecoder>, permit: RegionPermit) -> Option<JoinHandle<()>> {
    if let Ok(handle) = Handle::try_current() {
        return Some(handle.spawn(async move {
            clear_camera(camera.as_mut(), permit.region_id()).await;
            drop(permit);
        }));
    }

    // Dropped outside any runtime: clear on a private one before releasing
    match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime.block_on(clear_camera(camera.as_mut(), permit.region_id())),
        Err(err) => log::debug!(
            "no runtime to clear camera on '{}': {}",
            permit.region_id(),
            err
        ),
    }
    None
}

async fn clear_camera(camera: &mut dyn CameraDecoder, region: &str) {
    if let Err(err) = camera.clear().await {
        log::debug!("scanner teardown on '{}' failed: {}", region, err);
    }
}
