//! Recording fakes for every capability port, and a harness wiring them into
//! an `App`.

#![allow(dead_code)]

use async_trait::async_trait;
use qr_studio::capture::{CameraDecoder, CameraFactory, ScanEvent};
use qr_studio::config::ScannerConfig;
use qr_studio::error::{CaptureError, PlatformError};
use qr_studio::platform::{Clipboard, Downloader, Notifier, ShareRequest, ShareTarget};
use qr_studio::render::QrcodeRenderer;
use qr_studio::{App, Capabilities, StudioConfig, Viewport};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Counts cameras bound to the scan region across all fake cameras
#[derive(Debug, Default)]
pub struct CameraTracker {
    pub created: AtomicUsize,
    pub bound: AtomicUsize,
    pub max_bound: AtomicUsize,
    pub cleared: AtomicUsize,
    pub regions: Mutex<Vec<String>>,
}

impl CameraTracker {
    fn bind(&self) {
        let now = self.bound.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_bound.fetch_max(now, Ordering::SeqCst);
    }

    fn unbind(&self) {
        self.bound.fetch_sub(1, Ordering::SeqCst);
        self.cleared.fetch_add(1, Ordering::SeqCst);
    }

    pub fn bound(&self) -> usize {
        self.bound.load(Ordering::SeqCst)
    }

    pub fn max_bound(&self) -> usize {
        self.max_bound.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn cleared(&self) -> usize {
        self.cleared.load(Ordering::SeqCst)
    }
}

/// How the next fake camera behaves
#[derive(Debug, Clone, Default)]
pub struct CameraScript {
    pub events: Vec<ScanEvent>,
    pub create_error: Option<CaptureError>,
    pub render_error: Option<CaptureError>,
    pub clear_error: Option<CaptureError>,
    pub clear_delay: Duration,
}

pub struct FakeCamera {
    tracker: Arc<CameraTracker>,
    events: VecDeque<ScanEvent>,
    script: CameraScript,
    running: bool,
}

#[async_trait]
impl CameraDecoder for FakeCamera {
    async fn render(&mut self) -> Result<(), CaptureError> {
        if let Some(err) = self.script.render_error.clone() {
            return Err(err);
        }
        self.running = true;
        self.tracker.bind();
        Ok(())
    }

    async fn next_event(&mut self) -> Option<ScanEvent> {
        if !self.running {
            return None;
        }
        tokio::task::yield_now().await;
        self.events.pop_front()
    }

    async fn clear(&mut self) -> Result<(), CaptureError> {
        if !self.running {
            return Err(CaptureError::NotRunning);
        }
        tokio::time::sleep(self.script.clear_delay).await;
        self.running = false;
        self.tracker.unbind();
        match self.script.clear_error.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeCameras {
    pub tracker: Arc<CameraTracker>,
    pub script: Arc<Mutex<CameraScript>>,
}

impl FakeCameras {
    pub fn set_script(&self, script: CameraScript) {
        *self.script.lock().unwrap() = script;
    }
}

impl CameraFactory for FakeCameras {
    fn create(
        &self,
        region: &str,
        _config: &ScannerConfig,
    ) -> Result<Box<dyn CameraDecoder>, CaptureError> {
        let script = self.script.lock().unwrap().clone();
        if let Some(err) = script.create_error.clone() {
            return Err(err);
        }
        self.tracker.created.fetch_add(1, Ordering::SeqCst);
        self.tracker.regions.lock().unwrap().push(region.to_string());
        Ok(Box::new(FakeCamera {
            tracker: Arc::clone(&self.tracker),
            events: script.events.iter().cloned().collect(),
            script,
            running: false,
        }))
    }
}

#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub unavailable: bool,
    pub fail: bool,
    pub writes: Mutex<Vec<String>>,
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    fn is_available(&self) -> bool {
        !self.unavailable
    }

    async fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        if self.fail {
            return Err(PlatformError::Clipboard("denied".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

#[derive(Debug, Default)]
pub struct ShareState {
    pub available: bool,
    pub error: Option<PlatformError>,
    pub requests: Vec<ShareRequest>,
}

#[derive(Clone, Default)]
pub struct FakeShare(pub Arc<Mutex<ShareState>>);

#[async_trait]
impl ShareTarget for FakeShare {
    fn is_available(&self) -> bool {
        self.0.lock().unwrap().available
    }

    async fn share(&self, request: &ShareRequest) -> Result<(), PlatformError> {
        let mut state = self.0.lock().unwrap();
        state.requests.push(request.clone());
        match state.error.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryDownloader {
    files: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryDownloader {
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().unwrap().clone()
    }

    /// Make every later save fail as a full disk would
    pub fn fail_saves(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl Downloader for MemoryDownloader {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PlatformError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PlatformError::Download("no space left on device".to_string()));
        }
        self.files
            .lock()
            .unwrap()
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from("/downloads").join(file_name))
    }
}

/// An `App` wired to fakes, with handles to inspect them
pub struct Harness {
    pub app: App,
    pub cameras: FakeCameras,
    pub clipboard: Arc<RecordingClipboard>,
    pub notifier: Arc<RecordingNotifier>,
    pub share: FakeShare,
    pub downloads: MemoryDownloader,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_clipboard(RecordingClipboard::default())
    }

    pub fn with_clipboard(clipboard: RecordingClipboard) -> Self {
        Self::build(Viewport::default(), clipboard)
    }

    pub fn mobile() -> Self {
        Self::build(Viewport::new(375), RecordingClipboard::default())
    }

    fn build(viewport: Viewport, clipboard: RecordingClipboard) -> Self {
        let cameras = FakeCameras::default();
        let clipboard = Arc::new(clipboard);
        let notifier = Arc::new(RecordingNotifier::default());
        let share = FakeShare::default();
        let downloads = MemoryDownloader::default();

        let caps = Capabilities {
            renderer: Box::new(QrcodeRenderer::new()),
            cameras: Box::new(cameras.clone()),
            share: Box::new(share.clone()),
            clipboard: Arc::clone(&clipboard) as Arc<dyn Clipboard>,
            downloader: Box::new(downloads.clone()),
            notifier: Arc::clone(&notifier) as Arc<dyn Notifier>,
        };
        let app = App::new(StudioConfig::for_viewport(viewport), caps);
        Self {
            app,
            cameras,
            clipboard,
            notifier,
            share,
            downloads,
        }
    }

    pub fn script(&self, script: CameraScript) {
        self.cameras.set_script(script);
    }
}

/// Poll until `cond` holds, failing the test after a second
pub async fn wait_until(mut cond: impl FnMut() -> bool) {
    for _ in 0..200 {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached in time");
}
