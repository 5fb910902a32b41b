use super::{CameraDecoder, CameraFactory, FrameDecoder, ScanEvent};
use crate::capture::Frame;
use crate::config::ScannerConfig;
use crate::error::CaptureError;
use crate::tools::load_frame;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};

/// Supplies frames to a [`FrameFeedCamera`]
pub trait FrameSource: Send {
    /// Prepare the source. Errors here are initialization failures.
    fn open(&mut self) -> Result<(), CaptureError>;

    /// Next frame, `None` once the source is exhausted. A frame that cannot
    /// be produced is reported and scanning moves on.
    fn next_frame(&mut self) -> Option<Result<Frame, CaptureError>>;
}

/// Still images on disk played back as camera frames
#[derive(Debug, Clone)]
pub struct ImageSequence {
    paths: VecDeque<PathBuf>,
}

impl ImageSequence {
    /// Frames from `paths`, played in order
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl FrameSource for ImageSequence {
    fn open(&mut self) -> Result<(), CaptureError> {
        if self.paths.is_empty() {
            return Err(CaptureError::Init("no images to scan".to_string()));
        }
        if let Some(missing) = self.paths.iter().find(|p| !p.exists()) {
            return Err(CaptureError::Init(format!("{} not found", missing.display())));
        }
        Ok(())
    }

    fn next_frame(&mut self) -> Option<Result<Frame, CaptureError>> {
        let path = self.paths.pop_front()?;
        Some(load_frame(&path))
    }
}

/// [`CameraDecoder`] that decodes frames from a [`FrameSource`] at a fixed rate
pub struct FrameFeedCamera<S> {
    region: String,
    source: S,
    decoder: FrameDecoder,
    period: Duration,
    ticker: Option<Interval>,
    running: bool,
}

impl<S: FrameSource> FrameFeedCamera<S> {
    /// Camera for `region`, paced and windowed by `config`
    pub fn new(region: &str, source: S, config: &ScannerConfig) -> Self {
        Self {
            region: region.to_string(),
            source,
            decoder: FrameDecoder::with_window(config.qrbox as usize),
            period: Duration::from_secs_f64(1.0 / config.fps.max(1) as f64),
            ticker: None,
            running: false,
        }
    }
}

#[async_trait]
impl<S: FrameSource> CameraDecoder for FrameFeedCamera<S> {
    async fn render(&mut self) -> Result<(), CaptureError> {
        if self.running {
            return Err(CaptureError::AlreadyStarted);
        }
        self.source.open()?;
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.ticker = Some(ticker);
        self.running = true;
        log::debug!("camera bound to region '{}' every {:?}", self.region, self.period);
        Ok(())
    }

    async fn next_event(&mut self) -> Option<ScanEvent> {
        let ticker = self.ticker.as_mut()?;
        ticker.tick().await;
        match self.source.next_frame() {
            Some(Ok(frame)) => Some(self.decoder.scan(&frame)),
            Some(Err(err)) => Some(ScanEvent::Miss(err.to_string())),
            None => {
                log::debug!("frame feed for region '{}' ended", self.region);
                self.ticker = None;
                None
            }
        }
    }

    async fn clear(&mut self) -> Result<(), CaptureError> {
        if !self.running {
            return Err(CaptureError::NotRunning);
        }
        self.running = false;
        self.ticker = None;
        log::debug!("camera released region '{}'", self.region);
        Ok(())
    }
}

/// [`CameraFactory`] building a [`FrameFeedCamera`] over a fresh source per
/// mount
pub struct FrameFeedFactory<F, S> {
    make_source: F,
    _source: PhantomData<fn() -> S>,
}

impl<F, S> FrameFeedFactory<F, S>
where
    F: Fn() -> Result<S, CaptureError> + Send + Sync,
    S: FrameSource + 'static,
{
    /// Factory calling `make_source` on every mount
    pub fn new(make_source: F) -> Self {
        Self {
            make_source,
            _source: PhantomData,
        }
    }
}

impl<F, S> CameraFactory for FrameFeedFactory<F, S>
where
    F: Fn() -> Result<S, CaptureError> + Send + Sync,
    S: FrameSource + 'static,
{
    fn create(
        &self,
        region: &str,
        config: &ScannerConfig,
    ) -> Result<Box<dyn CameraDecoder>, CaptureError> {
        let source = (self.make_source)()?;
        log::debug!(
            "creating camera for '{}' (fps={}, qrbox={}, aspect={}, torch={}, zoom={})",
            region,
            config.fps,
            config.qrbox,
            config.aspect_ratio,
            config.show_torch_button,
            config.show_zoom_slider
        );
        Ok(Box::new(FrameFeedCamera::new(region, source, config)))
    }
}
