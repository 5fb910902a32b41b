//! Camera-decoding capability
//!
//! The scanner surface talks to cameras only through [`CameraFactory`] and
//! [`CameraDecoder`]. A decoder is bound to a named region, started with
//! [`CameraDecoder::render`], polled for [`ScanEvent`]s and torn down with
//! [`CameraDecoder::clear`].
//!
//! [`FrameFeedCamera`] is the native adapter: it paces frames from a
//! [`FrameSource`] and decodes each one with [`FrameDecoder`].

mod decoder;
mod feed;
mod frame;
mod region;

pub use decoder::{DecodedSymbol, FrameDecoder};
pub use feed::{FrameFeedCamera, FrameFeedFactory, FrameSource, ImageSequence};
pub use frame::{Frame, PixelFormat};
pub use region::{RegionPermit, ScanRegion};

use crate::config::ScannerConfig;
use crate::error::CaptureError;
use async_trait::async_trait;

/// What a running camera reports for a processed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A symbol was read; carries its text
    Decoded(String),
    /// No symbol could be read in this frame; carries the reason
    Miss(String),
}

/// A camera bound to one screen region
#[async_trait]
pub trait CameraDecoder: Send {
    /// Start capturing. Fails if the camera cannot be opened.
    async fn render(&mut self) -> Result<(), CaptureError>;

    /// Wait for the next processed frame. `None` once the feed has ended or the
    /// camera is not running.
    async fn next_event(&mut self) -> Option<ScanEvent>;

    /// Stop capturing and release the region.
    async fn clear(&mut self) -> Result<(), CaptureError>;
}

/// Constructs cameras for the scanner surface
pub trait CameraFactory: Send + Sync {
    /// Build a camera for `region`. Failures count as initialization errors.
    fn create(
        &self,
        region: &str,
        config: &ScannerConfig,
    ) -> Result<Box<dyn CameraDecoder>, CaptureError>;
}
