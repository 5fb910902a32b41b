//! Error types for every layer of the studio
//!
//! Each capability boundary has its own enum so adapters can report failures
//! precisely. [`StudioError`] unifies them for the application layer and knows
//! which failures are shown to the user and which are swallowed.

use thiserror::Error;

/// Banner shown when export is attempted without content.
pub const MSG_EXPORT_EMPTY: &str = "Please enter content to generate QR code";
/// Banner shown when sharing is attempted without content.
pub const MSG_SHARE_EMPTY: &str = "Please enter content to share";
/// Banner shown when the symbol could not be rendered for export.
pub const MSG_RENDER_FAILED: &str = "Error generating QR code";
/// Banner shown when the rendered symbol could not be turned into a PNG.
pub const MSG_RASTER_FAILED: &str = "Failed to generate QR code image";
/// Banner shown when the scanner could not be started.
pub const MSG_SCANNER_INIT_FAILED: &str = "Failed to initialize scanner";

/// Failures of the symbol rendering capability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The payload does not fit any symbol version
    #[error("payload cannot be encoded: {0}")]
    Encode(String),
    /// Drawing or PNG encoding failed
    #[error("rasterization failed: {0}")]
    Raster(String),
}

impl From<qrcode::types::QrError> for RenderError {
    fn from(err: qrcode::types::QrError) -> Self {
        RenderError::Encode(err.to_string())
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Raster(err.to_string())
    }
}

/// Failures of the camera-decoding capability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The user or platform refused camera access
    #[error("camera permission denied")]
    PermissionDenied,
    /// The camera could not be constructed or started
    #[error("scanner initialization failed: {0}")]
    Init(String),
    /// `render` on a camera that is already running
    #[error("scanner already started")]
    AlreadyStarted,
    /// `clear` on a camera that was never started or already cleared
    #[error("scanner is not running")]
    NotRunning,
    /// A frame could not be produced
    #[error("frame source failed: {0}")]
    Source(String),
}

/// Failures of the share, clipboard and download ports
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The user dismissed the share sheet; not an error for the user
    #[error("share cancelled by user")]
    ShareCancelled,
    /// The share sheet reported an error
    #[error("share failed: {0}")]
    Share(String),
    /// The clipboard could not be opened or written
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    /// The exported file could not be stored
    #[error("download failed: {0}")]
    Download(String),
}

impl From<arboard::Error> for PlatformError {
    fn from(err: arboard::Error) -> Self {
        PlatformError::Clipboard(err.to_string())
    }
}

/// Top-level error returned by [`crate::App`] operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
    /// Input validation failed; carries the banner text.
    #[error("{0}")]
    EmptyInput(&'static str),
    /// See [`RenderError`]
    #[error(transparent)]
    Render(#[from] RenderError),
    /// See [`CaptureError`]
    #[error(transparent)]
    Capture(#[from] CaptureError),
    /// See [`PlatformError`]
    #[error(transparent)]
    Platform(#[from] PlatformError),
    /// The action does not apply to the mounted surface
    #[error("operation not valid in current mode: {0}")]
    InvalidTransition(String),
}

impl StudioError {
    /// Banner text for errors the user should see, `None` for swallowed ones.
    pub fn user_message(&self) -> Option<String> {
        match self {
            StudioError::EmptyInput(msg) => Some((*msg).to_string()),
            StudioError::Render(RenderError::Encode(_)) => Some(MSG_RENDER_FAILED.to_string()),
            StudioError::Render(RenderError::Raster(_)) => Some(MSG_RASTER_FAILED.to_string()),
            StudioError::Platform(PlatformError::Download(_)) => {
                Some(MSG_RASTER_FAILED.to_string())
            }
            StudioError::Capture(
                CaptureError::PermissionDenied | CaptureError::Init(_) | CaptureError::AlreadyStarted,
            ) => Some(MSG_SCANNER_INIT_FAILED.to_string()),
            StudioError::Capture(_) | StudioError::Platform(_) => None,
            StudioError::InvalidTransition(_) => None,
        }
    }
}
