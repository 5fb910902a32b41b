//! Share, clipboard, download and notification ports
//!
//! Each port has one native adapter. Tests and embedders supply their own.

mod clipboard;
mod download;

pub use clipboard::SystemClipboard;
pub use download::DirectoryDownloader;

use crate::error::PlatformError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Payload handed to an OS share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Sheet title
    pub title: String,
    /// Message accompanying the link
    pub text: String,
    /// Link being shared
    pub url: String,
}

/// OS-level share sheet
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Whether the platform has a share sheet
    fn is_available(&self) -> bool;

    /// Present the share sheet. A user dismissal is
    /// [`PlatformError::ShareCancelled`].
    async fn share(&self, request: &ShareRequest) -> Result<(), PlatformError>;
}

/// Text clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Whether a clipboard can be reached
    fn is_available(&self) -> bool;

    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), PlatformError>;
}

/// Saves generated files without asking the user
pub trait Downloader: Send + Sync {
    /// Store `bytes` under `file_name`, replacing any earlier file of that name
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PlatformError>;
}

/// Transient user notices
pub trait Notifier: Send + Sync {
    /// Show `message` to the user
    fn notify(&self, message: &str);
}

/// Share target for platforms without a share sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShare;

#[async_trait]
impl ShareTarget for NoShare {
    fn is_available(&self) -> bool {
        false
    }

    async fn share(&self, _request: &ShareRequest) -> Result<(), PlatformError> {
        Err(PlatformError::Share("no share sheet on this platform".to_string()))
    }
}

/// Notifier that writes notices to the log at `info`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("{}", message);
    }
}
