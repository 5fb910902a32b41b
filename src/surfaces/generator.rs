//! Generator/viewer surface: preview, PNG export and sharing

use crate::config::RenderConfig;
use crate::error::{MSG_EXPORT_EMPTY, MSG_SHARE_EMPTY, PlatformError, RenderError, StudioError};
use crate::models::{Symbol, SymbolStyle};
use crate::platform::{Clipboard, Downloader, Notifier, ShareRequest, ShareTarget};
use crate::render::{SymbolRenderer, encode_png, rasterize};
use std::path::PathBuf;
use std::sync::Arc;

const SHARE_TITLE: &str = "QR Code";
const SHARE_TEXT: &str = "Check out this QR Code";
const NOTICE_LINK_COPIED: &str = "Link copied to clipboard!";
const NOTICE_SHARE_UNSUPPORTED: &str = "Sharing not supported on this device";

/// An exported image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// `qr-code-<millis>.png`
    pub file_name: String,
    /// Where the downloader stored the file
    pub path: PathBuf,
    /// PNG size
    pub size_bytes: usize,
}

/// Which branch of the share fallback chain ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the OS share sheet
    Shared,
    /// The user dismissed the share sheet
    Cancelled,
    /// No share sheet; the text went to the clipboard
    Copied,
    /// Neither share sheet nor clipboard exists
    Unsupported,
    /// Share sheet or clipboard reported an error (logged only)
    Failed,
}

/// File name for an export made at `millis` since the Unix epoch
pub fn export_file_name(millis: i64) -> String {
    format!("qr-code-{}.png", millis)
}

/// Link shared for `text`: itself when it looks like a URL, else `https://` + text
pub fn share_url(text: &str) -> String {
    if text.starts_with("http") {
        text.to_string()
    } else {
        format!("https://{}", text)
    }
}

/// Whitespace-only input counts as empty for export and share
pub fn require_content(text: &str, message: &'static str) -> Result<(), StudioError> {
    if text.trim().is_empty() {
        Err(StudioError::EmptyInput(message))
    } else {
        Ok(())
    }
}

/// Generator/viewer surface over the rendering, share, clipboard and
/// download ports
pub struct Generator {
    renderer: Box<dyn SymbolRenderer>,
    share: Box<dyn ShareTarget>,
    clipboard: Arc<dyn Clipboard>,
    downloader: Box<dyn Downloader>,
    notifier: Arc<dyn Notifier>,
    config: RenderConfig,
}

impl Generator {
    /// Surface drawing with `config` through the given ports
    pub fn new(
        renderer: Box<dyn SymbolRenderer>,
        share: Box<dyn ShareTarget>,
        clipboard: Arc<dyn Clipboard>,
        downloader: Box<dyn Downloader>,
        notifier: Arc<dyn Notifier>,
        config: RenderConfig,
    ) -> Self {
        Self {
            renderer,
            share,
            clipboard,
            downloader,
            notifier,
            config,
        }
    }

    /// Style of the on-screen symbol
    pub fn display_style(&self) -> SymbolStyle {
        SymbolStyle {
            size: self.config.display_size,
            dark: self.config.dark,
            light: self.config.light,
            ec_level: self.config.ec_level,
        }
    }

    /// Render `text` at display size
    pub fn render(&self, text: &str) -> Result<Symbol, RenderError> {
        self.renderer.render(text, &self.display_style())
    }

    /// Symbol to display for `text`. Nothing for empty text; render failures
    /// are logged and also display nothing.
    pub fn preview(&self, text: &str) -> Option<Symbol> {
        if text.is_empty() {
            return None;
        }
        match self.render(text) {
            Ok(symbol) => Some(symbol),
            Err(err) => {
                log::warn!("cannot render {} byte payload: {}", text.len(), err);
                None
            }
        }
    }

    /// Rasterize the symbol for `text` to PNG and save it as
    /// `qr-code-<millis>.png`
    pub async fn export(&self, text: &str) -> Result<Download, StudioError> {
        require_content(text, MSG_EXPORT_EMPTY)?;
        let symbol = self.render(text)?;
        let size = self.config.export_size;

        let bytes = tokio::task::spawn_blocking(move || encode_png(&rasterize(&symbol, size)))
            .await
            .map_err(|e| RenderError::Raster(e.to_string()))??;

        let file_name = export_file_name(chrono::Utc::now().timestamp_millis());
        let path = self.downloader.save(&file_name, &bytes)?;
        log::debug!("exported {} ({} bytes)", path.display(), bytes.len());
        Ok(Download {
            file_name,
            path,
            size_bytes: bytes.len(),
        })
    }

    /// Share `text` through the first available channel: share sheet,
    /// clipboard, or a notice that sharing is unsupported
    pub async fn share(&self, text: &str) -> Result<ShareOutcome, StudioError> {
        require_content(text, MSG_SHARE_EMPTY)?;

        if self.share.is_available() {
            let request = ShareRequest {
                title: SHARE_TITLE.to_string(),
                text: SHARE_TEXT.to_string(),
                url: share_url(text),
            };
            return Ok(match self.share.share(&request).await {
                Ok(()) => ShareOutcome::Shared,
                Err(PlatformError::ShareCancelled) => ShareOutcome::Cancelled,
                Err(err) => {
                    log::warn!("Error sharing: {}", err);
                    ShareOutcome::Failed
                }
            });
        }

        if self.clipboard.is_available() {
            return Ok(match self.clipboard.write_text(text).await {
                Ok(()) => {
                    self.notifier.notify(NOTICE_LINK_COPIED);
                    ShareOutcome::Copied
                }
                Err(err) => {
                    log::warn!("Error sharing: {}", err);
                    ShareOutcome::Failed
                }
            });
        }

        self.notifier.notify(NOTICE_SHARE_UNSUPPORTED);
        Ok(ShareOutcome::Unsupported)
    }
}
