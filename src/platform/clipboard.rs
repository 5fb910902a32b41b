use super::Clipboard;
use crate::error::PlatformError;
use async_trait::async_trait;

/// System clipboard through `arboard`
///
/// `arboard` blocks, so writes run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Handle to the system clipboard
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    fn is_available(&self) -> bool {
        arboard::Clipboard::new().is_ok()
    }

    async fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text))
        })
        .await
        .map_err(|e| PlatformError::Clipboard(e.to_string()))?
        .map_err(PlatformError::from)
    }
}
