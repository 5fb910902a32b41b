//! Last scan result with copy and open-link actions

use crate::platform::{Clipboard, Notifier};
use std::sync::Arc;

/// Prefixes that make a scan result openable as a link. A bare `http` start
/// such as `httpbin.org` is not enough; it needs the scheme separator.
pub const LINK_PREFIXES: [&str; 2] = ["http://", "https://"];

const NOTICE_COPIED: &str = "Copied to clipboard!";
const NOTICE_COPY_FAILED: &str = "Failed to copy";

/// Action offered next to a scan result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Copy the result to the clipboard
    Copy,
    /// Open `target` in a new browsing context
    OpenLink {
        /// The scan result, verbatim
        target: String,
    },
}

/// Prefix test only; the rest of the string is not validated
pub fn is_link(text: &str) -> bool {
    LINK_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
}

/// Actions for `scan_result`; none when there is no result
pub fn actions(scan_result: &str) -> Vec<PanelAction> {
    if scan_result.is_empty() {
        return Vec::new();
    }
    let mut actions = vec![PanelAction::Copy];
    if is_link(scan_result) {
        actions.push(PanelAction::OpenLink {
            target: scan_result.to_string(),
        });
    }
    actions
}

/// Copies scan results and reports the outcome
pub struct ResultPanel {
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
}

impl ResultPanel {
    /// Panel writing to `clipboard` and reporting through `notifier`
    pub fn new(clipboard: Arc<dyn Clipboard>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }

    /// Copy `text`, reporting the outcome as a notice. Returns whether the copy
    /// succeeded; an empty result copies nothing and shows no notice.
    pub async fn copy(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                self.notifier.notify(NOTICE_COPIED);
                true
            }
            Err(err) => {
                log::debug!("copy failed: {}", err);
                self.notifier.notify(NOTICE_COPY_FAILED);
                false
            }
        }
    }
}
