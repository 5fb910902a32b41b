//! Mode controller and owner of all view state
//!
//! Every user action and capability callback goes through [`App`]. Each state
//! change is applied in one mutation and published once, so subscribers never
//! observe a half-applied transition such as `Home` without its scan result.

use crate::capture::{CameraFactory, ScanRegion};
use crate::config::StudioConfig;
use crate::error::{MSG_EXPORT_EMPTY, MSG_SCANNER_INIT_FAILED, MSG_SHARE_EMPTY, StudioError};
use crate::models::{Mode, Symbol, Transition, ViewState};
use crate::platform::{
    Clipboard, DirectoryDownloader, Downloader, LogNotifier, NoShare, Notifier, ShareTarget,
    SystemClipboard,
};
use crate::render::{QrcodeRenderer, SymbolRenderer};
use crate::surfaces::generator::require_content;
use crate::surfaces::result_panel::{self, PanelAction};
use crate::surfaces::{Download, Generator, ResultPanel, ScanOutcome, ScanSession, Scanner, ShareOutcome};
use std::sync::Arc;
use tokio::sync::watch;

/// The external capabilities an [`App`] composes
pub struct Capabilities {
    /// Draws symbols for the generator
    pub renderer: Box<dyn SymbolRenderer>,
    /// Builds a camera each time the scanner mounts
    pub cameras: Box<dyn CameraFactory>,
    /// OS share sheet
    pub share: Box<dyn ShareTarget>,
    /// Shared by the share fallback and the result panel
    pub clipboard: Arc<dyn Clipboard>,
    /// Stores exported PNGs
    pub downloader: Box<dyn Downloader>,
    /// Shows transient notices
    pub notifier: Arc<dyn Notifier>,
}

impl Capabilities {
    /// Native adapters around the given camera factory
    pub fn native(config: &StudioConfig, cameras: Box<dyn CameraFactory>) -> Self {
        Self {
            renderer: Box::new(QrcodeRenderer::new()),
            cameras,
            share: Box::new(NoShare),
            clipboard: Arc::new(SystemClipboard::new()),
            downloader: Box::new(DirectoryDownloader::new(&config.download_dir)),
            notifier: Arc::new(LogNotifier),
        }
    }
}

/// The application: view state, mode switch and the mounted surfaces
pub struct App {
    state: ViewState,
    revision: u64,
    updates: watch::Sender<ViewState>,
    generator: Generator,
    scanner: Scanner,
    panel: ResultPanel,
    session: Option<ScanSession>,
}

impl App {
    /// Wire the surfaces to `caps`. Starts in `Home` with empty state.
    pub fn new(config: StudioConfig, caps: Capabilities) -> Self {
        let state = ViewState::default();
        let (updates, _) = watch::channel(state.clone());
        let generator = Generator::new(
            caps.renderer,
            caps.share,
            Arc::clone(&caps.clipboard),
            caps.downloader,
            Arc::clone(&caps.notifier),
            config.render.clone(),
        );
        let scanner = Scanner::new(caps.cameras, ScanRegion::new(&config.region), config.scanner);
        let panel = ResultPanel::new(caps.clipboard, caps.notifier);
        Self {
            state,
            revision: 0,
            updates,
            generator,
            scanner,
            panel,
            session: None,
        }
    }

    /// Current view state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mounted surface
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Number of snapshots published so far. Each state change publishes
    /// exactly one; rejected actions publish none.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.updates.subscribe()
    }

    /// Region the scanner binds cameras to
    pub fn scan_region(&self) -> &ScanRegion {
        self.scanner.region()
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.updates.send_replace(self.state.clone());
    }

    fn commit(&mut self, change: impl FnOnce(&mut ViewState)) {
        change(&mut self.state);
        self.publish();
    }

    fn transition(&mut self, transition: Transition) -> Result<(), StudioError> {
        transition.apply(&mut self.state)?;
        self.publish();
        Ok(())
    }

    fn reject(&mut self, err: StudioError) -> StudioError {
        let message = err.user_message();
        self.commit(|s| s.error = message);
        err
    }

    /// Replace the input text; clears the banner
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.commit(|s| {
            s.text = text;
            s.error = None;
        });
    }

    /// Symbol currently displayed for the input text
    pub fn preview(&self) -> Option<Symbol> {
        self.generator.preview(&self.state.text)
    }

    /// Export the current symbol as PNG
    pub async fn export(&mut self) -> Result<Download, StudioError> {
        if let Err(err) = require_content(&self.state.text, MSG_EXPORT_EMPTY) {
            return Err(self.reject(err));
        }
        self.commit(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.generator.export(&self.state.text).await;
        if let Err(err) = &result {
            log::error!("Error generating QR code: {}", err);
        }
        let message = result.as_ref().err().and_then(StudioError::user_message);
        self.commit(|s| {
            s.loading = false;
            s.error = message;
        });
        result
    }

    /// Share the input text through the first available channel
    pub async fn share(&mut self) -> Result<ShareOutcome, StudioError> {
        if let Err(err) = require_content(&self.state.text, MSG_SHARE_EMPTY) {
            return Err(self.reject(err));
        }
        self.commit(|s| s.error = None);
        self.generator.share(&self.state.text).await
    }

    /// Reset text, scan result and banner in one change
    pub fn clear(&mut self) {
        self.commit(|s| {
            s.text.clear();
            s.scan_result.clear();
            s.error = None;
        });
    }

    /// Switch to the scanner and start a camera.
    ///
    /// If the camera cannot start, the banner is set and the app returns to
    /// `Home`.
    pub async fn open_scanner(&mut self) -> Result<(), StudioError> {
        self.transition(Transition::OpenScanner)?;
        match self.scanner.mount().await {
            Ok(session) => {
                self.session = Some(session);
                Ok(())
            }
            Err(err) => {
                log::error!("Scanner initialization error: {}", err);
                let err = StudioError::from(err);
                let message = err
                    .user_message()
                    .unwrap_or_else(|| MSG_SCANNER_INIT_FAILED.to_string());
                self.transition(Transition::InitFailed(message))?;
                Err(err)
            }
        }
    }

    /// Wait for the mounted scanner to decode a symbol.
    ///
    /// A decode stores the result and returns to `Home` in one transition,
    /// then tears the camera down.
    pub async fn next_scan(&mut self) -> Result<ScanOutcome, StudioError> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| StudioError::InvalidTransition("scanner is not mounted".to_string()))?;
        let outcome = session.next_outcome().await;
        if let ScanOutcome::Decoded(text) = &outcome {
            self.transition(Transition::Decoded(text.clone()))?;
            if let Some(session) = self.session.take() {
                session.release();
            }
        }
        Ok(outcome)
    }

    /// Leave the scanner without a result
    pub fn cancel_scan(&mut self) -> Result<(), StudioError> {
        self.transition(Transition::Cancel)?;
        if let Some(session) = self.session.take() {
            session.release();
        }
        Ok(())
    }

    /// Actions the result panel offers for the current scan result
    pub fn result_actions(&self) -> Vec<PanelAction> {
        result_panel::actions(&self.state.scan_result)
    }

    /// Copy the scan result to the clipboard
    pub async fn copy_result(&self) -> bool {
        self.panel.copy(&self.state.scan_result).await
    }
}
