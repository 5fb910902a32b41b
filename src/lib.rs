//! qr_studio - QR code generator and scanner core
//!
//! A headless application core that renders text as QR symbols, exports them
//! as PNG, shares them, and scans symbols from camera frames. Rendering and
//! decoding are delegated to capabilities behind traits; [`App`] owns the view
//! state and the `Home`/`Scanner` mode switch.
//!
//! ```no_run
//! use qr_studio::capture::{FrameFeedFactory, ImageSequence};
//! use qr_studio::{App, Capabilities, StudioConfig};
//!
//! # async fn run() -> Result<(), qr_studio::StudioError> {
//! let config = StudioConfig::from_env();
//! let cameras = FrameFeedFactory::new(|| Ok(ImageSequence::new(["frame.png"])));
//! let caps = Capabilities::native(&config, Box::new(cameras));
//! let mut app = App::new(config, caps);
//!
//! app.set_text("https://example.com");
//! let download = app.export().await?;
//! println!("saved {}", download.path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Mode controller and view-state owner
pub mod app;
/// Camera-decoding capability: ports, frame decoding, region guard
pub mod capture;
/// Viewport presets and environment overrides
pub mod config;
/// Error types and user-facing messages
pub mod error;
/// Core data structures (ViewState, Mode, Symbol, ModuleGrid, etc.)
pub mod models;
/// Share, clipboard, download and notification ports
pub mod platform;
/// Symbol rendering capability and PNG rasterization
pub mod render;
/// Generator, scanner and result panel surfaces
pub mod surfaces;
/// Helpers shared by the CLI, tests and benches
pub mod tools;
/// Utility functions (luma conversion)
pub mod utils;

pub use app::{App, Capabilities};
pub use config::{StudioConfig, Viewport};
pub use error::StudioError;
pub use models::{Mode, Symbol, ViewState};
pub use surfaces::{Download, PanelAction, ScanOutcome, ShareOutcome};
