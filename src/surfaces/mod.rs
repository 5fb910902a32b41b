//! The user-facing surfaces
//!
//! [`Generator`] and [`Scanner`] are mutually exclusive: [`crate::App`]
//! mounts one at a time according to [`crate::models::Mode`]. The result
//! panel is visible on both.

/// Preview, export and share
pub mod generator;
/// Scan result actions
pub mod result_panel;
/// Camera lifecycle
pub mod scanner;

pub use generator::{Download, Generator, ShareOutcome};
pub use result_panel::{PanelAction, ResultPanel};
pub use scanner::{ScanOutcome, ScanSession, Scanner};
