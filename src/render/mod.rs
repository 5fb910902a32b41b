//! Symbol rendering capability
//!
//! [`SymbolRenderer`] is the port the generator draws through. The shipped
//! adapter, [`QrcodeRenderer`], encodes with the `qrcode` crate. [`raster`]
//! turns a rendered symbol into the exported PNG.

/// PNG rasterization of rendered symbols
pub mod raster;
mod qr;

pub use qr::QrcodeRenderer;
pub use raster::{encode_png, rasterize, QUIET_ZONE};

use crate::error::RenderError;
use crate::models::{Symbol, SymbolStyle};

/// Turns text into a scannable symbol
pub trait SymbolRenderer: Send + Sync {
    /// Render `text` with `style`. Fails when the payload exceeds symbol
    /// capacity.
    fn render(&self, text: &str, style: &SymbolStyle) -> Result<Symbol, RenderError>;
}
