use super::SymbolRenderer;
use crate::error::RenderError;
use crate::models::{ModuleGrid, Symbol, SymbolStyle};
use qrcode::render::svg;
use qrcode::{Color, QrCode, Version};

/// [`SymbolRenderer`] backed by the `qrcode` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeRenderer;

impl QrcodeRenderer {
    /// Renderer using `qrcode`'s defaults
    pub fn new() -> Self {
        Self
    }
}

impl SymbolRenderer for QrcodeRenderer {
    fn render(&self, text: &str, style: &SymbolStyle) -> Result<Symbol, RenderError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), style.ec_level.into())?;

        let version = match code.version() {
            Version::Normal(v) | Version::Micro(v) => v as u8,
        };
        let modules = ModuleGrid::from_modules(
            code.to_colors().into_iter().map(|c| c == Color::Dark),
        )
        .ok_or_else(|| RenderError::Encode("encoder produced a non-square matrix".into()))?;

        let dark = style.dark.to_string();
        let light = style.light.to_string();
        let markup = code
            .render::<svg::Color<'_>>()
            .quiet_zone(false)
            .min_dimensions(style.size, style.size)
            .dark_color(svg::Color(&dark))
            .light_color(svg::Color(&light))
            .build();

        Ok(Symbol {
            payload: text.to_string(),
            modules,
            version,
            style: *style,
            svg: markup,
        })
    }
}
