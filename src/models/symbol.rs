use super::ModuleGrid;
use std::fmt;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channels in `[r, g, b]` order
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Visual parameters a symbol was rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolStyle {
    /// Display size in pixels
    pub size: u32,
    /// Module colour
    pub dark: Rgb,
    /// Background colour
    pub light: Rgb,
    /// Error correction level
    pub ec_level: EcLevel,
}

/// A rendered QR symbol
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// Text the symbol encodes
    pub payload: String,
    /// Module matrix without quiet zone
    pub modules: ModuleGrid,
    /// QR version (1-40)
    pub version: u8,
    /// Style the symbol was rendered with
    pub style: SymbolStyle,
    /// Vector markup at display size
    pub svg: String,
}

impl Symbol {
    /// Modules per side
    pub fn width(&self) -> usize {
        self.modules.width()
    }
}
