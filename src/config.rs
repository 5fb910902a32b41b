//! Viewport presets and runtime configuration
//!
//! Sizes follow a single breakpoint: viewports up to [`MOBILE_BREAKPOINT`]
//! pixels wide use the mobile presets. Environment variables override the
//! defaults; CLI flags override the environment.

use crate::models::{EcLevel, Rgb};
use std::path::PathBuf;

/// Widest viewport (in CSS pixels) that still counts as mobile
pub const MOBILE_BREAKPOINT: u32 = 768;
/// Region id the scanner binds to unless overridden
pub const DEFAULT_REGION: &str = "qr-reader";

const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;
const DISPLAY_SIZE_MOBILE: u32 = 180;
const DISPLAY_SIZE_DESKTOP: u32 = 220;
const EXPORT_SIZE_MOBILE: u32 = 250;
const EXPORT_SIZE_DESKTOP: u32 = 300;
const QRBOX_MOBILE: u32 = 200;
const QRBOX_DESKTOP: u32 = 250;
const SCAN_FPS: u32 = 10;

fn parse_string(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_u32(value: Option<String>) -> Option<u32> {
    parse_string(value).and_then(|v| v.parse::<u32>().ok())
}

fn parse_colour(name: &str, value: Option<String>) -> Option<Rgb> {
    let value = parse_string(value)?;
    let colour = Rgb::from_hex(&value);
    if colour.is_none() {
        log::warn!("ignoring {}={:?}: expected #rrggbb", name, value);
    }
    colour
}

/// Width of the display the studio is presented on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in CSS pixels
    pub width: u32,
}

impl Viewport {
    /// Viewport of the given width
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// True for widths at or below the mobile breakpoint
    pub fn is_mobile(&self) -> bool {
        self.width <= MOBILE_BREAKPOINT
    }

    fn pick(&self, mobile: u32, desktop: u32) -> u32 {
        if self.is_mobile() { mobile } else { desktop }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH)
    }
}

/// How the generator draws and exports symbols
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// On-screen symbol size in pixels
    pub display_size: u32,
    /// Side of the exported PNG in pixels
    pub export_size: u32,
    /// Module colour
    pub dark: Rgb,
    /// Background colour
    pub light: Rgb,
    /// Error correction level
    pub ec_level: EcLevel,
}

impl RenderConfig {
    /// Presets for the given viewport
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            display_size: viewport.pick(DISPLAY_SIZE_MOBILE, DISPLAY_SIZE_DESKTOP),
            export_size: viewport.pick(EXPORT_SIZE_MOBILE, EXPORT_SIZE_DESKTOP),
            dark: Rgb::new(0x1f, 0x29, 0x37),
            light: Rgb::new(0xff, 0xff, 0xff),
            ec_level: EcLevel::H,
        }
    }
}

/// Settings handed to the camera-decoding capability
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerConfig {
    /// Frames decoded per second
    pub fps: u32,
    /// Side of the square detection window, centred in the frame
    pub qrbox: u32,
    /// Requested camera aspect ratio
    pub aspect_ratio: f32,
    /// Show a torch toggle when the device supports it
    pub show_torch_button: bool,
    /// Show a zoom slider when the device supports it
    pub show_zoom_slider: bool,
}

impl ScannerConfig {
    /// Presets for the given viewport
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            fps: SCAN_FPS,
            qrbox: viewport.pick(QRBOX_MOBILE, QRBOX_DESKTOP),
            aspect_ratio: 1.0,
            show_torch_button: true,
            show_zoom_slider: true,
        }
    }
}

/// Complete configuration of an [`crate::App`]
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Viewport the presets were derived from
    pub viewport: Viewport,
    /// Generator settings
    pub render: RenderConfig,
    /// Scanner settings
    pub scanner: ScannerConfig,
    /// Region id the scanner binds to
    pub region: String,
    /// Directory exported images are written to
    pub download_dir: PathBuf,
}

impl StudioConfig {
    /// Configuration derived entirely from a viewport
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            render: RenderConfig::for_viewport(viewport),
            scanner: ScannerConfig::for_viewport(viewport),
            region: DEFAULT_REGION.to_string(),
            download_dir: PathBuf::from("."),
        }
    }

    /// Defaults with the process environment applied. See
    /// [`StudioConfig::from_lookup`] for the variables read.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults with overrides read through `lookup`:
    ///
    /// - `QR_STUDIO_VIEWPORT_WIDTH`: viewport width in pixels
    /// - `QR_STUDIO_REGION`: scan region id
    /// - `QR_STUDIO_DOWNLOAD_DIR`: export directory
    /// - `QR_STUDIO_DARK`, `QR_STUDIO_LIGHT`: module and background colours
    ///   as `#rrggbb`
    ///
    /// Unparseable values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let viewport = parse_u32(lookup("QR_STUDIO_VIEWPORT_WIDTH"))
            .map(Viewport::new)
            .unwrap_or_default();
        let mut config = Self::for_viewport(viewport);
        if let Some(region) = parse_string(lookup("QR_STUDIO_REGION")) {
            config.region = region;
        }
        if let Some(dir) = parse_string(lookup("QR_STUDIO_DOWNLOAD_DIR")) {
            config.download_dir = PathBuf::from(dir);
        }
        if let Some(dark) = parse_colour("QR_STUDIO_DARK", lookup("QR_STUDIO_DARK")) {
            config.render.dark = dark;
        }
        if let Some(light) = parse_colour("QR_STUDIO_LIGHT", lookup("QR_STUDIO_LIGHT")) {
            config.render.light = light;
        }
        config
    }

    /// Re-derive the size presets for another viewport, keeping colours,
    /// region and download directory
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        let sizes = RenderConfig::for_viewport(viewport);
        self.viewport = viewport;
        self.render.display_size = sizes.display_size;
        self.render.export_size = sizes.export_size;
        self.scanner = ScannerConfig::for_viewport(viewport);
        self
    }

    /// Write exports to `dir`
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self::for_viewport(Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert!(Viewport::new(375).is_mobile());
        assert!(Viewport::new(768).is_mobile());
        assert!(!Viewport::new(769).is_mobile());
    }

    #[test]
    fn test_presets() {
        let mobile = StudioConfig::for_viewport(Viewport::new(400));
        assert_eq!(mobile.render.export_size, 250);
        assert_eq!(mobile.render.display_size, 180);
        assert_eq!(mobile.scanner.qrbox, 200);

        let desktop = StudioConfig::for_viewport(Viewport::new(1280));
        assert_eq!(desktop.render.export_size, 300);
        assert_eq!(desktop.render.display_size, 220);
        assert_eq!(desktop.scanner.qrbox, 250);
        assert_eq!(desktop.scanner.fps, 10);
        assert_eq!(desktop.render.ec_level, EcLevel::H);
        assert_eq!(desktop.region, DEFAULT_REGION);
    }

    #[test]
    fn test_with_viewport_keeps_paths() {
        let config = StudioConfig::default()
            .with_download_dir("/tmp/out")
            .with_viewport(Viewport::new(320));
        assert_eq!(config.download_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.render.export_size, 250);
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_lookup_overrides() {
        let config = StudioConfig::from_lookup(lookup(&[
            ("QR_STUDIO_VIEWPORT_WIDTH", " 375 "),
            ("QR_STUDIO_REGION", "reader-2"),
            ("QR_STUDIO_DOWNLOAD_DIR", "/tmp/qr"),
            ("QR_STUDIO_DARK", "#000000"),
            ("QR_STUDIO_LIGHT", "f0f0f0"),
        ]));
        assert!(config.viewport.is_mobile());
        assert_eq!(config.render.export_size, 250);
        assert_eq!(config.region, "reader-2");
        assert_eq!(config.download_dir, PathBuf::from("/tmp/qr"));
        assert_eq!(config.render.dark, Rgb::new(0, 0, 0));
        assert_eq!(config.render.light, Rgb::new(0xf0, 0xf0, 0xf0));

        // Colours survive a viewport change
        let config = config.with_viewport(Viewport::new(1280));
        assert_eq!(config.render.export_size, 300);
        assert_eq!(config.render.dark, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let config = StudioConfig::from_lookup(lookup(&[
            ("QR_STUDIO_VIEWPORT_WIDTH", "wide"),
            ("QR_STUDIO_REGION", "   "),
            ("QR_STUDIO_DARK", "#12345"),
        ]));
        assert_eq!(config, StudioConfig::default());
    }
}
