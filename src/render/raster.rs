use crate::error::RenderError;
use crate::models::Symbol;
use image::{ImageOutputFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Light modules added around the symbol on every side
pub const QUIET_ZONE: usize = 4;

/// Draw `symbol` onto a `size`×`size` canvas.
///
/// Modules are scaled by the largest whole factor that fits the symbol plus
/// its quiet zone, and the result is centred. Canvases smaller than the
/// module count still draw one pixel per module, clipped at the edges.
pub fn rasterize(symbol: &Symbol, size: u32) -> RgbImage {
    let light = Rgb(symbol.style.light.to_array());
    let dark = Rgb(symbol.style.dark.to_array());
    let mut canvas = RgbImage::from_pixel(size, size, light);

    let modules = symbol.width();
    let total = modules + 2 * QUIET_ZONE;
    let scale = (size as usize / total).max(1);
    let margin = (size as usize).saturating_sub(total * scale) / 2 + QUIET_ZONE * scale;

    for my in 0..modules {
        for mx in 0..modules {
            if !symbol.modules.is_dark(mx, my) {
                continue;
            }
            let x0 = margin + mx * scale;
            let y0 = margin + my * scale;
            for y in y0..(y0 + scale).min(size as usize) {
                for x in x0..(x0 + scale).min(size as usize) {
                    canvas.put_pixel(x as u32, y as u32, dark);
                }
            }
        }
    }

    canvas
}

/// Encode an image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}
