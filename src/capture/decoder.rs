use super::{Frame, ScanEvent};
use crate::models::Point;

/// A symbol read from a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// Decoded text
    pub content: String,
    /// QR version (1-40)
    pub version: usize,
    /// Corners in frame coordinates, clockwise from top-left
    pub bounds: [Point; 4],
}

/// Reads QR symbols from camera frames with `rqrr`, optionally restricted to
/// a centred square detection window
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameDecoder {
    window: Option<usize>,
}

impl FrameDecoder {
    /// Decoder that searches the whole frame
    pub fn new() -> Self {
        Self { window: None }
    }

    /// Decoder that only searches a centred `size`×`size` window
    pub fn with_window(size: usize) -> Self {
        Self { window: Some(size) }
    }

    /// Region searched in a `width`×`height` frame as `(x, y, w, h)`.
    ///
    /// A window larger than the frame is clamped to the frame.
    pub fn search_area(&self, width: usize, height: usize) -> (usize, usize, usize, usize) {
        match self.window {
            Some(size) => {
                let w = size.min(width);
                let h = size.min(height);
                ((width - w) / 2, (height - h) / 2, w, h)
            }
            None => (0, 0, width, height),
        }
    }

    /// Decode the first readable symbol, or explain why none was read
    pub fn decode(&self, frame: &Frame) -> Result<DecodedSymbol, String> {
        let (ox, oy, w, h) = self.search_area(frame.width(), frame.height());
        if w == 0 || h == 0 {
            return Err("empty frame".to_string());
        }

        let luma = frame.luma();
        let stride = frame.width();
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(w, h, |x, y| luma[(oy + y) * stride + ox + x]);
        let grids = prepared.detect_grids();
        if grids.is_empty() {
            return Err("no QR code found".to_string());
        }

        let mut reason = String::new();
        for grid in &grids {
            match grid.decode() {
                Ok((meta, content)) => {
                    return Ok(DecodedSymbol {
                        content,
                        version: meta.version.0,
                        bounds: grid.bounds.map(|p| Point::from(p).offset(ox, oy)),
                    });
                }
                Err(err) => reason = err.to_string(),
            }
        }
        Err(format!("QR code found but unreadable: {}", reason))
    }

    /// Decode a frame into the event a running camera reports
    pub fn scan(&self, frame: &Frame) -> ScanEvent {
        match self.decode(frame) {
            Ok(symbol) => ScanEvent::Decoded(symbol.content),
            Err(reason) => ScanEvent::Miss(reason),
        }
    }
}
