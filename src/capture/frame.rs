use crate::error::CaptureError;
use crate::utils::grayscale::to_luma;
use std::borrow::Cow;

/// Pixel layout of a [`Frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// One grey byte per pixel
    Luma8,
    /// Red, green, blue
    Rgb8,
    /// Red, green, blue, alpha
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Luma8 => 1,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// One captured camera frame, row-major and tightly packed.
///
/// The buffer always holds exactly `width * height * channels` bytes; frames
/// are only built through [`Frame::new`] and [`Frame::from_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap raw pixels, checking the buffer matches the dimensions
    pub fn new(
        width: usize,
        height: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, CaptureError> {
        let expected = width * height * format.channels();
        if data.len() != expected {
            return Err(CaptureError::Source(format!(
                "frame buffer holds {} bytes, {}x{} {:?} needs {}",
                data.len(),
                width,
                height,
                format,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Frame from a decoded still image
    pub fn from_image(image: image::DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        Self {
            width,
            height,
            format: PixelFormat::Rgb8,
            data: rgb.into_raw(),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel layout
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw pixel bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// One luma byte per pixel, borrowed when the frame already is luma
    pub fn luma(&self) -> Cow<'_, [u8]> {
        match self.format {
            PixelFormat::Luma8 => Cow::Borrowed(&self.data),
            format => Cow::Owned(to_luma(&self.data, format.channels(), self.width, self.height)),
        }
    }
}
