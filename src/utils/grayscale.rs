//! Luma conversion for camera frames
//!
//! Y = 0.299*R + 0.587*G + 0.114*B, computed as (76*R + 150*G + 29*B) >> 8.
//! Frames at or above [`PARALLEL_THRESHOLD`] pixels are split across rows
//! with rayon.

use rayon::prelude::*;

/// Pixel count from which conversion runs in parallel
pub const PARALLEL_THRESHOLD: usize = 640 * 480;

const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

#[inline]
fn luma(px: &[u8]) -> u8 {
    let y = (COEF_R * px[0] as u32 + COEF_G * px[1] as u32 + COEF_B * px[2] as u32) >> 8;
    y.min(255) as u8
}

fn convert(data: &[u8], channels: usize, width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let data = &data[..pixel_count * channels];
    data.chunks_exact(channels).map(luma).collect()
}

fn convert_parallel(data: &[u8], channels: usize, width: usize, height: usize) -> Vec<u8> {
    let mut gray = vec![0u8; width * height];
    if width == 0 {
        return gray;
    }
    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let src = &data[y * width * channels..(y + 1) * width * channels];
        for (out, px) in row.iter_mut().zip(src.chunks_exact(channels)) {
            *out = luma(px);
        }
    });
    gray
}

/// Convert packed RGB to luma
///
/// # Panics
/// If `rgb` holds fewer than `width * height * 3` bytes.
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    convert(rgb, 3, width, height)
}

/// Convert packed RGBA to luma, ignoring alpha
pub fn rgba_to_grayscale(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    convert(rgba, 4, width, height)
}

/// Row-parallel [`rgb_to_grayscale`]
pub fn rgb_to_grayscale_parallel(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    convert_parallel(rgb, 3, width, height)
}

/// Row-parallel [`rgba_to_grayscale`]
pub fn rgba_to_grayscale_parallel(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    convert_parallel(rgba, 4, width, height)
}

/// Convert `channels`-byte pixels (3 or 4) to luma, choosing the parallel path
/// for large frames
pub fn to_luma(data: &[u8], channels: usize, width: usize, height: usize) -> Vec<u8> {
    if width * height >= PARALLEL_THRESHOLD {
        convert_parallel(data, channels, width, height)
    } else {
        convert(data, channels, width, height)
    }
}
