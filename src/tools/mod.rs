use crate::capture::Frame;
use crate::error::CaptureError;
use crate::models::Symbol;
use crate::render::rasterize;
use image::GenericImageView;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

fn max_dim_from_env() -> Option<u32> {
    match env::var("QR_MAX_DIM") {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(0) => None,
            Ok(v) => Some(v),
            Err(_) => None,
        },
        Err(_) => None,
    }
}

/// Load an image file as a camera frame, downscaled to `QR_MAX_DIM` when set
pub fn load_frame<P: AsRef<Path>>(path: P) -> Result<Frame, CaptureError> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|e| CaptureError::Source(format!("{}: {}", path.display(), e)))?;
    let img = match max_dim_from_env() {
        Some(max_dim) => {
            let (w, h) = img.dimensions();
            if w.max(h) > max_dim {
                img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle)
            } else {
                img
            }
        }
        None => img,
    };
    Ok(Frame::from_image(img))
}

/// Simulate a camera frame: `symbol` drawn at `symbol_px` and centred on a
/// white `width`×`height` background
pub fn symbol_frame(symbol: &Symbol, symbol_px: u32, width: u32, height: u32) -> Frame {
    let tile = rasterize(symbol, symbol_px);
    let mut canvas = image::RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255]));
    image::imageops::replace(
        &mut canvas,
        &tile,
        (width as i64 - symbol_px as i64) / 2,
        (height as i64 - symbol_px as i64) / 2,
    );
    Frame::from_image(image::DynamicImage::ImageRgb8(canvas))
}

/// Image files under `root`, recursively, sorted by path
pub fn collect_images(root: &Path) -> Vec<PathBuf> {
    let mut stack = vec![root.to_path_buf()];
    let mut images = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            let is_image = path
                .extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));
            if is_image {
                images.push(path);
            }
        }
    }

    images.sort();
    images
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_images_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.PNG"), b"").unwrap();
        fs::write(dir.path().join("a.jpg"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join("nested").join("c.png"), b"").unwrap();

        let images = collect_images(dir.path());
        let names: Vec<_> = images
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "a.jpg");
        assert!(names.iter().all(|n| !n.ends_with(".txt")));
    }

    #[test]
    fn test_load_missing_frame() {
        assert!(matches!(
            load_frame("/no/such/image.png"),
            Err(CaptureError::Source(_))
        ));
    }
}
