use super::Downloader;
use crate::error::PlatformError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes downloads into a directory, creating it on first use
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    /// Downloader writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Downloader for DirectoryDownloader {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PlatformError> {
        let name = Path::new(file_name)
            .file_name()
            .ok_or_else(|| PlatformError::Download(format!("invalid file name '{}'", file_name)))?;
        fs::create_dir_all(&self.dir).map_err(|e| PlatformError::Download(e.to_string()))?;
        let path = self.dir.join(name);
        fs::write(&path, bytes).map_err(|e| PlatformError::Download(e.to_string()))?;
        Ok(path)
    }
}
