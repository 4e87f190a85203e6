use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::config::FRAME_EXT;
use crate::core::error::FrameError;

/// List frame images in `dir`, sorted by filename.
///
/// Directory listing order is OS-dependent, so the sort here is what fixes
/// the temporal order of the assembled video.
pub fn list_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FrameError::DirectoryNotFound(dir.to_path_buf()).into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read directory {:?}", dir));
        }
    };

    let mut frames: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map_or(false, |t| t.is_file()))
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == FRAME_EXT))
        .collect();

    frames.sort();
    Ok(frames)
}

/// Frame dimensions from the image header, without decoding pixel data.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path)
        .with_context(|| format!("failed to read image header of {:?}", path))
}
