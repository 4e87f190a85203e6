use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::frames;

/// Delete every frame image in `dir`. Returns the number of files removed.
///
/// A directory with no matching frames is a no-op, not an error, so the
/// command can run again after a clear.
pub fn erase_frames(dir: &Path) -> Result<usize> {
    let frames = frames::list_frames(dir)?;
    for path in &frames {
        fs::remove_file(path).with_context(|| format!("failed to delete {:?}", path))?;
    }
    Ok(frames.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_erases_only_matching_files() {
        let dir = tempdir().unwrap();
        for name in ["0001.png", "0002.png", "0003.png"] {
            fs::write(dir.path().join(name), b"frame").unwrap();
        }
        fs::write(dir.path().join("readme.txt"), b"keep").unwrap();

        assert_eq!(erase_frames(dir.path()).unwrap(), 3);
        assert!(!dir.path().join("0001.png").exists());
        assert!(dir.path().join("readme.txt").exists());
    }

    #[test]
    fn test_nothing_to_erase() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.txt"), b"keep").unwrap();
        assert_eq!(erase_frames(dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("frame.png"), b"frame").unwrap();
        assert_eq!(erase_frames(dir.path()).unwrap(), 1);
        assert_eq!(erase_frames(dir.path()).unwrap(), 0);
    }
}
