use std::path::PathBuf;

use thiserror::Error;

/// Failures callers may want to match on. Everything else (decode errors,
/// codec backend failures, raw I/O) propagates as `anyhow` context.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frames directory not found: {0:?}")]
    DirectoryNotFound(PathBuf),

    #[error("no .png frames in {dir:?}")]
    EmptyInputSet { dir: PathBuf },

    #[error(
        "frame {path:?} is {actual_w}x{actual_h}, expected {expected_w}x{expected_h} from the first frame"
    )]
    FrameDimensionMismatch {
        path: PathBuf,
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}
