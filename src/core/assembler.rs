use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use opencv::{core, imgcodecs, prelude::*, videoio};

use crate::core::config::MediaConfig;
use crate::core::error::FrameError;
use crate::core::frames;

/// What one assembly run produced.
#[derive(Debug)]
pub struct AssemblyReport {
    pub output: PathBuf,
    pub frames_written: usize,
    pub width: u32,
    pub height: u32,
}

/// Encode every frame image in the frames directory into a single video.
///
/// The writer is sized from the first frame, so every later frame must match
/// its dimensions. Frames go in sorted filename order. On early failure the
/// writer handle is released by drop.
pub fn assemble(config: &MediaConfig) -> Result<AssemblyReport> {
    let frames = frames::list_frames(&config.frames_dir)?;
    if frames.is_empty() {
        return Err(FrameError::EmptyInputSet {
            dir: config.frames_dir.clone(),
        }
        .into());
    }

    let (width, height) = frames::probe_dimensions(&frames[0])?;

    fs::create_dir_all(&config.videos_dir)
        .with_context(|| format!("failed to create {:?}", config.videos_dir))?;
    let output = config.output_path();
    let mut writer = open_writer(config, &output, width, height)?;

    for path in &frames {
        let frame = imgcodecs::imread(path_str(path)?, imgcodecs::IMREAD_COLOR)?;
        if frame.empty() {
            return Err(anyhow!("failed to decode frame {:?}", path));
        }
        if frame.cols() != width as i32 || frame.rows() != height as i32 {
            return Err(FrameError::FrameDimensionMismatch {
                path: path.clone(),
                expected_w: width,
                expected_h: height,
                actual_w: frame.cols() as u32,
                actual_h: frame.rows() as u32,
            }
            .into());
        }
        writer.write(&frame)?;
    }

    writer.release()?;

    Ok(AssemblyReport {
        output,
        frames_written: frames.len(),
        width,
        height,
    })
}

fn open_writer(
    config: &MediaConfig,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<videoio::VideoWriter> {
    let code: Vec<char> = config.fourcc.chars().collect();
    if code.len() != 4 {
        return Err(anyhow!(
            "codec identifier must be four characters, got {:?}",
            config.fourcc
        ));
    }
    let fourcc = videoio::VideoWriter::fourcc(code[0], code[1], code[2], code[3])?;

    let size = core::Size::new(width as i32, height as i32);
    let writer = videoio::VideoWriter::new(path_str(output)?, fourcc, config.fps, size, true)?;
    if !writer.is_opened()? {
        return Err(anyhow!(
            "failed to open video writer for {:?} (fourcc {:?}, {} fps)",
            output,
            config.fourcc,
            config.fps
        ));
    }
    Ok(writer)
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow!("non-UTF-8 path: {:?}", path))
}
