mod core;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;

use crate::core::assembler;
use crate::core::config::MediaConfig;
use crate::core::eraser;
use crate::core::frames;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete rendered frame images from the frames directory
    Erase {
        #[arg(short, long, help = "Frames directory [default: media/frames]")]
        frames_dir: Option<PathBuf>,
    },
    /// Encode the frame images into a single video file
    Assemble {
        #[arg(short, long, help = "Frames directory [default: media/frames]")]
        frames_dir: Option<PathBuf>,
        #[arg(short, long, help = "Output directory [default: media/videos]")]
        videos_dir: Option<PathBuf>,
        #[arg(short, long, help = "Output filename [default: video1.mp4]")]
        output_name: Option<String>,
        #[arg(short, long, help = "Four-character codec code [default: mp4v]")]
        codec: Option<String>,
        #[arg(long, help = "Frames per second [default: 13]")]
        fps: Option<f64>,
    },
    /// Print what an assembly run would see, as JSON
    Probe {
        #[arg(short, long, help = "Frames directory [default: media/frames]")]
        frames_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Erase { frames_dir } => {
            let config = MediaConfig::with_overrides(frames_dir, None, None, None, None);
            let deleted = eraser::erase_frames(&config.frames_dir)?;
            println!("Deleted {} frames from {:?}.", deleted, config.frames_dir);
        }
        Commands::Assemble {
            frames_dir,
            videos_dir,
            output_name,
            codec,
            fps,
        } => {
            let config =
                MediaConfig::with_overrides(frames_dir, videos_dir, output_name, codec, fps);
            let report = assembler::assemble(&config)?;
            println!(
                "Wrote {} frames ({}x{}, {} fps) to {:?}.",
                report.frames_written, report.width, report.height, config.fps, report.output
            );
        }
        Commands::Probe { frames_dir } => {
            let config = MediaConfig::with_overrides(frames_dir, None, None, None, None);
            let frames = frames::list_frames(&config.frames_dir)?;
            let dims = frames
                .first()
                .map(|path| frames::probe_dimensions(path))
                .transpose()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "config": &config,
                    "frames": frames.len(),
                    "width": dims.map(|d| d.0),
                    "height": dims.map(|d| d.1),
                    "output": config.output_path(),
                }))?
            );
        }
    }

    Ok(())
}
