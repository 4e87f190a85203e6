use std::path::PathBuf;

use serde::Serialize;

/// File extension of frame images in the frames directory.
pub const FRAME_EXT: &str = "png";

/// Paths and encoding parameters shared by the erase and assemble commands.
#[derive(Debug, Clone, Serialize)]
pub struct MediaConfig {
    pub frames_dir: PathBuf,
    pub videos_dir: PathBuf,
    pub output_name: String,
    pub fourcc: String,
    pub fps: f64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from("media/frames"),
            videos_dir: PathBuf::from("media/videos"),
            output_name: "video1.mp4".to_string(),
            fourcc: "mp4v".to_string(),
            fps: 13.0,
        }
    }
}

impl MediaConfig {
    /// Defaults with any CLI flags layered on top.
    pub fn with_overrides(
        frames_dir: Option<PathBuf>,
        videos_dir: Option<PathBuf>,
        output_name: Option<String>,
        fourcc: Option<String>,
        fps: Option<f64>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(dir) = frames_dir {
            config.frames_dir = dir;
        }
        if let Some(dir) = videos_dir {
            config.videos_dir = dir;
        }
        if let Some(name) = output_name {
            config.output_name = name;
        }
        if let Some(code) = fourcc {
            config.fourcc = code;
        }
        if let Some(rate) = fps {
            config.fps = rate;
        }
        config
    }

    pub fn output_path(&self) -> PathBuf {
        self.videos_dir.join(&self.output_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_media_layout() {
        let config = MediaConfig::default();
        assert_eq!(config.frames_dir, PathBuf::from("media/frames"));
        assert_eq!(config.output_path(), PathBuf::from("media/videos/video1.mp4"));
        assert_eq!(config.fourcc, "mp4v");
        assert_eq!(config.fps, 13.0);
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let config = MediaConfig::with_overrides(
            Some(PathBuf::from("render/out")),
            None,
            None,
            None,
            Some(30.0),
        );
        assert_eq!(config.frames_dir, PathBuf::from("render/out"));
        assert_eq!(config.videos_dir, PathBuf::from("media/videos"));
        assert_eq!(config.output_name, "video1.mp4");
        assert_eq!(config.fps, 30.0);
    }
}
