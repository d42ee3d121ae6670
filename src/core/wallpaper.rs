//! Desktop wallpaper through `feh`.
//!
//! Every failure (missing tool, non-zero exit, bad path) folds into a
//! `false` result; the cause only goes to the log.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::config::DEFAULT_SETTER_PROGRAM;

/// How the image is fit to the screen. Mirrors feh's `--bg-*` options.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperMode {
    #[default]
    Fill,
    Center,
    Max,
    Scale,
    Tile,
}

impl WallpaperMode {
    pub const ALL: [WallpaperMode; 5] = [
        WallpaperMode::Fill,
        WallpaperMode::Center,
        WallpaperMode::Max,
        WallpaperMode::Scale,
        WallpaperMode::Tile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WallpaperMode::Fill => "fill",
            WallpaperMode::Center => "center",
            WallpaperMode::Max => "max",
            WallpaperMode::Scale => "scale",
            WallpaperMode::Tile => "tile",
        }
    }
}

impl fmt::Display for WallpaperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn mode_to_flag(mode: WallpaperMode) -> &'static str {
    match mode {
        WallpaperMode::Fill => "--bg-fill",
        WallpaperMode::Center => "--bg-center",
        WallpaperMode::Max => "--bg-max",
        WallpaperMode::Scale => "--bg-scale",
        WallpaperMode::Tile => "--bg-tile",
    }
}

pub fn set_wallpaper(path: &Path, mode: WallpaperMode) -> bool {
    set_wallpaper_with(DEFAULT_SETTER_PROGRAM, path, mode)
}

/// Runs `<program> <flag> <path>` and reports whether it exited cleanly.
pub fn set_wallpaper_with(program: &str, path: &Path, mode: WallpaperMode) -> bool {
    if !path.is_file() {
        warn!(path = %path.display(), "not setting wallpaper: no such file");
        return false;
    }

    let status = Command::new(program)
        .arg(mode_to_flag(mode))
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => {
            info!(path = %path.display(), %mode, "wallpaper set");
            true
        }
        Ok(status) => {
            warn!(program, %status, "wallpaper setter exited with failure");
            false
        }
        Err(e) => {
            warn!(program, "could not run wallpaper setter: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_mode_flags() {
        assert_eq!(mode_to_flag(WallpaperMode::Fill), "--bg-fill");
        assert_eq!(mode_to_flag(WallpaperMode::Center), "--bg-center");
        assert_eq!(mode_to_flag(WallpaperMode::Max), "--bg-max");
        assert_eq!(mode_to_flag(WallpaperMode::Scale), "--bg-scale");
        assert_eq!(mode_to_flag(WallpaperMode::Tile), "--bg-tile");
    }

    #[test]
    fn test_flags_are_stable_and_distinct() {
        let flags: Vec<&str> = WallpaperMode::ALL.iter().map(|m| mode_to_flag(*m)).collect();
        let again: Vec<&str> = WallpaperMode::ALL.iter().map(|m| mode_to_flag(*m)).collect();
        assert_eq!(flags, again);

        let mut unique = flags.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), WallpaperMode::ALL.len());
    }

    #[test]
    fn test_default_mode_is_fill() {
        assert_eq!(WallpaperMode::default(), WallpaperMode::Fill);
    }

    #[test]
    fn test_mode_names_round_trip_through_serde() {
        let json = serde_json::to_string(&WallpaperMode::Center).unwrap();
        assert_eq!(json, "\"center\"");
        let mode: WallpaperMode = serde_json::from_str("\"tile\"").unwrap();
        assert_eq!(mode, WallpaperMode::Tile);
        assert_eq!(WallpaperMode::Max.to_string(), "max");
    }

    #[test]
    fn test_nonexistent_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!set_wallpaper(&dir.path().join("missing.png"), WallpaperMode::Fill));
        assert!(!set_wallpaper_with("true", &dir.path().join("missing.png"), WallpaperMode::Fill));
    }

    #[test]
    fn test_missing_tool_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        fs::write(&path, b"pixels").unwrap();

        assert!(!set_wallpaper_with(
            "wallpaper-viewer-no-such-setter",
            &path,
            WallpaperMode::Scale
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_decides_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        fs::write(&path, b"pixels").unwrap();

        assert!(set_wallpaper_with("true", &path, WallpaperMode::Tile));
        assert!(!set_wallpaper_with("false", &path, WallpaperMode::Tile));
    }
}
