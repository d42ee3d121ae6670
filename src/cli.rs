use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::config::config::DEFAULT_SETTER_PROGRAM;
use crate::config::settings::Settings;
use crate::core::wallpaper::{mode_to_flag, set_wallpaper, set_wallpaper_with, WallpaperMode};
use crate::error::{Result, ViewerError};

/// Browse a directory of images and set one as the desktop wallpaper.
#[derive(Debug, Parser)]
#[command(name = "wallpaper-viewer", version)]
pub struct Cli {
    /// Image to open (its directory is browsed) or directory to browse
    pub path: Option<PathBuf>,

    /// Set PATH as the wallpaper and exit instead of opening a window
    #[arg(long, requires = "path")]
    pub set_wallpaper: bool,

    /// How the wallpaper is fit to the screen
    #[arg(long, value_enum)]
    pub mode: Option<WallpaperMode>,

    /// Program used to set the wallpaper
    #[arg(long, value_name = "PROGRAM")]
    pub setter: Option<String>,

    /// Width of the box scaled images are fit into
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: Option<u32>,

    /// Height of the box scaled images are fit into
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_height: Option<u32>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Command-line flags take precedence over the settings file.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(mode) = self.mode {
            settings.wallpaper_mode = mode;
        }
        if let Some(setter) = &self.setter {
            settings.setter_program = setter.clone();
        }
        if let Some(width) = self.max_width {
            settings.max_width = width;
        }
        if let Some(height) = self.max_height {
            settings.max_height = height;
        }
    }
}

/// Runs the setter once without a window.
pub fn set_wallpaper_command(path: &Path, settings: &Settings) -> Result<()> {
    let mode = settings.wallpaper_mode;
    info!(
        program = %settings.setter_program,
        flag = mode_to_flag(mode),
        path = %path.display(),
        "setting wallpaper"
    );

    let applied = if settings.setter_program == DEFAULT_SETTER_PROGRAM {
        set_wallpaper(path, mode)
    } else {
        set_wallpaper_with(&settings.setter_program, path, mode)
    };

    if applied {
        Ok(())
    } else {
        Err(ViewerError::Process(format!(
            "{} {} {}",
            settings.setter_program,
            mode_to_flag(mode),
            path.display()
        )))
    }
}
