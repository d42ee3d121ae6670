use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::config::*;
use crate::core::scaling::ScaleBounds;
use crate::core::wallpaper::WallpaperMode;
use crate::error::Result;

/// User settings persisted as JSON in the platform config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_width: u32,
    pub max_height: u32,
    pub wallpaper_mode: WallpaperMode,
    pub setter_program: String,
    pub preload_range: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            wallpaper_mode: WallpaperMode::default(),
            setter_program: DEFAULT_SETTER_PROGRAM.to_string(),
            preload_range: DEFAULT_PRELOAD_RANGE,
        }
    }
}

impl Settings {
    /// `~/.config/wallpaper-viewer/settings.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Loads the user's settings, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            debug!("no config directory, using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "ignoring settings: {e}");
                Self::default()
            }
        }
    }

    /// A missing file is not an error; it yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        Ok(settings.sanitized())
    }

    pub fn save(&self) -> Result<()> {
        match Self::default_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn bounds(&self) -> ScaleBounds {
        ScaleBounds::new(self.max_width, self.max_height)
    }

    fn sanitized(mut self) -> Self {
        self.max_width = self.max_width.max(1);
        self.max_height = self.max_height.max(1);
        if self.setter_program.trim().is_empty() {
            self.setter_program = DEFAULT_SETTER_PROGRAM.to_string();
        }
        self
    }
}
