pub const APP_NAME: &str = "Wallpaper Viewer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [400.0, 300.0];

// Bounding box for the scaled variant of the displayed image.
pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_MAX_HEIGHT: u32 = 600;

pub const DEFAULT_SETTER_PROGRAM: &str = "feh";
pub const DEFAULT_PRELOAD_RANGE: usize = 1;
pub const IMAGE_CACHE_SIZE: usize = 4;

pub const CONFIG_DIR_NAME: &str = "wallpaper-viewer";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
