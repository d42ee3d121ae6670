pub const BTN_OPEN: &str = "Open image";
pub const BTN_OPEN_FOLDER: &str = "Open folder";
pub const BTN_PREV: &str = "Previous";
pub const BTN_NEXT: &str = "Next";
pub const BTN_ORIGINAL_SIZE: &str = "Original size";
pub const BTN_SCALED_SIZE: &str = "Scaled size";
pub const BTN_SET_WALLPAPER: &str = "Set as wallpaper";
pub const BTN_CLOSE_VIEWER: &str = "Close";
pub const BTN_ABOUT: &str = "About";
pub const BTN_CLOSE: &str = "Close";

pub const LABEL_MODE: &str = "Mode";
pub const FILTER_IMAGES: &str = "Image";

/// Window title used when the current path has no file name.
pub const TITLE_PLACEHOLDER: &str = "Image";

pub const TEXT_OPENIMG: &str = "Open an image or a folder to start browsing";
pub const TEXT_SHORTCUTS: &str = "Left/Right or Space to navigate, O original size, S scaled size";
pub const TEXT_ESC_CLOSE: &str = "Escape closes the viewer";
pub const TEXT_EMPTY_DIR: &str = "No supported images in";
pub const TEXT_WALLPAPER_SET: &str = "Wallpaper set";
pub const TEXT_WALLPAPER_FAILED: &str = "Could not set the wallpaper with";
pub const TEXT_LICENSE: &str = "License: GPL-3.0-or-later";
pub const TEXT_INFOAPP: &str = "Browse images and set the desktop wallpaper through feh.";
