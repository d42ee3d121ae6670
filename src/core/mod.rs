pub mod file_manager;
pub mod image_cache;
pub mod image_format;
pub mod image_list;
pub mod image_loader;
pub mod preload_manager;
pub mod scaling;
pub mod wallpaper;
