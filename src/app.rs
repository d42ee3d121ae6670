use std::path::PathBuf;

use crate::config::config::*;
use crate::config::settings::Settings;
use crate::ui::viewer::ImageViewerApp;

pub fn run(settings: Settings, initial_path: Option<PathBuf>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = ImageViewerApp::new(settings);
            if let Some(path) = initial_path {
                app.open_path(&cc.egui_ctx, &path);
            }
            Ok(Box::new(app))
        }),
    )
}
