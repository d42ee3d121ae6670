use std::path::{Path, PathBuf};

use eframe::egui;
use egui::{TextureHandle, ViewportCommand};
use rfd::FileDialog;
use tracing::{error, warn};

use crate::config::config::*;
use crate::config::settings::Settings;
use crate::core::file_manager::FileManager;
use crate::core::image_list::ImageList;
use crate::core::image_loader::SizeVariant;
use crate::core::preload_manager::PreloadManager;
use crate::core::wallpaper::{set_wallpaper_with, WallpaperMode};
use crate::i18n::en::*;
use crate::ui::navigation_manager::{EventOutcome, Navigator, ViewerEvent};
use crate::ui::surface::EguiSurface;

pub struct ImageViewerApp {
    settings: Settings,
    images: ImageList,
    navigator: Option<Navigator>,
    preload_manager: PreloadManager,
    image_dir: Option<PathBuf>,
    current_texture: Option<TextureHandle>,
    status: Option<String>,
    show_about: bool,
}

impl ImageViewerApp {
    pub fn new(settings: Settings) -> Self {
        let preload_manager = PreloadManager::new(settings.preload_range, settings.bounds());
        Self {
            settings,
            images: ImageList::new(),
            navigator: None,
            preload_manager,
            image_dir: None,
            current_texture: None,
            status: None,
            show_about: false,
        }
    }

    /// Opens a file (at that file) or a directory (at its first image).
    pub fn open_path(&mut self, ctx: &egui::Context, path: &Path) {
        self.close_viewer(ctx);

        let (images, start) = match FileManager::open_target(path) {
            Ok(opened) => opened,
            Err(e) => {
                self.report(format!("{}: {e}", path.display()));
                return;
            }
        };
        self.images = images;
        self.image_dir = Some(if path.is_dir() {
            path.to_path_buf()
        } else {
            path.parent().map(Path::to_path_buf).unwrap_or_default()
        });

        let Some(start) = start else {
            self.report(format!("{TEXT_EMPTY_DIR} {}", path.display()));
            return;
        };

        let mut surface = EguiSurface::new(ctx, &mut self.current_texture);
        match Navigator::open(&self.images, start, self.settings.bounds(), &mut surface) {
            Ok(navigator) => {
                self.navigator = Some(navigator);
                self.status = None;
                self.preload();
            }
            Err(e) => self.report(e.to_string()),
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: ViewerEvent) {
        let Some(navigator) = self.navigator.as_mut() else {
            return;
        };

        let mut surface = EguiSurface::new(ctx, &mut self.current_texture);
        match navigator.handle_event(&self.images, event, &mut surface) {
            Ok(EventOutcome::Moved) => {
                self.status = None;
                self.preload();
            }
            Ok(EventOutcome::Closed) => self.close_viewer(ctx),
            Ok(EventOutcome::AtEnd | EventOutcome::Rendered) => {}
            Err(e) => {
                if let Some(row) = self.images.forget_undecodable(&e) {
                    warn!(%row, "skipping undecodable image from now on");
                }
                self.report(e.to_string());
            }
        }
    }

    fn close_viewer(&mut self, ctx: &egui::Context) {
        if self.navigator.take().is_some() {
            self.current_texture = None;
            ctx.send_viewport_cmd(ViewportCommand::Title(APP_NAME.to_string()));
        }
    }

    fn preload(&self) {
        if let Some(navigator) = &self.navigator {
            self.preload_manager
                .preload_around(&self.images, navigator.current_row(), navigator.cache());
        }
    }

    fn set_current_as_wallpaper(&mut self) {
        let Some(navigator) = &self.navigator else {
            return;
        };

        let path = match navigator.current_path(&self.images) {
            Ok(path) => path,
            Err(e) => {
                self.report(e.to_string());
                return;
            }
        };

        let program = &self.settings.setter_program;
        let mode = self.settings.wallpaper_mode;
        self.status = Some(if set_wallpaper_with(program, &path, mode) {
            format!("{TEXT_WALLPAPER_SET} ({mode})")
        } else {
            format!("{TEXT_WALLPAPER_FAILED} {program}")
        });
    }

    fn select_mode(&mut self, mode: WallpaperMode) {
        if self.settings.wallpaper_mode == mode {
            return;
        }
        self.settings.wallpaper_mode = mode;
        if let Err(e) = self.settings.save() {
            warn!("could not save settings: {e}");
        }
    }

    fn report(&mut self, message: String) {
        error!("{message}");
        self.status = Some(message);
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let events: Vec<ViewerEvent> = ctx.input(|i| {
            let mut events = Vec::new();
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                events.push(ViewerEvent::Next);
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                events.push(ViewerEvent::Previous);
            }
            if i.key_pressed(egui::Key::O) {
                events.push(ViewerEvent::OriginalSize);
            }
            if i.key_pressed(egui::Key::S) {
                events.push(ViewerEvent::ScaledSize);
            }
            if i.key_pressed(egui::Key::Escape) {
                events.push(ViewerEvent::Close);
            }
            events
        });

        for event in events {
            self.dispatch(ctx, event);
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.show_file_controls(ui, ctx);
                ui.separator();
                self.show_navigation_controls(ui, ctx);
                ui.separator();
                self.show_size_controls(ui, ctx);
                ui.separator();
                self.show_wallpaper_controls(ui);
                ui.separator();
                if ui.button(format!("ℹ️ {}", BTN_ABOUT)).clicked() {
                    self.show_about = true;
                }
                self.show_image_info(ui);
            });
        });
    }

    fn show_file_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (filter_name, extensions) = FileManager::get_supported_file_filter();

        if ui.button(format!("📂 {}", BTN_OPEN)).clicked() {
            let mut dialog = FileDialog::new().add_filter(filter_name, &extensions);
            if let Some(dir) = &self.image_dir {
                dialog = dialog.set_directory(dir);
            }
            if let Some(path) = dialog.pick_file() {
                self.open_path(ctx, &path);
            }
        }

        if ui.button(format!("🗁 {}", BTN_OPEN_FOLDER)).clicked() {
            if let Some(path) = FileDialog::new().pick_folder() {
                self.open_path(ctx, &path);
            }
        }
    }

    fn show_navigation_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (can_go_prev, can_go_next) = match &self.navigator {
            Some(navigator) => (
                navigator.can_go_previous(&self.images),
                navigator.can_go_next(&self.images),
            ),
            None => (false, false),
        };

        if ui.add_enabled(can_go_prev, egui::Button::new(format!("⬅️ {}", BTN_PREV))).clicked() {
            self.dispatch(ctx, ViewerEvent::Previous);
        }

        if ui.add_enabled(can_go_next, egui::Button::new(format!("➡️ {}", BTN_NEXT))).clicked() {
            self.dispatch(ctx, ViewerEvent::Next);
        }
    }

    fn show_size_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let variant = self.navigator.as_ref().map(Navigator::variant);
        let open = variant.is_some();

        let original = egui::Button::new(BTN_ORIGINAL_SIZE)
            .selected(variant == Some(SizeVariant::Original));
        if ui.add_enabled(open, original).clicked() {
            self.dispatch(ctx, ViewerEvent::OriginalSize);
        }

        let scaled = egui::Button::new(BTN_SCALED_SIZE)
            .selected(variant == Some(SizeVariant::Scaled));
        if ui.add_enabled(open, scaled).clicked() {
            self.dispatch(ctx, ViewerEvent::ScaledSize);
        }

        if ui.add_enabled(open, egui::Button::new(BTN_CLOSE_VIEWER)).clicked() {
            self.dispatch(ctx, ViewerEvent::Close);
        }
    }

    fn show_wallpaper_controls(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.settings.wallpaper_mode;
        egui::ComboBox::from_label(LABEL_MODE)
            .selected_text(mode.to_string())
            .show_ui(ui, |ui| {
                for candidate in WallpaperMode::ALL {
                    ui.selectable_value(&mut mode, candidate, candidate.to_string());
                }
            });
        self.select_mode(mode);

        let open = self.navigator.is_some();
        if ui
            .add_enabled(open, egui::Button::new(format!("🖼 {}", BTN_SET_WALLPAPER)))
            .clicked()
        {
            self.set_current_as_wallpaper();
        }
    }

    fn show_image_info(&self, ui: &mut egui::Ui) {
        if let Some(navigator) = &self.navigator {
            ui.separator();
            if let Some(index) = self.images.index_of(navigator.current_row()) {
                ui.label(format!("{} / {}", index + 1, self.images.len()));
            }
            ui.label(navigator.title());
            let original = navigator.buffers().original();
            ui.label(format!("{}×{}", original.width(), original.height()));
        }
    }

    fn show_status(&self, ctx: &egui::Context) {
        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(status.as_str());
            });
        }
    }

    fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        egui::Window::new(BTN_ABOUT)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(300.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(APP_NAME);
                    ui.label(format!("v{}", APP_VERSION));
                    ui.label(TEXT_LICENSE);
                    ui.label(TEXT_INFOAPP);
                });

                ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                    if ui.button(BTN_CLOSE).clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    fn show_main_content(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match &self.current_texture {
            Some(texture) => {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.add(egui::Image::from_texture(texture).fit_to_exact_size(texture.size_vec2()));
                });
            }
            None => self.show_placeholder_text(ui),
        });
    }

    fn show_placeholder_text(&self, ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            ui.label("");
            ui.label(TEXT_OPENIMG);
            ui.label(TEXT_SHORTCUTS);
            ui.label(TEXT_ESC_CLOSE);
        });
    }
}

impl eframe::App for ImageViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(navigator) = self.navigator.as_mut() {
            if self.preload_manager.process_loaded_images(navigator.cache_mut()) > 0 {
                ctx.request_repaint();
            }
        }

        self.handle_keyboard_input(ctx);
        self.show_toolbar(ctx);
        self.show_status(ctx);
        self.show_about_dialog(ctx);
        self.show_main_content(ctx);
    }
}
