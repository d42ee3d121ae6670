use egui::{ColorImage, TextureHandle, TextureOptions, ViewportCommand};
use image::DynamicImage;

/// Where the viewer puts its pixels, title and size.
pub trait DisplaySurface {
    fn set_image(&mut self, image: &DynamicImage);
    fn set_title(&mut self, title: &str);
    fn resize(&mut self, width: u32, height: u32);
}

/// The eframe window: uploads a texture and drives the viewport.
pub struct EguiSurface<'a> {
    ctx: &'a egui::Context,
    texture: &'a mut Option<TextureHandle>,
}

impl<'a> EguiSurface<'a> {
    pub fn new(ctx: &'a egui::Context, texture: &'a mut Option<TextureHandle>) -> Self {
        Self { ctx, texture }
    }
}

impl DisplaySurface for EguiSurface<'_> {
    fn set_image(&mut self, image: &DynamicImage) {
        let rgba = image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        *self.texture = Some(
            self.ctx
                .load_texture("current_image", color_image, TextureOptions::LINEAR),
        );
    }

    fn set_title(&mut self, title: &str) {
        self.ctx
            .send_viewport_cmd(ViewportCommand::Title(title.to_string()));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.ctx.send_viewport_cmd(ViewportCommand::InnerSize(egui::vec2(
            width as f32,
            height as f32,
        )));
    }
}
