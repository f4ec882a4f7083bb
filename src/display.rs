//! Native window for showing a result image
//!
//! The window closes on the first key press, or when the user closes it.

use crate::error::OcrError;
use image::RgbImage;

#[cfg(feature = "display")]
use eframe::egui;

/// Show `image` in a window titled `title` and block until a key is pressed
#[cfg(feature = "display")]
pub fn show_and_wait(title: &str, image: &RgbImage) -> Result<(), OcrError> {
    let (width, height) = image.dimensions();
    let pixels =
        egui::ColorImage::from_rgb([width as usize, height as usize], image.as_raw());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([width as f32, height as f32]),
        ..Default::default()
    };

    tracing::debug!("Opening {}x{} window '{}'", width, height, title);

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            let texture =
                cc.egui_ctx
                    .load_texture("image", pixels, egui::TextureOptions::LINEAR);
            Ok(Box::new(ImageWindow { texture }))
        }),
    )
    .map_err(|e| OcrError::DisplayError(e.to_string()))
}

/// Without the `display` feature there is no window; the call returns at once
#[cfg(not(feature = "display"))]
pub fn show_and_wait(title: &str, image: &RgbImage) -> Result<(), OcrError> {
    tracing::warn!(
        "Built without the display feature, not showing '{}' ({}x{})",
        title,
        image.width(),
        image.height()
    );
    Ok(())
}

#[cfg(feature = "display")]
struct ImageWindow {
    texture: egui::TextureHandle,
}

#[cfg(feature = "display")]
impl eframe::App for ImageWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| key_pressed(&i.events)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let sized = egui::load::SizedTexture::from_handle(&self.texture);
                ui.add(egui::Image::from_texture(sized).shrink_to_fit());
            });
    }
}

#[cfg(feature = "display")]
fn key_pressed(events: &[egui::Event]) -> bool {
    events
        .iter()
        .any(|event| matches!(event, egui::Event::Key { pressed: true, .. }))
}
