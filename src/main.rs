#![warn(clippy::all, rust_2018_idioms)]

use eframe::egui;
use raster_paint::PaintApp;
use raster_paint::config::EditorConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = EditorConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false)
            .with_title(config.window_title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    )
}
