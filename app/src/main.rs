use eframe::egui;

mod activity;
mod app;
mod config;
mod utils;

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "Nestable Menu Demo",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(app::MenuDemoApp::new(cc)))),
    )
}
