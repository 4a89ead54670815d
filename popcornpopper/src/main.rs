//! popcornpopper — flings popcorn across your screen every ten seconds

mod app;
mod sprites;

use app::PopcornApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("popcorn")
            .with_inner_size([800.0, 600.0])
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top()
            .with_maximized(true),
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "popcornpopper",
        options,
        Box::new(|cc| Box::new(PopcornApp::new(cc))),
    )
}
