// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use recipe_scrape::loge;
use recipe_scrape::{
    config::consts::{APP_TITLE, WINDOW_H, WINDOW_W},
    gui,
};

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_resizable(false)
            .with_maximize_button(false)
            .with_minimize_button(false),
        centered: true,
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("run_app: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
