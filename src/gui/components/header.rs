// src/gui/components/header.rs
use eframe::egui::{self, Color32, RichText};

use crate::config::consts::SITE_URL;

pub fn draw(ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.label(
        RichText::new("WELCOME TO MY RECIPE RETRIEVER!")
            .size(20.0)
            .strong()
            .color(Color32::BLACK),
    );
    ui.add_space(16.0);

    let site = SITE_URL
        .trim_start_matches("https://")
        .trim_end_matches('/');
    let objectives = format!(
        "Objectives of this application are as follows:\n\n\
         1. To scrape a website containing recipe data\n\
         and capture desired data elements.\n\n\
         2. To write captured data to a CSV file.\n\n\
         Website to be scraped: {site}"
    );
    ui.label(RichText::new(objectives).size(15.0).strong().color(Color32::BLUE));
}
