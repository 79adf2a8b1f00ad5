// src/gui/components/export_bar.rs

use eframe::egui::{self, widgets::Spinner, Color32, RichText};

use crate::{
    config::options::LinkStyle,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Output field ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        let field = egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(300.0);
        if ui.add(field).changed() {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }
    });

    if open_folder_clicked {
        actions::open_output_folder(app);
    }

    // --- Export toggles ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        let mut links = matches!(export.link_style, LinkStyle::Hyperlink);
        if ui.checkbox(&mut links, "Clickable links").changed() {
            export.link_style = if links { LinkStyle::Hyperlink } else { LinkStyle::Plain };
            logf!("UI: link_style → {:?}", export.link_style);
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: include_headers → {}", export.include_headers);
        }

        if app.state.gui.out_path_dirty && ui.small_button("Default path").clicked() {
            app.state.gui.out_path_dirty = false;
            app.state.refresh_default_out_path();
        }
    });

    ui.add_space(10.0);

    // --- Get Recipes ---
    let button = egui::Button::new(
        RichText::new("Get Recipes")
            .size(18.0)
            .strong()
            .color(Color32::WHITE),
    )
    .fill(Color32::from_rgb(220, 30, 30))
    .min_size(egui::vec2(150.0, 32.0));

    if ui.add_enabled(!app.running, button).clicked() {
        actions::get_recipes(app, ui.ctx());
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if app.running {
            ui.add(Spinner::new().size(14.0));
        }
        ui.label(app.status_text());
    });
}
