// src/gui/components/type_picker.rs
//
// Recipe type label + read-only combo box + refresh.

use eframe::egui::{self, Color32, RichText};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label(
        RichText::new(format!(
            "SELECT RECIPE TYPE ({} types available):",
            app.recipe_types.len()
        ))
        .size(15.0)
        .strong()
        .color(Color32::RED),
    );
    ui.add_space(4.0);

    let before = app.state.gui.selected_type.clone();
    let mut selected = before.clone();

    ui.horizontal(|ui| {
        // center the row under the label
        let row_w = 300.0;
        ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));

        ui.add_enabled_ui(!app.running, |ui| {
            egui::ComboBox::from_id_salt("recipe_type")
                .selected_text(selected.as_deref().unwrap_or("—"))
                .width(250.0)
                .height(260.0)
                .show_ui(ui, |ui| {
                    for t in &app.recipe_types {
                        ui.selectable_value(&mut selected, Some(t.clone()), t);
                    }
                });

            if ui
                .button("⟳")
                .on_hover_text("Retrieve recipe types from the site again")
                .clicked()
            {
                actions::fetch_types(app, ui.ctx());
            }
        });
    });

    if selected != before {
        logf!("UI: Recipe type → {:?}", selected);
        app.state.gui.selected_type = selected;
        app.state.refresh_default_out_path();
    }
}
