// src/gui/components/recipe_table.rs
//
// Collapsible preview of the last retrieved listing. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.recipes.is_empty() {
        return;
    }

    let title = format!(
        "Preview: {} ({} recipes)",
        app.recipes_for.as_deref().unwrap_or("?"),
        app.recipes.len()
    );

    egui::CollapsingHeader::new(title)
        .id_salt("recipe_preview")
        .default_open(false)
        .show(ui, |ui| {
            let rows: Vec<(&String, &String)> = app.recipes.iter().collect();

            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(180.0)
                .column(Column::initial(190.0).at_least(80.0).resizable(true).clip(true))
                .column(Column::remainder().clip(true))
                .header(20.0, |mut header| {
                    header.col(|ui| { ui.strong("Recipe"); });
                    header.col(|ui| { ui.strong("URL"); });
                })
                .body(|body| {
                    body.rows(18.0, rows.len(), |mut row| {
                        let (name, url) = rows[row.index()];
                        row.col(|ui| { ui.label(name.as_str()); });
                        row.col(|ui| { ui.hyperlink_to(url.as_str(), url.as_str()); });
                    });
                });
        });
}
