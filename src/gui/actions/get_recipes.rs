// src/gui/actions/get_recipes.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use super::JobResult;
use crate::{
    error::ScrapeError,
    file,
    gui::{app::App, dialog::Dialog, progress::GuiProgress},
    scrape::{self, Recipes},
};

pub fn get_recipes(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    let Some(recipe_type) = app.state.gui.selected_type.clone() else {
        logd!("UI: Get Recipes clicked without a recipe type");
        app.show(Dialog::info("Select Recipe Type", "Please select a recipe type first."));
        return;
    };

    app.running = true;
    app.status(format!("Retrieving '{recipe_type}' recipes…"));
    logf!("UI: Get Recipes type='{}'", recipe_type);

    let opts = app.state.options.scrape.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();
    app.job = Some(rx);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx.clone());
        let result = scrape::recipes_from_site(&opts, &recipe_type, Some(&mut prog));
        let _ = tx.send(JobResult::Recipes { recipe_type, result });
        ctx.request_repaint();
    });
}

pub(super) fn finish(app: &mut App, recipe_type: String, result: Result<Recipes, ScrapeError>) {
    let recipes = match result {
        Ok(r) => r,
        Err(e) => {
            app.status(format!("Error: {e}"));
            app.show(Dialog::error("get_recipes", e));
            return;
        }
    };

    app.state.apply_out_path_text();
    let written = file::write_recipes(&app.state.options.export, &recipe_type, &recipes);

    match written {
        Ok(Some(path)) => {
            app.status(format!("Exported {} recipe(s)", recipes.len()));
            app.show(Dialog::info(
                "Recipe File Created",
                format!("The following file has been created:\n\n{}", path.display()),
            ));
        }
        Ok(None) => {
            app.status("File has not been created");
            app.show(Dialog::info("Recipe File Not Created", "File has not been created."));
        }
        Err(e) => {
            loge!("write_to_csv_file: {}", e);
            app.status(format!("Export error: {e}"));
            app.show(Dialog::info("Error", format!("{e}.\n\nFile has not been created.")));
        }
    }

    app.recipes = recipes;
    app.recipes_for = Some(recipe_type);
}
