// src/gui/actions/fetch_types.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use super::JobResult;
use crate::{
    error::ScrapeError,
    gui::{app::App, dialog::Dialog, progress::GuiProgress},
    scrape, store,
};

pub fn fetch_types(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    app.running = true;
    app.status("Retrieving recipe types…");
    logf!("UI: Retrieve recipe types site={}", app.state.options.scrape.site);

    let opts = app.state.options.scrape.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();
    app.job = Some(rx);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx.clone());
        let res = scrape::recipe_types_from_site(&opts, Some(&mut prog));
        let _ = tx.send(JobResult::Types(res));
        ctx.request_repaint();
    });
}

pub(super) fn finish(app: &mut App, res: Result<Vec<String>, ScrapeError>) {
    match res {
        Ok(types) if types.is_empty() => {
            loge!("get_recipe_types: site listed no recipe types");
            app.status("No recipe types found");
            app.show(Dialog::error("get_recipe_types", "The site listed no recipe types."));
        }
        Ok(types) => {
            match store::save_recipe_types(&app.state.options.scrape.site, &types) {
                Ok(p) => logf!("Cache: Saved recipe types → {}", p.display()),
                Err(e) => loge!("Cache: Save recipe types failed: {}", e),
            }

            // keep the selection only if the site still lists it
            let keep = app
                .state
                .gui
                .selected_type
                .as_ref()
                .is_some_and(|t| types.contains(t));
            if !keep {
                app.state.gui.selected_type = None;
                app.state.refresh_default_out_path();
            }

            app.status(format!("{} recipe type(s) available", types.len()));
            app.recipe_types = types;
        }
        Err(e) => {
            app.status(format!("Error: {e}"));
            app.show(Dialog::error("get_recipe_types", e));
        }
    }
}
