// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Scrapes run on a worker thread; results come back through `App::job`.

mod fetch_types;
mod get_recipes;
mod open_folder;

pub use fetch_types::fetch_types;
pub use get_recipes::get_recipes;
pub use open_folder::open_output_folder;

use std::sync::mpsc::TryRecvError;

use crate::{error::ScrapeError, gui::app::App, scrape::Recipes};

pub enum JobResult {
    Types(Result<Vec<String>, ScrapeError>),
    Recipes {
        recipe_type: String,
        result: Result<Recipes, ScrapeError>,
    },
}

/// Collect a finished job, if any. Called once per frame.
pub fn poll(app: &mut App) {
    let Some(rx) = app.job.as_ref() else { return };

    let msg = match rx.try_recv() {
        Ok(msg) => msg,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Worker: ended without a result");
            app.job = None;
            app.running = false;
            app.status("Error: background task ended unexpectedly");
            return;
        }
    };

    app.job = None;
    app.running = false;

    match msg {
        JobResult::Types(res) => fetch_types::finish(app, res),
        JobResult::Recipes { recipe_type, result } => get_recipes::finish(app, recipe_type, result),
    }
}
