// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    scrape::Recipes,
    store,
};

use super::{
    actions::{self, JobResult},
    components,
    dialog::{self, Dialog},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(App::new(AppState::default(), &cc.egui_ctx)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // combo box source
    pub recipe_types: Vec<String>,

    // last retrieved listing, for the preview table
    pub recipes: Recipes,
    pub recipes_for: Option<String>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub job: Option<Receiver<JobResult>>,

    // modal message + exit confirmation
    pub dialog: Option<Dialog>,
    pub confirm_exit: bool,
    pub allow_close: bool,
}

impl App {
    pub fn new(mut state: AppState, ctx: &egui::Context) -> Self {
        let recipe_types = match store::load_recipe_types(&state.options.scrape.site) {
            Ok(v) => {
                logf!("Init: {} cached recipe type(s)", v.len());
                v
            }
            Err(e) => {
                logd!("Init: no cached recipe types ({e})");
                Vec::new()
            }
        };

        state.refresh_default_out_path();

        let mut app = Self {
            state,
            recipe_types,
            recipes: Recipes::new(),
            recipes_for: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            job: None,
            dialog: None,
            confirm_exit: false,
            allow_close: false,
        };

        if app.recipe_types.is_empty() {
            actions::fetch_types(&mut app, ctx);
        } else {
            app.status("Loaded local recipe types");
        }
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn show(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        if ctx.input(|i| i.viewport().close_requested()) && !self.allow_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.confirm_exit = true;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        components::header::draw(ui);
                        ui.add_space(12.0);
                        components::type_picker::draw(ui, self);
                        ui.add_space(12.0);
                        components::export_bar::draw(ui, self);
                    });
                    ui.add_space(8.0);
                    components::recipe_table::draw(ui, self);
                });
        });

        dialog::show_message(ctx, &mut self.dialog);
        dialog::show_exit_confirm(ctx, self);

        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
