// src/gui/dialog.rs
//
// Modal-style windows: plain messages and the exit confirmation.

use eframe::egui::{self, Align2, RichText};

use super::app::App;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }

    /// Error dialog naming the activity that failed.
    pub fn error(activity: &str, err: impl std::fmt::Display) -> Self {
        Self { title: s!("Error"), body: format!("Error ({activity}): {err}") }
    }
}

pub fn show_message(ctx: &egui::Context, dialog: &mut Option<Dialog>) {
    let Some(d) = dialog.as_ref() else { return };
    let mut close = false;

    egui::Window::new(RichText::new(&d.title).strong())
        .id(egui::Id::new("message_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(380.0);
            ui.label(&d.body);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });

    if close {
        *dialog = None;
    }
}

pub fn show_exit_confirm(ctx: &egui::Context, app: &mut App) {
    if !app.confirm_exit {
        return;
    }

    egui::Window::new(RichText::new("Exit?").strong())
        .id(egui::Id::new("exit_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Do you want to exit this application?");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    logf!("UI: Exit confirmed");
                    app.allow_close = true;
                    app.confirm_exit = false;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if ui.button("Cancel").clicked() {
                    app.confirm_exit = false;
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_dialog_names_activity() {
        let d = Dialog::error("get_recipes", "HTTP 503 for https://x.test/");
        assert_eq!(d.title, "Error");
        assert_eq!(d.body, "Error (get_recipes): HTTP 503 for https://x.test/");
    }
}
