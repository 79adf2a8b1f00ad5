// src/config/state.rs
use std::path::MAIN_SEPARATOR;

use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Recipe type chosen in the combo box
    pub selected_type: Option<String>,

    /// Output field text and whether the user has typed into it
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Keep the output field on the default path for the current type
    /// until the user edits it.
    pub fn refresh_default_out_path(&mut self) {
        if self.gui.out_path_dirty {
            return;
        }
        let export = &self.options.export;
        self.gui.out_path_text = match self.gui.selected_type.as_deref() {
            Some(recipe_type) => export.default_path_for(recipe_type).to_string_lossy().into_owned(),
            // no type yet: just the folder
            None => format!("{}{}", export.out_dir.display(), MAIN_SEPARATOR),
        };
    }

    /// Push the output field into export options (only once the user has typed).
    pub fn apply_out_path_text(&mut self) {
        if self.gui.out_path_dirty {
            self.options.export.set_path(&self.gui.out_path_text);
        } else {
            self.options.export.reset_path();
        }
    }
}
