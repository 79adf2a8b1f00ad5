// src/gui/actions/open_folder.rs
use std::path::Path;

use crate::{file::nearest_existing_dir, gui::app::App};

/// Open the folder the export would land in.
pub fn open_output_folder(app: &mut App) {
    app.state.apply_out_path_text();
    let recipe_type = app.state.gui.selected_type.as_deref().unwrap_or("");
    let export = &app.state.options.export;

    let target = export
        .out_path(recipe_type)
        .unwrap_or_else(|| export.out_dir.clone());
    let folder = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => nearest_existing_dir(p),
        _ => nearest_existing_dir(Path::new(".")),
    };

    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    match open_in_file_manager(&absolute) {
        Ok(()) => logf!("Opened folder: {}", absolute.display()),
        Err(e) => {
            loge!("Failed to open folder: {}", e);
            app.status(format!("Failed to open folder: {}", e));
        }
    }
}

fn open_in_file_manager(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let cmd = "explorer";
    #[cfg(target_os = "macos")]
    let cmd = "open";
    #[cfg(target_os = "linux")]
    let cmd = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(cmd)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| format!("Failed to spawn {cmd}: {e}"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
