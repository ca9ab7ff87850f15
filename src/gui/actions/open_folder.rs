// src/gui/actions/open_folder.rs
use std::path::{Path, PathBuf};

use log::Level;

use crate::gui::app::App;

/// Open the download folder in the system file explorer.
pub fn open_folder(app: &mut App) {
    app.state.sync_form_into_options();
    let folder = app.state.options.folder.clone();

    // Not created until the first cartridge lands; open the nearest parent
    let folder_to_open = find_nearest_existing_parent(&folder);

    let absolute_folder = match std::fs::canonicalize(&folder_to_open) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            app.push_log(Level::Error, format!("Cannot resolve folder path: {e}"));
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        app.push_log(Level::Error, format!("Failed to open folder: {e}"));
    } else {
        log::info!("Opened folder: {}", absolute_folder.display());
    }
}

/// Walk up until an existing directory is found; `.` as last resort.
pub(crate) fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| format!("Failed to spawn {program}: {e}"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
