// src/gui/actions/browse.rs
use std::path::{Path, PathBuf};

use super::open_folder::find_nearest_existing_parent;

/// Native folder picker, opened where the folder field currently points.
/// None when the user cancels.
pub fn browse_folder(current: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select download folder")
        .set_directory(start_dir(current))
        .pick_folder()
}

/// Field text → directory the dialog opens in.
fn start_dir(current: &str) -> PathBuf {
    let text = current.trim();
    if text.is_empty() {
        return PathBuf::from(".");
    }
    find_nearest_existing_parent(Path::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_starts_at_nearest_existing_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let not_yet = tmp.path().join("tic_files");
        assert_eq!(start_dir(&not_yet.display().to_string()), tmp.path().to_path_buf());
        assert_eq!(start_dir(&tmp.path().display().to_string()), tmp.path().to_path_buf());
        assert_eq!(start_dir("   "), PathBuf::from("."));
    }
}
