// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// What one pipeline run needs. Built by the CLI parser or the GUI form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub listing_url: String,
    pub folder: PathBuf,
    /// Download cover art into `<folder>/images`
    pub images: bool,
    /// Append records to `<folder>/gamelist.xml`
    pub gamelist: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            listing_url: s!(DEFAULT_LISTING_URL),
            folder: PathBuf::from(DEFAULT_FOLDER),
            images: true,
            gamelist: true,
        }
    }
}

impl RunOptions {
    /// Take form/CLI text as-is, trimmed. Empty folder falls back to the default.
    pub fn set_folder(&mut self, text: &str) {
        let t = text.trim();
        self.folder = if t.is_empty() { PathBuf::from(DEFAULT_FOLDER) } else { PathBuf::from(t) };
    }

    pub fn set_listing_url(&mut self, text: &str) {
        self.listing_url = s!(text.trim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_tic80_and_local_folder() {
        let o = RunOptions::default();
        assert!(o.listing_url.starts_with(SITE_ORIGIN));
        assert_eq!(o.folder, PathBuf::from("tic_files"));
        assert!(o.images && o.gamelist);
    }

    #[test]
    fn blank_folder_text_keeps_default() {
        let mut o = RunOptions::default();
        o.set_folder("   ");
        assert_eq!(o.folder, PathBuf::from(DEFAULT_FOLDER));
        o.set_folder(" carts/out ");
        assert_eq!(o.folder, PathBuf::from("carts/out"));
    }
}
