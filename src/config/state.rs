// src/config/state.rs
use super::options::RunOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Form fields, applied to `RunOptions` when Start is clicked
    pub url_text: String,
    pub folder_text: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Log view -> show/hide debug lines
    pub show_debug: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        let opts = RunOptions::default();
        Self {
            url_text: opts.listing_url,
            folder_text: opts.folder.to_string_lossy().into_owned(),
            window_w: 720,
            window_h: 480,
            show_debug: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: RunOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Mirror form text → run options
    pub fn sync_form_into_options(&mut self) {
        self.options.set_listing_url(&self.gui.url_text);
        self.options.set_folder(&self.gui.folder_text);
    }
}
