// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Current grade selector value (placeholder when unset)
    pub grade: String,

    /// Raw ID text field contents
    pub id_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 720,
            window_h: 820,
            grade: s!(super::consts::GRADE_PLACEHOLDER),
            id_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
