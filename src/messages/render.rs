//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::i18n::Locale;
use crate::messages::ui_events::{InputMode, KeyContext, Panel};
use crate::models::{Post, PostDraft};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub locale: Locale,

    // Posts list
    pub posts: Vec<Post>,
    pub selected_post: usize,
    pub last_synced: Option<DateTime<Local>>,

    // Form
    pub form: PostDraft,
    pub editing_id: Option<u64>,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Request state
    pub is_loading: bool,
    pub error: Option<String>,

    // Popups
    pub show_help: bool,
    pub confirm_delete: Option<u64>,
}

impl RenderState {
    /// Context for mapping the next key press
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            show_help: self.show_help,
            confirming_delete: self.confirm_delete.is_some(),
            editing_post: self.editing_id.is_some(),
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            locale: Locale::default(),
            posts: Vec::new(),
            selected_post: 0,
            last_synced: None,
            form: PostDraft::default(),
            editing_id: None,
            active_panel: Panel::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            is_loading: false,
            error: None,
            show_help: false,
            confirm_delete: None,
        }
    }
}
