//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::i18n::Locale;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{PostOp, RenderState};
use crate::models::{Post, PostDraft};

/// The request the app is currently waiting on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub op: PostOp,
    /// Target post for update and delete
    pub post_id: Option<u64>,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub locale: Locale,
    pub posts_limit: u32,

    // Local copy of the server-owned list, head first
    pub posts: Vec<Post>,
    pub selected_post: usize,
    pub last_synced: Option<DateTime<Local>>,

    // Form
    pub form: PostDraft,
    pub editing_id: Option<u64>,
    pub cursor_position: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,

    // Request state
    pub is_loading: bool,
    pub error: Option<String>,
    pub next_request_id: u64,
    pub pending: Option<PendingRequest>,

    // Popups
    pub show_help: bool,
    pub confirm_delete: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            locale: config.locale,
            posts_limit: config.posts_limit,
            posts: Vec::new(),
            selected_post: 0,
            last_synced: None,
            form: PostDraft::default(),
            editing_id: None,
            cursor_position: 0,
            active_panel: Panel::Title,
            input_mode: InputMode::Normal,
            is_loading: false,
            error: None,
            next_request_id: 1,
            pending: None,
            show_help: false,
            confirm_delete: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Currently highlighted post, if any
    pub fn selected(&self) -> Option<&Post> {
        self.posts.get(self.selected_post)
    }

    /// Get the focused form field
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Title => &self.form.title,
            Panel::Body => &self.form.body,
            Panel::Posts => "",
        }
    }

    /// Mutable access to the focused form field
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.active_panel {
            Panel::Title => Some(&mut self.form.title),
            Panel::Body => Some(&mut self.form.body),
            Panel::Posts => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            locale: self.locale,
            posts: self.posts.clone(),
            selected_post: self.selected_post,
            last_synced: self.last_synced,
            form: self.form.clone(),
            editing_id: self.editing_id,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            is_loading: self.is_loading,
            error: self.error.clone(),
            show_help: self.show_help,
            confirm_delete: self.confirm_delete,
        }
    }
}
