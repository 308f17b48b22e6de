//! Command handlers - business logic for processing UI events

use chrono::Local;

use crate::app::state::PendingRequest;
use crate::app::AppState;
use crate::i18n::Text;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse, PostOp};
use crate::models::PostDraft;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
        self.cursor_position = self.current_input().len();
    }

    pub fn select_next(&mut self) {
        if !self.posts.is_empty() {
            self.selected_post = (self.selected_post + 1) % self.posts.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.posts.is_empty() {
            self.selected_post = self
                .selected_post
                .checked_sub(1)
                .unwrap_or(self.posts.len() - 1);
        }
    }

    fn clamp_selection(&mut self) {
        if self.posts.is_empty() {
            self.selected_post = 0;
        } else if self.selected_post >= self.posts.len() {
            self.selected_post = self.posts.len() - 1;
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel.is_form_field() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                self.cursor_position = cursor_pos + c.len_utf8();
            }
        }
    }

    /// Line breaks are only allowed in the post text
    pub fn insert_newline(&mut self) {
        if self.active_panel == Panel::Body {
            self.enter_char('\n');
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Edit flow
    // ========================

    /// Load the selected post into the form for editing
    pub fn start_edit(&mut self) {
        if self.is_loading {
            return;
        }
        let Some(post) = self.selected().cloned() else {
            return;
        };
        tracing::debug!(post_id = post.id, "Editing post");
        self.editing_id = Some(post.id);
        self.form = PostDraft::from_post(&post);
        self.active_panel = Panel::Title;
        self.input_mode = InputMode::Normal;
        self.cursor_position = self.form.title.len();
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.form.clear();
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn request_delete(&mut self) {
        if self.is_loading {
            return;
        }
        if let Some(post) = self.selected() {
            self.confirm_delete = Some(post.id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    // ========================
    // Request sending
    // ========================

    fn begin_request(&mut self, op: PostOp, post_id: Option<u64>) -> u64 {
        let id = self.next_id();
        self.is_loading = true;
        self.error = None;
        self.pending = Some(PendingRequest { id, op, post_id });
        id
    }

    /// Reload the list from the server
    pub fn fetch_posts(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            return None;
        }
        let id = self.begin_request(PostOp::List, None);
        Some(NetworkCommand::ListPosts {
            id,
            limit: self.posts_limit,
        })
    }

    /// Create a post, or update the one being edited
    pub fn submit_form(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            return None;
        }
        if !self.form.is_complete() {
            self.error = Some(self.locale.text(Text::FormIncomplete).to_string());
            return None;
        }

        let draft = self.form.clone();
        match self.editing_id {
            Some(post_id) => {
                let id = self.begin_request(PostOp::Update, Some(post_id));
                Some(NetworkCommand::UpdatePost { id, post_id, draft })
            }
            None => {
                let id = self.begin_request(PostOp::Create, None);
                Some(NetworkCommand::CreatePost { id, draft })
            }
        }
    }

    /// Send the delete the user just confirmed
    pub fn confirm_delete(&mut self) -> Option<NetworkCommand> {
        let post_id = self.confirm_delete.take()?;
        if self.is_loading {
            return None;
        }
        let id = self.begin_request(PostOp::Delete, Some(post_id));
        Some(NetworkCommand::DeletePost { id, post_id })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let Some(pending) = self.pending else {
            tracing::debug!(id = response.id(), "Ignoring response with nothing pending");
            return;
        };
        if pending.id != response.id() {
            tracing::debug!(id = response.id(), pending = pending.id, "Ignoring stale response");
            return;
        }

        self.pending = None;
        self.is_loading = false;

        match response {
            NetworkResponse::PostsLoaded { posts, .. } => {
                self.posts = posts;
                self.last_synced = Some(Local::now());
                self.clamp_selection();
            }
            NetworkResponse::PostCreated { post, .. } => {
                if self.posts.iter().any(|p| p.id == post.id) {
                    tracing::warn!(post_id = post.id, "Server returned an id already in the list");
                }
                self.posts.insert(0, post);
                self.selected_post = 0;
                self.reset_form();
            }
            NetworkResponse::PostUpdated { post, .. } => {
                let target = pending.post_id.unwrap_or(post.id);
                for slot in self.posts.iter_mut().filter(|p| p.id == target) {
                    *slot = post.clone();
                }
                self.editing_id = None;
                self.reset_form();
            }
            NetworkResponse::PostDeleted { post_id, .. } => {
                self.posts.retain(|p| p.id != post_id);
                self.clamp_selection();
                if self.editing_id == Some(post_id) {
                    self.cancel_edit();
                }
            }
            NetworkResponse::Failed { op, message, .. } => {
                tracing::warn!(op = op.as_str(), %message, "Request failed");
                self.error = Some(self.locale.error_message(op, &message));
            }
        }
    }
}
