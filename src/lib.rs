//! # Postdesk TUI
//!
//! A terminal post manager for JSONPlaceholder style REST APIs.
//!
//! ## Features
//! - List the latest posts (`GET /posts?_limit=N`)
//! - Create, edit and delete posts from a form
//! - Localized interface (English, Russian)
//! - YAML configuration in `~/.postdesk/config.yaml`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod i18n;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use models::{Post, PostDraft};
pub use config::Config;
pub use error::ApiError;
pub use i18n::Locale;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, PostOp, RenderState};
pub use app::{AppState, AppActor};
pub use network::{NetworkActor, PostsClient};
