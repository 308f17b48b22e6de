//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of posts requested by the list endpoint
pub const DEFAULT_POSTS_LIMIT: u32 = 10;

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "POSTDESK_BASE_URL";

/// Directory under the home directory holding config and logs
pub const CONFIG_DIR_NAME: &str = ".postdesk";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file name
pub const LOG_FILE_NAME: &str = "postdesk.log";

/// Application name
pub const APP_NAME: &str = "Postdesk";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
