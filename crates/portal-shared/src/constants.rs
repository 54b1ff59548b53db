//! Application-wide constants

/// Link emitted whenever a route cannot be reversed.
pub const FALLBACK_URL: &str = "#";
pub const USER_TYPE_ANONYMOUS: &str = "other";
pub const DEFAULT_PERMISSION_DOMAIN: &str = "app";
pub const DEFAULT_ACTION_ICON: &str = "question-circle";
pub const USER_ID_HEADER: &str = "x-user-id";
