/// Backend base URL.
/// Configured at compile time:
/// - development: http://localhost:3000 (default)
/// - production: via BACKEND_URL env var (loaded from .env by build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// How often the home screen re-fetches the ongoing attendance.
pub const ATTENDANCE_POLL_INTERVAL_MS: u32 = 10_000;

/// Lifetime of a transient message before it clears itself.
pub const MESSAGE_LIFETIME_MS: u32 = 3_000;

/// localStorage key for the offline user data of the signed-in user.
pub const STORAGE_KEY_USER_DATA: &str = "attendance_userData";

/// localStorage key for the selected UI language.
pub const STORAGE_KEY_LANGUAGE: &str = "attendance_language";
