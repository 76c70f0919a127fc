mod gate;
mod handlers;

pub use gate::require_admin;
pub use handlers::{handle_login, handle_logout};

/// Cookie carrying the admin session credential.
pub const ADMIN_COOKIE: &str = "admin_token";
