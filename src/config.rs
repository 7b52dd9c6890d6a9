//! Runtime configuration for the leaderboard server.
//!
//! Secrets are read from the environment exactly once and held in an
//! immutable value; nothing reads `env::var` after startup.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Shared admin credential checked at login.
    pub admin_password: String,
    /// Signing key for session tokens.
    pub jwt_secret: String,
    /// Session token lifetime (minutes).
    pub session_ttl_minutes: i64,
}

impl Settings {
    fn from_env() -> Self {
        let admin_password = env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let session_ttl_minutes = env::var("SESSION_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(12 * 60);

        Settings {
            admin_password,
            jwt_secret,
            session_ttl_minutes,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
