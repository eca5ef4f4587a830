use std::env;
use std::path::PathBuf;

use crate::i18n::Locale;

/// AppConfig
///
/// Holds the application's entire configuration state. The struct is immutable once
/// loaded, so every component (profile client, persistence, navigator bootstrap)
/// observes the same values for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Base URL of the auction backend API (the `VITE_API` value of the web build).
    pub api_base_url: String,
    // Where the persisted session state (tokens, locale) is stored between runs.
    pub session_file: PathBuf,
    // Locale used until the persisted state or the user says otherwise.
    pub default_locale: Locale,
    // Runtime environment marker. Controls log formatting and required variables.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between development conveniences
/// (pretty logs, localhost API default) and production behavior (JSON logs,
/// mandatory configuration).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for test setup.
    /// Tests can instantiate configuration without touching process environment variables.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            session_file: PathBuf::from(".auction-portal/session.json"),
            default_locale: Locale::EnUs,
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration at startup.
    /// It reads all parameters from environment variables and fails fast on anything
    /// mandatory for the selected environment.
    ///
    /// # Panics
    /// Panics if a critical environment variable required for the current runtime
    /// environment (especially Production) is not found. Starting with an incomplete
    /// configuration would only surface later as broken fetches.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // API base resolution. Production deployments must say where the backend
        // lives; local runs default to the dockerized backend port.
        let api_base_url = match env {
            Env::Production => {
                env::var("API_BASE_URL").expect("FATAL: API_BASE_URL must be set in production.")
            }
            _ => {
                env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string())
            }
        };

        let session_file = env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".auction-portal/session.json"));

        // An unrecognized tag falls back to English rather than aborting startup;
        // the persisted state may still override this.
        let default_locale = env::var("DEFAULT_LOCALE")
            .map(|tag| Locale::negotiate(&tag))
            .unwrap_or(Locale::EnUs);

        Self {
            api_base_url,
            session_file,
            default_locale,
            env,
        }
    }
}
