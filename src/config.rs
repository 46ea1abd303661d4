use std::env;

/// Runtime configuration, resolved from the environment once at startup and
/// injected into the application state.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    /// Redirect plain HTTP requests to HTTPS. Off by default so tests and
    /// local runs are not forced behind a TLS-terminating proxy.
    pub force_https: bool,
}

impl Config {
    pub fn init() -> Config {
        let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let force_https = env::var("FORCE_HTTPS")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Config {
            db_url,
            force_https,
        }
    }
}
