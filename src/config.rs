/// Runtime settings read from the environment at startup.
///
/// `SCOPE_APP_NAME` sets the name shown in the navbar, `SCOPE_BIND` the
/// listen address, and `SCOPE_SEED` an optional path to a JSON file
/// replacing the bundled demo index.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub bind: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            app_name: std::env::var("SCOPE_APP_NAME").unwrap_or_else(|_| "SCOPE".to_string()),
            bind: std::env::var("SCOPE_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        }
    }
}
