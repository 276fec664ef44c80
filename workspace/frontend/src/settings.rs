use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "api.example.com"); empty means same origin
    pub api_host: String,

    /// Backend API port, ignored when `api_host` is empty
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Endpoint returning the dashboard payload, relative to the API base
    pub dashboard_endpoint: String,

    /// Fetch dashboard data once when the dashboard is mounted.
    /// When off, the sample data stays on screen.
    pub load_on_startup: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: String::new(),
            api_port: 3000,
            api_path: "/api".to_string(),
            api_use_https: false,
            dashboard_endpoint: "/dashboard".to_string(),
            load_on_startup: false,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(key).ok().flatten();

            if let Some(api_host) = read("nogops_api_host") {
                settings.api_host = api_host;
            }

            if let Some(port_val) = read("nogops_api_port").and_then(|p| p.parse::<u16>().ok()) {
                settings.api_port = port_val;
            }

            if let Some(api_path) = read("nogops_api_path") {
                settings.api_path = api_path;
            }

            if let Some(use_https) = read("nogops_api_use_https") {
                settings.api_use_https = use_https.eq_ignore_ascii_case("true");
            }

            if let Some(endpoint) = read("nogops_dashboard_endpoint") {
                settings.dashboard_endpoint = endpoint;
            }

            if let Some(load) = read("nogops_load_on_startup") {
                settings.load_on_startup = load.eq_ignore_ascii_case("true");
            }

            if let Some(log_level) = read("nogops_log_level") {
                settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
            }
        }

        settings
    }

    /// Get the base API URL. Without a host this is just the path, so
    /// requests go to the page's own origin.
    pub fn api_base_url(&self) -> String {
        if self.api_host.is_empty() {
            return self.api_path.clone();
        }
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_is_same_origin() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_url(&settings.dashboard_endpoint), "/api/dashboard");
        assert!(!settings.load_on_startup);
    }

    #[test]
    fn test_url_with_host() {
        let settings = AppSettings {
            api_host: "cafe.example.com".to_string(),
            api_port: 8443,
            api_use_https: true,
            ..Default::default()
        };
        assert_eq!(settings.api_base_url(), "https://cafe.example.com:8443/api");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level("loud"), None);
    }
}
