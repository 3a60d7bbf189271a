//! Build-time and runtime settings of the application.
//!
//! `API_URL` and `IDLE_TIMEOUT_SECS` are read at compile time; without
//! `API_URL` the backend is expected on port 8000 of the serving host.

use contracts::shared::list::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

const DEFAULT_API_PORT: u16 = 8000;
const DEFAULT_IDLE_TIMEOUT_SECS: u32 = 5 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub idle_timeout_ms: u32,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl AppConfig {
    pub fn load() -> Self {
        let (protocol, hostname) = window_origin();
        Self {
            api_base: resolve_api_base(option_env!("API_URL"), &protocol, &hostname),
            idle_timeout_ms: resolve_idle_timeout(option_env!("IDLE_TIMEOUT_SECS")),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

fn window_origin() -> (String, String) {
    let Some(window) = web_sys::window() else {
        return ("http:".to_string(), "127.0.0.1".to_string());
    };
    let location = window.location();
    (
        location.protocol().unwrap_or_else(|_| "http:".to_string()),
        location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string()),
    )
}

/// Compiled-in URL without its trailing slash, or `{protocol}//{host}:8000`.
pub fn resolve_api_base(compiled: Option<&str>, protocol: &str, hostname: &str) -> String {
    match compiled.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{protocol}//{hostname}:{DEFAULT_API_PORT}"),
    }
}

pub fn resolve_idle_timeout(compiled: Option<&str>) -> u32 {
    compiled
        .and_then(|secs| secs.trim().parse::<u32>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS)
        .saturating_mul(1000)
}

pub fn api_base() -> String {
    let (protocol, hostname) = window_origin();
    resolve_api_base(option_env!("API_URL"), &protocol, &hostname)
}

/// Absolute URL for an API path such as `/api/sale/agencies/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_url_wins() {
        assert_eq!(
            resolve_api_base(Some("https://api.tienda.bo/"), "http:", "localhost"),
            "https://api.tienda.bo"
        );
    }

    #[test]
    fn test_fallback_uses_window_host() {
        assert_eq!(
            resolve_api_base(None, "https:", "admin.tienda.bo"),
            "https://admin.tienda.bo:8000"
        );
        assert_eq!(
            resolve_api_base(Some("  "), "http:", "localhost"),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_idle_timeout() {
        assert_eq!(resolve_idle_timeout(None), 300_000);
        assert_eq!(resolve_idle_timeout(Some("60")), 60_000);
        assert_eq!(resolve_idle_timeout(Some("0")), 300_000);
        assert_eq!(resolve_idle_timeout(Some("x")), 300_000);
    }
}
