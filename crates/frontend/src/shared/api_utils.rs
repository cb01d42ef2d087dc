//! API utilities for widget-backend communication.

use crate::shared::config::AppConfig;

/// Get the base URL for API requests.
///
/// Uses the configured override when present; otherwise constructs the base
/// from the current window location, using port 3000 for the form API.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available and no override is configured
pub fn api_base(config: &AppConfig) -> String {
    if let Some(base) = &config.api_base {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins_and_is_normalized() {
        let config = AppConfig {
            api_base: Some("https://forms.example.com/".to_string()),
            fixture_fallback: false,
        };
        assert_eq!(api_base(&config), "https://forms.example.com");
    }
}
