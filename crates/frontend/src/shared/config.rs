//! Widget configuration, resolved at build time.

/// Configuration for the widget. Constructed once in the page controller
/// and passed down; there is no process-wide singleton.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Explicit API base URL, e.g. "https://forms.example.com". When unset
    /// the base is derived from the current window location.
    pub api_base: Option<String>,
    /// Whether a failed form fetch may fall back to the built-in fixture.
    pub fixture_fallback: bool,
}

impl AppConfig {
    /// Resolve configuration from compile-time inputs: the `FORM_API_BASE`
    /// environment variable and the `dev-fixture` cargo feature. Selecting
    /// the fixture by build configuration keeps production bundles from
    /// ever masking a broken API with mock data.
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("FORM_API_BASE")
                .map(str::to_string)
                .filter(|base| !base.is_empty()),
            fixture_fallback: cfg!(feature = "dev-fixture"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_fallback() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, None);
        assert!(!config.fixture_fallback);
    }
}
