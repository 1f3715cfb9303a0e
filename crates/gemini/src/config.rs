use std::fmt;
use std::time::Duration;

use composer_core::error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Per-call timeout when `GEMINI_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini client configuration.
///
/// | Env Var               | Default                                            |
/// |-----------------------|----------------------------------------------------|
/// | `GEMINI_API_KEY`      | required                                           |
/// | `GEMINI_MODEL`        | `gemini-1.5-flash`                                 |
/// | `GEMINI_BASE_URL`     | `https://generativelanguage.googleapis.com/v1beta` |
/// | `GEMINI_TIMEOUT_SECS` | `60`                                               |
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// A blank API key counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let model = lookup("GEMINI_MODEL")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("GEMINI_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "GEMINI_TIMEOUT_SECS",
                    reason: format!("expected a positive integer, got {raw:?}"),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn missing_key_is_config_error() {
        let err = GeminiConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_matches!(err, ConfigError::Missing("GEMINI_API_KEY"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = GeminiConfig::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert_matches!(err, ConfigError::Missing(_));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = GeminiConfig::from_lookup(lookup(&[(API_KEY_VAR, "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn overrides_are_read_and_trailing_slash_dropped() {
        let config = GeminiConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_BASE_URL", "http://127.0.0.1:9999/v1beta/"),
            ("GEMINI_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.base_url, "http://127.0.0.1:9999/v1beta");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        for raw in ["abc", "0", "-3"] {
            let err = GeminiConfig::from_lookup(lookup(&[
                (API_KEY_VAR, "k"),
                ("GEMINI_TIMEOUT_SECS", raw),
            ]))
            .unwrap_err();
            assert_matches!(err, ConfigError::Invalid { var: "GEMINI_TIMEOUT_SECS", .. });
        }
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = GeminiConfig::new("super-secret-key");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
