/// Startup configuration failure. Always fatal: the process must not begin
/// serving when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is missing. Set it as an environment variable.")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },

    /// The HTTP client could not be constructed (usually the TLS backend).
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failure of a single provider call.
///
/// Reported to the caller per request; never retried.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request never produced an HTTP response (DNS, TLS, connect, timeout).
    #[error("Provider request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("Provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The provider refused to answer the prompt.
    #[error("Provider blocked the prompt: {0}")]
    Blocked(String),

    /// The response body could not be decoded.
    #[error("Malformed provider response: {0}")]
    Malformed(String),

    /// The response decoded but carried no text.
    #[error("Provider returned no text")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_client_failure_does_not_blame_an_env_var() {
        let message = ConfigError::HttpClient("no TLS backend".into()).to_string();
        assert_eq!(message, "Failed to build HTTP client: no TLS backend");
        assert!(!message.contains("GEMINI_"));
    }

    #[test]
    fn missing_var_names_the_variable() {
        assert_eq!(
            ConfigError::Missing("GEMINI_API_KEY").to_string(),
            "GEMINI_API_KEY is missing. Set it as an environment variable."
        );
    }
}
