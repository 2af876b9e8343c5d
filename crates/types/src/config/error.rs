/// Error type for [`crate::DeployConfig`]. Captures errors related to loading
/// configuration from the environment and selecting a network profile.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error loading from environment variable
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing boolean environment variable
    #[error("failed to parse boolean environment variable: {0}")]
    ParseBool(String),
    /// Error parsing a URL
    #[error("failed to parse URL: {0}")]
    Url(#[from] url::ParseError),
    /// The network is neither a table entry nor a fork of one.
    #[error("unknown network {0}")]
    UnknownNetwork(String),
    /// The selected network needs a secret that is not set.
    #[error("network {network} requires environment variable {key}")]
    MissingSecret {
        /// The selected network.
        network: String,
        /// The environment variable that must be set.
        key: &'static str,
    },
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
