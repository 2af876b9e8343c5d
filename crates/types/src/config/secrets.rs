use crate::{config::env_utils, ConfigError};

/// Environment variable holding the deployer HD wallet mnemonic.
pub const ETH_DEV_MNEMONIC: &str = "ETH_DEV_MNEMONIC";

/// Environment variable holding the Infura project id.
pub const INFURA_PROJECT_ID: &str = "INFURA_PROJECT_ID";

/// A BIP-39 mnemonic phrase. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic(String);

impl Mnemonic {
    /// Wrap a phrase.
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    /// Get the phrase. Callers must not log it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Mnemonic(<redacted>)")
    }
}

/// Secrets sourced from the environment.
///
/// Both are optional at load time. A network that needs them asks through
/// [`Secrets::require_mnemonic`] and [`Secrets::require_infura_project_id`],
/// which fail instead of falling back.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    mnemonic: Option<Mnemonic>,
    infura_project_id: Option<String>,
}

impl core::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let redact = |set: bool| if set { "<redacted>" } else { "<unset>" };
        f.debug_struct("Secrets")
            .field("mnemonic", &redact(self.mnemonic.is_some()))
            .field("infura_project_id", &redact(self.infura_project_id.is_some()))
            .finish()
    }
}

impl Secrets {
    /// Create a new set of secrets.
    pub fn new(mnemonic: Option<String>, infura_project_id: Option<String>) -> Self {
        Self { mnemonic: mnemonic.map(Mnemonic::new), infura_project_id }
    }

    /// Load the secrets from the environment.
    pub fn from_env() -> Self {
        Self::new(
            env_utils::load_string_opt(ETH_DEV_MNEMONIC),
            env_utils::load_string_opt(INFURA_PROJECT_ID),
        )
    }

    /// Get the mnemonic, if set.
    pub const fn mnemonic(&self) -> Option<&Mnemonic> {
        self.mnemonic.as_ref()
    }

    /// Get the Infura project id, if set.
    pub fn infura_project_id(&self) -> Option<&str> {
        self.infura_project_id.as_deref()
    }

    /// Get the mnemonic, or fail on behalf of `network`.
    pub fn require_mnemonic(&self, network: &str) -> Result<&Mnemonic, ConfigError> {
        self.mnemonic().ok_or_else(|| ConfigError::MissingSecret {
            network: network.to_owned(),
            key: ETH_DEV_MNEMONIC,
        })
    }

    /// Get the Infura project id, or fail on behalf of `network`.
    pub fn require_infura_project_id(&self, network: &str) -> Result<&str, ConfigError> {
        self.infura_project_id().ok_or_else(|| ConfigError::MissingSecret {
            network: network.to_owned(),
            key: INFURA_PROJECT_ID,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "test test test test test test test test test test test junk";

    #[test]
    fn debug_output_is_redacted() {
        let secrets = Secrets::new(Some(PHRASE.to_owned()), Some("project-1234".to_owned()));
        let debug = format!("{secrets:?}");
        assert!(!debug.contains("junk"));
        assert!(!debug.contains("project-1234"));
        assert!(debug.contains("<redacted>"));

        let mnemonic = secrets.require_mnemonic("ropsten").unwrap();
        assert_eq!(format!("{mnemonic:?}"), "Mnemonic(<redacted>)");
        assert_eq!(mnemonic.expose(), PHRASE);
    }

    #[test]
    fn required_secrets_fail_fast() {
        let secrets = Secrets::default();
        match secrets.require_mnemonic("ropsten").unwrap_err() {
            ConfigError::MissingSecret { network, key } => {
                assert_eq!(network, "ropsten");
                assert_eq!(key, ETH_DEV_MNEMONIC);
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(matches!(
            secrets.require_infura_project_id("ropsten"),
            Err(ConfigError::MissingSecret { key: INFURA_PROJECT_ID, .. })
        ));
    }
}
