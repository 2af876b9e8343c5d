use rebalancer_constants::FORK_SUFFIX;
use std::{convert::Infallible, str::FromStr};

/// A deployment target as named by the operator, e.g. `ropsten` or
/// `ropsten-fork`.
///
/// A fork mirrors the chain state of its base network, so both share the
/// same registry key. See [`NetworkIdentifier::registry_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct NetworkIdentifier(String);

impl NetworkIdentifier {
    /// Create a new identifier from a raw network name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the trimmed, lowercased name, fork suffix included.
    pub fn canonical(&self) -> String {
        self.0.trim().to_lowercase()
    }

    /// True if this names a local fork of another network.
    pub fn is_fork(&self) -> bool {
        self.canonical().ends_with(FORK_SUFFIX)
    }

    /// Get the canonical name with a single trailing fork suffix removed.
    pub fn normalize(&self) -> String {
        let canonical = self.canonical();
        match canonical.strip_suffix(FORK_SUFFIX) {
            Some(base) => base.to_owned(),
            None => canonical,
        }
    }

    /// Get the key used to query the address registry, or `None` if the
    /// normalized name is empty, still ends in the fork suffix (a fork of a
    /// fork), or contains anything other than ASCII alphanumerics, `-` and
    /// `_`.
    pub fn registry_key(&self) -> Option<String> {
        let key = self.normalize();
        let well_formed = !key.is_empty()
            && !key.ends_with(FORK_SUFFIX)
            && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        well_formed.then_some(key)
    }
}

impl core::fmt::Display for NetworkIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NetworkIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for NetworkIdentifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NetworkIdentifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for NetworkIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
