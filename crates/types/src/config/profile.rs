use crate::Mnemonic;
use rebalancer_constants::NetworkId;
use url::{Position, Url};

/// How deployment transactions are signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signing {
    /// The node signs with its first unlocked account.
    Unlocked,
    /// An HD wallet derived from the mnemonic signs locally.
    Mnemonic(Mnemonic),
}

/// A fully resolved network selection: where to connect, which id to expect,
/// and how to sign.
#[derive(Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    /// Network name as selected, fork suffix included.
    name: String,
    /// Table entry this profile forks, if any.
    fork_of: Option<&'static str>,
    /// JSON-RPC endpoint.
    rpc_url: Url,
    /// Accepted network id.
    network_id: NetworkId,
    /// Signing strategy.
    signing: Signing,
}

// The RPC URL may carry a project id in its path.
impl core::fmt::Debug for NetworkProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NetworkProfile")
            .field("name", &self.name)
            .field("fork_of", &self.fork_of)
            .field("rpc_endpoint", &self.rpc_endpoint())
            .field("network_id", &self.network_id)
            .field("signing", &self.signing)
            .finish()
    }
}

impl NetworkProfile {
    /// Create a profile for a network table entry.
    pub fn new(
        name: impl Into<String>,
        rpc_url: Url,
        network_id: NetworkId,
        signing: Signing,
    ) -> Self {
        Self { name: name.into(), fork_of: None, rpc_url, network_id, signing }
    }

    /// Create a profile for a local fork of `base`. Forks accept any network
    /// id and sign with the fork node's unlocked accounts.
    pub fn fork(name: impl Into<String>, base: &'static str, rpc_url: Url) -> Self {
        Self {
            name: name.into(),
            fork_of: Some(base),
            rpc_url,
            network_id: NetworkId::Any,
            signing: Signing::Unlocked,
        }
    }

    /// Get the network name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the forked table entry, if this is a fork.
    pub const fn fork_of(&self) -> Option<&'static str> {
        self.fork_of
    }

    /// Get the JSON-RPC endpoint.
    pub const fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Get the scheme, host and port of the JSON-RPC endpoint. Safe to log.
    pub fn rpc_endpoint(&self) -> &str {
        &self.rpc_url[..Position::BeforePath]
    }

    /// Replace the endpoint's path and query in `text` with a placeholder.
    ///
    /// Credentialed endpoints carry their project id in the path, and HTTP
    /// client errors print the full request URL.
    pub fn redact(&self, text: &str) -> String {
        let secret = &self.rpc_url[Position::BeforePath..];
        if secret.trim_start_matches('/').is_empty() {
            return text.to_owned();
        }
        text.replace(secret, "/<redacted>")
    }

    /// Get the accepted network id.
    pub const fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// Get the signing strategy.
    pub const fn signing(&self) -> &Signing {
        &self.signing
    }
}
