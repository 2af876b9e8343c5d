use alloy::{
    primitives::B256, providers::PendingTransactionError, signers::local::LocalSignerError,
    transports::TransportError,
};
use rebalancer_constants::NetworkId;
use rebalancer_types::{ConfigError, NetworkProfile};
use std::path::PathBuf;

/// Errors loading or validating a compiled contract artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// The artifact file could not be read or written.
    #[error("artifact {path}: {source}")]
    Io {
        /// Artifact path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The artifact is not a valid artifact document.
    #[error("artifact {path} is malformed: {source}")]
    Json {
        /// Artifact path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// The artifact does not record the compiler that built it.
    #[error("artifact for {0} does not record a compiler version")]
    MissingCompiler(String),
    /// The artifact was built with a different compiler than the pin.
    #[error("artifact was compiled with solc {found}, expected {expected}")]
    CompilerMismatch {
        /// Pinned version.
        expected: String,
        /// Version recorded in the artifact.
        found: String,
    },
    /// The artifact has no creation bytecode, e.g. an interface.
    #[error("artifact for {0} has no bytecode")]
    EmptyBytecode(String),
}

/// Errors returned by the deployment driver.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// Configuration or network selection failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The artifact could not be used.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    /// The deployer wallet could not be derived.
    #[error("failed to derive deployer wallet: {0}")]
    Signer(#[from] LocalSignerError),
    /// An RPC request failed.
    #[error("rpc error: {0}")]
    Transport(#[from] TransportError),
    /// Waiting for the deployment receipt failed.
    #[error("failed waiting for deployment receipt: {0}")]
    Pending(#[from] PendingTransactionError),
    /// An RPC request to a profile's endpoint failed. Built by
    /// [`DeployError::redact`], so the message never carries the endpoint's
    /// path.
    #[error("rpc error at {endpoint}: {message}")]
    Rpc {
        /// Scheme, host and port of the endpoint.
        endpoint: String,
        /// Rendered error, path redacted.
        message: String,
    },
    /// The node has no unlocked account to deploy from.
    #[error("node has no unlocked accounts to deploy from")]
    NoAccounts,
    /// The node is on a different network than the profile expects.
    #[error("expected network id {expected}, node reports {found}")]
    NetworkIdMismatch {
        /// Id accepted by the profile.
        expected: NetworkId,
        /// Id reported by the node.
        found: u64,
    },
    /// The deployment transaction reverted.
    #[error("deployment transaction {0} reverted")]
    Reverted(B256),
    /// The receipt does not name a created contract.
    #[error("receipt for {0} has no contract address")]
    NoContractAddress(B256),
}

impl DeployError {
    /// Render transport errors without the endpoint path of `profile`.
    ///
    /// HTTP client errors print the request URL, and credentialed endpoints
    /// carry their project id in it. Other errors are returned unchanged.
    pub fn redact(self, profile: &NetworkProfile) -> Self {
        let message = match &self {
            Self::Transport(err) => err.to_string(),
            Self::Pending(err) => format!("failed waiting for deployment receipt: {err}"),
            _ => return self,
        };
        let endpoint = profile.rpc_endpoint().to_owned();
        Self::Rpc { endpoint, message: profile.redact(&message) }
    }
}
