/// Errors returned by [`AddressRegistry`] backends.
///
/// The [`AddressResolver`] never surfaces these. They are kept in
/// [`UnresolvedReason`] for logging.
///
/// [`AddressRegistry`]: crate::AddressRegistry
/// [`AddressResolver`]: crate::AddressResolver
/// [`UnresolvedReason`]: crate::UnresolvedReason
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry has no document for the network.
    #[error("no registry entry for network {0}")]
    UnknownNetwork(String),
    /// The network document has no target for the contract.
    #[error("no {contract} target for network {network}")]
    UnknownContract {
        /// Normalized network key.
        network: String,
        /// Contract name.
        contract: String,
    },
    /// The target's address is not a 20-byte hex address.
    #[error("invalid address {address:?} for {contract}")]
    InvalidAddress {
        /// Contract name.
        contract: String,
        /// The value found in the registry.
        address: String,
    },
    /// Reading a local registry document failed.
    #[error("failed to read registry document: {0}")]
    Io(#[from] std::io::Error),
    /// A registry document is not valid JSON.
    #[error("failed to parse registry document: {0}")]
    Json(#[from] serde_json::Error),
    /// Building a registry URL failed.
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// An error occurred while contacting the registry.
    #[error("error contacting registry: {0}")]
    Http(#[from] reqwest::Error),
}
