use crate::{AddressRegistry, RegistryError};
use alloy::primitives::Address;
use rebalancer_constants::{SENTINEL_ADDRESS, SYNTHETIX};
use rebalancer_types::NetworkIdentifier;
use std::borrow::Cow;
use tracing::{debug, instrument, warn};

/// Why a lookup did not produce a registry address.
#[derive(Debug, thiserror::Error)]
pub enum UnresolvedReason {
    /// The network name does not normalize to a usable registry key. The
    /// registry was not queried.
    #[error("malformed network name {0:?}")]
    MalformedNetwork(String),
    /// The registry query failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Outcome of a single registry lookup.
#[derive(Debug)]
pub enum Resolution {
    /// The registry reported this address.
    Resolved(Address),
    /// The registry could not be used. Resolves to the sentinel address.
    Unresolved(UnresolvedReason),
}

impl Resolution {
    /// Get the address to deploy with: the registry address, or
    /// [`SENTINEL_ADDRESS`] if unresolved.
    pub const fn address(&self) -> Address {
        match self {
            Self::Resolved(address) => *address,
            Self::Unresolved(_) => SENTINEL_ADDRESS,
        }
    }

    /// True if the registry produced the address.
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Get the reason the lookup fell back, if it did.
    pub const fn reason(&self) -> Option<&UnresolvedReason> {
        match self {
            Self::Resolved(_) => None,
            Self::Unresolved(reason) => Some(reason),
        }
    }
}

/// Resolves the address of a registry contract, by default `Synthetix`, for a
/// deployment network.
///
/// Fork networks resolve through their base network's registry entry. Any
/// failure resolves to [`SENTINEL_ADDRESS`]: resolution never returns an
/// error, and never caches.
#[derive(Debug, Clone)]
pub struct AddressResolver<R> {
    registry: R,
    contract: Cow<'static, str>,
}

impl<R> AddressResolver<R> {
    /// Create a resolver for the Synthetix core contract.
    pub const fn new(registry: R) -> Self {
        Self { registry, contract: Cow::Borrowed(SYNTHETIX) }
    }

    /// Resolve `contract` instead of the Synthetix core contract.
    pub fn with_contract(self, contract: impl Into<Cow<'static, str>>) -> Self {
        Self { contract: contract.into(), ..self }
    }

    /// Get a reference to the registry.
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Get the contract name being resolved.
    pub fn contract(&self) -> &str {
        &self.contract
    }
}

impl<R> AddressResolver<R>
where
    R: AddressRegistry,
{
    /// Look up the contract address for `network`, reporting whether the
    /// registry produced it.
    #[instrument(skip(self), fields(contract = %self.contract))]
    pub async fn lookup(&self, network: &NetworkIdentifier) -> Resolution {
        let Some(key) = network.registry_key() else {
            let reason = UnresolvedReason::MalformedNetwork(network.to_string());
            warn!(%reason, "using sentinel address");
            return Resolution::Unresolved(reason);
        };

        match self.registry.address_of(&key, &self.contract).await {
            Ok(address) => {
                debug!(%address, registry_key = %key, "resolved contract address");
                Resolution::Resolved(address)
            }
            Err(error) => {
                warn!(%error, registry_key = %key, "registry lookup failed, using sentinel address");
                Resolution::Unresolved(error.into())
            }
        }
    }

    /// Resolve the contract address for `network`, falling back to
    /// [`SENTINEL_ADDRESS`].
    pub async fn resolve(&self, network: &NetworkIdentifier) -> Address {
        self.lookup(network).await.address()
    }
}
