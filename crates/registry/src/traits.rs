use crate::RegistryError;
use alloy::primitives::Address;
use core::future::Future;

/// A source of deployed contract addresses, keyed by network and contract
/// name.
///
/// Implementors only ever receive well-formed keys from
/// [`NetworkIdentifier::registry_key`]: no trailing fork suffix, no path
/// separators.
///
/// [`NetworkIdentifier::registry_key`]: rebalancer_types::NetworkIdentifier::registry_key Timeouts and retries, if any, are the
/// implementor's concern.
pub trait AddressRegistry {
    /// Look up the address of `contract` on `network`.
    fn address_of(
        &self,
        network: &str,
        contract: &str,
    ) -> impl Future<Output = Result<Address, RegistryError>> + Send;
}

impl<T> AddressRegistry for &T
where
    T: AddressRegistry + Sync,
{
    fn address_of(
        &self,
        network: &str,
        contract: &str,
    ) -> impl Future<Output = Result<Address, RegistryError>> + Send {
        (**self).address_of(network, contract)
    }
}
