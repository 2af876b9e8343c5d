use crate::{AddressRegistry, RegistryError};
use alloy::primitives::Address;
use std::{
    io,
    sync::atomic::{AtomicUsize, Ordering},
};

/// A registry whose every query fails as if the registry were unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRegistry;

impl AddressRegistry for FailingRegistry {
    async fn address_of(&self, _network: &str, _contract: &str) -> Result<Address, RegistryError> {
        Err(io::Error::new(io::ErrorKind::TimedOut, "registry fetch timed out").into())
    }
}

/// Wraps a registry and counts the queries it receives.
#[derive(Debug, Default)]
pub struct CountingRegistry<R> {
    inner: R,
    queries: AtomicUsize,
}

impl<R> CountingRegistry<R> {
    /// Wrap `inner`.
    pub const fn new(inner: R) -> Self {
        Self { inner, queries: AtomicUsize::new(0) }
    }

    /// Number of queries received so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl<R> AddressRegistry for CountingRegistry<R>
where
    R: AddressRegistry + Sync,
{
    async fn address_of(&self, network: &str, contract: &str) -> Result<Address, RegistryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.address_of(network, contract).await
    }
}
