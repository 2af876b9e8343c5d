mod dir;
pub use dir::DeploymentDirRegistry;

mod http;
pub use http::HttpRegistry;

mod static_registry;
pub use static_registry::StaticRegistry;

use crate::{AddressRegistry, RegistryError};
use alloy::primitives::Address;
use rebalancer_types::RegistrySource;

/// A registry backend selected by a [`RegistrySource`].
#[derive(Debug, Clone)]
pub enum SourceRegistry {
    /// Local deployment directory.
    Dir(DeploymentDirRegistry),
    /// HTTP mirror.
    Http(HttpRegistry),
}

impl From<&RegistrySource> for SourceRegistry {
    fn from(source: &RegistrySource) -> Self {
        match source {
            RegistrySource::Dir(root) => Self::Dir(DeploymentDirRegistry::new(root.clone())),
            RegistrySource::Http(url) => Self::Http(HttpRegistry::new(url.clone())),
        }
    }
}

impl AddressRegistry for SourceRegistry {
    async fn address_of(&self, network: &str, contract: &str) -> Result<Address, RegistryError> {
        match self {
            Self::Dir(registry) => registry.address_of(network, contract).await,
            Self::Http(registry) => registry.address_of(network, contract).await,
        }
    }
}
