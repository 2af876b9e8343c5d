use crate::{AddressRegistry, DeploymentFile, RegistryError};
use alloy::primitives::Address;
use rebalancer_constants::DEPLOYMENT_FILE;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::instrument;

/// Reads `<root>/<network>/deployment.json`, e.g. from an installed
/// `synthetix/publish/deployed` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentDirRegistry {
    root: PathBuf,
}

impl DeploymentDirRegistry {
    /// Create a new registry rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the registry root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path of the document for `network`.
    pub fn document_path(&self, network: &str) -> PathBuf {
        self.root.join(network).join(DEPLOYMENT_FILE)
    }
}

impl AddressRegistry for DeploymentDirRegistry {
    #[instrument(skip(self))]
    async fn address_of(&self, network: &str, contract: &str) -> Result<Address, RegistryError> {
        let path = self.document_path(network);
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RegistryError::UnknownNetwork(network.to_owned()))
            }
            Err(e) => return Err(e.into()),
        };
        DeploymentFile::from_json(&json)?.address_of(network, contract)
    }
}
