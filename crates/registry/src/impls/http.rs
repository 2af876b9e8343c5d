use crate::{AddressRegistry, DeploymentFile, RegistryError};
use alloy::primitives::Address;
use rebalancer_constants::{DEFAULT_REGISTRY_URL, DEPLOYMENT_FILE};
use tracing::{instrument, warn};
use url::Url;

/// Fetches `<base>/<network>/deployment.json` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    /// Base URL, always ending in `/`.
    url: Url,
    /// The reqwest client used to send requests.
    client: reqwest::Client,
}

impl HttpRegistry {
    /// Create a new registry with the given base URL and client.
    pub fn new_with_client(url: Url, client: reqwest::Client) -> Self {
        Self { url: with_trailing_slash(url), client }
    }

    /// Create a new registry with the given base URL and a new client.
    pub fn new(url: Url) -> Self {
        Self::new_with_client(url, reqwest::Client::new())
    }

    /// Create a new registry given a string URL.
    pub fn new_from_string(url: &str) -> Result<Self, RegistryError> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// Connect to the published Synthetix deployment registry.
    pub fn published() -> Self {
        Self::new_from_string(DEFAULT_REGISTRY_URL).expect("published registry URL invalid")
    }

    /// Get the base URL.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Get the client used to send requests.
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Get the URL of the document for `network`.
    pub fn document_url(&self, network: &str) -> Result<Url, RegistryError> {
        self.url.join(&format!("{network}/{DEPLOYMENT_FILE}")).map_err(Into::into)
    }

    async fn fetch(&self, network: &str) -> Result<DeploymentFile, RegistryError> {
        let url = self.document_url(network)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| warn!(%e, "Failed to reach address registry"))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::UnknownNetwork(network.to_owned()));
        }

        response
            .error_for_status()?
            .json::<DeploymentFile>()
            .await
            .inspect_err(|e| warn!(%e, "Failed to parse registry document"))
            .map_err(Into::into)
    }
}

impl AddressRegistry for HttpRegistry {
    #[instrument(skip(self))]
    async fn address_of(&self, network: &str, contract: &str) -> Result<Address, RegistryError> {
        self.fetch(network).await?.address_of(network, contract)
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_urls() {
        let registry = HttpRegistry::published();
        assert_eq!(
            registry.document_url("ropsten").unwrap().as_str(),
            "https://unpkg.com/synthetix/publish/deployed/ropsten/deployment.json"
        );

        let registry =
            HttpRegistry::new_from_string("https://mirror.example/synthetix/deployed").unwrap();
        assert_eq!(registry.url().as_str(), "https://mirror.example/synthetix/deployed/");
        assert_eq!(
            registry.document_url("mainnet").unwrap().as_str(),
            "https://mirror.example/synthetix/deployed/mainnet/deployment.json"
        );
    }

    #[test]
    fn invalid_base_url() {
        assert!(matches!(HttpRegistry::new_from_string("not a url"), Err(RegistryError::Url(_))));
    }
}
