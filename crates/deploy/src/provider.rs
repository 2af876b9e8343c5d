use crate::DeployError;
use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::{coins_bip39::English, MnemonicBuilder},
};
use rebalancer_constants::NetworkId;
use rebalancer_types::{NetworkProfile, Signing};
use tracing::{info, instrument};

/// A provider connected to the selected network, and the account that
/// deployments are sent from.
#[derive(Clone)]
pub struct Connected {
    provider: DynProvider,
    from: Address,
    network_id: u64,
}

impl core::fmt::Debug for Connected {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Connected")
            .field("from", &self.from)
            .field("network_id", &self.network_id)
            .finish_non_exhaustive()
    }
}

impl Connected {
    /// Check `provider` against the accepted network id.
    ///
    /// With no `from`, deployments are sent from the node's first unlocked
    /// account.
    pub async fn establish(
        provider: DynProvider,
        from: Option<Address>,
        expected: NetworkId,
    ) -> Result<Self, DeployError> {
        let from = match from {
            Some(from) => from,
            None => provider.get_accounts().await?.first().copied().ok_or(DeployError::NoAccounts)?,
        };

        let network_id = provider.get_net_version().await?;
        if !expected.matches(network_id) {
            return Err(DeployError::NetworkIdMismatch { expected, found: network_id });
        }

        info!(%from, network_id, "connected");
        Ok(Self { provider, from, network_id })
    }

    /// Get the provider.
    pub const fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Get the deploying account.
    pub const fn from(&self) -> Address {
        self.from
    }

    /// Get the network id reported by the node.
    pub const fn network_id(&self) -> u64 {
        self.network_id
    }
}

/// Connect to the network described by `profile`.
///
/// Unlocked profiles deploy from the node's first account. Mnemonic profiles
/// sign locally with the first account of the HD wallet
/// (`m/44'/60'/0'/0/0`). The node's network id must satisfy the profile.
/// RPC errors are redacted with [`DeployError::redact`].
#[instrument(skip_all, fields(network = profile.name(), endpoint = profile.rpc_endpoint()))]
pub async fn connect(profile: &NetworkProfile) -> Result<Connected, DeployError> {
    let url = profile.rpc_url().clone();

    let (provider, from) = match profile.signing() {
        Signing::Unlocked => (ProviderBuilder::new().connect_http(url).erased(), None),
        Signing::Mnemonic(mnemonic) => {
            let signer =
                MnemonicBuilder::<English>::default().phrase(mnemonic.expose()).index(0)?.build()?;
            let from = signer.address();
            let provider = ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .connect_http(url)
                .erased();
            (provider, Some(from))
        }
    };

    Connected::establish(provider, from, profile.network_id())
        .await
        .map_err(|err| err.redact(profile))
}
