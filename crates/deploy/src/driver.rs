use crate::{artifact_path, connect, Artifact, DeployError, DeployReceipt, Deployer};
use alloy::primitives::Address;
use rebalancer_constants::REBALANCER;
use rebalancer_registry::{AddressRegistry, AddressResolver, Resolution};
use rebalancer_types::{DeployConfig, NetworkIdentifier, NetworkProfile};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Everything a deployment needs before touching the network.
#[derive(Debug)]
pub struct Prepared {
    /// Selected network profile.
    pub profile: NetworkProfile,
    /// Registry lookup for the constructor argument.
    pub resolution: Resolution,
    /// The SynthRebalancer artifact.
    pub artifact: Artifact,
    /// Where the artifact was loaded from.
    pub artifact_path: PathBuf,
}

impl Prepared {
    /// Address passed to the constructor.
    pub const fn constructor_arg(&self) -> Address {
        self.resolution.address()
    }

    /// Record a completed deployment in the artifact's `networks.<id>`
    /// entry and write the artifact back to disk.
    pub fn finish(
        mut self,
        network_id: u64,
        receipt: DeployReceipt,
    ) -> Result<Deployment, DeployError> {
        self.artifact.record_deployment(network_id, receipt.address, receipt.transaction_hash);
        self.artifact.save(&self.artifact_path)?;
        info!(path = %self.artifact_path.display(), "recorded deployment in artifact");

        Ok(Deployment {
            network: self.profile.name().to_owned(),
            network_id,
            synthetix: self.constructor_arg(),
            synthetix_resolved: self.resolution.is_resolved(),
            receipt,
        })
    }
}

/// A completed SynthRebalancer deployment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Network name as selected.
    pub network: String,
    /// Network id reported by the node.
    pub network_id: u64,
    /// Synthetix address passed to the constructor.
    pub synthetix: Address,
    /// False if `synthetix` is the sentinel fallback.
    pub synthetix_resolved: bool,
    /// Creation receipt.
    #[serde(flatten)]
    pub receipt: DeployReceipt,
}

/// Select the network, resolve the constructor argument, and load the
/// artifact.
///
/// Missing secrets and unknown networks fail before the registry is queried.
/// Registry failures never fail preparation.
#[instrument(skip(config, resolver))]
pub async fn prepare<R>(
    config: &DeployConfig,
    network: &NetworkIdentifier,
    resolver: &AddressResolver<R>,
) -> Result<Prepared, DeployError>
where
    R: AddressRegistry,
{
    let profile = config.profile(network)?;
    let resolution = resolver.lookup(network).await;

    let artifact_path = artifact_path(config.build_dir(), REBALANCER);
    let artifact = Artifact::load(&artifact_path)?;
    artifact.check(config.solc_version())?;

    Ok(Prepared { profile, resolution, artifact, artifact_path })
}

/// Deploy SynthRebalancer to `network` and record the deployment in its
/// artifact.
pub async fn run<R>(
    config: &DeployConfig,
    network: &NetworkIdentifier,
    resolver: &AddressResolver<R>,
) -> Result<Deployment, DeployError>
where
    R: AddressRegistry,
{
    let prepared = prepare(config, network, resolver).await?;

    let connected = connect(&prepared.profile).await?;
    let receipt = Deployer::new(connected.provider().clone(), connected.from())
        .deploy(&prepared.artifact, prepared.constructor_arg())
        .await
        .map_err(|err| err.redact(&prepared.profile))?;

    prepared.finish(connected.network_id(), receipt)
}
