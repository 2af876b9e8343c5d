mod error;
pub use error::ConfigError;

pub mod env_utils;

mod profile;
pub use profile::{NetworkProfile, Signing};

mod secrets;
pub use secrets::{Mnemonic, Secrets, ETH_DEV_MNEMONIC, INFURA_PROJECT_ID};

mod source;
pub use source::RegistrySource;

use crate::NetworkIdentifier;
use rebalancer_constants::{
    infura_url, Connection, KnownNetworks, NetworkConstants, CONTRACTS_BUILD_DIRECTORY,
    DEFAULT_FORK_RPC_URL, FORK_SUFFIX, SOLC_VERSION, USE_COLORS,
};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable overriding the artifact build directory.
pub const REBALANCER_BUILD_DIR: &str = "REBALANCER_BUILD_DIR";
/// Environment variable selecting the address registry source.
pub const REBALANCER_REGISTRY: &str = "REBALANCER_REGISTRY";
/// Environment variable toggling colored log output.
pub const REBALANCER_LOG_COLORS: &str = "REBALANCER_LOG_COLORS";
/// Environment variable overriding the local fork endpoint.
pub const FORK_RPC_URL: &str = "FORK_RPC_URL";

/// Deployment configuration.
///
/// Built once at startup, then read-only. The `with_*` methods consume the
/// config so that overrides can only be applied while it is being built.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Network table.
    networks: Vec<NetworkConstants>,
    /// Compiler version artifacts must be built with.
    solc_version: &'static str,
    /// Directory holding compiled artifacts.
    build_dir: PathBuf,
    /// Whether log output is colored.
    use_colors: bool,
    /// Endpoint of the node serving forked networks.
    fork_rpc_url: Url,
    /// Where the address registry is read from.
    registry: RegistrySource,
    /// Secrets sourced from the environment.
    secrets: Secrets,
}

impl DeployConfig {
    /// Create a config with the default network table and settings.
    pub fn new(secrets: Secrets) -> Self {
        Self {
            networks: KnownNetworks::ALL.iter().map(|n| n.constants()).collect(),
            solc_version: SOLC_VERSION,
            build_dir: PathBuf::from(CONTRACTS_BUILD_DIRECTORY),
            use_colors: USE_COLORS,
            fork_rpc_url: Url::parse(DEFAULT_FORK_RPC_URL).expect("default fork URL is valid"),
            registry: RegistrySource::default(),
            secrets,
        }
    }

    /// Load the config from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(Secrets::from_env());
        if let Some(dir) = env_utils::load_path_opt(REBALANCER_BUILD_DIR) {
            config.build_dir = dir;
        }
        if let Some(source) = env_utils::load_string_opt(REBALANCER_REGISTRY) {
            config.registry = source.parse()?;
        }
        if let Some(colors) = env_utils::load_bool_opt(REBALANCER_LOG_COLORS)? {
            config.use_colors = colors;
        }
        if let Some(url) = env_utils::load_url_opt(FORK_RPC_URL)? {
            config.fork_rpc_url = url;
        }
        Ok(config)
    }

    /// Override the build directory.
    pub fn with_build_dir(mut self, build_dir: impl Into<PathBuf>) -> Self {
        self.build_dir = build_dir.into();
        self
    }

    /// Override the registry source.
    pub fn with_registry(mut self, registry: RegistrySource) -> Self {
        self.registry = registry;
        self
    }

    /// Override the fork endpoint.
    pub fn with_fork_rpc_url(mut self, url: Url) -> Self {
        self.fork_rpc_url = url;
        self
    }

    /// Get the network table.
    pub fn networks(&self) -> &[NetworkConstants] {
        &self.networks
    }

    /// Get the pinned compiler version.
    pub const fn solc_version(&self) -> &'static str {
        self.solc_version
    }

    /// Get the build directory.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// True if log output should be colored.
    pub const fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Get the fork endpoint.
    pub const fn fork_rpc_url(&self) -> &Url {
        &self.fork_rpc_url
    }

    /// Get the registry source.
    pub const fn registry(&self) -> &RegistrySource {
        &self.registry
    }

    /// Get the secrets.
    pub const fn secrets(&self) -> &Secrets {
        &self.secrets
    }

    /// Get the table entry named `name`.
    pub fn entry(&self, name: &str) -> Option<&NetworkConstants> {
        self.networks.iter().find(|n| n.name() == name)
    }

    /// Select the profile for `network`.
    ///
    /// Table entries are matched by canonical name. `<entry>-fork` selects a
    /// fork profile for that entry. Credentialed entries fail here if their
    /// secrets are missing.
    pub fn profile(&self, network: &NetworkIdentifier) -> Result<NetworkProfile, ConfigError> {
        let name = network.canonical();
        if let Some(entry) = self.entry(&name) {
            return self.entry_profile(entry);
        }
        if let Some(entry) = name.strip_suffix(FORK_SUFFIX).and_then(|base| self.entry(base)) {
            return Ok(NetworkProfile::fork(name.clone(), entry.name(), self.fork_rpc_url.clone()));
        }
        Err(ConfigError::UnknownNetwork(name))
    }

    fn entry_profile(&self, entry: &NetworkConstants) -> Result<NetworkProfile, ConfigError> {
        let name = entry.name();
        match entry.connection() {
            Connection::Local { host, port } => {
                let url = Url::parse(&format!("http://{host}:{port}"))?;
                Ok(NetworkProfile::new(name, url, entry.network_id(), Signing::Unlocked))
            }
            Connection::Infura { subdomain } => {
                let project_id = self.secrets.require_infura_project_id(name)?;
                let mnemonic = self.secrets.require_mnemonic(name)?.clone();
                let url = Url::parse(&infura_url(subdomain, project_id))?;
                Ok(NetworkProfile::new(name, url, entry.network_id(), Signing::Mnemonic(mnemonic)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rebalancer_constants::NetworkId;

    fn credentialed() -> DeployConfig {
        DeployConfig::new(Secrets::new(
            Some("test test test test test test test test test test test junk".to_owned()),
            Some("abc123".to_owned()),
        ))
    }

    #[test]
    fn defaults() {
        let config = DeployConfig::new(Secrets::default());
        assert_eq!(config.solc_version(), "0.5.15");
        assert_eq!(config.build_dir(), Path::new("client/src/contracts"));
        assert!(!config.use_colors());
        assert_eq!(config.networks().len(), 2);
        assert_eq!(config.fork_rpc_url().as_str(), "http://127.0.0.1:8545/");
    }

    #[test]
    fn develop_profile() {
        let config = DeployConfig::new(Secrets::default());
        let profile = config.profile(&"develop".into()).unwrap();
        assert_eq!(profile.rpc_url().as_str(), "http://127.0.0.1:8545/");
        assert_eq!(profile.network_id(), NetworkId::Any);
        assert_eq!(profile.signing(), &Signing::Unlocked);
        assert_eq!(profile.fork_of(), None);
    }

    #[test]
    fn ropsten_profile() {
        let profile = credentialed().profile(&"Ropsten".into()).unwrap();
        assert_eq!(profile.name(), "ropsten");
        assert_eq!(profile.rpc_url().as_str(), "https://ropsten.infura.io/v3/abc123");
        assert_eq!(profile.network_id(), NetworkId::Exact(3));
        assert!(matches!(profile.signing(), Signing::Mnemonic(_)));
        assert!(!format!("{profile:?}").contains("abc123"));
    }

    #[test]
    fn ropsten_without_secrets_fails_fast() {
        let config = DeployConfig::new(Secrets::default());
        let err = config.profile(&"ropsten".into()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret { key: INFURA_PROJECT_ID, .. }));

        let config = DeployConfig::new(Secrets::new(None, Some("abc123".to_owned())));
        let err = config.profile(&"ropsten".into()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret { key: ETH_DEV_MNEMONIC, .. }));
    }

    #[test]
    fn fork_profile_needs_no_secrets() {
        let config = DeployConfig::new(Secrets::default())
            .with_fork_rpc_url(Url::parse("http://localhost:9545").unwrap());
        let profile = config.profile(&"ropsten-fork".into()).unwrap();
        assert_eq!(profile.name(), "ropsten-fork");
        assert_eq!(profile.fork_of(), Some("ropsten"));
        assert_eq!(profile.rpc_url().as_str(), "http://localhost:9545/");
        assert_eq!(profile.network_id(), NetworkId::Any);
        assert_eq!(profile.signing(), &Signing::Unlocked);
    }

    #[test]
    fn unknown_networks() {
        let config = DeployConfig::new(Secrets::default());
        for name in ["mainnet", "mainnet-fork", "", "-fork"] {
            assert!(
                matches!(config.profile(&name.into()), Err(ConfigError::UnknownNetwork(_))),
                "{name:?}"
            );
        }
    }

    #[test]
    fn overrides() {
        let config = DeployConfig::new(Secrets::default())
            .with_build_dir("/tmp/contracts")
            .with_registry(RegistrySource::Dir(PathBuf::from("/tmp/deployed")));
        assert_eq!(config.build_dir(), Path::new("/tmp/contracts"));
        assert_eq!(config.registry(), &RegistrySource::Dir(PathBuf::from("/tmp/deployed")));
    }

    // The only test that touches these keys; keep it that way.
    #[test]
    fn env_overrides() {
        use std::env;

        env::set_var(REBALANCER_BUILD_DIR, "/tmp/rebalancer/contracts");
        env::set_var(REBALANCER_REGISTRY, "https://mirror.example/deployed/");
        env::set_var(REBALANCER_LOG_COLORS, "true");
        env::set_var(FORK_RPC_URL, "http://localhost:9545");

        let config = DeployConfig::from_env().unwrap();
        assert_eq!(config.build_dir(), Path::new("/tmp/rebalancer/contracts"));
        assert_eq!(
            config.registry(),
            &RegistrySource::Http(Url::parse("https://mirror.example/deployed/").unwrap())
        );
        assert!(config.use_colors());
        assert_eq!(config.fork_rpc_url().as_str(), "http://localhost:9545/");

        env::set_var(REBALANCER_REGISTRY, "./synthetix/publish/deployed");
        let config = DeployConfig::from_env().unwrap();
        assert_eq!(
            config.registry(),
            &RegistrySource::Dir(PathBuf::from("./synthetix/publish/deployed"))
        );

        env::set_var(REBALANCER_LOG_COLORS, "sometimes");
        assert!(matches!(DeployConfig::from_env(), Err(ConfigError::ParseBool(_))));
        env::set_var(REBALANCER_LOG_COLORS, "false");

        env::set_var(FORK_RPC_URL, "not a url");
        assert!(matches!(DeployConfig::from_env(), Err(ConfigError::Url(_))));
        env::remove_var(FORK_RPC_URL);

        env::set_var(REBALANCER_REGISTRY, "http://");
        assert!(matches!(DeployConfig::from_env(), Err(ConfigError::Url(_))));

        for key in [REBALANCER_BUILD_DIR, REBALANCER_REGISTRY, REBALANCER_LOG_COLORS] {
            env::remove_var(key);
        }
        let config = DeployConfig::from_env().unwrap();
        assert_eq!(config.build_dir(), Path::new("client/src/contracts"));
        assert_eq!(config.registry(), &RegistrySource::default());
        assert!(!config.use_colors());
        assert_eq!(config.fork_rpc_url().as_str(), "http://127.0.0.1:8545/");
    }
}
