//! Types shared by the SynthRebalancer registry client and deployment driver.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod config;
pub use config::{
    env_utils, ConfigError, DeployConfig, Mnemonic, NetworkProfile, RegistrySource, Secrets,
    Signing, ETH_DEV_MNEMONIC, FORK_RPC_URL, INFURA_PROJECT_ID, REBALANCER_BUILD_DIR,
    REBALANCER_LOG_COLORS, REBALANCER_REGISTRY,
};

mod network;
pub use network::NetworkIdentifier;
