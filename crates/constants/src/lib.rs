//! SynthRebalancer deployment constants.
//!
//! This crate contains the declarative side of a SynthRebalancer deployment:
//! the table of known networks and how to reach them, the pinned compiler
//! version, the artifact output directory, and the names used when querying
//! the Synthetix address registry.
//!

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
#![cfg_attr(docsrs, feature(doc_cfg))]

mod networks;
pub use networks::{develop, ropsten};

mod types;
pub use types::{
    infura_url, Connection, KnownNetworks, NetworkConstants, NetworkId, ParseNetworkError,
};

use alloy::primitives::Address;

/// Registry name of the Synthetix core contract.
pub const SYNTHETIX: &str = "Synthetix";

/// Name of the contract deployed by this workspace.
pub const REBALANCER: &str = "SynthRebalancer";

/// Address injected into the constructor when the Synthetix address cannot
/// be resolved.
pub const SENTINEL_ADDRESS: Address = Address::ZERO;

/// Suffix marking a local fork of a public network.
pub const FORK_SUFFIX: &str = "-fork";

/// Compiler version every contract artifact must be built with.
pub const SOLC_VERSION: &str = "0.5.15";

/// Directory, relative to the project root, holding compiled artifacts. The
/// client application reads deployed addresses from here.
pub const CONTRACTS_BUILD_DIRECTORY: &str = "client/src/contracts";

/// Whether log output is colored unless overridden.
pub const USE_COLORS: bool = false;

/// Endpoint of the local node serving forked networks.
pub const DEFAULT_FORK_RPC_URL: &str = "http://127.0.0.1:8545";

/// Base URL of the published Synthetix deployment registry. Each network is
/// served as `<base>/<network>/deployment.json`.
pub const DEFAULT_REGISTRY_URL: &str = "https://unpkg.com/synthetix/publish/deployed/";

/// File name of a network's document inside the deployment registry.
pub const DEPLOYMENT_FILE: &str = "deployment.json";
