//! SynthRebalancer deployment driver.
//!
//! Selects a network from the deployment config, resolves the Synthetix
//! address with an [`AddressResolver`], and deploys the compiled
//! SynthRebalancer artifact with that address as its constructor argument.
//!
//! [`AddressResolver`]: rebalancer_registry::AddressResolver

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

mod artifact;
pub use artifact::{artifact_path, compiler_matches, Artifact, CompilerInfo, NetworkRecord};

mod deployer;
pub use deployer::{DeployReceipt, Deployer};

mod driver;
pub use driver::{prepare, run, Deployment, Prepared};

mod error;
pub use error::{ArtifactError, DeployError};

mod provider;
pub use provider::{connect, Connected};
