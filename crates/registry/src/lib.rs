//! Synthetix address resolution.
//!
//! The [`AddressResolver`] turns a deployment network name into the address
//! injected into the SynthRebalancer constructor. It queries an
//! [`AddressRegistry`] for the Synthetix core contract and substitutes the
//! all-zero sentinel address when the lookup fails for any reason, so a
//! deployment is never blocked by an unresolved address.
//!
//! ```no_run
//! # async fn f() {
//! use rebalancer_registry::{AddressResolver, HttpRegistry};
//!
//! let resolver = AddressResolver::new(HttpRegistry::published());
//! let synthetix = resolver.resolve(&"ropsten-fork".into()).await;
//! # let _ = synthetix;
//! # }
//! ```

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

mod deployment;
pub use deployment::{DeploymentFile, Target};

mod error;
pub use error::RegistryError;

mod impls;
pub use impls::{DeploymentDirRegistry, HttpRegistry, SourceRegistry, StaticRegistry};

mod resolver;
pub use resolver::{AddressResolver, Resolution, UnresolvedReason};

mod traits;
pub use traits::AddressRegistry;

/// Registries for exercising the resolver's fallback paths.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
