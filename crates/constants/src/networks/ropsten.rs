//! Constants for the Ropsten testnet.

use crate::{Connection, NetworkConstants, NetworkId};

/// Name of the Ropsten network.
pub const NAME: &str = "ropsten";
/// Network id reported by Ropsten nodes.
pub const NETWORK_ID: NetworkId = NetworkId::Exact(3);

/// Ropsten is reached through Infura with an HD wallet.
pub const CONNECTION: Connection = Connection::Infura { subdomain: NAME };

/// Network constants for Ropsten.
pub const ROPSTEN: NetworkConstants = NetworkConstants::new(NAME, CONNECTION, NETWORK_ID);
