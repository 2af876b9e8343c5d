//! Constants for the local development chain.

use crate::{Connection, NetworkConstants, NetworkId};

/// Name of the local development network.
pub const NAME: &str = "develop";
/// Host of the local JSON-RPC node.
pub const HOST: &str = "127.0.0.1";
/// Port of the local JSON-RPC node.
pub const PORT: u16 = 8545;
/// The development chain accepts whatever id the node reports.
pub const NETWORK_ID: NetworkId = NetworkId::Any;

/// Connection parameters for the development chain.
pub const CONNECTION: Connection = Connection::Local { host: HOST, port: PORT };

/// Network constants for the development chain.
pub const DEVELOP: NetworkConstants = NetworkConstants::new(NAME, CONNECTION, NETWORK_ID);
