mod chains;
pub use chains::{KnownNetworks, ParseNetworkError};

mod network;
pub use network::{infura_url, Connection, NetworkConstants, NetworkId};
