use crate::{KnownNetworks, ParseNetworkError};
use std::str::FromStr;

/// Network id a table entry accepts from the node it connects to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(into = "String", try_from = "String")]
pub enum NetworkId {
    /// Any id is accepted. Written as `*`.
    Any,
    /// Only this id is accepted.
    Exact(u64),
}

impl NetworkId {
    /// True if a node reporting `id` satisfies this entry.
    pub const fn matches(&self, id: u64) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => *expected == id,
        }
    }
}

impl core::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Exact(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for NetworkId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "*" => Ok(Self::Any),
            s => s.parse().map(Self::Exact),
        }
    }
}

impl From<NetworkId> for String {
    fn from(id: NetworkId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NetworkId {
    type Error = std::num::ParseIntError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// How a deployment reaches its network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Connection {
    /// A plain JSON-RPC node that manages its own unlocked accounts.
    Local {
        /// Node host.
        host: &'static str,
        /// Node port.
        port: u16,
    },
    /// An Infura endpoint. Transactions are signed by an HD wallet derived
    /// from the deployer mnemonic.
    Infura {
        /// Infura subdomain, e.g. `ropsten`.
        subdomain: &'static str,
    },
}

impl Connection {
    /// True if the connection signs locally and therefore needs the
    /// deployer mnemonic and an Infura project id.
    pub const fn needs_credentials(&self) -> bool {
        matches!(self, Self::Infura { .. })
    }
}

/// Build the Infura endpoint for a network and project id.
pub fn infura_url(subdomain: &str, project_id: &str) -> String {
    format!("https://{subdomain}.infura.io/v3/{project_id}")
}

/// One entry of the network table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkConstants {
    /// Table name of the network.
    name: &'static str,
    /// Connection parameters.
    connection: Connection,
    /// Accepted network id.
    network_id: NetworkId,
}

impl core::fmt::Display for NetworkConstants {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.connection {
            Connection::Local { host, port } => {
                write!(f, "{}: {host}:{port} (network id {})", self.name, self.network_id)
            }
            Connection::Infura { subdomain } => {
                write!(f, "{}: infura {subdomain} (network id {})", self.name, self.network_id)
            }
        }
    }
}

impl NetworkConstants {
    /// Create a new network table entry.
    pub const fn new(name: &'static str, connection: Connection, network_id: NetworkId) -> Self {
        Self { name, connection, network_id }
    }

    /// Get the table name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the connection parameters.
    pub const fn connection(&self) -> Connection {
        self.connection
    }

    /// Get the accepted network id.
    pub const fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// Get the hard-coded development chain constants.
    pub const fn develop() -> Self {
        crate::develop::DEVELOP
    }

    /// Get the hard-coded Ropsten constants.
    pub const fn ropsten() -> Self {
        crate::ropsten::ROPSTEN
    }
}

impl FromStr for NetworkConstants {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network: KnownNetworks = s.parse()?;
        Ok(network.constants())
    }
}
