use crate::NetworkConstants;
use std::str::FromStr;

/// The list of known networks as a string.
const KNOWN_NETWORKS: &str = "develop, ropsten";

/// Error type for parsing a struct from a network name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNetworkError {
    /// The network name is not in the network table.
    #[error("network name {0} is not parseable. supported networks: {KNOWN_NETWORKS}")]
    NetworkNotSupported(String),
}

/// Networks present in the deployment network table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownNetworks {
    /// Local development chain.
    Develop,
    /// Ropsten testnet.
    Ropsten,
}

impl KnownNetworks {
    /// Every entry of the network table.
    pub const ALL: [Self; 2] = [Self::Develop, Self::Ropsten];

    /// Get the constants for this network.
    pub const fn constants(self) -> NetworkConstants {
        match self {
            Self::Develop => crate::develop::DEVELOP,
            Self::Ropsten => crate::ropsten::ROPSTEN,
        }
    }

    /// Get the table name of this network.
    pub const fn name(self) -> &'static str {
        self.constants().name()
    }
}

impl FromStr for KnownNetworks {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "develop" => Ok(Self::Develop),
            "ropsten" => Ok(Self::Ropsten),
            _ => Err(ParseNetworkError::NetworkNotSupported(s)),
        }
    }
}

impl core::fmt::Display for KnownNetworks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_names() {
        assert_eq!("develop".parse::<KnownNetworks>().unwrap(), KnownNetworks::Develop);
        assert_eq!(" Ropsten ".parse::<KnownNetworks>().unwrap(), KnownNetworks::Ropsten);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "mainnet".parse::<KnownNetworks>().unwrap_err();
        assert_eq!(err, ParseNetworkError::NetworkNotSupported("mainnet".to_owned()));
        assert!(err.to_string().contains(KNOWN_NETWORKS));
    }

    #[test]
    fn fork_names_are_not_table_entries() {
        assert!("ropsten-fork".parse::<KnownNetworks>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for network in KnownNetworks::ALL {
            assert_eq!(network.name().parse::<KnownNetworks>().unwrap(), network);
        }
    }
}
