use crate::RegistryError;
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A published Synthetix deployment document, one per network.
///
/// Only `targets` is read. Other top-level sections (sources, ABIs) are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentFile {
    /// Deployed contracts, keyed by registry name.
    #[serde(default)]
    pub targets: BTreeMap<String, Target>,
}

/// A deployed contract in a [`DeploymentFile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Registry name of the contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Deployed address, as a hex string.
    pub address: String,
    /// Source contract the target was compiled from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Block explorer link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Deployment time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Network the target was deployed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl DeploymentFile {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Get the address of `contract`. `network` is only used in errors.
    pub fn address_of(&self, network: &str, contract: &str) -> Result<Address, RegistryError> {
        let target = self.targets.get(contract).ok_or_else(|| RegistryError::UnknownContract {
            network: network.to_owned(),
            contract: contract.to_owned(),
        })?;
        target.address.trim().parse().map_err(|_| RegistryError::InvalidAddress {
            contract: contract.to_owned(),
            address: target.address.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const ROPSTEN: &str = r#"{
        "targets": {
            "Synthetix": {
                "name": "Synthetix",
                "address": "0xABCDef0123456789aBCdEF0123456789AbcD1234",
                "source": "Synthetix",
                "link": "https://ropsten.etherscan.io/address/0xABCDef0123456789aBCdEF0123456789AbcD1234",
                "timestamp": "2020-01-08T00:00:00.000Z",
                "txn": "",
                "network": "ropsten"
            },
            "ProxySynthetix": {
                "address": "0x1111111111111111111111111111111111111111"
            },
            "Broken": {
                "address": "0x1234"
            }
        },
        "sources": {
            "Synthetix": { "bytecode": "0x", "abi": [] }
        }
    }"#;

    #[test]
    fn reads_target_addresses() {
        let doc = DeploymentFile::from_json(ROPSTEN).unwrap();
        assert_eq!(
            doc.address_of("ropsten", "Synthetix").unwrap(),
            address!("0xabcdef0123456789abcdef0123456789abcd1234")
        );
        assert_eq!(
            doc.address_of("ropsten", "ProxySynthetix").unwrap(),
            Address::repeat_byte(0x11)
        );
        assert_eq!(doc.targets["Synthetix"].network.as_deref(), Some("ropsten"));
    }

    #[test]
    fn missing_contract() {
        let doc = DeploymentFile::from_json(ROPSTEN).unwrap();
        let err = doc.address_of("ropsten", "Exchanger").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownContract { ref contract, .. } if contract == "Exchanger"));
    }

    #[test]
    fn malformed_address() {
        let doc = DeploymentFile::from_json(ROPSTEN).unwrap();
        let err = doc.address_of("ropsten", "Broken").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidAddress { .. }));
    }

    #[test]
    fn empty_and_invalid_documents() {
        let doc = DeploymentFile::from_json("{}").unwrap();
        assert!(doc.targets.is_empty());
        assert!(matches!(DeploymentFile::from_json("not json"), Err(RegistryError::Json(_))));
    }
}
