use crate::{AddressRegistry, RegistryError};
use alloy::primitives::Address;
use std::collections::BTreeMap;

/// An in-memory registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRegistry {
    /// Addresses keyed by network, then contract.
    entries: BTreeMap<String, BTreeMap<String, Address>>,
}

impl StaticRegistry {
    /// Add an entry, replacing any previous address for the pair.
    pub fn insert(
        &mut self,
        network: impl Into<String>,
        contract: impl Into<String>,
        address: Address,
    ) -> Option<Address> {
        self.entries.entry(network.into()).or_default().insert(contract.into(), address)
    }

    /// Builder-style [`StaticRegistry::insert`].
    pub fn with_address(
        mut self,
        network: impl Into<String>,
        contract: impl Into<String>,
        address: Address,
    ) -> Self {
        self.insert(network, contract, address);
        self
    }

    fn get(&self, network: &str, contract: &str) -> Result<Address, RegistryError> {
        let targets = self
            .entries
            .get(network)
            .ok_or_else(|| RegistryError::UnknownNetwork(network.to_owned()))?;
        targets.get(contract).copied().ok_or_else(|| RegistryError::UnknownContract {
            network: network.to_owned(),
            contract: contract.to_owned(),
        })
    }
}

impl AddressRegistry for StaticRegistry {
    async fn address_of(&self, network: &str, contract: &str) -> Result<Address, RegistryError> {
        self.get(network, contract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors() {
        let registry = StaticRegistry::default().with_address(
            "ropsten",
            "Synthetix",
            Address::repeat_byte(1),
        );
        assert_eq!(registry.get("ropsten", "Synthetix").unwrap(), Address::repeat_byte(1));
        assert!(matches!(registry.get("kovan", "Synthetix"), Err(RegistryError::UnknownNetwork(_))));
        assert!(matches!(
            registry.get("ropsten", "Exchanger"),
            Err(RegistryError::UnknownContract { .. })
        ));
    }

    #[test]
    fn insert_replaces() {
        let mut registry = StaticRegistry::default();
        assert_eq!(registry.insert("ropsten", "Synthetix", Address::repeat_byte(1)), None);
        assert_eq!(
            registry.insert("ropsten", "Synthetix", Address::repeat_byte(2)),
            Some(Address::repeat_byte(1))
        );
    }
}
