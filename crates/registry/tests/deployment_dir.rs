//! Resolution against an on-disk deployment directory.
use alloy::primitives::{address, Address};
use rebalancer_registry::{
    AddressRegistry, AddressResolver, DeploymentDirRegistry, RegistryError, SourceRegistry,
    UnresolvedReason,
};
use rebalancer_types::RegistrySource;
use std::{fs, path::Path};

const SYNTHETIX: Address = address!("0xabcd0000000000000000000000000000000a1234");

fn write_deployment(root: &Path, network: &str, json: &str) {
    let dir = root.join(network);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("deployment.json"), json).unwrap();
}

fn registry_dir() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    write_deployment(
        root.path(),
        "ropsten",
        r#"{ "targets": { "Synthetix": {
            "name": "Synthetix",
            "address": "0xABCD0000000000000000000000000000000A1234",
            "network": "ropsten"
        } } }"#,
    );
    write_deployment(root.path(), "kovan", r#"{ "targets": {} }"#);
    write_deployment(root.path(), "rinkeby", "<html>502 Bad Gateway</html>");
    root
}

#[tokio::test]
async fn ropsten_and_its_fork_resolve_to_registry_address() {
    let root = registry_dir();
    let resolver = AddressResolver::new(DeploymentDirRegistry::new(root.path()));

    assert_eq!(resolver.resolve(&"ropsten".into()).await, SYNTHETIX);
    assert_eq!(resolver.resolve(&"ropsten-fork".into()).await, SYNTHETIX);
}

#[tokio::test]
async fn develop_resolves_to_sentinel() {
    let root = registry_dir();
    let resolver = AddressResolver::new(DeploymentDirRegistry::new(root.path()));

    let resolution = resolver.lookup(&"develop".into()).await;
    assert_eq!(resolution.address(), Address::ZERO);
    assert!(matches!(
        resolution.reason(),
        Some(UnresolvedReason::Registry(RegistryError::UnknownNetwork(_)))
    ));
}

#[tokio::test]
async fn missing_target_and_corrupt_documents_resolve_to_sentinel() {
    let root = registry_dir();
    let registry = DeploymentDirRegistry::new(root.path());

    assert!(matches!(
        registry.address_of("kovan", "Synthetix").await,
        Err(RegistryError::UnknownContract { .. })
    ));
    assert!(matches!(registry.address_of("rinkeby", "Synthetix").await, Err(RegistryError::Json(_))));

    let resolver = AddressResolver::new(registry);
    assert_eq!(resolver.resolve(&"kovan".into()).await, Address::ZERO);
    assert_eq!(resolver.resolve(&"rinkeby-fork".into()).await, Address::ZERO);
}

#[tokio::test]
async fn missing_root_resolves_to_sentinel() {
    let root = tempfile::tempdir().unwrap();
    let resolver = AddressResolver::new(DeploymentDirRegistry::new(root.path().join("absent")));
    assert_eq!(resolver.resolve(&"ropsten".into()).await, Address::ZERO);
}

#[tokio::test]
async fn source_registry_from_config() {
    let root = registry_dir();
    let source = RegistrySource::Dir(root.path().to_path_buf());
    let resolver = AddressResolver::new(SourceRegistry::from(&source));
    assert_eq!(resolver.resolve(&" Ropsten-Fork ".into()).await, SYNTHETIX);
}
