use crate::ArtifactError;
use alloy::{
    primitives::{Address, Bytes, B256},
    sol_types::SolValue,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Path of the artifact for `contract` inside `build_dir`.
pub fn artifact_path(build_dir: &Path, contract: &str) -> PathBuf {
    build_dir.join(format!("{contract}.json"))
}

/// True if the compiler `version` recorded in an artifact satisfies the
/// `pin`. Build metadata after the pinned version is ignored, so
/// `v0.5.15+commit.6a57276f` satisfies `0.5.15` but `0.5.150` does not.
pub fn compiler_matches(pin: &str, version: &str) -> bool {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    match version.strip_prefix(pin) {
        Some(rest) => rest.is_empty() || rest.starts_with('+') || rest.starts_with('-'),
        None => false,
    }
}

/// Compiler recorded in an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerInfo {
    /// Compiler name, e.g. `solc`.
    pub name: String,
    /// Full compiler version.
    pub version: String,
}

/// Where an artifact's contract is deployed on one network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    /// Deployed address.
    pub address: Address,
    /// Creation transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    /// Fields written by other tools, e.g. `events` and `links`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A compiled contract artifact, as read by the client application.
///
/// Fields this crate does not interpret are kept verbatim so that rewriting
/// the artifact only touches `networks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Contract name.
    contract_name: String,
    /// Contract ABI.
    #[serde(default)]
    abi: Value,
    /// Creation bytecode, without constructor arguments.
    bytecode: Bytes,
    /// Compiler that produced the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    compiler: Option<CompilerInfo>,
    /// Deployments, keyed by network id.
    #[serde(default)]
    networks: BTreeMap<String, NetworkRecord>,
    /// All other fields.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Artifact {
    /// Parse an artifact from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let json = fs::read_to_string(path)
            .map_err(|source| ArtifactError::Io { path: path.to_owned(), source })?;
        Self::from_json(&json).map_err(|source| ArtifactError::Json { path: path.to_owned(), source })
    }

    /// Write the artifact to disk.
    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|source| ArtifactError::Json { path: path.to_owned(), source })?;
        fs::write(path, json).map_err(|source| ArtifactError::Io { path: path.to_owned(), source })
    }

    /// Get the contract name.
    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    /// Get the ABI.
    pub const fn abi(&self) -> &Value {
        &self.abi
    }

    /// Get the creation bytecode.
    pub const fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Get the recorded compiler.
    pub const fn compiler(&self) -> Option<&CompilerInfo> {
        self.compiler.as_ref()
    }

    /// Get the deployment recorded for `network_id`.
    pub fn network(&self, network_id: u64) -> Option<&NetworkRecord> {
        self.networks.get(&network_id.to_string())
    }

    /// Check that the artifact is deployable and was built by the pinned
    /// compiler.
    pub fn check(&self, solc_version: &str) -> Result<(), ArtifactError> {
        if self.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(self.contract_name.clone()));
        }
        let compiler = self
            .compiler
            .as_ref()
            .ok_or_else(|| ArtifactError::MissingCompiler(self.contract_name.clone()))?;
        if !compiler_matches(solc_version, &compiler.version) {
            return Err(ArtifactError::CompilerMismatch {
                expected: solc_version.to_owned(),
                found: compiler.version.clone(),
            });
        }
        Ok(())
    }

    /// Creation code for a contract whose constructor takes a single
    /// address: the bytecode followed by the ABI-encoded argument.
    pub fn creation_code(&self, constructor_arg: Address) -> Bytes {
        [self.bytecode.as_ref(), constructor_arg.abi_encode().as_slice()].concat().into()
    }

    /// Record a deployment on `network_id`, keeping any extra fields of a
    /// previous record.
    pub fn record_deployment(&mut self, network_id: u64, address: Address, transaction_hash: B256) {
        let record = self.networks.entry(network_id.to_string()).or_insert_with(|| NetworkRecord {
            address,
            transaction_hash: None,
            extra: Map::new(),
        });
        record.address = address;
        record.transaction_hash = Some(transaction_hash);
    }
}
