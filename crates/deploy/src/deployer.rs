use crate::{Artifact, DeployError};
use alloy::{
    network::{ReceiptResponse, TransactionBuilder},
    primitives::{Address, B256},
    providers::Provider,
    rpc::types::TransactionRequest,
};
use tracing::{info, instrument};

/// Outcome of a successful creation transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployReceipt {
    /// Address of the created contract.
    pub address: Address,
    /// Creation transaction hash.
    pub transaction_hash: B256,
    /// Block the transaction was included in.
    pub block_number: Option<u64>,
}

impl DeployReceipt {
    /// Check the receipt of creation transaction `transaction_hash`.
    pub fn from_receipt<R>(transaction_hash: B256, receipt: &R) -> Result<Self, DeployError>
    where
        R: ReceiptResponse,
    {
        if !receipt.status() {
            return Err(DeployError::Reverted(transaction_hash));
        }
        let address =
            receipt.contract_address().ok_or(DeployError::NoContractAddress(transaction_hash))?;
        Ok(Self { address, transaction_hash, block_number: receipt.block_number() })
    }
}

/// Sends contract creation transactions.
#[derive(Debug, Clone)]
pub struct Deployer<P> {
    provider: P,
    from: Address,
}

impl<P> Deployer<P> {
    /// Create a new deployer sending from `from`.
    pub const fn new(provider: P, from: Address) -> Self {
        Self { provider, from }
    }

    /// Get the deploying account.
    pub const fn from(&self) -> Address {
        self.from
    }
}

impl<P> Deployer<P>
where
    P: Provider,
{
    /// Deploy `artifact` with `constructor_arg` as its only constructor
    /// argument, and wait for the receipt.
    #[instrument(
        skip_all,
        fields(contract = artifact.contract_name(), constructor_arg = %constructor_arg)
    )]
    pub async fn deploy(
        &self,
        artifact: &Artifact,
        constructor_arg: Address,
    ) -> Result<DeployReceipt, DeployError> {
        let tx = TransactionRequest::default()
            .with_from(self.from)
            .with_deploy_code(artifact.creation_code(constructor_arg));

        let pending = self.provider.send_transaction(tx).await?;
        let transaction_hash = *pending.tx_hash();
        info!(%transaction_hash, "submitted creation transaction");

        let receipt = pending.get_receipt().await?;
        let receipt = DeployReceipt::from_receipt(transaction_hash, &receipt)?;

        info!(address = %receipt.address, "contract deployed");
        Ok(receipt)
    }
}
