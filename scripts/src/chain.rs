//! Deployment over an alloy provider, resolving contracts from Hardhat artifacts

use alloy::{
    dyn_abi::DynSolValue,
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, PendingTransactionBuilder, Provider},
    rpc::types::TransactionRequest,
};
use tracing::{debug, info};

use crate::{
    artifacts::{ArtifactStore, HardhatArtifact},
    deployer::{ContractFactory, DeploymentProvider, PendingDeployment},
    errors::ScriptError,
    types::DeployOptions,
};

/// A [`DeploymentProvider`] backed by a signing alloy client
#[derive(Clone)]
pub struct AlloyDeployer {
    /// The signing RPC client
    client: DynProvider,
    /// Where contract artifacts are looked up
    artifacts: ArtifactStore,
    /// The number of confirmations to await for each deployment
    confirmations: u64,
}

impl AlloyDeployer {
    /// Create a deployer over the given client and artifacts
    pub fn new(client: DynProvider, artifacts: ArtifactStore, confirmations: u64) -> Self {
        Self {
            client,
            artifacts,
            confirmations,
        }
    }
}

impl DeploymentProvider for AlloyDeployer {
    type Factory = AlloyContractFactory;

    fn get_factory(&self, name: &str) -> Result<Self::Factory, ScriptError> {
        let artifact = self.artifacts.load(name)?;
        debug!(
            "loaded {} artifact ({} bytes of bytecode)",
            name,
            artifact.bytecode.len()
        );

        Ok(AlloyContractFactory {
            artifact,
            client: self.client.clone(),
            confirmations: self.confirmations,
        })
    }
}

/// A factory deploying a single contract from its artifact
pub struct AlloyContractFactory {
    /// The artifact of the contract deployed by this factory
    artifact: HardhatArtifact,
    /// The signing RPC client
    client: DynProvider,
    /// The number of confirmations to await
    confirmations: u64,
}

impl ContractFactory for AlloyContractFactory {
    type Pending = AlloyPendingDeployment;

    async fn deploy(
        &self,
        args: Vec<DynSolValue>,
        opts: DeployOptions,
    ) -> Result<Self::Pending, ScriptError> {
        let code = self.artifact.deploy_code(&args, opts.value)?;
        let tx = TransactionRequest::default()
            .with_deploy_code(code)
            .with_value(opts.value);

        let pending = self
            .client
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        info!(
            "{} deployment submitted in tx {:#x}",
            self.artifact.contract_name,
            pending.tx_hash()
        );

        Ok(AlloyPendingDeployment {
            name: self.artifact.contract_name.clone(),
            pending: pending.with_required_confirmations(self.confirmations),
        })
    }
}

/// A submitted deployment transaction
pub struct AlloyPendingDeployment {
    /// The name of the contract being deployed
    name: String,
    /// The in-flight creation transaction
    pending: PendingTransactionBuilder<Ethereum>,
}

impl PendingDeployment for AlloyPendingDeployment {
    async fn deployed(self) -> Result<Address, ScriptError> {
        let receipt = self
            .pending
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        deployed_address(&self.name, &receipt)
    }
}

/// The address of the contract created by a deployment receipt, which must
/// be successful
fn deployed_address(name: &str, receipt: &impl ReceiptResponse) -> Result<Address, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "{} constructor reverted in tx {:#x}",
            name,
            receipt.transaction_hash()
        )));
    }

    receipt.contract_address().ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "no contract address in {} deployment receipt",
            name
        ))
    })
}
