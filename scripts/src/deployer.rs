//! The capabilities the deploy scripts require of a chain connection.
//!
//! Deployment is split into three steps so that callers control ordering:
//! look up a factory by contract name, submit a creation transaction through
//! it, then await confirmation of that transaction.

use alloy::{dyn_abi::DynSolValue, primitives::Address};

use crate::{errors::ScriptError, types::DeployOptions};

/// A connection able to produce contract factories by name
pub trait DeploymentProvider {
    /// The factory type produced by this provider
    type Factory: ContractFactory;

    /// Get a factory for the contract with the given name
    fn get_factory(&self, name: &str) -> Result<Self::Factory, ScriptError>;
}

/// Constructs and submits deployment transactions for a single contract
#[allow(async_fn_in_trait)]
pub trait ContractFactory {
    /// The handle returned for a submitted deployment
    type Pending: PendingDeployment;

    /// Submit a deployment with the given constructor arguments and options
    async fn deploy(
        &self,
        args: Vec<DynSolValue>,
        opts: DeployOptions,
    ) -> Result<Self::Pending, ScriptError>;
}

/// A submitted deployment that has not yet been confirmed
#[allow(async_fn_in_trait)]
pub trait PendingDeployment {
    /// Wait until the contract is live on-chain, returning its address
    async fn deployed(self) -> Result<Address, ScriptError>;
}
