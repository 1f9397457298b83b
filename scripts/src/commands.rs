//! Implementation of the DAO deploy script

use std::io::Write;

use alloy::{dyn_abi::DynSolValue, primitives::Address};
use tracing::info;

use crate::{
    constants::{DAO_CONTRACT_NAME, MARKETPLACE_CONTRACT_NAME},
    deployer::{ContractFactory, DeploymentProvider, PendingDeployment},
    errors::ScriptError,
    types::{DaoDeployConfig, DeployOptions, DeployedContracts},
};

/// Deploy the `FakeNFTMarketplace` contract, then the `CryptoDevsDAO`
/// contract pointed at it, writing one line per confirmed deployment to `out`.
///
/// The DAO is only submitted once the marketplace deployment is confirmed.
/// Any failure aborts the run; contracts already deployed stay on-chain.
pub async fn deploy_dao<P: DeploymentProvider>(
    provider: &P,
    config: &DaoDeployConfig,
    out: &mut impl Write,
) -> Result<DeployedContracts, ScriptError> {
    let marketplace = deploy_contract(
        provider,
        MARKETPLACE_CONTRACT_NAME,
        vec![],
        DeployOptions::default(),
    )
    .await?;
    report_deployment(out, MARKETPLACE_CONTRACT_NAME, marketplace)?;

    let dao = deploy_contract(
        provider,
        DAO_CONTRACT_NAME,
        vec![
            DynSolValue::Address(marketplace),
            DynSolValue::Address(config.nft_contract),
        ],
        DeployOptions::with_value(config.value),
    )
    .await?;
    report_deployment(out, DAO_CONTRACT_NAME, dao)?;

    Ok(DeployedContracts { marketplace, dao })
}

/// Deploy a single contract and wait for it to be confirmed
async fn deploy_contract<P: DeploymentProvider>(
    provider: &P,
    name: &str,
    args: Vec<DynSolValue>,
    opts: DeployOptions,
) -> Result<Address, ScriptError> {
    info!("deploying {} with value {} wei", name, opts.value);

    let factory = provider.get_factory(name)?;
    let address = factory.deploy(args, opts).await?.deployed().await?;

    info!("{} confirmed", name);
    Ok(address)
}

/// Write the `<name> deployed at <address>` line for a deployed contract
fn report_deployment(
    out: &mut impl Write,
    name: &str,
    address: Address,
) -> Result<(), ScriptError> {
    writeln!(out, "{} deployed at {}", name, address)
        .map_err(|e| ScriptError::Output(e.to_string()))
}

/// Map the result of a run to a process exit status, writing any error to `err`
pub fn report<T>(result: Result<T, ScriptError>, err: &mut impl Write) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            1
        }
    }
}
