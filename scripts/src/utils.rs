//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    primitives::{utils::parse_ether, Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::{
    constants::{DAO_CONTRACT_NAME, MARKETPLACE_CONTRACT_NAME},
    errors::ScriptError,
    types::DeployedContracts,
};

/// Sets up a signing client for the given private key and RPC url,
/// checking that the node is reachable.
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let deployer_address = signer.address();

    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("deploying from {deployer_address} on chain {chain_id}");

    Ok(DynProvider::new(provider))
}

/// Parse a decimal ether amount, e.g. `0.005`, into wei
pub fn parse_value(value: &str) -> Result<U256, String> {
    parse_ether(value).map_err(|e| format!("invalid ether amount `{value}`: {e}"))
}

/// Read the deployments file as a JSON object, empty if the file doesn't exist
fn read_deployments_file(file_path: &Path) -> Result<Map<String, Value>, ScriptError> {
    if !file_path.exists() {
        return Ok(Map::new());
    }

    let contents = fs::read_to_string(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
    match serde_json::from_str(&contents) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ScriptError::ReadDeployments(format!(
            "{} is not a JSON object",
            file_path.display()
        ))),
        Err(e) => Err(ScriptError::ReadDeployments(e.to_string())),
    }
}

/// Read the address stored under `key` in the deployments file
///
/// Used by follow-up scripts that interact with an existing deployment
pub fn read_deployment(key: &str, file_path: &Path) -> Result<Address, ScriptError> {
    if !file_path.exists() {
        return Err(ScriptError::ReadDeployments(format!(
            "{} does not exist",
            file_path.display()
        )));
    }

    let deployments = read_deployments_file(file_path)?;
    let addr_str = deployments
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ScriptError::ReadDeployments(format!("{key} not found in deployments")))?;

    Address::from_str(addr_str).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Write the deployed addresses to the deployments file, creating it if
/// necessary and preserving any other entries
pub fn write_deployments(
    file_path: &Path,
    deployed: &DeployedContracts,
) -> Result<(), ScriptError> {
    let mut deployments = read_deployments_file(file_path)?;
    deployments.insert(
        MARKETPLACE_CONTRACT_NAME.to_string(),
        Value::String(deployed.marketplace.to_string()),
    );
    deployments.insert(
        DAO_CONTRACT_NAME.to_string(),
        Value::String(deployed.dao.to_string()),
    );

    let json = serde_json::to_string_pretty(&Value::Object(deployments))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, json).map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    info!("wrote deployments to {}", file_path.display());
    Ok(())
}
