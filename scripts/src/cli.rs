//! Definitions of CLI arguments for the deploy script

use std::path::PathBuf;

use alloy::primitives::{Address, U256};
use clap::Parser;

use crate::{
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DAO_FUNDING_VALUE, DEFAULT_RPC_URL,
        NUM_DEPLOY_CONFIRMATIONS,
    },
    types::DaoDeployConfig,
    utils::parse_value,
};

/// Deploy the FakeNFTMarketplace and CryptoDevsDAO contracts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Address of the CryptoDevs NFT contract the DAO is gated on
    #[arg(long, env = "CRYPTO_DEVS_NFT_CONTRACT_ADDRESS")]
    pub nft_contract: Address,

    /// Amount of ether sent to the DAO constructor, e.g. `0.005`
    #[arg(
        long,
        env = "DAO_FUNDING_VALUE",
        default_value = DEFAULT_DAO_FUNDING_VALUE,
        value_parser = parse_value
    )]
    pub value: U256,

    /// Root of the Hardhat compilation artifacts
    #[arg(long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Number of block confirmations to wait for on each deployment
    #[arg(long, default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: u64,

    /// Path to a JSON file in which to record the deployed addresses
    #[arg(long)]
    pub deployments_path: Option<PathBuf>,
}

impl Cli {
    /// Parse the CLI arguments from the process
    ///
    /// Help and version requests are printed and exit successfully as usual.
    /// Any other parse error is written to stderr and returned as exit status
    /// `1`, the same status as any other failed run.
    pub fn parse_or_exit_status() -> Result<Self, u8> {
        Self::try_parse().map_err(parse_error_status)
    }

    /// The deployment configuration carried by these arguments
    pub fn deploy_config(&self) -> DaoDeployConfig {
        DaoDeployConfig {
            nft_contract: self.nft_contract,
            value: self.value,
        }
    }
}

/// Handle a clap error, returning the exit status for a configuration failure
fn parse_error_status(e: clap::Error) -> u8 {
    if !e.use_stderr() {
        e.exit();
    }

    let _ = e.print();
    1
}
