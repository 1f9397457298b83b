//! Type definitions used throughout the scripts

use alloy::primitives::{Address, U256};

/// Options attached to a deployment transaction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeployOptions {
    /// The amount of native currency, in wei, sent to the constructor
    pub value: U256,
}

impl DeployOptions {
    /// Options carrying the given value transfer
    pub fn with_value(value: U256) -> Self {
        Self { value }
    }
}

/// Configuration for a DAO deployment, read once at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaoDeployConfig {
    /// Address of the already-deployed CryptoDevs NFT contract
    pub nft_contract: Address,
    /// The amount of wei with which to fund the DAO at construction
    pub value: U256,
}

/// The addresses produced by a successful deployment run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployedContracts {
    /// The `FakeNFTMarketplace` address
    pub marketplace: Address,
    /// The `CryptoDevsDAO` address
    pub dao: Address,
}
