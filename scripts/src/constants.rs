//! Constants used in the deploy scripts

/// The name of the mock NFT marketplace contract, deployed first
pub const MARKETPLACE_CONTRACT_NAME: &str = "FakeNFTMarketplace";

/// The name of the DAO contract, deployed against the marketplace
pub const DAO_CONTRACT_NAME: &str = "CryptoDevsDAO";

/// The default RPC URL, a local Hardhat or Anvil node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default amount of ether, in decimal form, sent to the DAO constructor
pub const DEFAULT_DAO_FUNDING_VALUE: &str = "0.005";

/// The default root of the Hardhat compilation artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The number of confirmations to wait for on each deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The extension of a Hardhat artifact file
pub const ARTIFACT_EXTENSION: &str = "json";
