//! Loading of Hardhat compilation artifacts

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::{JsonAbi, StateMutability},
    primitives::{Bytes, U256},
};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// The subset of a Hardhat artifact needed to deploy a contract
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The creation bytecode
    pub bytecode: Bytes,
}

impl HardhatArtifact {
    /// Parse an artifact from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }

    /// Build the deploy code for this contract: the creation bytecode followed
    /// by the ABI-encoded constructor arguments.
    ///
    /// The arguments are type-checked against the constructor, and a non-zero
    /// `value` is rejected unless the constructor is payable.
    pub fn deploy_code(&self, args: &[DynSolValue], value: U256) -> Result<Bytes, ScriptError> {
        if self.bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no creation bytecode, is it abstract?",
                self.contract_name
            )));
        }

        let mut code = self.bytecode.to_vec();
        match &self.abi.constructor {
            Some(constructor) => {
                if !value.is_zero() && constructor.state_mutability != StateMutability::Payable {
                    return Err(ScriptError::CalldataConstruction(format!(
                        "{} constructor is not payable",
                        self.contract_name
                    )));
                }

                let encoded = constructor
                    .abi_encode_input(args)
                    .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
                code.extend(encoded);
            }
            None => {
                if !args.is_empty() {
                    return Err(ScriptError::CalldataConstruction(format!(
                        "{} has no constructor, but {} arguments were given",
                        self.contract_name,
                        args.len()
                    )));
                }
                if !value.is_zero() {
                    return Err(ScriptError::CalldataConstruction(format!(
                        "{} has no payable constructor",
                        self.contract_name
                    )));
                }
            }
        }

        Ok(code.into())
    }
}

/// Resolves contract names to artifacts under a Hardhat `artifacts` directory
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    /// The root of the artifacts tree
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load the artifact for the contract with the given name
    pub fn load(&self, name: &str) -> Result<HardhatArtifact, ScriptError> {
        let path = find_artifact(&self.root, name)?.ok_or_else(|| {
            ScriptError::ArtifactParsing(format!(
                "no artifact for {} under {}",
                name,
                self.root.display()
            ))
        })?;

        let contents =
            fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        let artifact = HardhatArtifact::from_json(&contents)?;
        if artifact.contract_name != name {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} names contract {}, expected {}",
                path.display(),
                artifact.contract_name,
                name
            )));
        }

        Ok(artifact)
    }
}

/// Recursively search `dir` for `<name>.json`, files in `dir` itself first
fn find_artifact(dir: &Path, name: &str) -> Result<Option<PathBuf>, ScriptError> {
    let file_name = format!("{name}.{ARTIFACT_EXTENSION}");
    let entries = fs::read_dir(dir).map_err(|e| {
        ScriptError::ArtifactParsing(format!("could not read {}: {}", dir.display(), e))
    })?;

    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?
            .path();

        if path.is_dir() {
            subdirs.push(path);
            continue;
        }

        if path.file_name().is_some_and(|f| f == file_name.as_str()) {
            return Ok(Some(path));
        }
    }

    // Sort for a deterministic search order across platforms
    subdirs.sort();
    for subdir in subdirs {
        if let Some(path) = find_artifact(&subdir, name)? {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;

    use super::*;

    /// A DAO-like artifact with a payable two-address constructor
    const DAO_ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "CryptoDevsDAO",
        "sourceName": "contracts/CryptoDevsDAO.sol",
        "abi": [
            {
                "type": "constructor",
                "inputs": [
                    { "name": "_nftMarketplace", "type": "address", "internalType": "address" },
                    { "name": "_cryptoDevsNFT", "type": "address", "internalType": "address" }
                ],
                "stateMutability": "payable"
            }
        ],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x6080",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;

    /// A marketplace-like artifact with no constructor
    const MARKETPLACE_ARTIFACT: &str = r#"{
        "contractName": "FakeNFTMarketplace",
        "abi": [
            {
                "type": "function",
                "name": "available",
                "inputs": [{ "name": "_tokenId", "type": "uint256", "internalType": "uint256" }],
                "outputs": [{ "name": "", "type": "bool", "internalType": "bool" }],
                "stateMutability": "view"
            }
        ],
        "bytecode": "0x60806040"
    }"#;

    /// Create an empty scratch directory for a test
    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("artifacts-test-{}", rand::random::<u64>()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_constructor_args_appended() {
        let artifact = HardhatArtifact::from_json(DAO_ARTIFACT).unwrap();
        let args = vec![
            DynSolValue::Address(Address::repeat_byte(0xaa)),
            DynSolValue::Address(Address::repeat_byte(0xbb)),
        ];

        let code = artifact.deploy_code(&args, U256::from(5)).unwrap();
        assert_eq!(code.len(), 5 + 64);
        assert_eq!(&code[..5], &[0x60u8, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(&code[5 + 12..5 + 32], Address::repeat_byte(0xaa).as_slice());
        assert_eq!(&code[5 + 44..], Address::repeat_byte(0xbb).as_slice());
    }

    #[test]
    fn test_wrong_constructor_args() {
        let artifact = HardhatArtifact::from_json(DAO_ARTIFACT).unwrap();
        let args = vec![DynSolValue::Address(Address::ZERO)];

        let res = artifact.deploy_code(&args, U256::ZERO);
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));
    }

    #[test]
    fn test_no_constructor() {
        let artifact = HardhatArtifact::from_json(MARKETPLACE_ARTIFACT).unwrap();

        let code = artifact.deploy_code(&[], U256::ZERO).unwrap();
        assert_eq!(code, artifact.bytecode);

        let res = artifact.deploy_code(&[DynSolValue::Bool(true)], U256::ZERO);
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));

        let res = artifact.deploy_code(&[], U256::from(1));
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));
    }

    #[test]
    fn test_value_to_non_payable_constructor() {
        let json = DAO_ARTIFACT.replace("\"payable\"", "\"nonpayable\"");
        let artifact = HardhatArtifact::from_json(&json).unwrap();
        let args = vec![
            DynSolValue::Address(Address::ZERO),
            DynSolValue::Address(Address::ZERO),
        ];

        assert!(artifact.deploy_code(&args, U256::ZERO).is_ok());
        let res = artifact.deploy_code(&args, U256::from(1));
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));
    }

    #[test]
    fn test_abstract_contract_rejected() {
        let json = MARKETPLACE_ARTIFACT.replace("0x60806040", "0x");
        let artifact = HardhatArtifact::from_json(&json).unwrap();

        let res = artifact.deploy_code(&[], U256::ZERO);
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }

    #[test]
    fn test_load_nested_artifact() {
        let root = scratch_dir();
        let dir = root.join("contracts").join("CryptoDevsDAO.sol");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("CryptoDevsDAO.dbg.json"), "{}").unwrap();
        fs::write(dir.join("CryptoDevsDAO.json"), DAO_ARTIFACT).unwrap();

        let artifact = ArtifactStore::new(&root).load("CryptoDevsDAO").unwrap();
        assert_eq!(artifact.contract_name, "CryptoDevsDAO");
        assert!(artifact.abi.constructor.is_some());

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_missing_artifact() {
        let root = scratch_dir();
        fs::write(root.join("FakeNFTMarketplace.json"), MARKETPLACE_ARTIFACT).unwrap();

        let res = ArtifactStore::new(&root).load("CryptoDevsDAO");
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_malformed_artifact() {
        let root = scratch_dir();
        fs::write(root.join("FakeNFTMarketplace.json"), "{ \"abi\": 3 }").unwrap();

        let res = ArtifactStore::new(&root).load("FakeNFTMarketplace");
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));

        fs::remove_dir_all(root).unwrap();
    }
}
