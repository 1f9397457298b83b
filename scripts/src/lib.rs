//! Scripts for deploying the CryptoDevs DAO contracts.

#![deny(missing_docs)]

pub mod artifacts;
pub mod chain;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod types;
pub mod utils;
