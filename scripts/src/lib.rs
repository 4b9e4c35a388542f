//! Scripts for deploying the marketplace, NFT minting, and auction contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
mod commands;
pub mod constants;
pub mod deployer;
pub mod deployments;
pub mod errors;
pub mod plan;
pub mod runner;
pub mod types;
pub mod utils;
