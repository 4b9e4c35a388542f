//! Definition of the CLI arguments for integration tests

use std::{
    fmt::{self, Display},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use scripts::constants::{DEFAULT_DEPLOYMENTS_PATH, DEFAULT_RPC_URL};

/// CLI tool for checking a finished deployment against a running devnet node.
///
/// Assumes that `scripts deploy` has already been run against the devnet.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Test to run, runs every test if omitted
    #[arg(short, long)]
    pub(crate) test: Option<Tests>,

    /// Path to file containing contract deployment info
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub(crate) deployments_file: PathBuf,

    /// Devnet RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub(crate) rpc_url: String,
}

/// The checks that can be run
#[derive(ValueEnum, Clone, Copy)]
pub(crate) enum Tests {
    /// Every recorded address holds contract code
    ContractsHaveCode,
    /// The contracts were deployed in plan order
    DeployOrder,
    /// `MintNFT` was constructed with the marketplace's address
    MintNftConstructorArg,
}

impl Tests {
    /// Every test, in the order they run by default
    pub(crate) const ALL: [Tests; 3] = [
        Tests::ContractsHaveCode,
        Tests::DeployOrder,
        Tests::MintNftConstructorArg,
    ];
}

impl Display for Tests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tests::ContractsHaveCode => write!(f, "contracts-have-code"),
            Tests::DeployOrder => write!(f, "deploy-order"),
            Tests::MintNftConstructorArg => write!(f, "mint-nft-constructor-arg"),
        }
    }
}
