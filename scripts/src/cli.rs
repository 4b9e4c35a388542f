//! Definitions of CLI arguments and commands for deploy scripts

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, show_plan},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_DEVNET_PKEY, DEFAULT_RPC_URL,
        NUM_DEPLOY_CONFIRMATIONS,
    },
    errors::ScriptError,
};

/// Deploy the marketplace, NFT minting, and auction contracts
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer, defaults to the first Anvil account
    #[arg(short, long, env = "PKEY", default_value = DEFAULT_DEVNET_PKEY)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the file in which deployed addresses are recorded
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy every contract in the plan, in order
    Deploy(DeployArgs),
    /// Validate and print the plan without sending any transactions
    ShowPlan(ShowPlanArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        priv_key: &str,
        rpc_url: &str,
        deployments_path: &Path,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, priv_key, rpc_url, deployments_path).await,
            Command::ShowPlan(args) => show_plan(args),
        }
    }
}

/// Deploy the contracts in a plan.
///
/// Without `--plan`, deploys `MarketPlace`, then `MintNFT` with the
/// marketplace's address as its constructor argument, then `Auction`.
#[derive(Args)]
pub struct DeployArgs {
    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Path to a JSON deployment plan
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Number of confirmations to wait for after each deployment
    #[arg(long, default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: u64,
}

/// Print a deployment plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// Path to a JSON deployment plan
    #[arg(long)]
    pub plan: Option<PathBuf>,
}
