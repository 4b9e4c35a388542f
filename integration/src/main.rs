//! End-to-end checks of a marketplace deployment. These assume that a devnet
//! is already running locally and that the contracts have been deployed to it.

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use clap::Parser;
use cli::{Cli, Tests};
use eyre::{bail, Result};
use scripts::deployments::DeploymentsFile;
use tests::{test_contracts_have_code, test_deploy_order, test_mint_nft_constructor_arg};
use tracing::{error, info};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        deployments_file,
        rpc_url,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let provider = DynProvider::new(ProviderBuilder::new().connect_http(Url::parse(&rpc_url)?));
    let deployments = DeploymentsFile::load(&deployments_file)?;

    let chain_id = provider.get_chain_id().await?;
    if deployments.chain_id != Some(chain_id) {
        bail!(
            "{} records chain {:?}, but the RPC node is on chain {chain_id}",
            deployments_file.display(),
            deployments.chain_id
        );
    }

    let tests = match test {
        Some(test) => vec![test],
        None => Tests::ALL.to_vec(),
    };

    let mut failures = 0;
    for test in tests {
        let res = match test {
            Tests::ContractsHaveCode => test_contracts_have_code(&provider, &deployments).await,
            Tests::DeployOrder => test_deploy_order(&deployments),
            Tests::MintNftConstructorArg => {
                test_mint_nft_constructor_arg(&provider, &deployments).await
            }
        };

        match res {
            Ok(()) => info!("{test} passed"),
            Err(e) => {
                error!("{test} failed: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} test(s) failed");
    }

    Ok(())
}
