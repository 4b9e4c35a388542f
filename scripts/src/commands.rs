//! Implementations of the deploy script commands

use std::path::Path;

use itertools::Itertools;
use tracing::info;

use crate::{
    artifacts::ArtifactDir,
    cli::{DeployArgs, ShowPlanArgs},
    deployer::AlloyDeployer,
    deployments::DeploymentsFile,
    errors::ScriptError,
    plan::DeploymentPlan,
    runner::run_plan,
    utils::{setup_client, Client},
};

/// Deploy every contract in the plan, recording each one in the
/// deployments file as soon as it is deployed
pub async fn deploy(
    args: DeployArgs,
    priv_key: &str,
    rpc_url: &str,
    deployments_path: &Path,
) -> Result<(), ScriptError> {
    let plan = DeploymentPlan::from_file_or_default(args.plan.as_deref())?;
    let resolver = ArtifactDir::new(&args.artifacts);

    let Client {
        provider,
        deployer,
        chain_id,
    } = setup_client(priv_key, rpc_url).await?;

    let mut deployments = DeploymentsFile::load_or_default(deployments_path)?;
    deployments.bind_chain(chain_id)?;

    info!(
        "deploying {} contracts to chain {chain_id} from {deployer:#x}",
        plan.steps.len()
    );

    let deployer = AlloyDeployer::new(provider).with_confirmations(args.confirmations);
    run_plan(&plan, &resolver, &deployer, |contract| {
        deployments.record(contract.clone());
        deployments.save(deployments_path)
    })
    .await?;

    info!("deployments written to {}", deployments_path.display());
    Ok(())
}

/// Validate the plan and print its steps
pub fn show_plan(args: ShowPlanArgs) -> Result<(), ScriptError> {
    let plan = DeploymentPlan::from_file_or_default(args.plan.as_deref())?;
    plan.validate()?;

    for (i, step) in plan.steps.iter().enumerate() {
        println!("{}. {}({})", i + 1, step.contract, step.args.iter().join(", "));
    }

    Ok(())
}
