//! Sequential execution of a deployment plan

use itertools::Itertools;
use tracing::info;

use crate::{
    artifacts::ArtifactResolver,
    deployer::Deployer,
    errors::ScriptError,
    plan::DeploymentPlan,
    types::{ConstructorArg, DeployedContract, DeploymentStep},
};

/// Execute `plan` step by step.
///
/// The plan is validated and every artifact resolved before the first
/// transaction is sent. Each deployment is awaited before the next one
/// starts, and `on_deployed` runs after each success. The first error ends
/// the run, so no later step is attempted. Contracts deployed before the
/// error are left in place.
pub async fn run_plan<R, D, F>(
    plan: &DeploymentPlan,
    resolver: &R,
    deployer: &D,
    mut on_deployed: F,
) -> Result<Vec<DeployedContract>, ScriptError>
where
    R: ArtifactResolver,
    D: Deployer,
    F: FnMut(&DeployedContract) -> Result<(), ScriptError>,
{
    plan.validate()?;
    let artifacts = plan
        .steps
        .iter()
        .map(|step| resolver.resolve(&step.contract))
        .collect::<Result<Vec<_>, _>>()?;

    let mut deployed: Vec<DeployedContract> = Vec::with_capacity(plan.steps.len());
    for (step, artifact) in plan.steps.iter().zip(artifacts) {
        let args = resolve_args(step, &deployed)?;
        let init_code = artifact.init_code(&args)?;

        info!("deploying {}({})", step.contract, args.iter().join(", "));
        let mut contract = deployer.deploy(&step.contract, init_code).await?;
        contract.constructor_args = args;
        info!("{} deployed at {:#x}", contract.name, contract.address);

        on_deployed(&contract)?;
        deployed.push(contract);
    }

    Ok(deployed)
}

/// Resolve the step's constructor arguments to strings, substituting the
/// addresses of contracts deployed so far
fn resolve_args(
    step: &DeploymentStep,
    deployed: &[DeployedContract],
) -> Result<Vec<String>, ScriptError> {
    step.args
        .iter()
        .map(|arg| match arg {
            ConstructorArg::AddressOf { address_of } => deployed
                .iter()
                .find(|contract| &contract.name == address_of)
                .map(|contract| format!("{:#x}", contract.address))
                .ok_or_else(|| {
                    ScriptError::InvalidPlan(format!(
                        "{} needs the address of `{address_of}`, which has not been deployed",
                        step.contract
                    ))
                }),
            ConstructorArg::Literal(value) => Ok(value.clone()),
        })
        .collect()
}
