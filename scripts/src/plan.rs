//! The ordered list of contract deployments to perform

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{AUCTION_CONTRACT_NAME, MARKETPLACE_CONTRACT_NAME, MINT_NFT_CONTRACT_NAME},
    errors::ScriptError,
    types::{ConstructorArg, DeploymentStep},
};

/// An ordered deployment plan.
///
/// Steps execute strictly in order. An [`ConstructorArg::AddressOf`] argument may
/// only name a contract deployed by an earlier step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    /// The deployment steps, in execution order
    pub steps: Vec<DeploymentStep>,
}

impl DeploymentPlan {
    /// The marketplace deployment: the marketplace, then the NFT minter
    /// pointing at it, then the auction house
    pub fn marketplace() -> Self {
        Self {
            steps: vec![
                DeploymentStep::new(MARKETPLACE_CONTRACT_NAME),
                DeploymentStep::new(MINT_NFT_CONTRACT_NAME)
                    .with_args(vec![ConstructorArg::address_of(MARKETPLACE_CONTRACT_NAME)]),
                DeploymentStep::new(AUCTION_CONTRACT_NAME),
            ],
        }
    }

    /// Read a plan from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ScriptError::ReadPlan(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents).map_err(|e| ScriptError::ReadPlan(e.to_string()))
    }

    /// Read the plan at `path` if one is given, otherwise use the marketplace plan
    pub fn from_file_or_default(path: Option<&Path>) -> Result<Self, ScriptError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::marketplace()),
        }
    }

    /// Check that the plan can be executed in order
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.steps.is_empty() {
            return Err(ScriptError::InvalidPlan("plan has no steps".to_string()));
        }

        let mut deployed = HashSet::new();
        for (i, step) in self.steps.iter().enumerate() {
            if step.contract.trim().is_empty() {
                return Err(ScriptError::InvalidPlan(format!(
                    "step {i} has an empty contract name"
                )));
            }

            for arg in &step.args {
                if let ConstructorArg::AddressOf { address_of } = arg {
                    if !deployed.contains(address_of.as_str()) {
                        return Err(ScriptError::InvalidPlan(format!(
                            "step {i} ({}) references `{address_of}`, which is not deployed by an earlier step",
                            step.contract
                        )));
                    }
                }
            }

            if !deployed.insert(step.contract.as_str()) {
                return Err(ScriptError::InvalidPlan(format!(
                    "contract `{}` is deployed more than once",
                    step.contract
                )));
            }
        }

        Ok(())
    }
}
