//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading the `deployments.json` file
    ReadDeployments(String),
    /// Error writing the `deployments.json` file
    WriteDeployments(String),
    /// Error reading a deployment plan file
    ReadPlan(String),
    /// The deployment plan is malformed
    InvalidPlan(String),
    /// No compilation artifact could be found for a contract
    ArtifactResolution(String),
    /// Error parsing a Solidity compilation artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error constructing the constructor calldata for a contract
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::ReadPlan(s) => write!(f, "error reading deployment plan: {}", s),
            ScriptError::InvalidPlan(s) => write!(f, "invalid deployment plan: {}", s),
            ScriptError::ArtifactResolution(s) => write!(f, "error resolving artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
        }
    }
}

impl Error for ScriptError {}
