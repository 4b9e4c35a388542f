//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::primitives::{Address, TxHash};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single constructor argument in a deployment step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstructorArg {
    /// The address of a contract deployed by an earlier step
    AddressOf {
        /// The name of the contract whose address is passed
        address_of: String,
    },
    /// A literal value, coerced to the Solidity type of the
    /// corresponding constructor parameter.
    ///
    /// Plan files may write it as a JSON string, number, or bool.
    #[serde(deserialize_with = "literal_from_json")]
    Literal(String),
}

/// Accept a JSON string, number, or bool as a literal argument
fn literal_from_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(value),
        value @ (Value::Number(_) | Value::Bool(_)) => Ok(value.to_string()),
        value => Err(D::Error::custom(format!(
            "constructor literal must be a string, number, or bool, got {value}"
        ))),
    }
}

impl ConstructorArg {
    /// An argument referencing the deployed address of `contract`
    pub fn address_of(contract: &str) -> Self {
        ConstructorArg::AddressOf {
            address_of: contract.to_string(),
        }
    }
}

impl Display for ConstructorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructorArg::AddressOf { address_of } => write!(f, "{address_of}.address"),
            ConstructorArg::Literal(value) => write!(f, "{value}"),
        }
    }
}

/// One contract deployment in a plan
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStep {
    /// The name of the contract artifact to deploy
    pub contract: String,
    /// The constructor arguments, in declaration order
    #[serde(default)]
    pub args: Vec<ConstructorArg>,
}

impl DeploymentStep {
    /// A step deploying `contract` without constructor arguments
    pub fn new(contract: &str) -> Self {
        Self {
            contract: contract.to_string(),
            args: vec![],
        }
    }

    /// Builder-style setter for the constructor arguments
    pub fn with_args(mut self, args: Vec<ConstructorArg>) -> Self {
        self.args = args;
        self
    }
}

/// A contract that has been deployed on chain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContract {
    /// The name of the contract artifact
    pub name: String,
    /// The address the contract was deployed at
    pub address: Address,
    /// The account that sent the creation transaction
    #[serde(default)]
    pub deployer: Address,
    /// The hash of the contract creation transaction
    pub transaction_hash: TxHash,
    /// The block in which the creation transaction was included
    #[serde(default)]
    pub block_number: Option<u64>,
    /// The index of the creation transaction within its block
    #[serde(default)]
    pub transaction_index: Option<u64>,
    /// The resolved constructor arguments the contract was deployed with
    #[serde(default)]
    pub constructor_args: Vec<String>,
}
