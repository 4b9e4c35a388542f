//! Reading and writing the `deployments.json` file

use std::{fs, path::Path};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{errors::ScriptError, types::DeployedContract};

/// The contents of a `deployments.json` file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentsFile {
    /// The chain the contracts were deployed to
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// The deployed contracts, in the order they were first recorded
    #[serde(default)]
    pub deployments: Vec<DeployedContract>,
}

impl DeploymentsFile {
    /// Read the deployments file at `path`
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ScriptError::ReadDeployments(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
    }

    /// Read the deployments file at `path`, or start an empty one if it
    /// doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, ScriptError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the deployments file to `path`, replacing its contents
    pub fn save(&self, path: &Path) -> Result<(), ScriptError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
        fs::write(path, contents)
            .map_err(|e| ScriptError::WriteDeployments(format!("{}: {}", path.display(), e)))
    }

    /// Bind the file to `chain_id`.
    ///
    /// A file that already records another chain is rejected, so that
    /// deployments on different chains never share a file.
    pub fn bind_chain(&mut self, chain_id: u64) -> Result<(), ScriptError> {
        match self.chain_id {
            Some(recorded) if recorded != chain_id => Err(ScriptError::ReadDeployments(format!(
                "deployments file records chain {recorded}, but the RPC node is on chain {chain_id}"
            ))),
            _ => {
                self.chain_id = Some(chain_id);
                Ok(())
            }
        }
    }

    /// Record a deployed contract, replacing an earlier deployment of the
    /// same contract in place
    pub fn record(&mut self, contract: DeployedContract) {
        match self.deployments.iter_mut().find(|c| c.name == contract.name) {
            Some(existing) => *existing = contract,
            None => self.deployments.push(contract),
        }
    }

    /// Get the recorded deployment of the contract `name`
    pub fn get(&self, name: &str) -> Result<&DeployedContract, ScriptError> {
        self.deployments
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ScriptError::ReadDeployments(format!("no deployment recorded for `{name}`")))
    }

    /// Get the recorded address of the contract `name`
    pub fn address_of(&self, name: &str) -> Result<Address, ScriptError> {
        self.get(name).map(|c| c.address)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::TxHash;

    use super::*;

    /// A deployed contract whose fields are all derived from `byte`
    fn contract(name: &str, byte: u8) -> DeployedContract {
        DeployedContract {
            name: name.to_string(),
            address: Address::repeat_byte(byte),
            deployer: Address::repeat_byte(0xa0),
            transaction_hash: TxHash::repeat_byte(byte),
            block_number: Some(byte as u64),
            transaction_index: Some(0),
            constructor_args: vec![],
        }
    }

    #[test]
    fn test_record_keeps_order_and_replaces() {
        let mut file = DeploymentsFile::default();
        file.record(contract("MarketPlace", 1));
        file.record(contract("MintNFT", 2));
        file.record(contract("MarketPlace", 3));

        let names: Vec<_> = file.deployments.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["MarketPlace", "MintNFT"]);
        assert_eq!(file.address_of("MarketPlace").unwrap(), Address::repeat_byte(3));
        assert!(file.address_of("Auction").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");

        let missing = DeploymentsFile::load_or_default(&path).unwrap();
        assert_eq!(missing, DeploymentsFile::default());
        assert!(DeploymentsFile::load(&path).is_err());

        let mut file = DeploymentsFile {
            chain_id: Some(31337),
            deployments: vec![],
        };
        file.record(contract("MarketPlace", 1));
        file.save(&path).unwrap();

        assert_eq!(DeploymentsFile::load(&path).unwrap(), file);
    }

    #[test]
    fn test_bind_chain() {
        let mut file = DeploymentsFile::default();
        file.bind_chain(31337).unwrap();
        assert_eq!(file.chain_id, Some(31337));

        // Rebinding to the same chain is a no-op
        file.record(contract("MarketPlace", 1));
        file.bind_chain(31337).unwrap();
        assert_eq!(file.deployments.len(), 1);

        let res = file.bind_chain(1);
        assert!(matches!(res, Err(ScriptError::ReadDeployments(_))));
        assert_eq!(file.chain_id, Some(31337));
    }

    #[test]
    fn test_redeploy_from_other_account_keeps_per_contract_deployer() {
        let first_account = Address::repeat_byte(0xa0);
        let second_account = Address::repeat_byte(0xb0);

        let mut file = DeploymentsFile::default();
        file.bind_chain(31337).unwrap();
        for (name, byte) in [("MarketPlace", 1), ("MintNFT", 2), ("Auction", 3)] {
            file.record(contract(name, byte));
        }

        // Only the marketplace is redeployed, by another account
        file.record(DeployedContract {
            deployer: second_account,
            ..contract("MarketPlace", 4)
        });

        assert_eq!(file.get("MarketPlace").unwrap().deployer, second_account);
        assert_eq!(file.get("MintNFT").unwrap().deployer, first_account);
        assert_eq!(file.get("Auction").unwrap().deployer, first_account);
    }
}
