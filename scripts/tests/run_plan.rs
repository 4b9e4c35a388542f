use std::{collections::HashMap, sync::Mutex};

use alloy::primitives::{Address, Bytes, TxHash};
use eyre::Result;
use scripts::{
    artifacts::Artifact,
    deployer::Deployer,
    errors::ScriptError,
    plan::DeploymentPlan,
    runner::run_plan,
    types::DeployedContract,
};

/// ABI with a single `address` constructor parameter
const MINT_NFT_ABI: &str = r#"[{
    "type": "constructor",
    "stateMutability": "nonpayable",
    "inputs": [{"name": "marketplace", "type": "address", "internalType": "address"}]
}]"#;

/// Records every deployment it is asked to make, and hands out
/// `0x0101..`, `0x0202..`, ... as addresses
#[derive(Default)]
struct MockDeployer {
    calls: Mutex<Vec<(String, Bytes)>>,
    fail_on: Option<&'static str>,
}

impl MockDeployer {
    fn failing_on(name: &'static str) -> Self {
        Self {
            fail_on: Some(name),
            ..Default::default()
        }
    }

    fn deployed_names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn init_code_of(&self, name: &str) -> Bytes {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, code)| code.clone())
            .unwrap()
    }
}

impl Deployer for MockDeployer {
    async fn deploy(&self, name: &str, init_code: Bytes) -> Result<DeployedContract, ScriptError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((name.to_string(), init_code));
        if self.fail_on == Some(name) {
            return Err(ScriptError::ContractDeployment(format!("{name}: reverted")));
        }

        let n = calls.len() as u8;
        Ok(DeployedContract {
            name: name.to_string(),
            address: Address::repeat_byte(n),
            deployer: Address::repeat_byte(0xa0),
            transaction_hash: TxHash::repeat_byte(n),
            block_number: Some(n as u64),
            transaction_index: Some(0),
            constructor_args: vec![],
        })
    }
}

fn marketplace_artifacts() -> HashMap<String, Artifact> {
    [
        ("MarketPlace", "[]", "0x01"),
        ("MintNFT", MINT_NFT_ABI, "0x02"),
        ("Auction", "[]", "0x03"),
    ]
    .into_iter()
    .map(|(name, abi, bytecode)| {
        let json = format!(r#"{{"abi": {abi}, "bytecode": "{bytecode}"}}"#);
        (name.to_string(), Artifact::from_json(name, &json).unwrap())
    })
    .collect()
}

#[tokio::test]
async fn test_marketplace_deployment() -> Result<()> {
    let artifacts = marketplace_artifacts();
    let deployer = MockDeployer::default();
    let mut recorded = vec![];

    let deployed = run_plan(&DeploymentPlan::marketplace(), &artifacts, &deployer, |c| {
        recorded.push(c.clone());
        Ok(())
    })
    .await?;

    assert_eq!(deployer.deployed_names(), ["MarketPlace", "MintNFT", "Auction"]);
    assert_eq!(recorded, deployed);

    let marketplace = &deployed[0];
    let mint_nft = &deployed[1];
    let auction = &deployed[2];

    // MintNFT receives exactly one argument, the marketplace's address
    assert_eq!(
        mint_nft.constructor_args,
        vec![format!("{:#x}", marketplace.address)]
    );
    assert!(marketplace.constructor_args.is_empty());
    assert!(auction.constructor_args.is_empty());

    let init_code = deployer.init_code_of("MintNFT");
    assert_eq!(init_code.len(), 1 + 32);
    assert_eq!(init_code[0], 0x02);
    assert_eq!(&init_code[13..], marketplace.address.as_slice());

    assert_eq!(&deployer.init_code_of("MarketPlace")[..], &[0x01]);
    assert_eq!(&deployer.init_code_of("Auction")[..], &[0x03]);

    Ok(())
}

#[tokio::test]
async fn test_first_failure_stops_deployment() -> Result<()> {
    let artifacts = marketplace_artifacts();
    let deployer = MockDeployer::failing_on("MarketPlace");
    let mut recorded = vec![];

    let res = run_plan(&DeploymentPlan::marketplace(), &artifacts, &deployer, |c| {
        recorded.push(c.clone());
        Ok(())
    })
    .await;

    assert!(matches!(res, Err(ScriptError::ContractDeployment(_))));
    assert_eq!(deployer.deployed_names(), ["MarketPlace"]);
    assert!(recorded.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_partial_deployment_is_recorded() -> Result<()> {
    let artifacts = marketplace_artifacts();
    let deployer = MockDeployer::failing_on("MintNFT");
    let mut recorded = vec![];

    let res = run_plan(&DeploymentPlan::marketplace(), &artifacts, &deployer, |c| {
        recorded.push(c.name.clone());
        Ok(())
    })
    .await;

    assert!(res.is_err());
    assert_eq!(deployer.deployed_names(), ["MarketPlace", "MintNFT"]);
    assert_eq!(recorded, ["MarketPlace"]);

    Ok(())
}

#[tokio::test]
async fn test_missing_artifact_sends_nothing() -> Result<()> {
    let mut artifacts = marketplace_artifacts();
    artifacts.remove("Auction");
    let deployer = MockDeployer::default();

    let res = run_plan(&DeploymentPlan::marketplace(), &artifacts, &deployer, |_| Ok(())).await;

    assert!(matches!(res, Err(ScriptError::ArtifactResolution(_))));
    assert!(deployer.deployed_names().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_record_failure_stops_deployment() -> Result<()> {
    let artifacts = marketplace_artifacts();
    let deployer = MockDeployer::default();

    let res = run_plan(&DeploymentPlan::marketplace(), &artifacts, &deployer, |_| {
        Err(ScriptError::WriteDeployments("disk full".to_string()))
    })
    .await;

    assert!(matches!(res, Err(ScriptError::WriteDeployments(_))));
    assert_eq!(deployer.deployed_names(), ["MarketPlace"]);

    Ok(())
}
