//! Submission of contract creation transactions

use alloy::{
    network::TransactionBuilder,
    primitives::Bytes,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use tracing::debug;

use crate::{constants::NUM_DEPLOY_CONFIRMATIONS, errors::ScriptError, types::DeployedContract};

/// Deploys contract creation code to a chain
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Send a creation transaction for `init_code` and wait for it to be
    /// included, returning the deployed contract.
    ///
    /// The returned contract's `constructor_args` are left empty, the
    /// caller knows them.
    async fn deploy(&self, name: &str, init_code: Bytes) -> Result<DeployedContract, ScriptError>;
}

/// A [`Deployer`] sending transactions through an alloy provider with an
/// attached wallet
pub struct AlloyDeployer {
    /// The signing provider
    provider: DynProvider,
    /// The number of confirmations to wait for each deployment
    confirmations: u64,
}

impl AlloyDeployer {
    /// Create a deployer waiting for the default number of confirmations
    pub fn new(provider: DynProvider) -> Self {
        Self {
            provider,
            confirmations: NUM_DEPLOY_CONFIRMATIONS,
        }
    }

    /// Builder-style setter for the number of confirmations to wait for
    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }
}

impl Deployer for AlloyDeployer {
    async fn deploy(&self, name: &str, init_code: Bytes) -> Result<DeployedContract, ScriptError> {
        let tx = TransactionRequest::default().with_deploy_code(init_code);

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{name}: {e}")))?;
        debug!("{name} creation transaction sent: {:#x}", pending_tx.tx_hash());

        let receipt = pending_tx
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{name}: {e}")))?;

        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "{name}: creation transaction {:#x} reverted",
                receipt.transaction_hash
            )));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "{name}: receipt for {:#x} has no contract address",
                receipt.transaction_hash
            ))
        })?;

        Ok(DeployedContract {
            name: name.to_string(),
            address,
            deployer: receipt.from,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            transaction_index: receipt.transaction_index,
            constructor_args: vec![],
        })
    }
}
