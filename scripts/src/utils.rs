//! Utilities for the deploy scripts.

use std::str::FromStr;

use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};

use crate::errors::ScriptError;

/// A signing RPC client along with the account and chain it acts on
pub struct Client {
    /// The provider, with the deployer's wallet attached
    pub provider: DynProvider,
    /// The address of the deployer account
    pub deployer: Address,
    /// The chain ID reported by the RPC node
    pub chain_id: u64,
}

/// Sets up a signing client for the given private key and RPC url
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<Client, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let deployer = signer.address();

    let provider = DynProvider::new(ProviderBuilder::new().wallet(signer).connect_http(url));
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    Ok(Client {
        provider,
        deployer,
        chain_id,
    })
}
