//! Constants used in the deploy scripts

/// The name of the marketplace contract artifact
pub const MARKETPLACE_CONTRACT_NAME: &str = "MarketPlace";

/// The name of the NFT minting contract artifact.
///
/// Its constructor takes the address of the marketplace contract.
pub const MINT_NFT_CONTRACT_NAME: &str = "MintNFT";

/// The name of the auction contract artifact
pub const AUCTION_CONTRACT_NAME: &str = "Auction";

/// The default RPC URL, that of a local Anvil / Ganache node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default private key, the first default account in an Anvil node
pub const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default directory containing compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// The number of confirmations to wait for each contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The extension of a JSON compilation artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The extension of the per-source directories in a Foundry `out/` tree
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The marker solc leaves in bytecode where a library address must be linked
pub const LIBRARY_PLACEHOLDER_MARKER: &str = "__";
