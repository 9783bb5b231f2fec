use serde::{Serialize, Deserialize};

/// The chain a node is validating
///
/// Selecting per-network data takes the network as an explicit parameter,
/// so both registries can be exercised side by side
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Network {
    /// The production chain
    Mainnet,
    /// The public test chain
    Testnet
}
