/// Read-only view of an entry in the node's block index
///
/// The index is owned by the surrounding node. Checkpoint operations only
/// read through this trait for the duration of a call, under whatever
/// concurrency discipline the index itself requires
pub trait ChainEntry {
    /// Height of the block within its chain
    fn height(&self) -> u64;
    /// Total transactions confirmed up to and including this block
    fn chain_tx_count(&self) -> u64;
    /// Block timestamp, in seconds since the unix epoch
    fn timestamp(&self) -> u64;
}
