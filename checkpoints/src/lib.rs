#![deny(missing_docs)]

//! # Chain checkpoints
//! This crate carries the hardcoded (height, hash) pairs the authors assert
//! to be part of the canonical chain, one table per network, along with the
//! operations built on them: rejecting competing blocks at checkpointed
//! heights, estimating verification progress during sync and finding the
//! most recent checkpoint already present in the node's block index

use std::collections::HashMap;
use std::convert::TryFrom;

use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crypto::Hash256;

mod config;
mod data;
mod error;
mod network;
mod traits;

pub use config::Config;
pub use error::{Error, Result};
pub use network::Network;
pub use traits::ChainEntry;

/// How many times slower a transaction past the last checkpoint is expected
/// to verify compared to one below it (blocks below the last checkpoint are
/// assumed valid and skip signature verification). A compromise value: it
/// can reach 20 when reindexing from a fast disk with a slow CPU and sits
/// near 1 when downloading over a slow network with a fast CPU
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86400.0;

/// A single hardcoded checkpoint
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CheckpointEntry {
    /// Height of the asserted block
    pub height: u64,
    /// The only hash accepted at that height
    pub hash: Hash256
}

/// The checkpoint registry of one network
///
/// Built once at startup from the compiled-in table of the selected network
/// and never mutated afterwards. All operations take `&self`; the registry
/// needs no locking once shared
pub struct Checkpoints {
    // Sorted by height, strictly ascending
    entries: Vec<CheckpointEntry>,
    time_last_checkpoint: u64,
    txs_last_checkpoint: u64,
    txs_per_day: f64,
    enforcing: bool
}

impl Checkpoints {
    /// Creates an empty, enforcing registry
    pub fn new() -> Checkpoints {
        Checkpoints {
            entries: Vec::new(),
            time_last_checkpoint: 0,
            txs_last_checkpoint: 0,
            txs_per_day: 0.0,
            enforcing: true
        }
    }

    /// Builds the registry of the given network from its compiled-in table
    ///
    /// The tables are asserted well-formed here. A malformed table is a
    /// programmer error and panics at startup rather than surfacing later
    pub fn for_network(network: Network, config: &Config) -> Checkpoints {
        let data = match network {
            Network::Mainnet => &data::MAINNET,
            Network::Testnet => &data::TESTNET
        };
        let mut checkpoints = Checkpoints::new();
        checkpoints.enforcing = !config.disable_checkpoints;
        for (height, hash) in data.entries {
            let hash = Hash256::try_from(*hash).expect("Malformed hash in hardcoded checkpoint table");
            checkpoints.add_checkpoint(*height, hash).expect("Conflicting entries in hardcoded checkpoint table");
        }
        checkpoints.time_last_checkpoint = data.time_last_checkpoint;
        checkpoints.txs_last_checkpoint = data.txs_last_checkpoint;
        checkpoints.txs_per_day = data.txs_per_day;
        checkpoints
    }

    /// Adds a checkpoint, keeping entries ordered by height
    ///
    /// Re-adding an existing (height, hash) pair is accepted and does
    /// nothing
    ///
    /// # Errors
    /// If a different hash is already registered at the given height
    pub fn add_checkpoint(&mut self, height: u64, hash: Hash256) -> Result<()> {
        match self.entries.binary_search_by_key(&height, |entry| entry.height) {
            Ok(i) => {
                if self.entries[i].hash != hash {
                    return Err(Error::ConflictingCheckpoint(height));
                }
            },
            Err(i) => {
                self.entries.insert(i, CheckpointEntry { height, hash });
            }
        }
        Ok(())
    }

    /// Checks a block against the registry
    ///
    /// Heights without a checkpoint are unconstrained. At a checkpointed
    /// height exactly one hash is valid and every other hash is permanently
    /// invalid, which pins down pre-existing history as well: a rewrite of
    /// the chain below a checkpoint can never check out
    ///
    /// # Returns
    /// `false` iff enforcement is on and a checkpoint at this height holds
    /// a different hash. The caller must treat `false` as a hard consensus
    /// violation and reject the branch no matter how much work it carries
    pub fn check_block(&self, height: u64, hash: &Hash256) -> bool {
        if !self.enforcing {
            return true;
        }
        let entry = match self.entries.binary_search_by_key(&height, |entry| entry.height) {
            Ok(i) => &self.entries[i],
            Err(_) => return true
        };
        if entry.hash == *hash {
            debug!("Checkpoint passed at height {}: {}", height, hash);
            return true;
        }
        warn!(
            "Checkpoint failed at height {}. Expected hash: {}, fetched hash: {}",
            height, entry.hash, hash
        );
        false
    }

    /// Guesses how far block verification has progressed at the given chain
    /// point, as a fraction in `[0, 1]`
    ///
    /// Work is counted as 1 unit per transaction at or below the last
    /// checkpoint and [`SIGCHECK_VERIFICATION_FACTOR`] units per transaction
    /// above it. Transactions expected between the chain point and `now`
    /// (at the table's per-day rate) count as work still to do, so the
    /// result moves with the clock; callers pass the current wall time in
    /// unix seconds
    pub fn estimate_progress(&self, chain_point: Option<&dyn ChainEntry>, now: u64) -> f64 {
        let chain_point = match chain_point {
            Some(point) => point,
            None => return 0.0
        };

        let txs_checkpoint = self.txs_last_checkpoint as f64;
        let work_done;
        let work_left;

        if chain_point.chain_tx_count() <= self.txs_last_checkpoint {
            let cheap_left = txs_checkpoint - chain_point.chain_tx_count() as f64;
            let expensive_left = self.expected_txs_since(self.time_last_checkpoint, now);
            work_done = chain_point.chain_tx_count() as f64;
            work_left = cheap_left + expensive_left * SIGCHECK_VERIFICATION_FACTOR;
        } else {
            let expensive_done = (chain_point.chain_tx_count() - self.txs_last_checkpoint) as f64;
            let expensive_left = self.expected_txs_since(chain_point.timestamp(), now);
            work_done = txs_checkpoint + expensive_done * SIGCHECK_VERIFICATION_FACTOR;
            work_left = expensive_left * SIGCHECK_VERIFICATION_FACTOR;
        }

        // An empty registry and an unsynced chain point leave nothing on
        // either side of the ratio
        if work_done + work_left == 0.0 {
            return 0.0;
        }
        work_done / (work_done + work_left)
    }

    /// Height of the furthest checkpoint, used as a rough denominator for
    /// sync progress. 0 when enforcement is off or the registry is empty
    pub fn total_checkpoint_height(&self) -> u64 {
        if !self.enforcing {
            return 0;
        }
        self.entries.last().map_or(0, |entry| entry.height)
    }

    /// Finds the highest checkpointed block present in the supplied block
    /// index
    ///
    /// Scans checkpoints from highest to lowest height and returns the
    /// index entry of the first hash found, so the result is always the
    /// highest checkpoint the node already has, never a lower one. `None`
    /// when enforcement is off or no checkpoint hash is present locally
    pub fn last_known_checkpoint<'a, T>(&self, block_index: &'a HashMap<Hash256, T>) -> Option<&'a T> {
        if !self.enforcing {
            return None;
        }
        self.entries
            .iter()
            .rev()
            .find_map(|entry| block_index.get(&entry.hash))
    }

    // Transactions expected to have appeared between `since` and `now` at
    // the table's rate. Clamped at zero so a chain point with a timestamp
    // ahead of the caller's clock cannot push the estimate out of range
    fn expected_txs_since(&self, since: u64, now: u64) -> f64 {
        now.saturating_sub(since) as f64 / SECONDS_PER_DAY * self.txs_per_day
    }
}
