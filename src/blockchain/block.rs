use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::transaction::Transaction;

/// A single sealed block. Never edited after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: f64, // Unix seconds (UTC), microsecond resolution
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

fn now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

impl Block {
    /// Create the genesis block (first block in the chain).
    pub fn genesis() -> Self {
        Self {
            index: 0,
            timestamp: now(),
            transactions: Vec::new(),
            proof: GENESIS_PROOF,
            previous_hash: String::from(GENESIS_PREVIOUS_HASH),
        }
    }

    /// Build the successor of `previous` carrying `transactions`, sealed with
    /// a `proof` already found against `previous.proof`.
    pub fn next(previous: &Block, transactions: Vec<Transaction>, proof: u64) -> Self {
        Self {
            index: previous.index + 1,
            timestamp: now(),
            transactions,
            proof,
            previous_hash: previous.digest(),
        }
    }

    /// SHA-256 over every field in a fixed order. Transactions are
    /// serialized as JSON (field order `sender, receiver, amount`).
    pub fn digest(&self) -> String {
        let txs_json = serde_json::to_string(&self.transactions).expect("serialize txs");
        let preimage = format!(
            "{}:{}:{}:{}:{}",
            self.index, self.timestamp, self.proof, self.previous_hash, txs_json
        );
        let mut hasher = Sha256::new();
        hasher.update(preimage.as_bytes());
        hex::encode(hasher.finalize())
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 0
            && self.proof == GENESIS_PROOF
            && self.previous_hash == GENESIS_PREVIOUS_HASH
            && self.transactions.is_empty()
    }
}
