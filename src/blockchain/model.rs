use log::debug;

use super::{Block, pow, validation};
use crate::error::{NodeError, Result};
use crate::transaction::Transaction;

/// In-memory chain with Proof-of-Work. Only ever appended to or replaced whole.
#[derive(Debug)]
pub struct Blockchain {
    chain: Vec<Block>,
    difficulty: u32,
}

impl Blockchain {
    /// Initialize a new blockchain with a genesis block.
    pub fn new(difficulty: u32) -> Self {
        Self {
            chain: vec![Block::genesis()],
            difficulty,
        }
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Seal `transactions` into a block carrying `proof` and append it.
    /// `proof` must have been found against the current head.
    pub fn append(&mut self, transactions: Vec<Transaction>, proof: u64) -> Result<&Block> {
        let prev = self.last_block();
        if !pow::is_valid_proof(prev.proof, proof, self.difficulty) {
            return Err(NodeError::InvalidChain(format!(
                "proof {} does not extend block #{}",
                proof, prev.index
            )));
        }

        let block = Block::next(prev, transactions, proof);
        debug!(
            "appending block #{} ({} txs, proof={})",
            block.index,
            block.transactions.len(),
            block.proof
        );
        self.chain.push(block);
        Ok(self.last_block())
    }

    /// Swap in `candidate` if it is strictly longer and valid.
    /// Returns whether the chain was replaced; on error nothing changes.
    pub fn replace(&mut self, candidate: Vec<Block>) -> Result<bool> {
        if candidate.len() <= self.chain.len() {
            return Ok(false);
        }
        validation::validate_chain(&candidate, self.difficulty)?;
        self.chain = candidate;
        Ok(true)
    }

    /// Validate the entire chain: genesis, linkage and PoW.
    pub fn is_valid_chain(&self) -> bool {
        validation::is_chain_valid(&self.chain, self.difficulty)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }
}

/// Test helper: genesis plus `blocks` mined blocks, one transaction each.
#[cfg(test)]
pub(crate) fn mined_chain(blocks: usize, difficulty: u32) -> Blockchain {
    let mut bc = Blockchain::new(difficulty);
    for i in 0..blocks {
        let proof = pow::mine(bc.last_block().proof, difficulty);
        let txs = vec![Transaction::new("Alice", "Bob", i as f64)];
        bc.append(txs, proof).expect("proof mined against head");
    }
    bc
}
