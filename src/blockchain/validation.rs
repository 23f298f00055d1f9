use super::{Block, pow};
use crate::error::{NodeError, Result};

/// Check a candidate chain (possibly fetched from a peer): well-formed genesis,
/// consecutive indices, hash linkage and proof-of-work for every pair.
/// Reports the first violation found.
pub fn validate_chain(chain: &[Block], difficulty: u32) -> Result<()> {
    let genesis = chain
        .first()
        .ok_or_else(|| NodeError::InvalidChain("chain is empty".into()))?;
    if !genesis.is_genesis() {
        return Err(NodeError::InvalidChain("malformed genesis block".into()));
    }

    for pair in chain.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);

        if current.index != prev.index + 1 {
            return Err(NodeError::InvalidChain(format!(
                "block #{} follows block #{}",
                current.index, prev.index
            )));
        }

        // Check linkage
        if current.previous_hash != prev.digest() {
            return Err(NodeError::InvalidChain(format!(
                "block #{} does not link to its predecessor",
                current.index
            )));
        }

        if !pow::is_valid_proof(prev.proof, current.proof, difficulty) {
            return Err(NodeError::InvalidChain(format!(
                "block #{} has an invalid proof {}",
                current.index, current.proof
            )));
        }
    }

    Ok(())
}

/// Boolean form of [`validate_chain`]. Side-effect free.
pub fn is_chain_valid(chain: &[Block], difficulty: u32) -> bool {
    validate_chain(chain, difficulty).is_ok()
}
