use sha2::{Digest, Sha256};

/// Hex SHA-256 of the `(previous_proof, candidate)` pair.
pub fn proof_digest(previous_proof: u64, candidate: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{previous_proof}:{candidate}").as_bytes());
    hex::encode(hasher.finalize())
}

/// A candidate is valid when its digest starts with `difficulty` zero hex digits.
pub fn is_valid_proof(previous_proof: u64, candidate: u64, difficulty: u32) -> bool {
    proof_digest(previous_proof, candidate)
        .chars()
        .take(difficulty as usize)
        .all(|c| c == '0')
}

/// Smallest non-negative proof satisfying `is_valid_proof`, found by a linear
/// scan from zero. Blocking: expected cost grows as 16^difficulty.
pub fn mine(previous_proof: u64, difficulty: u32) -> u64 {
    let mut candidate = 0u64;
    while !is_valid_proof(previous_proof, candidate, difficulty) {
        candidate = candidate.wrapping_add(1);
    }
    candidate
}
