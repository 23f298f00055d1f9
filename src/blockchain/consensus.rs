use log::{debug, warn};

use super::{Block, validation};
use crate::error::Result;

/// What a round of longest-valid-chain resolution decided.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionOutcome {
    pub replaced: bool,
    /// The winning peer chain; `None` when the local chain stays.
    pub new_chain: Option<Vec<Block>>,
}

/// Pick the longest valid chain among the peer fetch results.
///
/// A peer chain wins only if it is strictly longer than the best seen so far
/// (initially `local`) and passes validation, so ties always keep the current
/// chain. Failed fetches and invalid chains are logged and skipped.
pub fn resolve(
    local: &[Block],
    fetched: Vec<(String, Result<Vec<Block>>)>,
    difficulty: u32,
) -> ResolutionOutcome {
    let mut best_len = local.len();
    let mut best: Option<Vec<Block>> = None;

    for (peer, result) in fetched {
        let chain = match result {
            Ok(chain) => chain,
            Err(e) => {
                warn!("CONSENSUS - skipping {}: {}", peer, e);
                continue;
            }
        };

        if chain.len() <= best_len {
            debug!(
                "CONSENSUS - {} has length {} (best {}), ignored",
                peer,
                chain.len(),
                best_len
            );
            continue;
        }

        if let Err(e) = validation::validate_chain(&chain, difficulty) {
            warn!("CONSENSUS - disqualified chain from {}: {}", peer, e);
            continue;
        }

        best_len = chain.len();
        best = Some(chain);
    }

    ResolutionOutcome {
        replaced: best.is_some(),
        new_chain: best,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::blockchain::{Block, model::mined_chain};
    use crate::error::NodeError;

    const DIFF: u32 = 2;

    fn chain(blocks: usize) -> Vec<Block> {
        mined_chain(blocks, DIFF).blocks().to_vec()
    }

    fn unreachable(peer: &str) -> (String, crate::error::Result<Vec<Block>>) {
        (
            peer.to_string(),
            Err(NodeError::PeerUnreachable {
                peer: peer.to_string(),
                reason: "connection refused".into(),
            }),
        )
    }

    #[test]
    fn longer_valid_chain_wins() {
        let local = chain(0);
        let remote = chain(2);
        let out = resolve(&local, vec![("a:1".into(), Ok(remote.clone()))], DIFF);
        assert!(out.replaced);
        assert_eq!(out.new_chain, Some(remote));
    }

    #[test]
    fn equal_length_never_replaces() {
        let local = chain(2);
        let out = resolve(&local, vec![("a:1".into(), Ok(chain(2)))], DIFF);
        assert!(!out.replaced);
        assert!(out.new_chain.is_none());
    }

    #[test]
    fn shorter_chain_is_ignored() {
        let local = chain(3);
        let out = resolve(&local, vec![("a:1".into(), Ok(chain(1)))], DIFF);
        assert!(!out.replaced);
    }

    #[test]
    fn invalid_longer_chain_is_disqualified() {
        let local = chain(0);
        let mut bad = chain(3);
        bad[2].previous_hash = "0".repeat(64);
        let out = resolve(&local, vec![("a:1".into(), Ok(bad))], DIFF);
        assert!(!out.replaced);
    }

    #[test]
    fn unreachable_peer_does_not_stop_resolution() {
        let local = chain(0);
        let remote = chain(1);
        let out = resolve(
            &local,
            vec![unreachable("down:1"), ("up:2".into(), Ok(remote.clone()))],
            DIFF,
        );
        assert_eq!(out.new_chain, Some(remote));
    }

    #[test]
    fn longest_of_several_peers_wins() {
        let local = chain(0);
        let two = chain(2);
        let three = chain(3);
        let other_three = chain(3);
        let out = resolve(
            &local,
            vec![
                ("a:1".into(), Ok(two)),
                ("b:2".into(), Ok(three.clone())),
                ("c:3".into(), Ok(other_three)),
            ],
            DIFF,
        );
        // first chain of the winning length is kept on ties between peers
        assert_eq!(out.new_chain, Some(three));
    }
}
