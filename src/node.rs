use actix_web::web;
use log::{debug, info, warn};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use crate::blockchain::{Block, Blockchain, consensus, pow};
use crate::config::Settings;
use crate::error::{NodeError, Result};
use crate::network::{PeerClient, PeerRegistry};
use crate::transaction::{Transaction, TransactionPool};

/// Everything one node owns. Only touched through [`Node`].
#[derive(Debug)]
pub struct NodeState {
    pub blockchain: Blockchain,
    pub pool: TransactionPool,
    pub peers: PeerRegistry,
}

/// Result of a `/replace_chain` round.
#[derive(Debug, Clone)]
pub struct ChainUpdate {
    pub replaced: bool,
    pub chain: Vec<Block>,
}

/// A single ledger node: chain, pending pool and peer set behind one lock.
pub struct Node {
    state: RwLock<NodeState>,
    client: PeerClient,
}

impl Node {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            state: RwLock::new(NodeState {
                blockchain: Blockchain::new(settings.difficulty),
                pool: TransactionPool::new(),
                peers: PeerRegistry::new(),
            }),
            client: PeerClient::new(settings.peer_timeout)?,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, NodeState> {
        self.state.read().expect("lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, NodeState> {
        self.state.write().expect("lock poisoned")
    }

    pub fn difficulty(&self) -> u32 {
        self.read().blockchain.difficulty()
    }

    /// Consistent copy of the current chain.
    pub fn chain(&self) -> Vec<Block> {
        self.read().blockchain.blocks().to_vec()
    }

    pub fn is_chain_valid(&self) -> (bool, usize) {
        let st = self.read();
        (st.blockchain.is_valid_chain(), st.blockchain.len())
    }

    /// Queue `tx` and return the index of the block it will join.
    pub fn add_transaction(&self, tx: Transaction) -> u64 {
        let mut st = self.write();
        st.pool.add(tx);
        let index = st.blockchain.last_block().index + 1;
        debug!(
            "POOL - accepted tx for block #{} (pending: {})",
            index,
            st.pool.len()
        );
        index
    }

    pub fn pending(&self) -> Vec<Transaction> {
        self.read().pool.iter().cloned().collect()
    }

    /// Search for the next proof on the blocking pool, then commit under the
    /// write lock. The pool is drained at commit time; if the head moved while
    /// searching the search restarts from the new head.
    pub async fn mine_block(&self) -> Result<Block> {
        loop {
            let (head_proof, head_digest, difficulty) = {
                let st = self.read();
                let head = st.blockchain.last_block();
                (head.proof, head.digest(), st.blockchain.difficulty())
            };

            let t0 = Instant::now();
            let proof = web::block(move || pow::mine(head_proof, difficulty))
                .await
                .map_err(|e| NodeError::Internal(format!("mining worker: {e}")))?;

            let mut st = self.write();
            if st.blockchain.last_block().digest() != head_digest {
                warn!("MINER - head moved during proof search, restarting");
                continue;
            }

            if st.pool.is_empty() {
                debug!("MINER - no pending transactions, sealing an empty block");
            }
            let txs = st.pool.drain_for_block();
            let block = st.blockchain.append(txs, proof)?.clone();
            info!(
                "MINER - sealed block #{} (proof={}, txs={}, {} ms)",
                block.index,
                block.proof,
                block.transactions.len(),
                t0.elapsed().as_millis()
            );
            return Ok(block);
        }
    }

    /// Register every address (all or none). Returns the full peer list.
    pub fn register_peers<S: AsRef<str>>(&self, addresses: &[S]) -> Result<Vec<String>> {
        let mut st = self.write();
        let added = st.peers.register_all(addresses)?;
        info!(
            "PEERS - {} new peer(s), {} known",
            added,
            st.peers.len()
        );
        Ok(st.peers.list())
    }

    pub fn peers(&self) -> Vec<String> {
        self.read().peers.list()
    }

    /// Longest-valid-chain resolution against every registered peer.
    /// Fetches happen without holding the lock; the swap is atomic and only
    /// happens if the winner is still strictly longer at commit time.
    pub async fn resolve_conflicts(&self) -> Result<ChainUpdate> {
        let (local, peers, difficulty) = {
            let st = self.read();
            if st.peers.is_empty() {
                debug!("CONSENSUS - no peers registered");
            }
            (
                st.blockchain.blocks().to_vec(),
                st.peers.list(),
                st.blockchain.difficulty(),
            )
        };
        debug!("CONSENSUS - querying {} peer(s)", peers.len());

        let fetched = self.client.fetch_all(&peers).await;
        let outcome = consensus::resolve(&local, fetched, difficulty);

        Ok(self.commit_resolution(outcome))
    }

    /// Apply a resolver decision under the write lock. A candidate that fails
    /// the commit-time checks is logged and dropped, never reported as an error.
    fn commit_resolution(&self, outcome: consensus::ResolutionOutcome) -> ChainUpdate {
        let mut st = self.write();
        let replaced = match outcome.new_chain {
            Some(candidate) => {
                let before = st.blockchain.len();
                match st.blockchain.replace(candidate) {
                    Ok(true) => {
                        info!(
                            "CONSENSUS - chain replaced ({} -> {} blocks)",
                            before,
                            st.blockchain.len()
                        );
                        true
                    }
                    Ok(false) => {
                        info!("CONSENSUS - local chain grew during resolution, kept");
                        false
                    }
                    Err(e) => {
                        warn!("CONSENSUS - winning chain rejected at commit: {}", e);
                        false
                    }
                }
            }
            None => false,
        };

        ChainUpdate {
            replaced,
            chain: st.blockchain.blocks().to_vec(),
        }
    }
}
