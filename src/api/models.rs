use serde::{Deserialize, Serialize};

use crate::blockchain::Block;
use crate::error::{NodeError, Result};
use crate::transaction::Transaction;

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub block: Block,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Serialize)]
pub struct ReplaceResponse {
    pub message: &'static str,
    pub replaced: bool,
    pub chain: Vec<Block>,
}

/* ---------- TX API Models ---------- */

/// Every field is optional at the wire level so a missing one can be
/// reported by name instead of as a generic parse failure.
#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub amount: Option<f64>,
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(NodeError::InvalidTransaction(format!(
            "missing field `{field}`"
        ))),
    }
}

impl NewTxRequest {
    pub fn into_transaction(self) -> Result<Transaction> {
        let sender = required("sender", self.sender)?;
        let receiver = required("receiver", self.receiver)?;
        let amount = self
            .amount
            .ok_or_else(|| NodeError::InvalidTransaction("missing field `amount`".into()))?;
        Ok(Transaction::new(sender, receiver, amount))
    }
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub message: String,
    pub index: u64,
}

#[derive(Serialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}

/* ---------- Peer API Models ---------- */

#[derive(Deserialize)]
pub struct ConnectRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct ConnectResponse {
    pub message: &'static str,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct PeersResponse {
    pub total_nodes: Vec<String>,
}
