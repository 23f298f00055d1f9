use actix_web::{HttpResponse, get, web};

use super::models::{ChainResponse, MineResponse, ReplaceResponse, ValidateResponse};
use crate::error::NodeError;
use crate::node::Node;

/// Get the full blockchain.
#[get("/get_chain")]
pub async fn get_chain(node: web::Data<Node>) -> HttpResponse {
    let chain = node.chain();
    HttpResponse::Ok().json(ChainResponse {
        chain: &chain,
        length: chain.len(),
    })
}

/// Validate the node's own chain.
#[get("/is_valid")]
pub async fn is_valid(node: web::Data<Node>) -> HttpResponse {
    let (valid, length) = node.is_chain_valid();
    HttpResponse::Ok().json(ValidateResponse { valid, length })
}

/// Mine a new block from the pending pool.
#[get("/mine_block")]
pub async fn mine_block(node: web::Data<Node>) -> Result<HttpResponse, NodeError> {
    let block = node.mine_block().await?;
    Ok(HttpResponse::Ok().json(MineResponse {
        message: "Congratulations, you just mined a block!",
        block,
    }))
}

/// Run longest-valid-chain consensus against every registered peer.
#[get("/replace_chain")]
pub async fn replace_chain(node: web::Data<Node>) -> Result<HttpResponse, NodeError> {
    let update = node.resolve_conflicts().await?;
    let message = if update.replaced {
        "The nodes had different chains so the chain was replaced by the longest one."
    } else {
        "All good. The chain is the largest one."
    };
    Ok(HttpResponse::Ok().json(ReplaceResponse {
        message,
        replaced: update.replaced,
        chain: update.chain,
    }))
}
