use actix_web::{HttpResponse, get, post, web};
use log::info;

use super::models::{NewTxRequest, NewTxResponse, PendingResponse};
use crate::error::NodeError;
use crate::node::Node;

/// Queue a transaction for the next mined block.
#[post("/add_transaction")]
pub async fn add_transaction(
    node: web::Data<Node>,
    body: web::Json<NewTxRequest>,
) -> Result<HttpResponse, NodeError> {
    let tx = body.into_inner().into_transaction()?;
    let (sender, receiver, amount) = (tx.sender.clone(), tx.receiver.clone(), tx.amount);
    let index = node.add_transaction(tx);

    info!(
        "POST /add_transaction - {} -> {} ({}) queued for block #{}",
        sender, receiver, amount, index
    );
    Ok(HttpResponse::Created().json(NewTxResponse {
        message: format!("This transaction will be added to Block {index}"),
        index,
    }))
}

/// List the pending pool.
#[get("/pending")]
pub async fn get_pending(node: web::Data<Node>) -> HttpResponse {
    let transactions = node.pending();
    HttpResponse::Ok().json(PendingResponse {
        size: transactions.len(),
        transactions,
    })
}
