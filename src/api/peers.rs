use actix_web::{HttpResponse, get, post, web};

use super::models::{ConnectRequest, ConnectResponse, PeersResponse};
use crate::error::NodeError;
use crate::node::Node;

/// Register peers by address; already-known peers are ignored.
#[post("/connect_node")]
pub async fn connect_node(
    node: web::Data<Node>,
    body: web::Json<ConnectRequest>,
) -> Result<HttpResponse, NodeError> {
    let nodes = match body.into_inner().nodes {
        Some(nodes) if !nodes.is_empty() => nodes,
        _ => {
            return Err(NodeError::MalformedPeerAddress(
                "request must list at least one node".into(),
            ));
        }
    };

    let total_nodes = node.register_peers(&nodes)?;
    Ok(HttpResponse::Created().json(ConnectResponse {
        message: "All the nodes are now connected. The chain now contains the following nodes:",
        total_nodes,
    }))
}

#[get("/nodes")]
pub async fn list_nodes(node: web::Data<Node>) -> HttpResponse {
    HttpResponse::Ok().json(PeersResponse {
        total_nodes: node.peers(),
    })
}
