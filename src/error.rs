use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by node operations and HTTP handlers.
#[derive(Debug, Clone, Error)]
pub enum NodeError {
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("malformed peer address: {0}")]
    MalformedPeerAddress(String),

    #[error("peer {peer} unreachable: {reason}")]
    PeerUnreachable { peer: String, reason: String },

    #[error("invalid chain: {0}")]
    InvalidChain(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for NodeError {
    fn status_code(&self) -> StatusCode {
        match self {
            NodeError::InvalidTransaction(_)
            | NodeError::MalformedPeerAddress(_)
            | NodeError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            NodeError::InvalidChain(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NodeError::PeerUnreachable { .. } => StatusCode::BAD_GATEWAY,
            NodeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

pub type Result<T> = std::result::Result<T, NodeError>;
