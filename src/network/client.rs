use futures::future::join_all;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

use crate::blockchain::Block;
use crate::error::{NodeError, Result};

/// Shape of a peer's `/get_chain` response.
#[derive(Deserialize)]
struct PeerChain {
    chain: Vec<Block>,
    length: usize,
}

/// Fetches peer chains over HTTP, each request bounded by a timeout.
#[derive(Clone)]
pub struct PeerClient {
    http: reqwest::Client,
}

impl PeerClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NodeError::Internal(format!("http client: {e}")))?;
        Ok(Self { http })
    }

    /// GET `http://<peer>/get_chain`. Transport failures and non-2xx answers
    /// are `PeerUnreachable`; an undecodable or inconsistent body is `InvalidChain`.
    pub async fn fetch_chain(&self, peer: &str) -> Result<Vec<Block>> {
        let url = format!("http://{peer}/get_chain");
        let unreachable = |e: reqwest::Error| NodeError::PeerUnreachable {
            peer: peer.to_string(),
            reason: e.to_string(),
        };

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(unreachable)?
            .error_for_status()
            .map_err(unreachable)?;

        let body: PeerChain = resp
            .json()
            .await
            .map_err(|e| NodeError::InvalidChain(format!("{peer} sent undecodable chain: {e}")))?;

        if body.length != body.chain.len() {
            return Err(NodeError::InvalidChain(format!(
                "{peer} reported length {} for {} blocks",
                body.length,
                body.chain.len()
            )));
        }
        debug!("PEER - fetched {} blocks from {}", body.length, peer);
        Ok(body.chain)
    }

    /// Fetch from every peer concurrently; one result per peer, in input order.
    pub async fn fetch_all(&self, peers: &[String]) -> Vec<(String, Result<Vec<Block>>)> {
        let fetches = peers.iter().map(|peer| async move {
            let result = self.fetch_chain(peer).await;
            (peer.clone(), result)
        });
        join_all(fetches).await
    }
}

#[cfg(test)]
mod tests {
    use super::PeerClient;
    use crate::blockchain::Block;
    use crate::error::NodeError;
    use crate::testing::{serve, silent_peer};
    use actix_web::{HttpResponse, web};
    use serde_json::json;
    use std::time::{Duration, Instant};

    #[actix_web::test]
    async fn unreachable_peer_is_reported_not_fatal() {
        let client = PeerClient::new(Duration::from_millis(500)).unwrap();
        // port 9 (discard) on localhost is not served in test environments
        let results = client.fetch_all(&["127.0.0.1:9".to_string()]).await;
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0].1,
            Err(NodeError::PeerUnreachable { .. })
        ));
    }

    #[actix_web::test]
    async fn silent_peer_times_out() {
        let timeout = Duration::from_millis(300);
        let client = PeerClient::new(timeout).unwrap();
        let peer = silent_peer().to_string();

        let t0 = Instant::now();
        let result = client.fetch_chain(&peer).await;
        let elapsed = t0.elapsed();

        assert!(matches!(result, Err(NodeError::PeerUnreachable { .. })));
        assert!(elapsed >= timeout);
        assert!(elapsed < timeout * 10, "took {elapsed:?}");
    }

    #[actix_web::test]
    async fn inconsistent_length_is_invalid_chain() {
        let body = json!({ "chain": [Block::genesis()], "length": 5 });
        let (addr, handle) = serve(move |cfg| {
            let body = body.clone();
            cfg.route(
                "/get_chain",
                web::get().to(move || {
                    let body = body.clone();
                    async move { HttpResponse::Ok().json(body) }
                }),
            );
        });

        let client = PeerClient::new(Duration::from_secs(2)).unwrap();
        let result = client.fetch_chain(&addr.to_string()).await;
        assert!(matches!(result, Err(NodeError::InvalidChain(_))));
        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn non_json_body_is_invalid_chain() {
        let (addr, handle) = serve(|cfg| {
            cfg.route(
                "/get_chain",
                web::get().to(|| async { HttpResponse::Ok().body("not a chain") }),
            );
        });

        let client = PeerClient::new(Duration::from_secs(2)).unwrap();
        let result = client.fetch_chain(&addr.to_string()).await;
        assert!(matches!(result, Err(NodeError::InvalidChain(_))));
        handle.stop(true).await;
    }
}
