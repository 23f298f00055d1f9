use actix_web::http::Uri;
use std::collections::BTreeSet;

use crate::error::{NodeError, Result};

/// Known peers, stored as normalised `host:port`. Grows only by registration.
#[derive(Debug, Default)]
pub struct PeerRegistry {
    peers: BTreeSet<String>,
}

/// Reduce `http://host:port/...` or bare `host:port` to `host:port`.
pub fn normalize_address(address: &str) -> Result<String> {
    let trimmed = address.trim();
    let malformed = || NodeError::MalformedPeerAddress(format!("{address:?}"));

    if trimmed.is_empty() {
        return Err(malformed());
    }
    let uri: Uri = trimmed.parse().map_err(|_| malformed())?;

    // peers are always fetched over plain http
    if uri.scheme_str().is_some_and(|scheme| scheme != "http") {
        return Err(malformed());
    }
    let authority = uri.authority().ok_or_else(malformed)?;
    if authority.host().is_empty() || authority.as_str().contains('@') {
        return Err(malformed());
    }
    Ok(authority.as_str().to_ascii_lowercase())
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self {
            peers: BTreeSet::new(),
        }
    }

    /// Add one peer. Returns `false` if it was already known.
    pub fn register(&mut self, address: &str) -> Result<bool> {
        let peer = normalize_address(address)?;
        Ok(self.peers.insert(peer))
    }

    /// Add every address, or none of them if any is malformed.
    /// Returns how many were new.
    pub fn register_all<S: AsRef<str>>(&mut self, addresses: &[S]) -> Result<usize> {
        for address in addresses {
            normalize_address(address.as_ref())?;
        }
        let mut added = 0;
        for address in addresses {
            if self.register(address.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn list(&self) -> Vec<String> {
        self.peers.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
