use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

/// Process-local record of tokens that must be rejected despite remaining
/// cryptographically valid.
///
/// Each entry carries the expiry instant of the token it revokes. Once that
/// instant passes the token is rejected by signature validation anyway, so
/// the entry is swept. This bounds the list to tokens revoked within the
/// last validity window instead of growing for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct RevocationList {
    entries: Arc<DashMap<String, DateTime<Utc>>>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke a token until `expires_at`.
    pub fn insert(&self, token: &str, expires_at: DateTime<Utc>) {
        self.sweep(Utc::now());
        self.entries.insert(token.to_owned(), expires_at);
    }

    /// Whether the token is currently revoked.
    pub fn contains(&self, token: &str) -> bool {
        let now = Utc::now();
        match self.entries.get(token) {
            Some(entry) if *entry.value() > now => true,
            Some(entry) => {
                // The token expired on its own; the entry is stale.
                drop(entry);
                self.entries.remove(token);
                false
            }
            None => false,
        }
    }

    fn sweep(&self, now: DateTime<Utc>) {
        self.entries.retain(|_, expires_at| *expires_at > now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
