// Per-client shared state
// Token data and the last raw response share one lock.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// State shared between the token manager and the request pipeline
#[derive(Debug, Default)]
pub struct SessionState {
    /// Current bearer token
    pub token: Option<String>,

    /// When the current token was obtained
    pub obtained_at: Option<DateTime<Utc>>,

    /// Bumped on every successful token replacement
    pub generation: u64,

    /// Body of the most recent response, overwritten on every call
    pub last_raw: Bytes,
}

impl SessionState {
    /// Replace the token wholesale and restart its lifetime
    pub fn install_token(&mut self, token: String, now: DateTime<Utc>) {
        self.token = Some(token);
        self.obtained_at = Some(now);
        self.generation += 1;
    }
}

pub type SharedSession = Arc<RwLock<SessionState>>;

pub fn new_shared() -> SharedSession {
    Arc::new(RwLock::new(SessionState::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_token_bumps_generation() {
        let mut state = SessionState::default();
        assert_eq!(state.generation, 0);

        let now = Utc::now();
        state.install_token("first".to_string(), now);
        assert_eq!(state.token.as_deref(), Some("first"));
        assert_eq!(state.obtained_at, Some(now));
        assert_eq!(state.generation, 1);

        state.install_token("second".to_string(), now);
        assert_eq!(state.token.as_deref(), Some("second"));
        assert_eq!(state.generation, 2);
    }
}
