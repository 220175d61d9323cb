//! In-memory session store.
//!
//! Sessions are keyed by a random 256-bit hex id carried in an HttpOnly
//! cookie. A session starts at [`AuthLevel::Basic`] after password login
//! and is elevated in place after a successful TOTP verification.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};

pub const SESSION_COOKIE: &str = "piatto_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLevel {
    Basic,
    Elevated,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    pub can_totp: bool,
    pub level: AuthLevel,
    expires_at: Instant,
}

pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Create a basic-level session and return its id.
    pub fn create(&self, user_id: i64, name: &str, can_totp: bool) -> String {
        let id = new_session_id();
        self.sessions.insert(
            id.clone(),
            Session {
                user_id,
                name: name.to_string(),
                can_totp,
                level: AuthLevel::Basic,
                expires_at: Instant::now() + self.ttl,
            },
        );
        id
    }

    /// Look up a live session. Expired entries are evicted on access.
    pub fn get(&self, id: &str) -> Option<Session> {
        let expired = match self.sessions.get(id) {
            Some(session) if session.expires_at > Instant::now() => return Some(session.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.sessions.remove(id);
        }
        None
    }

    /// Raise a session to elevated level. Returns false when the session
    /// is gone or expired.
    pub fn elevate(&self, id: &str) -> bool {
        match self.sessions.get_mut(id) {
            Some(mut session) if session.expires_at > Instant::now() => {
                session.level = AuthLevel::Elevated;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&self, id: &str) {
        self.sessions.remove(id);
    }
}

fn new_session_id() -> String {
    let mut bytes = [0u8; 32];
    // SystemRandom only fails when the OS entropy source is broken
    SystemRandom::new()
        .fill(&mut bytes)
        .expect("system randomness unavailable");
    hex::encode(bytes)
}

/// Cookie attributes for issuing a session.
pub fn session_cookie(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

/// Cookie attributes for clearing a session on logout.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60))
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = store();
        let id = store.create(7, "alice", true);
        let session = store.get(&id).unwrap();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.name, "alice");
        assert!(session.can_totp);
        assert_eq!(session.level, AuthLevel::Basic);
    }

    #[test]
    fn ids_are_unique_and_opaque() {
        let store = store();
        let a = store.create(1, "a", false);
        let b = store.create(1, "a", false);
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn elevate_upgrades_in_place() {
        let store = store();
        let id = store.create(1, "a", true);
        assert!(store.elevate(&id));
        assert_eq!(store.get(&id).unwrap().level, AuthLevel::Elevated);
        assert!(!store.elevate("missing"));
    }

    #[test]
    fn remove_ends_the_session() {
        let store = store();
        let id = store.create(1, "a", false);
        store.remove(&id);
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn expired_sessions_are_gone() {
        let store = SessionStore::new(Duration::ZERO);
        let id = store.create(1, "a", false);
        assert!(store.get(&id).is_none());
        assert!(!store.elevate(&id));
    }
}
