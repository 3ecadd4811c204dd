//! Auth Gate
//!
//! Issues, validates, and refreshes session credentials against the
//! document store's user collection and a per-client session slot. Token
//! possession is the sole credential for mutating routes; rotation only
//! happens through an explicit refresh.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{Credentials, UserRecord};
use crate::session::{SessionStore, FIELD_TOKEN, FIELD_USERNAME};
use crate::store::DocumentStore;

// == Auth Gate ==
/// Session-based authentication gate.
pub struct AuthGate {
    /// User collection lives in the document store
    documents: Arc<dyn DocumentStore>,
    /// Per-client session slots
    sessions: Arc<dyn SessionStore>,
}

impl AuthGate {
    // == Constructor ==
    /// Creates a new gate over the given adapters.
    pub fn new(documents: Arc<dyn DocumentStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            documents,
            sessions,
        }
    }

    // == Sign In ==
    /// Verifies credentials and issues a fresh session token into the
    /// given slot.
    ///
    /// The failure message never reveals whether the username exists.
    pub async fn sign_in(&self, slot: &str, credentials: &Credentials) -> Result<()> {
        let digest = digest_password(&credentials.password);

        let user = self
            .documents
            .find_user_with_digest(&credentials.username, &digest)
            .await?;

        if user.is_none() {
            return Err(ApiError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let token = new_session_token();
        self.sessions
            .set(slot, FIELD_USERNAME, &credentials.username)
            .await?;
        self.sessions.set(slot, FIELD_TOKEN, &token).await?;
        self.sessions.persist(slot).await?;

        info!(username = %credentials.username, "User signed in");
        Ok(())
    }

    // == Sign Up ==
    /// Stores a new user record. Does not authenticate the caller.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<()> {
        let existing = self.documents.find_user(&credentials.username).await?;
        if existing.is_some() {
            return Err(ApiError::InvalidInput("User already exists".to_string()));
        }

        let user = UserRecord {
            username: credentials.username.clone(),
            password_digest: digest_password(&credentials.password),
        };
        self.documents.insert_user(&user).await?;

        info!(username = %credentials.username, "User created");
        Ok(())
    }

    // == Refresh ==
    /// Rotates the session token in the given slot.
    ///
    /// The old token is invalidated immediately; there is no window during
    /// which both tokens are accepted.
    pub async fn refresh(&self, slot: &str) -> Result<()> {
        let current = self.sessions.get(slot, FIELD_TOKEN).await?;
        if current.is_none() {
            return Err(ApiError::Unauthorized("Invalid session".to_string()));
        }

        let token = new_session_token();
        self.sessions.set(slot, FIELD_TOKEN, &token).await?;
        self.sessions.persist(slot).await?;

        info!("New session issued");
        Ok(())
    }

    // == Sign Out ==
    /// Clears the session slot unconditionally. Succeeds even if no
    /// session existed.
    pub async fn sign_out(&self, slot: &str) -> Result<()> {
        self.sessions.clear(slot).await?;
        self.sessions.persist(slot).await?;

        info!("User signed out");
        Ok(())
    }

    // == Require Auth ==
    /// Gate applied to mutating operations: fails with Forbidden when no
    /// token is present in the slot. Presence is the whole check; there is
    /// no freshness or expiry validation.
    pub async fn require_auth(&self, slot: &str) -> Result<()> {
        let token = self.sessions.get(slot, FIELD_TOKEN).await?;
        if token.is_none() {
            return Err(ApiError::Forbidden("Not logged in".to_string()));
        }
        Ok(())
    }

    // == Session Token Peek ==
    /// Returns the token currently held by a slot, if any. Used by tests
    /// to observe rotation.
    pub async fn current_token(&self, slot: &str) -> Result<Option<String>> {
        self.sessions.get(slot, FIELD_TOKEN).await
    }
}

// == Password Digest ==
/// Computes the deterministic one-way digest stored for a password.
///
/// A fresh hasher is constructed per call so digests never depend on
/// anything but the supplied password.
fn digest_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

// == Token Generation ==
/// Generates a fresh unpredictable session token.
fn new_session_token() -> String {
    Uuid::new_v4().simple().to_string()
}
