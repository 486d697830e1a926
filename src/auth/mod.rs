//! Local single-account auth gate.
//!
//! Exactly one credential record exists at a time; signing up again replaces
//! it. Passwords are stored as salted argon2 PHC strings; nothing reversible
//! is persisted.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::errors::TrackerError;
use crate::storage::{keys, StorageBackend};

/// Authentication failures; all recoverable by retrying or switching mode.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("no account exists yet")]
    NoAccount,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("credential hash error: {0}")]
    Hash(String),
    #[error(transparent)]
    Storage(#[from] TrackerError),
}

/// The single stored account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub username: String,
    pub password_hash: String,
}

/// Where the gate currently sits in the signup/login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Signup,
    Login,
    Authenticated,
}

pub struct AuthGate {
    storage: Arc<dyn StorageBackend>,
    state: AuthState,
    session_user: Option<String>,
}

impl AuthGate {
    /// Determines the initial state from the stored record: `Signup` on a
    /// first run, `Login` when an account already exists.
    pub fn open(storage: Arc<dyn StorageBackend>) -> Self {
        let state = match load_record(storage.as_ref()) {
            Ok(Some(_)) => AuthState::Login,
            Ok(None) => AuthState::Signup,
            Err(err) => {
                warn!("unable to read stored credentials, starting at signup: {err}");
                AuthState::Signup
            }
        };
        Self {
            storage,
            state,
            session_user: None,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    pub fn session_user(&self) -> Option<&str> {
        self.session_user.as_deref()
    }

    /// Creates (or replaces) the local account and authenticates the session.
    pub fn signup(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| AuthError::Hash(err.to_string()))?
            .to_string();
        let record = CredentialRecord {
            username: username.to_string(),
            password_hash,
        };
        let json = serde_json::to_string(&record).map_err(TrackerError::from)?;
        self.storage.set(keys::CREDENTIALS, &json)?;
        self.session_user = Some(record.username);
        self.state = AuthState::Authenticated;
        Ok(())
    }

    /// Checks the supplied credentials against the stored record. With no
    /// record the gate falls back to `Signup`; a mismatch leaves the state
    /// unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let record = match load_record(self.storage.as_ref())? {
            Some(record) => record,
            None => {
                self.state = AuthState::Signup;
                return Err(AuthError::NoAccount);
            }
        };
        if record.username != username.trim() {
            return Err(AuthError::InvalidCredentials);
        }
        let parsed = PasswordHash::new(&record.password_hash)
            .map_err(|err| AuthError::Hash(err.to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => AuthError::InvalidCredentials,
                other => AuthError::Hash(other.to_string()),
            })?;
        self.session_user = Some(record.username);
        self.state = AuthState::Authenticated;
        Ok(())
    }

    /// Ends the session without touching the stored record.
    pub fn logout(&mut self) {
        self.session_user = None;
        self.state = AuthState::Login;
    }
}

fn load_record(storage: &dyn StorageBackend) -> Result<Option<CredentialRecord>, AuthError> {
    let json = match storage.get(keys::CREDENTIALS)? {
        Some(json) => json,
        None => return Ok(None),
    };
    match serde_json::from_str(&json) {
        Ok(record) => Ok(Some(record)),
        Err(err) => {
            warn!("stored credential record is malformed, treating as absent: {err}");
            Ok(None)
        }
    }
}
