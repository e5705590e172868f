//! # rblog-auth-simple
//!
//! Argon2-based implementation of `AuthProvider`.
//! Handles password storage and salted, signed session tokens.

use anyhow::anyhow;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use rblog_core::traits::AuthProvider;
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub struct SimpleAuthProvider {
    /// Secret salt for signing session tokens. Rotating it (e.g., on
    /// restart with a fresh env value) invalidates every session.
    session_salt: String,
}

impl SimpleAuthProvider {
    /// Accepts a salt string (e.g., from an environment variable)
    pub fn new(salt: &str) -> Self {
        Self {
            session_salt: salt.to_string(),
        }
    }

    fn sign(&self, user_id: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.session_salt.as_bytes());
        hasher.update(user_id.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl AuthProvider for SimpleAuthProvider {
    /// Hashes a password with Argon2 and a fresh random salt.
    fn hash_password(&self, password: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("password hashing failed: {e}"))?;
        Ok(hash.to_string())
    }

    /// Verifies if a provided password matches a stored Argon2 hash.
    async fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(p) => p,
            Err(_) => return false,
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Session tokens are "{user_id}.{sig}" where sig is a salted SHA-256
    /// over the id. Stateless: nothing to store or clean up server-side.
    fn issue_session(&self, user_id: Uuid) -> String {
        let id = user_id.to_string();
        let sig = self.sign(&id);
        format!("{id}.{sig}")
    }

    fn verify_session(&self, token: &str) -> Option<Uuid> {
        let (id, sig) = token.split_once('.')?;
        if self.sign(id) != sig {
            return None;
        }
        Uuid::parse_str(id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn password_roundtrip() {
        let auth = SimpleAuthProvider::new("test-salt");
        let hash = auth.hash_password("hunter2hunter2").unwrap();

        assert!(auth.verify_password("hunter2hunter2", &hash).await);
        assert!(!auth.verify_password("wrong", &hash).await);
        assert!(!auth.verify_password("hunter2hunter2", "not-a-hash").await);
    }

    #[test]
    fn session_roundtrip_and_tamper_rejection() {
        let auth = SimpleAuthProvider::new("test-salt");
        let user_id = Uuid::now_v7();
        let token = auth.issue_session(user_id);

        assert_eq!(auth.verify_session(&token), Some(user_id));

        // Forged id with the original signature
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::now_v7(), sig);
        assert_eq!(auth.verify_session(&forged), None);

        assert_eq!(auth.verify_session("garbage"), None);
    }

    #[test]
    fn sessions_do_not_survive_a_salt_rotation() {
        let user_id = Uuid::now_v7();
        let token = SimpleAuthProvider::new("salt-a").issue_session(user_id);
        assert_eq!(SimpleAuthProvider::new("salt-b").verify_session(&token), None);
    }
}
