//! Password Hashing and Verification
//!
//! Salted password credentials with:
//! - Argon2id hashing (memory-hard, adaptive cost)
//! - Caller-held, per-credential random salts
//! - Zeroization of clear text passwords
//! - Constant-time comparison of recomputed hashes
//!
//! The salt is stored next to the hash, so verifying means recomputing
//! `hash(entered, stored_salt)` and comparing it against the stored hash.
//! Both the hash and the salt are opaque strings for the storage layer.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::constant_time_eq;

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length accepted at registration
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Stored or supplied salt is not a valid B64 salt string
    #[error("Invalid password salt")]
    InvalidSalt,

    /// Stored hash is not a PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a password for a new credential, enforcing the length and
    /// character policy.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count code points, not bytes
        let char_count = raw.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if raw
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(raw))
    }

    /// Wrap a password entered at login.
    ///
    /// Entered passwords are only ever compared, so the registration
    /// policy does not apply to them.
    pub fn entered(raw: String) -> Self {
        Self(raw)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Salt
// ============================================================================

/// Per-credential random salt, B64 encoded (PHC salt alphabet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordSalt(String);

impl PasswordSalt {
    /// Parse a stored salt
    pub fn parse(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let salt = s.into();
        SaltString::from_b64(&salt).map_err(|_| PasswordHashError::InvalidSalt)?;
        Ok(Self(salt))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Credential Hasher
// ============================================================================

/// Salt generation, hashing and verification for stored credentials.
///
/// Built once from configuration; the optional pepper is an
/// application-wide secret appended to every password before hashing.
#[derive(Clone, Default)]
pub struct CredentialHasher {
    pepper: Option<Zeroizing<Vec<u8>>>,
}

impl CredentialHasher {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self {
            pepper: pepper.map(Zeroizing::new),
        }
    }

    /// Fresh 128-bit salt from the OS RNG
    pub fn generate_salt(&self) -> PasswordSalt {
        PasswordSalt(SaltString::generate(&mut OsRng).as_str().to_string())
    }

    /// Hash `password` with `salt` using Argon2id default parameters.
    ///
    /// Deterministic for a given (password, salt, pepper).
    pub fn generate_password(
        &self,
        password: &ClearTextPassword,
        salt: &PasswordSalt,
    ) -> Result<HashedPassword, PasswordHashError> {
        let salt =
            SaltString::from_b64(salt.as_str()).map_err(|_| PasswordHashError::InvalidSalt)?;
        let input = self.peppered(password);

        let hash = Argon2::default()
            .hash_password(&input, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// Recompute the hash for `entered` with the stored salt and compare it
    /// to `stored` in constant time.
    pub fn validate_password(
        &self,
        entered: &ClearTextPassword,
        stored: &HashedPassword,
        salt: &PasswordSalt,
    ) -> Result<bool, PasswordHashError> {
        let computed = self.generate_password(entered, salt)?;
        Ok(constant_time_eq(
            computed.as_phc_string().as_bytes(),
            stored.as_phc_string().as_bytes(),
        ))
    }

    fn peppered(&self, password: &ClearTextPassword) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(password.as_bytes().to_vec());
        if let Some(pepper) = &self.pepper {
            bytes.extend_from_slice(pepper);
        }
        bytes
    }
}

impl fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
