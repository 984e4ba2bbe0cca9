//! Stored Credential
//!
//! The persisted half of a password: hash plus the salt it was made with.

use platform::password::{HashedPassword, PasswordHashError, PasswordSalt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub password_hash: HashedPassword,
    pub salt: PasswordSalt,
}

impl Credential {
    pub fn new(password_hash: HashedPassword, salt: PasswordSalt) -> Self {
        Self {
            password_hash,
            salt,
        }
    }

    /// Rebuild from the two stored strings, rejecting malformed values
    pub fn from_stored(
        password_hash: impl Into<String>,
        salt: impl Into<String>,
    ) -> Result<Self, PasswordHashError> {
        Ok(Self {
            password_hash: HashedPassword::from_phc_string(password_hash)?,
            salt: PasswordSalt::parse(salt)?,
        })
    }

    pub fn password_hash_str(&self) -> &str {
        self.password_hash.as_phc_string()
    }

    pub fn salt_str(&self) -> &str {
        self.salt.as_str()
    }
}
