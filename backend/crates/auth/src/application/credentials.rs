//! Credential Service
//!
//! Creates salted credentials at registration and checks entered
//! passwords against them at login.

use platform::password::{ClearTextPassword, CredentialHasher};

use crate::application::config::AuthConfig;
use crate::domain::credential::Credential;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Default)]
pub struct CredentialService {
    hasher: CredentialHasher,
}

impl CredentialService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            hasher: CredentialHasher::new(config.pepper().map(<[u8]>::to_vec)),
        }
    }

    /// Apply the password policy, then hash with a fresh salt
    pub fn create(&self, raw_password: String) -> AuthResult<Credential> {
        let password = ClearTextPassword::new(raw_password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let salt = self.hasher.generate_salt();
        let password_hash = self.hasher.generate_password(&password, &salt)?;
        Ok(Credential::new(password_hash, salt))
    }

    /// `Ok(false)` on mismatch; `Err` only if the stored credential is unusable
    pub fn verify(&self, entered: String, stored: &Credential) -> AuthResult<bool> {
        let entered = ClearTextPassword::entered(entered);
        if entered.is_empty() {
            return Ok(false);
        }
        Ok(self
            .hasher
            .validate_password(&entered, &stored.password_hash, &stored.salt)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_verify() {
        let credentials = CredentialService::default();
        let stored = credentials.create("tandoori-42".to_string()).unwrap();

        assert!(credentials.verify("tandoori-42".to_string(), &stored).unwrap());
        assert!(!credentials.verify("tandoori-43".to_string(), &stored).unwrap());
        assert!(!credentials.verify(String::new(), &stored).unwrap());
    }

    #[test]
    fn test_each_credential_gets_its_own_salt() {
        let credentials = CredentialService::default();
        let a = credentials.create("same-password".to_string()).unwrap();
        let b = credentials.create("same-password".to_string()).unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[test]
    fn test_policy_rejects_short_password() {
        let result = CredentialService::default().create("short".to_string());
        assert!(matches!(result, Err(AuthError::PasswordValidation(_))));
    }

    #[test]
    fn test_pepper_binds_credentials() {
        let peppered = CredentialService::new(&AuthConfig {
            password_pepper: Some(b"kitchen-pepper".to_vec()),
            ..AuthConfig::new(b"secret".to_vec())
        });
        let stored = peppered.create("biryani-2024".to_string()).unwrap();

        assert!(peppered.verify("biryani-2024".to_string(), &stored).unwrap());
        assert!(
            !CredentialService::default()
                .verify("biryani-2024".to_string(), &stored)
                .unwrap()
        );
    }

    #[test]
    fn test_stored_strings_rebuild_credential() {
        let credentials = CredentialService::default();
        let stored = credentials.create("paneer-tikka".to_string()).unwrap();
        let rebuilt =
            Credential::from_stored(stored.password_hash_str(), stored.salt_str()).unwrap();
        assert!(credentials.verify("paneer-tikka".to_string(), &rebuilt).unwrap());
    }
}
