//! Vendor Login Use Case
//!
//! Email + password in, signed session token out.

use std::sync::Arc;

use auth::{AuthError, CredentialService, Email, SessionPayload, SessionService};
use kernel::id::VendorId;

use crate::domain::repository::VendorRepository;
use crate::error::MarketplaceResult;

/// Vendor login input
pub struct VendorLoginInput {
    pub email: String,
    pub password: String,
}

/// Vendor login output
pub struct VendorLoginOutput {
    pub vendor_id: VendorId,
    pub token: String,
}

/// Vendor login use case
pub struct VendorLoginUseCase<V>
where
    V: VendorRepository,
{
    vendor_repo: Arc<V>,
    credentials: Arc<CredentialService>,
    sessions: Arc<SessionService>,
}

impl<V> VendorLoginUseCase<V>
where
    V: VendorRepository,
{
    pub fn new(
        vendor_repo: Arc<V>,
        credentials: Arc<CredentialService>,
        sessions: Arc<SessionService>,
    ) -> Self {
        Self {
            vendor_repo,
            credentials,
            sessions,
        }
    }

    /// Unknown email, malformed email and wrong password all fail the
    /// same way.
    pub async fn execute(&self, input: VendorLoginInput) -> MarketplaceResult<VendorLoginOutput> {
        let Ok(email) = Email::parse(&input.email) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(vendor) = self.vendor_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.credentials.verify(input.password, &vendor.credential)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let payload = SessionPayload::new(
            vendor.id.to_string(),
            vendor.email.as_str(),
            vendor.name.as_str(),
        );
        let token = self.sessions.generate_signature(&payload)?;

        tracing::info!(vendor_id = %vendor.id, "Vendor logged in");

        Ok(VendorLoginOutput {
            vendor_id: vendor.id,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_vendor::{CreateVendorUseCase, tests::input};
    use crate::error::MarketplaceError;
    use crate::infra::InMemoryMarketplaceRepository;
    use auth::AuthConfig;

    struct Fixture {
        login: VendorLoginUseCase<InMemoryMarketplaceRepository>,
        sessions: Arc<SessionService>,
        vendor_id: VendorId,
    }

    async fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryMarketplaceRepository::new());
        let credentials = Arc::new(CredentialService::default());
        let sessions = Arc::new(SessionService::new(&AuthConfig::new(b"login-secret".to_vec())));

        let vendor = CreateVendorUseCase::new(repo.clone(), credentials.clone())
            .execute(input("chef@example.com"))
            .await
            .unwrap();

        Fixture {
            login: VendorLoginUseCase::new(repo, credentials, sessions.clone()),
            sessions,
            vendor_id: vendor.id,
        }
    }

    fn login(email: &str, password: &str) -> VendorLoginInput {
        VendorLoginInput {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_with_identity() {
        let fx = fixture().await;
        let output = fx
            .login
            .execute(login("chef@example.com", "tandoori-nights"))
            .await
            .unwrap();

        assert_eq!(output.vendor_id, fx.vendor_id);
        let payload = fx.sessions.validate_signature(&output.token).unwrap();
        assert_eq!(payload.subject_id, fx.vendor_id.to_string());
        assert_eq!(payload.email, "chef@example.com");
        assert_eq!(payload.display_name, "Curry House");
    }

    #[tokio::test]
    async fn test_failures_are_indistinguishable() {
        let fx = fixture().await;

        for (email, password) in [
            ("chef@example.com", "wrong-password"),
            ("nobody@example.com", "tandoori-nights"),
            ("not-an-email", "tandoori-nights"),
            ("chef@example.com", ""),
        ] {
            let result = fx.login.execute(login(email, password)).await;
            assert!(
                matches!(
                    result,
                    Err(MarketplaceError::Auth(AuthError::InvalidCredentials))
                ),
                "{email} / {password}"
            );
        }
    }
}
