//! Create Vendor Use Case
//!
//! Admin onboarding of a new vendor account.

use std::sync::Arc;

use auth::{AuthError, CredentialService, Email};

use crate::domain::entity::vendor::{Vendor, VendorDetails};
use crate::domain::repository::VendorRepository;
use crate::domain::validation::{required_text, text_list};
use crate::error::{MarketplaceError, MarketplaceResult};

/// Create vendor input
pub struct CreateVendorInput {
    pub name: String,
    pub owner_name: String,
    pub food_type: Vec<String>,
    pub pincode: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Create vendor use case
pub struct CreateVendorUseCase<V>
where
    V: VendorRepository,
{
    vendor_repo: Arc<V>,
    credentials: Arc<CredentialService>,
}

impl<V> CreateVendorUseCase<V>
where
    V: VendorRepository,
{
    pub fn new(vendor_repo: Arc<V>, credentials: Arc<CredentialService>) -> Self {
        Self {
            vendor_repo,
            credentials,
        }
    }

    pub async fn execute(&self, input: CreateVendorInput) -> MarketplaceResult<Vendor> {
        let email = Email::parse(&input.email).map_err(AuthError::from)?;

        if self.vendor_repo.find_by_email(&email).await?.is_some() {
            return Err(MarketplaceError::VendorEmailTaken);
        }

        let details = VendorDetails {
            name: required_text("name", &input.name)?,
            owner_name: required_text("ownerName", &input.owner_name)?,
            food_type: text_list("foodType", &input.food_type)?,
            pincode: required_text("pincode", &input.pincode)?,
            address: required_text("address", &input.address)?,
            phone: required_text("phone", &input.phone)?,
        };

        // Salt generation and hashing happen together
        let credential = self.credentials.create(input.password)?;

        let vendor = Vendor::register(details, email, credential);
        self.vendor_repo.create(&vendor).await?;

        tracing::info!(
            vendor_id = %vendor.id,
            email = %vendor.email,
            "Vendor created"
        );

        Ok(vendor)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::infra::InMemoryMarketplaceRepository;

    pub(crate) fn input(email: &str) -> CreateVendorInput {
        CreateVendorInput {
            name: "Curry House".into(),
            owner_name: "Asha".into(),
            food_type: vec!["veg".into(), "non-veg".into()],
            pincode: "560001".into(),
            address: "12 MG Road".into(),
            phone: "9876543210".into(),
            email: email.into(),
            password: "tandoori-nights".into(),
        }
    }

    fn use_case(
        repo: &InMemoryMarketplaceRepository,
    ) -> CreateVendorUseCase<InMemoryMarketplaceRepository> {
        CreateVendorUseCase::new(Arc::new(repo.clone()), Arc::new(CredentialService::default()))
    }

    #[tokio::test]
    async fn test_creates_vendor_with_hashed_credential() {
        let repo = InMemoryMarketplaceRepository::new();
        let vendor = use_case(&repo).execute(input("Chef@Example.com")).await.unwrap();

        assert_eq!(vendor.email.as_str(), "chef@example.com");
        assert_ne!(vendor.credential.password_hash_str(), "tandoori-nights");
        assert!(
            CredentialService::default()
                .verify("tandoori-nights".into(), &vendor.credential)
                .unwrap()
        );

        let stored = VendorRepository::find_all(&repo).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryMarketplaceRepository::new();
        let use_case = use_case(&repo);
        use_case.execute(input("chef@example.com")).await.unwrap();

        let result = use_case.execute(input("CHEF@example.com")).await;
        assert!(matches!(result, Err(MarketplaceError::VendorEmailTaken)));
    }

    #[tokio::test]
    async fn test_invalid_fields_rejected() {
        let repo = InMemoryMarketplaceRepository::new();
        let use_case = use_case(&repo);

        let bad_email = use_case.execute(input("not-an-email")).await;
        assert!(matches!(
            bad_email,
            Err(MarketplaceError::Auth(AuthError::InvalidEmail(_)))
        ));

        let mut blank_name = input("a@example.com");
        blank_name.name = "  ".into();
        assert!(matches!(
            use_case.execute(blank_name).await,
            Err(MarketplaceError::Validation(_))
        ));

        let mut weak = input("b@example.com");
        weak.password = "short".into();
        assert!(matches!(
            use_case.execute(weak).await,
            Err(MarketplaceError::Auth(AuthError::PasswordValidation(_)))
        ));

        assert!(VendorRepository::find_all(&repo).await.unwrap().is_empty());
    }
}
