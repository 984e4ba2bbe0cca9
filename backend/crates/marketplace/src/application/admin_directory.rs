//! Admin Directory Use Case
//!
//! Admin views over vendors, transactions and delivery users, plus
//! delivery user verification.

use std::sync::Arc;

use kernel::id::{DeliveryUserId, TransactionId, VendorId};

use crate::domain::entity::{
    delivery_user::DeliveryUser, transaction::Transaction, vendor::Vendor,
};
use crate::domain::repository::{DeliveryUserRepository, TransactionRepository, VendorRepository};
use crate::error::{MarketplaceError, MarketplaceResult};

pub struct AdminDirectoryUseCase<V, T, D>
where
    V: VendorRepository,
    T: TransactionRepository,
    D: DeliveryUserRepository,
{
    vendor_repo: Arc<V>,
    transaction_repo: Arc<T>,
    delivery_repo: Arc<D>,
}

impl<V, T, D> AdminDirectoryUseCase<V, T, D>
where
    V: VendorRepository,
    T: TransactionRepository,
    D: DeliveryUserRepository,
{
    pub fn new(vendor_repo: Arc<V>, transaction_repo: Arc<T>, delivery_repo: Arc<D>) -> Self {
        Self {
            vendor_repo,
            transaction_repo,
            delivery_repo,
        }
    }

    pub async fn vendors(&self) -> MarketplaceResult<Vec<Vendor>> {
        self.vendor_repo.find_all().await
    }

    pub async fn vendor(&self, vendor_id: &VendorId) -> MarketplaceResult<Vendor> {
        self.vendor_repo
            .find_by_id(vendor_id)
            .await?
            .ok_or(MarketplaceError::VendorNotFound)
    }

    pub async fn transactions(&self) -> MarketplaceResult<Vec<Transaction>> {
        self.transaction_repo.find_all().await
    }

    pub async fn transaction(
        &self,
        transaction_id: &TransactionId,
    ) -> MarketplaceResult<Transaction> {
        self.transaction_repo
            .find_by_id(transaction_id)
            .await?
            .ok_or(MarketplaceError::TransactionNotFound)
    }

    pub async fn delivery_users(&self) -> MarketplaceResult<Vec<DeliveryUser>> {
        self.delivery_repo.find_all().await
    }

    pub async fn verify_delivery_user(
        &self,
        user_id: &DeliveryUserId,
        verified: bool,
    ) -> MarketplaceResult<DeliveryUser> {
        let mut user = self
            .delivery_repo
            .find_by_id(user_id)
            .await?
            .ok_or(MarketplaceError::DeliveryUserNotFound)?;

        user.set_verified(verified);
        self.delivery_repo.update(&user).await?;

        tracing::info!(delivery_user_id = %user.id, verified, "Delivery user verification set");

        Ok(user)
    }
}
