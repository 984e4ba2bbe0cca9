//! Vendor Offers Use Case
//!
//! Listing the offers a vendor may apply, creating vendor offers, and
//! editing offers the vendor is listed on.

use std::sync::Arc;

use kernel::id::{OfferId, VendorId};

use crate::domain::entity::offer::{Offer, OfferTerms};
use crate::domain::repository::{OfferRepository, VendorRepository};
use crate::domain::service::offer_selector::select_eligible_offers;
use crate::domain::validation::{non_negative, required_text};
use crate::error::{MarketplaceError, MarketplaceResult};

pub struct VendorOffersUseCase<O, V>
where
    O: OfferRepository,
    V: VendorRepository,
{
    offer_repo: Arc<O>,
    vendor_repo: Arc<V>,
}

impl<O, V> VendorOffersUseCase<O, V>
where
    O: OfferRepository,
    V: VendorRepository,
{
    pub fn new(offer_repo: Arc<O>, vendor_repo: Arc<V>) -> Self {
        Self {
            offer_repo,
            vendor_repo,
        }
    }

    pub async fn available(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<Offer>> {
        let offers = self.offer_repo.find_all().await?;
        Ok(select_eligible_offers(vendor_id, &offers)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn create(
        &self,
        vendor_id: &VendorId,
        terms: OfferTerms,
    ) -> MarketplaceResult<Offer> {
        let terms = validate_terms(terms)?;

        let vendor = self
            .vendor_repo
            .find_by_id(vendor_id)
            .await?
            .ok_or(MarketplaceError::VendorNotFound)?;

        let offer = Offer::for_vendor(vendor.id, terms);
        self.offer_repo.create(&offer).await?;

        tracing::info!(vendor_id = %vendor.id, offer_id = %offer.id, "Offer created");

        Ok(offer)
    }

    pub async fn edit(
        &self,
        vendor_id: &VendorId,
        offer_id: &OfferId,
        terms: OfferTerms,
    ) -> MarketplaceResult<Offer> {
        let terms = validate_terms(terms)?;

        let mut offer = self
            .offer_repo
            .find_by_id(offer_id)
            .await?
            .ok_or(MarketplaceError::OfferNotFound)?;

        if !offer.lists_vendor(vendor_id) {
            return Err(MarketplaceError::Forbidden(
                "Offer does not belong to this vendor".to_string(),
            ));
        }

        offer.edit(terms);
        self.offer_repo.update(&offer).await?;

        tracing::info!(vendor_id = %vendor_id, offer_id = %offer.id, "Offer edited");

        Ok(offer)
    }
}

fn validate_terms(mut terms: OfferTerms) -> MarketplaceResult<OfferTerms> {
    terms.title = required_text("title", &terms.title)?;
    terms.pincode = required_text("pincode", &terms.pincode)?;
    terms.min_value = non_negative("minValue", terms.min_value)?;
    terms.offer_amount = non_negative("offerAmount", terms.offer_amount)?;

    if let (Some(start), Some(end)) = (terms.start_validity, terms.end_validity) {
        if end < start {
            return Err(MarketplaceError::validation(
                "endValidity must not be before startValidity",
            ));
        }
    }

    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_vendor::{CreateVendorUseCase, tests::input};
    use crate::domain::entity::offer::OfferType;
    use crate::domain::entity::offer::fixtures::terms;
    use crate::infra::InMemoryMarketplaceRepository;
    use auth::CredentialService;
    use chrono::{TimeDelta, Utc};

    type Offers = VendorOffersUseCase<InMemoryMarketplaceRepository, InMemoryMarketplaceRepository>;

    async fn setup() -> (Offers, Arc<InMemoryMarketplaceRepository>, VendorId, VendorId) {
        let repo = Arc::new(InMemoryMarketplaceRepository::new());
        let creator = CreateVendorUseCase::new(repo.clone(), Arc::new(CredentialService::default()));
        let me = creator.execute(input("me@example.com")).await.unwrap();
        let other = creator.execute(input("other@example.com")).await.unwrap();
        (
            VendorOffersUseCase::new(repo.clone(), repo.clone()),
            repo,
            me.id,
            other.id,
        )
    }

    #[tokio::test]
    async fn test_available_offers() {
        let (offers, repo, me, other) = setup().await;

        offers.create(&me, terms(OfferType::Vendor, "mine")).await.unwrap();
        offers.create(&other, terms(OfferType::Vendor, "theirs")).await.unwrap();
        OfferRepository::create(
            repo.as_ref(),
            &Offer::with_vendors(Vec::new(), terms(OfferType::Generic, "everyone")),
        )
        .await
        .unwrap();

        let titles: Vec<String> = offers
            .available(&me)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.terms.title)
            .collect();
        assert_eq!(titles, vec!["mine", "everyone"]);
    }

    #[tokio::test]
    async fn test_edit_own_offer() {
        let (offers, _, me, _) = setup().await;
        let offer = offers.create(&me, terms(OfferType::Vendor, "draft")).await.unwrap();

        let mut revised = terms(OfferType::Vendor, "final");
        revised.offer_amount = 75.0;
        let edited = offers.edit(&me, &offer.id, revised).await.unwrap();

        assert_eq!(edited.terms.title, "final");
        assert_eq!(edited.terms.offer_amount, 75.0);
        assert_eq!(edited.vendors, vec![me]);
    }

    #[tokio::test]
    async fn test_edit_foreign_offer_forbidden() {
        let (offers, _, me, other) = setup().await;
        let offer = offers.create(&other, terms(OfferType::Vendor, "theirs")).await.unwrap();

        let result = offers.edit(&me, &offer.id, terms(OfferType::Vendor, "hijack")).await;
        assert!(matches!(result, Err(MarketplaceError::Forbidden(_))));

        let result = offers
            .edit(&me, &OfferId::new(), terms(OfferType::Vendor, "ghost"))
            .await;
        assert!(matches!(result, Err(MarketplaceError::OfferNotFound)));
    }

    #[tokio::test]
    async fn test_invalid_terms_rejected() {
        let (offers, _, me, _) = setup().await;

        let mut negative = terms(OfferType::Vendor, "neg");
        negative.offer_amount = -10.0;
        assert!(matches!(
            offers.create(&me, negative).await,
            Err(MarketplaceError::Validation(_))
        ));

        let mut backwards = terms(OfferType::Vendor, "backwards");
        let now = Utc::now();
        backwards.start_validity = Some(now);
        backwards.end_validity = Some(now - TimeDelta::days(1));
        assert!(matches!(
            offers.create(&me, backwards).await,
            Err(MarketplaceError::Validation(_))
        ));
    }
}
