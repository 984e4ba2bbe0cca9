//! Offer Eligibility
//!
//! An offer applies to a vendor when the vendor is on its vendor list or
//! the offer is generic. Each offer is returned at most once, in the order
//! the offers were given.

use kernel::id::VendorId;

use crate::domain::entity::offer::Offer;

pub fn select_eligible_offers<'a>(vendor_id: &VendorId, offers: &'a [Offer]) -> Vec<&'a Offer> {
    offers
        .iter()
        .filter(|offer| offer.lists_vendor(vendor_id) || offer.is_generic())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::offer::OfferType;
    use crate::domain::entity::offer::fixtures::terms;

    #[test]
    fn test_selects_listed_and_generic_offers() {
        let me = VendorId::new();
        let other = VendorId::new();
        let offers = vec![
            Offer::for_vendor(me, terms(OfferType::Vendor, "mine")),
            Offer::for_vendor(other, terms(OfferType::Vendor, "theirs")),
            Offer::with_vendors(Vec::new(), terms(OfferType::Generic, "everyone")),
        ];

        let selected = select_eligible_offers(&me, &offers);
        let titles: Vec<&str> = selected.iter().map(|o| o.terms.title.as_str()).collect();
        assert_eq!(titles, vec!["mine", "everyone"]);
    }

    #[test]
    fn test_generic_offer_listing_vendor_appears_once() {
        let me = VendorId::new();
        let offers = vec![Offer::for_vendor(me, terms(OfferType::Generic, "both"))];

        assert_eq!(select_eligible_offers(&me, &offers).len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let me = VendorId::new();
        let offers = vec![
            Offer::with_vendors(Vec::new(), terms(OfferType::Generic, "first")),
            Offer::with_vendors(vec![VendorId::new(), me], terms(OfferType::Vendor, "second")),
            Offer::with_vendors(Vec::new(), terms(OfferType::Generic, "third")),
        ];

        let titles: Vec<&str> = select_eligible_offers(&me, &offers)
            .iter()
            .map(|o| o.terms.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_nothing_applies() {
        let offers = vec![Offer::for_vendor(VendorId::new(), terms(OfferType::Vendor, "x"))];
        assert!(select_eligible_offers(&VendorId::new(), &offers).is_empty());
        assert!(select_eligible_offers(&VendorId::new(), &[]).is_empty());
    }
}
