//! Offer Entity

use chrono::{DateTime, Utc};
use kernel::id::{OfferId, VendorId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OfferType {
    /// Applies to the vendors listed on the offer
    Vendor,
    /// Applies to every vendor
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PromoType {
    User,
    All,
    Bank,
    Card,
}

impl OfferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferType::Vendor => "VENDOR",
            OfferType::Generic => "GENERIC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "VENDOR" => Some(OfferType::Vendor),
            "GENERIC" => Some(OfferType::Generic),
            _ => None,
        }
    }
}

impl PromoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoType::User => "USER",
            PromoType::All => "ALL",
            PromoType::Bank => "BANK",
            PromoType::Card => "CARD",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "USER" => Some(PromoType::User),
            "ALL" => Some(PromoType::All),
            "BANK" => Some(PromoType::Bank),
            "CARD" => Some(PromoType::Card),
            _ => None,
        }
    }
}

/// Editable terms of an offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferTerms {
    pub offer_type: OfferType,
    pub title: String,
    pub description: String,
    pub min_value: f64,
    pub offer_amount: f64,
    pub start_validity: Option<DateTime<Utc>>,
    pub end_validity: Option<DateTime<Utc>>,
    pub promocode: String,
    pub promo_type: PromoType,
    #[serde(default)]
    pub bank: Vec<String>,
    #[serde(default)]
    pub bins: Vec<i64>,
    pub pincode: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id")]
    pub id: OfferId,
    pub vendors: Vec<VendorId>,
    #[serde(flatten)]
    pub terms: OfferTerms,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    /// Offer owned by `vendor_id`
    pub fn for_vendor(vendor_id: VendorId, terms: OfferTerms) -> Self {
        Self::with_vendors(vec![vendor_id], terms)
    }

    pub fn with_vendors(vendors: Vec<VendorId>, terms: OfferTerms) -> Self {
        let now = Utc::now();
        Self {
            id: OfferId::new(),
            vendors,
            terms,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn lists_vendor(&self, vendor_id: &VendorId) -> bool {
        self.vendors.contains(vendor_id)
    }

    pub fn is_generic(&self) -> bool {
        self.terms.offer_type == OfferType::Generic
    }

    /// Replace the terms; the vendor list stays as it was
    pub fn edit(&mut self, terms: OfferTerms) {
        self.terms = terms;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn terms(offer_type: OfferType, title: &str) -> OfferTerms {
        OfferTerms {
            offer_type,
            title: title.to_string(),
            description: "Flat discount".to_string(),
            min_value: 300.0,
            offer_amount: 50.0,
            start_validity: None,
            end_validity: None,
            promocode: "SAVE50".to_string(),
            promo_type: PromoType::All,
            bank: Vec::new(),
            bins: Vec::new(),
            pincode: "560001".to_string(),
            is_active: true,
        }
    }
}
