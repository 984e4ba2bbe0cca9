//! Domain Layer
//!
//! Contains entities, repository traits, validation rules and the offer
//! eligibility selector.

pub mod entity;
pub mod repository;
pub mod service;
pub mod validation;

// Re-exports
pub use entity::{
    delivery_user::DeliveryUser,
    food::Food,
    offer::{Offer, OfferTerms, OfferType, PromoType},
    order::{Order, OrderItem, OrderStatus, PopulatedOrder},
    transaction::Transaction,
    vendor::{Vendor, VendorDetails},
};
pub use repository::{
    DeliveryUserRepository, FoodRepository, MarketplaceRepository, OfferRepository,
    OrderRepository, TransactionRepository, VendorRepository,
};
pub use service::offer_selector::select_eligible_offers;
