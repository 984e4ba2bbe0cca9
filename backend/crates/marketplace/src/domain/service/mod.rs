//! Domain Services

pub mod offer_selector;
