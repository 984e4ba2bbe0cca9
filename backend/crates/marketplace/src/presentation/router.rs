//! Marketplace Routers
//!
//! `admin_router` and `vendor_router` are meant to be nested under
//! `/admin` and `/vendor`. Protected routes sit behind the session gate.

use auth::require_session;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
};

use crate::domain::repository::MarketplaceRepository;
use crate::presentation::handlers::{MarketplaceState, admin, vendor};

/// Create the admin router
pub fn admin_router<R>(state: MarketplaceState<R>) -> Router
where
    R: MarketplaceRepository,
{
    let protected = Router::new()
        .route("/delivery/verify", put(admin::verify_delivery_user::<R>))
        .route_layer(from_fn_with_state(state.gate(), require_session));

    Router::new()
        .route("/vendor", post(admin::create_vendor::<R>))
        .route("/vendors", get(admin::list_vendors::<R>))
        .route("/vendor/{id}", get(admin::get_vendor::<R>))
        .route("/transactions", get(admin::list_transactions::<R>))
        .route("/transaction/{id}", get(admin::get_transaction::<R>))
        .route("/delivery/users", get(admin::list_delivery_users::<R>))
        .merge(protected)
        .with_state(state)
}

/// Create the vendor router
pub fn vendor_router<R>(state: MarketplaceState<R>) -> Router
where
    R: MarketplaceRepository,
{
    let protected = Router::new()
        .route(
            "/profile",
            get(vendor::profile::<R>).patch(vendor::update_profile::<R>),
        )
        .route("/service", patch(vendor::update_service::<R>))
        .route("/food", post(vendor::add_food::<R>))
        .route("/foods", get(vendor::foods::<R>))
        .route("/orders", get(vendor::orders::<R>))
        .route("/order/{id}", get(vendor::order_details::<R>))
        .route("/order/{id}/process", put(vendor::process_order::<R>))
        .route("/offers", get(vendor::offers::<R>))
        .route("/offer", post(vendor::add_offer::<R>))
        .route("/offer/{id}", put(vendor::edit_offer::<R>))
        .route_layer(from_fn_with_state(state.gate(), require_session));

    Router::new()
        .route("/login", post(vendor::login::<R>))
        .route("/logout", post(vendor::logout::<R>))
        .merge(protected)
        .with_state(state)
}
