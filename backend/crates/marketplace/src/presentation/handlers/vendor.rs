//! Vendor Handlers
//!
//! Everything except login and logout runs behind the session gate and
//! acts on the vendor named by the session.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::id::{OfferId, OrderId, VendorId};
use uuid::Uuid;

use auth::{AuthError, AuthenticatedContext};

use crate::application::{
    FoodUseCase, VendorLoginUseCase, VendorOffersUseCase, VendorOrdersUseCase,
    VendorProfileUseCase,
};
use crate::domain::entity::{
    food::Food,
    offer::{Offer, OfferTerms},
    order::{Order, PopulatedOrder},
    vendor::Vendor,
};
use crate::domain::repository::MarketplaceRepository;
use crate::error::{MarketplaceError, MarketplaceResult};
use crate::presentation::dto::{
    CreateFoodRequest, EditVendorRequest, ProcessOrderRequest, UpdateServiceRequest,
    VendorLoginRequest,
};
use crate::presentation::handlers::MarketplaceState;

/// Vendor named by the session
fn session_vendor(context: &AuthenticatedContext) -> MarketplaceResult<VendorId> {
    context
        .subject_id()
        .parse()
        .map_err(|_| MarketplaceError::Auth(AuthError::SessionInvalid))
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /vendor/login
pub async fn login<R>(
    State(state): State<MarketplaceState<R>>,
    Json(req): Json<VendorLoginRequest>,
) -> MarketplaceResult<impl IntoResponse>
where
    R: MarketplaceRepository,
{
    let use_case = VendorLoginUseCase::new(
        state.repo.clone(),
        state.credentials.clone(),
        state.sessions.clone(),
    );
    let output = use_case.execute(req.into()).await?;
    let cookie = state.sessions.session_cookie(&output.token);

    Ok(([(header::SET_COOKIE, cookie)], Json(output.token)))
}

/// POST /vendor/logout
///
/// Only clears the cookie; an already issued token stays valid until it
/// expires.
pub async fn logout<R>(State(state): State<MarketplaceState<R>>) -> impl IntoResponse
where
    R: MarketplaceRepository,
{
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, state.sessions.clear_cookie())],
    )
}

// ============================================================================
// Profile
// ============================================================================

/// GET /vendor/profile
pub async fn profile<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
) -> MarketplaceResult<Json<Vendor>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let vendor = VendorProfileUseCase::new(state.repo.clone())
        .get(&vendor_id)
        .await?;
    Ok(Json(vendor))
}

/// PATCH /vendor/profile
pub async fn update_profile<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
    Json(req): Json<EditVendorRequest>,
) -> MarketplaceResult<Json<Vendor>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let vendor = VendorProfileUseCase::new(state.repo.clone())
        .update(&vendor_id, req.into())
        .await?;
    Ok(Json(vendor))
}

/// PATCH /vendor/service
pub async fn update_service<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
    body: Bytes,
) -> MarketplaceResult<Json<Vendor>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let req = if body.is_empty() {
        UpdateServiceRequest::default()
    } else {
        serde_json::from_slice::<UpdateServiceRequest>(&body)
            .map_err(|e| MarketplaceError::validation(format!("Invalid body: {e}")))?
    };

    let vendor = VendorProfileUseCase::new(state.repo.clone())
        .toggle_service(&vendor_id, req.lat, req.lng)
        .await?;
    Ok(Json(vendor))
}

// ============================================================================
// Foods
// ============================================================================

/// POST /vendor/food
pub async fn add_food<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
    Json(req): Json<CreateFoodRequest>,
) -> MarketplaceResult<(StatusCode, Json<Vendor>)>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let vendor = FoodUseCase::new(state.repo.clone(), state.repo.clone())
        .add_food(&vendor_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// GET /vendor/foods
pub async fn foods<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
) -> MarketplaceResult<Json<Vec<Food>>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let foods = FoodUseCase::new(state.repo.clone(), state.repo.clone())
        .list_foods(&vendor_id)
        .await?;
    Ok(Json(foods))
}

// ============================================================================
// Orders
// ============================================================================

/// GET /vendor/orders
pub async fn orders<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
) -> MarketplaceResult<Json<Vec<PopulatedOrder>>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let orders = VendorOrdersUseCase::new(state.repo.clone(), state.repo.clone())
        .list(&vendor_id)
        .await?;
    Ok(Json(orders))
}

/// GET /vendor/order/{id}
pub async fn order_details<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
    Path(id): Path<Uuid>,
) -> MarketplaceResult<Json<PopulatedOrder>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let order = VendorOrdersUseCase::new(state.repo.clone(), state.repo.clone())
        .details(&vendor_id, &OrderId::from_uuid(id))
        .await?;
    Ok(Json(order))
}

/// PUT /vendor/order/{id}/process
pub async fn process_order<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
    Path(id): Path<Uuid>,
    Json(req): Json<ProcessOrderRequest>,
) -> MarketplaceResult<Json<Order>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let order = VendorOrdersUseCase::new(state.repo.clone(), state.repo.clone())
        .process(&vendor_id, &OrderId::from_uuid(id), req.into())
        .await?;
    Ok(Json(order))
}

// ============================================================================
// Offers
// ============================================================================

/// GET /vendor/offers
pub async fn offers<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
) -> MarketplaceResult<Json<Vec<Offer>>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let offers = VendorOffersUseCase::new(state.repo.clone(), state.repo.clone())
        .available(&vendor_id)
        .await?;
    Ok(Json(offers))
}

/// POST /vendor/offer
pub async fn add_offer<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
    Json(terms): Json<OfferTerms>,
) -> MarketplaceResult<(StatusCode, Json<Offer>)>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let offer = VendorOffersUseCase::new(state.repo.clone(), state.repo.clone())
        .create(&vendor_id, terms)
        .await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

/// PUT /vendor/offer/{id}
pub async fn edit_offer<R>(
    State(state): State<MarketplaceState<R>>,
    context: AuthenticatedContext,
    Path(id): Path<Uuid>,
    Json(terms): Json<OfferTerms>,
) -> MarketplaceResult<Json<Offer>>
where
    R: MarketplaceRepository,
{
    let vendor_id = session_vendor(&context)?;
    let offer = VendorOffersUseCase::new(state.repo.clone(), state.repo.clone())
        .edit(&vendor_id, &OfferId::from_uuid(id), terms)
        .await?;
    Ok(Json(offer))
}
