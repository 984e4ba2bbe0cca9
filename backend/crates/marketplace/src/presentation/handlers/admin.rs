//! Admin Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::{TransactionId, VendorId};
use uuid::Uuid;

use crate::application::AdminDirectoryUseCase;
use crate::application::CreateVendorUseCase;
use crate::domain::entity::{
    delivery_user::DeliveryUser, transaction::Transaction, vendor::Vendor,
};
use crate::domain::repository::MarketplaceRepository;
use crate::error::{MarketplaceError, MarketplaceResult};
use crate::presentation::dto::{CreateVendorRequest, VerifyDeliveryUserRequest};
use crate::presentation::handlers::MarketplaceState;

fn directory<R>(state: &MarketplaceState<R>) -> AdminDirectoryUseCase<R, R, R>
where
    R: MarketplaceRepository,
{
    AdminDirectoryUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone())
}

/// POST /admin/vendor
pub async fn create_vendor<R>(
    State(state): State<MarketplaceState<R>>,
    Json(req): Json<CreateVendorRequest>,
) -> MarketplaceResult<(StatusCode, Json<Vendor>)>
where
    R: MarketplaceRepository,
{
    let use_case = CreateVendorUseCase::new(state.repo.clone(), state.credentials.clone());
    let vendor = use_case.execute(req.into()).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// GET /admin/vendors
pub async fn list_vendors<R>(
    State(state): State<MarketplaceState<R>>,
) -> MarketplaceResult<Json<Vec<Vendor>>>
where
    R: MarketplaceRepository,
{
    Ok(Json(directory(&state).vendors().await?))
}

/// GET /admin/vendor/{id}
pub async fn get_vendor<R>(
    State(state): State<MarketplaceState<R>>,
    Path(id): Path<Uuid>,
) -> MarketplaceResult<Json<Vendor>>
where
    R: MarketplaceRepository,
{
    let vendor = directory(&state).vendor(&VendorId::from_uuid(id)).await?;
    Ok(Json(vendor))
}

/// GET /admin/transactions
pub async fn list_transactions<R>(
    State(state): State<MarketplaceState<R>>,
) -> MarketplaceResult<Json<Vec<Transaction>>>
where
    R: MarketplaceRepository,
{
    Ok(Json(directory(&state).transactions().await?))
}

/// GET /admin/transaction/{id}
pub async fn get_transaction<R>(
    State(state): State<MarketplaceState<R>>,
    Path(id): Path<Uuid>,
) -> MarketplaceResult<Json<Transaction>>
where
    R: MarketplaceRepository,
{
    let transaction = directory(&state)
        .transaction(&TransactionId::from_uuid(id))
        .await?;
    Ok(Json(transaction))
}

/// PUT /admin/delivery/verify
pub async fn verify_delivery_user<R>(
    State(state): State<MarketplaceState<R>>,
    Json(req): Json<VerifyDeliveryUserRequest>,
) -> MarketplaceResult<Json<DeliveryUser>>
where
    R: MarketplaceRepository,
{
    let id = req
        .id
        .ok_or_else(|| MarketplaceError::validation("_id is required"))?;
    let status = req
        .status
        .ok_or_else(|| MarketplaceError::validation("status is required"))?;
    let user = directory(&state).verify_delivery_user(&id, status).await?;
    Ok(Json(user))
}

/// GET /admin/delivery/users
pub async fn list_delivery_users<R>(
    State(state): State<MarketplaceState<R>>,
) -> MarketplaceResult<Json<Vec<DeliveryUser>>>
where
    R: MarketplaceRepository,
{
    Ok(Json(directory(&state).delivery_users().await?))
}
