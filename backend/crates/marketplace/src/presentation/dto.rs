//! API DTOs (Data Transfer Objects)

use kernel::id::DeliveryUserId;
use serde::Deserialize;

use crate::application::{
    CreateFoodInput, CreateVendorInput, EditVendorInput, ProcessOrderInput, VendorLoginInput,
};

// ============================================================================
// Admin
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorRequest {
    pub name: String,
    pub owner_name: String,
    #[serde(default)]
    pub food_type: Vec<String>,
    pub pincode: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl From<CreateVendorRequest> for CreateVendorInput {
    fn from(req: CreateVendorRequest) -> Self {
        Self {
            name: req.name,
            owner_name: req.owner_name,
            food_type: req.food_type,
            pincode: req.pincode,
            address: req.address,
            phone: req.phone,
            email: req.email,
            password: req.password,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyDeliveryUserRequest {
    #[serde(rename = "_id")]
    pub id: Option<DeliveryUserId>,
    pub status: Option<bool>,
}

// ============================================================================
// Vendor
// ============================================================================

#[derive(Clone, Deserialize)]
pub struct VendorLoginRequest {
    pub email: String,
    pub password: String,
}

impl From<VendorLoginRequest> for VendorLoginInput {
    fn from(req: VendorLoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditVendorRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub food_type: Vec<String>,
}

impl From<EditVendorRequest> for EditVendorInput {
    fn from(req: EditVendorRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            phone: req.phone,
            food_type: req.food_type,
        }
    }
}

/// Body is optional; coordinates only count when both are present
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServiceRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub food_type: String,
    #[serde(default)]
    pub ready_time: i32,
    pub price: f64,
}

impl From<CreateFoodRequest> for CreateFoodInput {
    fn from(req: CreateFoodRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            category: req.category,
            food_type: req.food_type,
            ready_time: req.ready_time,
            price: req.price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessOrderRequest {
    pub status: String,
    pub remarks: Option<String>,
    pub time: Option<i32>,
}

impl From<ProcessOrderRequest> for ProcessOrderInput {
    fn from(req: ProcessOrderRequest) -> Self {
        Self {
            status: req.status,
            remarks: req.remarks,
            time: req.time,
        }
    }
}
