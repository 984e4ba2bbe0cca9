//! PostgreSQL Repository Implementations
//!
//! Every table carries a `seq BIGSERIAL` column; collections are read
//! `ORDER BY seq` so they come back in insertion order.

use auth::{Credential, Email};
use chrono::{DateTime, Utc};
use kernel::id::{DeliveryUserId, FoodId, OfferId, OrderId, TransactionId, VendorId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::{
    delivery_user::DeliveryUser,
    food::Food,
    offer::{Offer, OfferTerms, OfferType, PromoType},
    order::{Order, OrderItem, OrderStatus},
    transaction::Transaction,
    vendor::Vendor,
};
use crate::domain::repository::{
    DeliveryUserRepository, FoodRepository, OfferRepository, OrderRepository,
    TransactionRepository, VendorRepository,
};
use crate::error::{MarketplaceError, MarketplaceResult};

/// PostgreSQL-backed marketplace repository
#[derive(Clone)]
pub struct PgMarketplaceRepository {
    pool: PgPool,
}

impl PgMarketplaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn uuids<T>(ids: &[kernel::id::Id<T>]) -> Vec<Uuid> {
    ids.iter().map(|id| *id.as_uuid()).collect()
}

fn typed_ids<T>(ids: Vec<Uuid>) -> Vec<kernel::id::Id<T>> {
    ids.into_iter().map(kernel::id::Id::from_uuid).collect()
}

// ============================================================================
// Vendor Repository Implementation
// ============================================================================

const VENDOR_COLUMNS: &str = r#"
    id, name, owner_name, food_type, pincode, address, phone, email,
    password_hash, salt, service_available, cover_images, rating, foods,
    lat, lng, created_at, updated_at
"#;

impl VendorRepository for PgMarketplaceRepository {
    async fn create(&self, vendor: &Vendor) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO vendors (
                id, name, owner_name, food_type, pincode, address, phone, email,
                password_hash, salt, service_available, cover_images, rating, foods,
                lat, lng, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(vendor.id.as_uuid())
        .bind(&vendor.name)
        .bind(&vendor.owner_name)
        .bind(&vendor.food_type)
        .bind(&vendor.pincode)
        .bind(&vendor.address)
        .bind(&vendor.phone)
        .bind(vendor.email.as_str())
        .bind(vendor.credential.password_hash_str())
        .bind(vendor.credential.salt_str())
        .bind(vendor.service_available)
        .bind(&vendor.cover_images)
        .bind(vendor.rating)
        .bind(uuids(&vendor.foods))
        .bind(vendor.lat)
        .bind(vendor.lng)
        .bind(vendor.created_at)
        .bind(vendor.updated_at)
        .execute(&self.pool)
        .await
        .map_err(vendor_insert_error)?;

        Ok(())
    }

    async fn find_by_id(&self, vendor_id: &VendorId) -> MarketplaceResult<Option<Vendor>> {
        let row = sqlx::query_as::<_, VendorRow>(&format!(
            "SELECT {VENDOR_COLUMNS} FROM vendors WHERE id = $1"
        ))
        .bind(vendor_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(VendorRow::into_vendor).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> MarketplaceResult<Option<Vendor>> {
        let row = sqlx::query_as::<_, VendorRow>(&format!(
            "SELECT {VENDOR_COLUMNS} FROM vendors WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(VendorRow::into_vendor).transpose()
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Vendor>> {
        let rows = sqlx::query_as::<_, VendorRow>(&format!(
            "SELECT {VENDOR_COLUMNS} FROM vendors ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(VendorRow::into_vendor).collect()
    }

    async fn update(&self, vendor: &Vendor) -> MarketplaceResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE vendors SET
                name = $2,
                owner_name = $3,
                food_type = $4,
                pincode = $5,
                address = $6,
                phone = $7,
                service_available = $8,
                cover_images = $9,
                rating = $10,
                foods = $11,
                lat = $12,
                lng = $13,
                updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(vendor.id.as_uuid())
        .bind(&vendor.name)
        .bind(&vendor.owner_name)
        .bind(&vendor.food_type)
        .bind(&vendor.pincode)
        .bind(&vendor.address)
        .bind(&vendor.phone)
        .bind(vendor.service_available)
        .bind(&vendor.cover_images)
        .bind(vendor.rating)
        .bind(uuids(&vendor.foods))
        .bind(vendor.lat)
        .bind(vendor.lng)
        .bind(vendor.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::VendorNotFound);
        }
        Ok(())
    }
}

fn vendor_insert_error(e: sqlx::Error) -> MarketplaceError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return MarketplaceError::VendorEmailTaken;
        }
    }
    MarketplaceError::Database(e)
}

// ============================================================================
// Food Repository Implementation
// ============================================================================

const FOOD_COLUMNS: &str = r#"
    id, vendor_id, name, description, category, food_type, ready_time,
    price, rating, images, created_at, updated_at
"#;

impl FoodRepository for PgMarketplaceRepository {
    async fn create(&self, food: &Food) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO foods (
                id, vendor_id, name, description, category, food_type, ready_time,
                price, rating, images, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(food.id.as_uuid())
        .bind(food.vendor_id.as_uuid())
        .bind(&food.name)
        .bind(&food.description)
        .bind(&food.category)
        .bind(&food.food_type)
        .bind(food.ready_time)
        .bind(food.price)
        .bind(food.rating)
        .bind(&food.images)
        .bind(food.created_at)
        .bind(food.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_vendor(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<Food>> {
        let rows = sqlx::query_as::<_, FoodRow>(&format!(
            "SELECT {FOOD_COLUMNS} FROM foods WHERE vendor_id = $1 ORDER BY seq"
        ))
        .bind(vendor_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FoodRow::into_food).collect())
    }

    async fn find_by_ids(&self, food_ids: &[FoodId]) -> MarketplaceResult<Vec<Food>> {
        if food_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, FoodRow>(&format!(
            "SELECT {FOOD_COLUMNS} FROM foods WHERE id = ANY($1) ORDER BY seq"
        ))
        .bind(uuids(food_ids))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FoodRow::into_food).collect())
    }
}

// ============================================================================
// Order Repository Implementation
// ============================================================================

const ORDER_COLUMNS: &str = r#"
    id, order_id, vendor_id, items, total_amount, paid_amount, order_date,
    order_status, remarks, delivery_id, ready_time, created_at, updated_at
"#;

impl OrderRepository for PgMarketplaceRepository {
    async fn create(&self, order: &Order) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (
                id, order_id, vendor_id, items, total_amount, paid_amount, order_date,
                order_status, remarks, delivery_id, ready_time, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(&order.order_id)
        .bind(order.vendor_id.as_uuid())
        .bind(Json(&order.items))
        .bind(order.total_amount)
        .bind(order.paid_amount)
        .bind(order.order_date)
        .bind(order.order_status.as_str())
        .bind(&order.remarks)
        .bind(&order.delivery_id)
        .bind(order.ready_time)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, order_id: &OrderId) -> MarketplaceResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(order_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(OrderRow::into_order).transpose()
    }

    async fn find_by_vendor(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE vendor_id = $1 ORDER BY seq"
        ))
        .bind(vendor_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    async fn update(&self, order: &Order) -> MarketplaceResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET
                items = $2,
                total_amount = $3,
                paid_amount = $4,
                order_status = $5,
                remarks = $6,
                delivery_id = $7,
                ready_time = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(Json(&order.items))
        .bind(order.total_amount)
        .bind(order.paid_amount)
        .bind(order.order_status.as_str())
        .bind(&order.remarks)
        .bind(&order.delivery_id)
        .bind(order.ready_time)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::OrderNotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Offer Repository Implementation
// ============================================================================

const OFFER_COLUMNS: &str = r#"
    id, offer_type, vendors, title, description, min_value, offer_amount,
    start_validity, end_validity, promocode, promo_type, bank, bins, pincode,
    is_active, created_at, updated_at
"#;

impl OfferRepository for PgMarketplaceRepository {
    async fn create(&self, offer: &Offer) -> MarketplaceResult<()> {
        let terms = &offer.terms;
        sqlx::query(
            r#"
            INSERT INTO offers (
                id, offer_type, vendors, title, description, min_value, offer_amount,
                start_validity, end_validity, promocode, promo_type, bank, bins, pincode,
                is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(offer.id.as_uuid())
        .bind(terms.offer_type.as_str())
        .bind(uuids(&offer.vendors))
        .bind(&terms.title)
        .bind(&terms.description)
        .bind(terms.min_value)
        .bind(terms.offer_amount)
        .bind(terms.start_validity)
        .bind(terms.end_validity)
        .bind(&terms.promocode)
        .bind(terms.promo_type.as_str())
        .bind(&terms.bank)
        .bind(&terms.bins)
        .bind(&terms.pincode)
        .bind(terms.is_active)
        .bind(offer.created_at)
        .bind(offer.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, offer_id: &OfferId) -> MarketplaceResult<Option<Offer>> {
        let row = sqlx::query_as::<_, OfferRow>(&format!(
            "SELECT {OFFER_COLUMNS} FROM offers WHERE id = $1"
        ))
        .bind(offer_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(OfferRow::into_offer).transpose()
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Offer>> {
        let rows = sqlx::query_as::<_, OfferRow>(&format!(
            "SELECT {OFFER_COLUMNS} FROM offers ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OfferRow::into_offer).collect()
    }

    async fn update(&self, offer: &Offer) -> MarketplaceResult<()> {
        let terms = &offer.terms;
        let result = sqlx::query(
            r#"
            UPDATE offers SET
                offer_type = $2,
                vendors = $3,
                title = $4,
                description = $5,
                min_value = $6,
                offer_amount = $7,
                start_validity = $8,
                end_validity = $9,
                promocode = $10,
                promo_type = $11,
                bank = $12,
                bins = $13,
                pincode = $14,
                is_active = $15,
                updated_at = $16
            WHERE id = $1
            "#,
        )
        .bind(offer.id.as_uuid())
        .bind(terms.offer_type.as_str())
        .bind(uuids(&offer.vendors))
        .bind(&terms.title)
        .bind(&terms.description)
        .bind(terms.min_value)
        .bind(terms.offer_amount)
        .bind(terms.start_validity)
        .bind(terms.end_validity)
        .bind(&terms.promocode)
        .bind(terms.promo_type.as_str())
        .bind(&terms.bank)
        .bind(&terms.bins)
        .bind(&terms.pincode)
        .bind(terms.is_active)
        .bind(offer.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::OfferNotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Transaction Repository Implementation
// ============================================================================

const TRANSACTION_COLUMNS: &str = r#"
    id, customer, vendor_id, order_id, order_value, offer_used, status,
    payment_mode, payment_response, created_at, updated_at
"#;

impl TransactionRepository for PgMarketplaceRepository {
    async fn create(&self, transaction: &Transaction) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, customer, vendor_id, order_id, order_value, offer_used, status,
                payment_mode, payment_response, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(transaction.id.as_uuid())
        .bind(&transaction.customer)
        .bind(transaction.vendor_id.as_uuid())
        .bind(transaction.order_id.as_uuid())
        .bind(transaction.order_value)
        .bind(&transaction.offer_used)
        .bind(&transaction.status)
        .bind(&transaction.payment_mode)
        .bind(&transaction.payment_response)
        .bind(transaction.created_at)
        .bind(transaction.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        transaction_id: &TransactionId,
    ) -> MarketplaceResult<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = $1"
        ))
        .bind(transaction_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TransactionRow::into_transaction))
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TransactionRow::into_transaction).collect())
    }
}

// ============================================================================
// Delivery User Repository Implementation
// ============================================================================

const DELIVERY_USER_COLUMNS: &str = r#"
    id, email, phone, first_name, last_name, address, pincode, verified,
    lat, lng, is_available, created_at, updated_at
"#;

impl DeliveryUserRepository for PgMarketplaceRepository {
    async fn create(&self, user: &DeliveryUser) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO delivery_users (
                id, email, phone, first_name, last_name, address, pincode, verified,
                lat, lng, is_available, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.address)
        .bind(&user.pincode)
        .bind(user.verified)
        .bind(user.lat)
        .bind(user.lng)
        .bind(user.is_available)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        user_id: &DeliveryUserId,
    ) -> MarketplaceResult<Option<DeliveryUser>> {
        let row = sqlx::query_as::<_, DeliveryUserRow>(&format!(
            "SELECT {DELIVERY_USER_COLUMNS} FROM delivery_users WHERE id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DeliveryUserRow::into_delivery_user))
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<DeliveryUser>> {
        let rows = sqlx::query_as::<_, DeliveryUserRow>(&format!(
            "SELECT {DELIVERY_USER_COLUMNS} FROM delivery_users ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(DeliveryUserRow::into_delivery_user)
            .collect())
    }

    async fn update(&self, user: &DeliveryUser) -> MarketplaceResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE delivery_users SET
                phone = $2,
                first_name = $3,
                last_name = $4,
                address = $5,
                pincode = $6,
                verified = $7,
                lat = $8,
                lng = $9,
                is_available = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.phone)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.address)
        .bind(&user.pincode)
        .bind(user.verified)
        .bind(user.lat)
        .bind(user.lng)
        .bind(user.is_available)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(MarketplaceError::DeliveryUserNotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct VendorRow {
    id: Uuid,
    name: String,
    owner_name: String,
    food_type: Vec<String>,
    pincode: String,
    address: String,
    phone: String,
    email: String,
    password_hash: String,
    salt: String,
    service_available: bool,
    cover_images: Vec<String>,
    rating: f64,
    foods: Vec<Uuid>,
    lat: Option<f64>,
    lng: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VendorRow {
    fn into_vendor(self) -> MarketplaceResult<Vendor> {
        let email = Email::parse(&self.email)
            .map_err(|e| MarketplaceError::Corrupt(format!("vendors.email: {e}")))?;
        let credential = Credential::from_stored(self.password_hash, self.salt)
            .map_err(|e| MarketplaceError::Corrupt(format!("vendors credential: {e}")))?;

        Ok(Vendor {
            id: VendorId::from_uuid(self.id),
            name: self.name,
            owner_name: self.owner_name,
            food_type: self.food_type,
            pincode: self.pincode,
            address: self.address,
            phone: self.phone,
            email,
            credential,
            service_available: self.service_available,
            cover_images: self.cover_images,
            rating: self.rating,
            foods: typed_ids(self.foods),
            lat: self.lat,
            lng: self.lng,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct FoodRow {
    id: Uuid,
    vendor_id: Uuid,
    name: String,
    description: String,
    category: String,
    food_type: String,
    ready_time: i32,
    price: f64,
    rating: f64,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FoodRow {
    fn into_food(self) -> Food {
        Food {
            id: FoodId::from_uuid(self.id),
            vendor_id: VendorId::from_uuid(self.vendor_id),
            name: self.name,
            description: self.description,
            category: self.category,
            food_type: self.food_type,
            ready_time: self.ready_time,
            price: self.price,
            rating: self.rating,
            images: self.images,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    order_id: String,
    vendor_id: Uuid,
    items: Json<Vec<OrderItem>>,
    total_amount: f64,
    paid_amount: f64,
    order_date: DateTime<Utc>,
    order_status: String,
    remarks: String,
    delivery_id: String,
    ready_time: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> MarketplaceResult<Order> {
        let order_status = self
            .order_status
            .parse::<OrderStatus>()
            .map_err(|e| MarketplaceError::Corrupt(format!("orders.order_status: {e}")))?;

        Ok(Order {
            id: OrderId::from_uuid(self.id),
            order_id: self.order_id,
            vendor_id: VendorId::from_uuid(self.vendor_id),
            items: self.items.0,
            total_amount: self.total_amount,
            paid_amount: self.paid_amount,
            order_date: self.order_date,
            order_status,
            remarks: self.remarks,
            delivery_id: self.delivery_id,
            ready_time: self.ready_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OfferRow {
    id: Uuid,
    offer_type: String,
    vendors: Vec<Uuid>,
    title: String,
    description: String,
    min_value: f64,
    offer_amount: f64,
    start_validity: Option<DateTime<Utc>>,
    end_validity: Option<DateTime<Utc>>,
    promocode: String,
    promo_type: String,
    bank: Vec<String>,
    bins: Vec<i64>,
    pincode: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OfferRow {
    fn into_offer(self) -> MarketplaceResult<Offer> {
        let offer_type = OfferType::parse(&self.offer_type).ok_or_else(|| {
            MarketplaceError::Corrupt(format!("offers.offer_type: {}", self.offer_type))
        })?;
        let promo_type = PromoType::parse(&self.promo_type).ok_or_else(|| {
            MarketplaceError::Corrupt(format!("offers.promo_type: {}", self.promo_type))
        })?;

        Ok(Offer {
            id: OfferId::from_uuid(self.id),
            vendors: typed_ids(self.vendors),
            terms: OfferTerms {
                offer_type,
                title: self.title,
                description: self.description,
                min_value: self.min_value,
                offer_amount: self.offer_amount,
                start_validity: self.start_validity,
                end_validity: self.end_validity,
                promocode: self.promocode,
                promo_type,
                bank: self.bank,
                bins: self.bins,
                pincode: self.pincode,
                is_active: self.is_active,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    customer: String,
    vendor_id: Uuid,
    order_id: Uuid,
    order_value: f64,
    offer_used: String,
    status: String,
    payment_mode: String,
    payment_response: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TransactionRow {
    fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::from_uuid(self.id),
            customer: self.customer,
            vendor_id: VendorId::from_uuid(self.vendor_id),
            order_id: OrderId::from_uuid(self.order_id),
            order_value: self.order_value,
            offer_used: self.offer_used,
            status: self.status,
            payment_mode: self.payment_mode,
            payment_response: self.payment_response,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DeliveryUserRow {
    id: Uuid,
    email: String,
    phone: String,
    first_name: String,
    last_name: String,
    address: String,
    pincode: String,
    verified: bool,
    lat: Option<f64>,
    lng: Option<f64>,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DeliveryUserRow {
    fn into_delivery_user(self) -> DeliveryUser {
        DeliveryUser {
            id: DeliveryUserId::from_uuid(self.id),
            email: self.email,
            phone: self.phone,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            pincode: self.pincode,
            verified: self.verified,
            lat: self.lat,
            lng: self.lng,
            is_available: self.is_available,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
