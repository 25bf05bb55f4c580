use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::pagination::MAX_PAGE_LIMIT;
use crate::pricing::{self, PriceError};

/// Highest accepted price in major units.
pub const MAX_PRICE: i64 = 10_000_000;

/// Product category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Kitchen,
    Clothing,
    Shoes,
    Grocery,
    AutoParts,
    Furniture,
    Sports,
    Cosmetics,
    Toys,
    Pharmaceuticals,
}

/// Fields a seller controls. Add and edit both write exactly this set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub brand: String,
    pub category: ProductCategory,
    /// Price in minor units (cents)
    pub price: i64,
    pub available_quantity: i32,
    pub free_shipping: bool,
    pub description: String,
    pub image: String,
}

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Owning seller, fixed at creation
    pub seller_id: Uuid,
    pub name: String,
    pub brand: String,
    pub category: ProductCategory,
    /// Price in minor units (cents)
    pub price: i64,
    pub available_quantity: i32,
    pub free_shipping: bool,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product owned by `seller_id`
    pub fn new(seller_id: Uuid, fields: ProductFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            seller_id,
            name: fields.name,
            brand: fields.brand,
            category: fields.category,
            price: fields.price,
            available_quantity: fields.available_quantity,
            free_shipping: fields.free_shipping,
            description: fields.description,
            image: fields.image,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, caller_id: Uuid) -> bool {
        self.seller_id == caller_id
    }
}

/// List projection: no owner, no timestamps, description cut to a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    /// Price in minor units (cents)
    pub price: i64,
    pub category: ProductCategory,
    pub free_shipping: bool,
    pub available_quantity: i32,
    pub image: String,
    /// First 200 characters of the description
    pub description: String,
}

/// Request body for adding or editing a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 60))]
    pub brand: String,
    pub category: ProductCategory,
    /// Price in major units, e.g. 25.50
    #[schema(value_type = f64, example = 25.5)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub available_quantity: i32,
    pub free_shipping: bool,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 500))]
    pub image: String,
}

impl ProductInput {
    /// Normalize the price and produce the stored field set.
    pub fn into_fields(self) -> Result<ProductFields, PriceError> {
        Ok(ProductFields {
            price: pricing::to_minor_units(self.price)?,
            name: self.name,
            brand: self.brand,
            category: self.category,
            available_quantity: self.available_quantity,
            free_shipping: self.free_shipping,
            description: self.description,
            image: self.image,
        })
    }
}

/// Buyer listing request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyerListQuery {
    #[validate(range(min = 1))]
    pub page: u64,
    #[validate(range(min = 1, max = MAX_PAGE_LIMIT))]
    pub limit: u64,
    /// Case-insensitive substring of the product name
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 60))]
    pub search_text: Option<String>,
}

/// Seller listing request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellerListQuery {
    #[validate(range(min = 1))]
    pub page: u64,
    #[validate(range(min = 1, max = MAX_PAGE_LIMIT))]
    pub limit: u64,
}

/// A listing window plus the page count for the same scope
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<ProductSummary>,
    pub total_pages: u64,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of the details endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    pub message: String,
    pub product_detail: Product,
}

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub message: String,
    pub product_list: Vec<ProductSummary>,
    pub total_page: u64,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::from(MAX_PRICE) {
        return Err(ValidationError::new("price_too_high"));
    }
    // Must stay positive once rounded to minor units
    match pricing::to_minor_units(*price) {
        Ok(minor) if minor > 0 => Ok(()),
        _ => Err(ValidationError::new("price_not_positive")),
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| s.trim().to_string()))
}
