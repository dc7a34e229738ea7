use chrono::{DateTime, Utc};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::{MainCategory, Material, Occasion, ProductType, Recipient, RentType, Size};

/// Secondary classification attributes, stored together as one JSON document.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct Facets {
    #[serde(default)]
    pub events: Vec<Occasion>,
    pub relation: Option<Recipient>,
    pub material: Option<Material>,
    pub size: Option<Size>,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ProductType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub main_category: MainCategory,
    pub facets: Facets,
    pub price: f64,
    pub image_urls: Vec<String>,
    pub stock: i32,
    pub is_available: bool,
    pub rating: f64,
    pub owner: Uuid,
    pub rent_type: RentType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record that passed validation and is ready to be written.
///
/// Identity and timestamps are assigned by the commit pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub main_category: MainCategory,
    pub facets: Facets,
    pub price: f64,
    pub image_urls: Vec<String>,
    pub stock: i32,
    pub is_available: bool,
    pub rating: f64,
    pub owner: Uuid,
    pub rent_type: RentType,
}
