use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::product_variant::ProductVariant;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub telugu_name: String,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(
        name: String,
        telugu_name: String,
        description: String,
        category: String,
        image: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            telugu_name,
            description,
            category,
            image,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Product listing row: the product joined with its current variant set.
#[derive(Debug, Serialize, Clone)]
pub struct ProductWithVariants {
    #[serde(flatten)]
    pub product: Product,
    pub variants: Vec<ProductVariant>,
}
