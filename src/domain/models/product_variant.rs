use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ProductVariant {
    pub id: String,
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "variantName")]
    pub variant_name: String,
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductVariant {
    pub fn new(product_id: String, variant_name: String, price: f64, stock: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id,
            variant_name,
            price,
            stock,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}
