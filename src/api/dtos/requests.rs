use crate::domain::models::user::{Role, UserStatus};
use serde::Deserialize;

/// Variant fields as supplied inside a product create/update body; the
/// owning product id and the row id are assigned server-side.
#[derive(Deserialize)]
pub struct VariantInput {
    #[serde(rename = "variantName")]
    pub variant_name: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub telugu_name: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub variants: Option<Vec<VariantInput>>,
}

/// Omitting `variants` leaves the existing set untouched; supplying it
/// (even empty) replaces the set wholesale.
#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub telugu_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub variants: Option<Vec<VariantInput>>,
}

#[derive(Deserialize)]
pub struct CreateVariantRequest {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "variantName")]
    pub variant_name: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(Deserialize)]
pub struct UpdateVariantRequest {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    #[serde(rename = "variantName")]
    pub variant_name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
    pub area: String,
    #[serde(rename = "doorNo")]
    pub door_no: String,
    pub status: UserStatus,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub area: Option<String>,
    #[serde(rename = "doorNo")]
    pub door_no: Option<String>,
    pub status: Option<UserStatus>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
}
