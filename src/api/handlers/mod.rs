pub mod auth;
pub mod echo;
pub mod product;
pub mod product_variant;
pub mod root;
pub mod user;

use crate::error::AppError;
use uuid::Uuid;

/// Path identifiers must be UUIDs; anything else is a validation failure
/// rather than a lookup miss.
pub(crate) fn parse_id(raw: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError::Validation(format!("Invalid identifier: {}", raw)))
}
