use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Storefront account roles. Serde enforces the enumeration at the
/// handler boundary; the store keeps the plain string.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
    Vendor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Customer => "Customer",
            Role::Vendor => "Vendor",
        }
    }
}

/// Account status, kept in the legacy two-letter wire form.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    #[serde(rename = "AC")]
    Active,
    #[serde(rename = "NA")]
    NotActive,
    #[serde(rename = "BL")]
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "AC",
            UserStatus::NotActive => "NA",
            UserStatus::Blocked => "BL",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    // Stored as given; hashing is out of scope for this service.
    pub password: String,
    pub role: String,
    pub area: String,
    #[serde(rename = "doorNo")]
    pub door_no: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        phone: String,
        password: String,
        role: Role,
        area: String,
        door_no: String,
        status: UserStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            password,
            role: role.as_str().to_string(),
            area,
            door_no,
            status: status.as_str().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}
