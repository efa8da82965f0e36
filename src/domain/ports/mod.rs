use crate::domain::models::{
    product::{Product, ProductWithVariants},
    product_variant::ProductVariant,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Product storage plus the transactional write path: a product and its
/// variant set are created, replaced, or deleted as one atomic unit, so
/// readers never observe a product without its intended variants.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts the product and the supplied variants in one transaction.
    async fn create_with_variants(
        &self,
        product: &Product,
        variants: &[ProductVariant],
    ) -> Result<(), AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError>;

    /// Denormalized listing: every product joined with its variants.
    async fn list_with_variants(&self) -> Result<Vec<ProductWithVariants>, AppError>;

    /// Updates the product row; when `replacement` is supplied, the
    /// existing variant set is deleted and replaced by it (an empty slice
    /// clears the set) inside the same transaction.
    async fn update_with_variants(
        &self,
        product: &Product,
        replacement: Option<&[ProductVariant]>,
    ) -> Result<(), AppError>;

    /// Deletes the product and every variant referencing it in one
    /// transaction.
    async fn delete_with_variants(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ProductVariantRepository: Send + Sync {
    async fn create(&self, variant: &ProductVariant) -> Result<ProductVariant, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ProductVariant>, AppError>;
    async fn list(&self) -> Result<Vec<ProductVariant>, AppError>;
    async fn update(&self, variant: &ProductVariant) -> Result<ProductVariant, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
