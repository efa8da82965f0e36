use crate::domain::{models::product_variant::ProductVariant, ports::ProductVariantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresProductVariantRepo {
    pool: PgPool,
}

impl PostgresProductVariantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductVariantRepository for PostgresProductVariantRepo {
    async fn create(&self, variant: &ProductVariant) -> Result<ProductVariant, AppError> {
        sqlx::query_as::<_, ProductVariant>(
            "INSERT INTO product_variants (id, product_id, variant_name, price, stock, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&variant.id).bind(&variant.product_id).bind(&variant.variant_name)
            .bind(variant.price).bind(variant.stock).bind(variant.created_at).bind(variant.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ProductVariant>, AppError> {
        sqlx::query_as::<_, ProductVariant>("SELECT * FROM product_variants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<ProductVariant>, AppError> {
        sqlx::query_as::<_, ProductVariant>("SELECT * FROM product_variants ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, variant: &ProductVariant) -> Result<ProductVariant, AppError> {
        sqlx::query_as::<_, ProductVariant>(
            "UPDATE product_variants SET product_id=$1, variant_name=$2, price=$3, stock=$4, updated_at=$5
             WHERE id=$6
             RETURNING *"
        )
            .bind(&variant.product_id).bind(&variant.variant_name)
            .bind(variant.price).bind(variant.stock).bind(variant.updated_at)
            .bind(&variant.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM product_variants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product variant {} not found", id)));
        }
        Ok(())
    }
}
