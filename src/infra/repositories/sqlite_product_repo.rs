use crate::domain::{
    models::{product::{Product, ProductWithVariants}, product_variant::ProductVariant},
    ports::ProductRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::collections::HashMap;

pub struct SqliteProductRepo {
    pool: SqlitePool,
}

impl SqliteProductRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn insert_variant(
    tx: &mut Transaction<'_, Sqlite>,
    variant: &ProductVariant,
) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO product_variants (id, product_id, variant_name, price, stock, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)"
    )
        .bind(&variant.id).bind(&variant.product_id).bind(&variant.variant_name)
        .bind(variant.price).bind(variant.stock).bind(variant.created_at).bind(variant.updated_at)
        .execute(&mut **tx).await.map_err(AppError::Database)?;
    Ok(())
}

#[async_trait]
impl ProductRepository for SqliteProductRepo {
    async fn create_with_variants(
        &self,
        product: &Product,
        variants: &[ProductVariant],
    ) -> Result<(), AppError> {
        // Dropping the transaction on any error path rolls it back, so a
        // failed variant insert takes the product insert with it.
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query(
            "INSERT INTO products (id, name, telugu_name, description, category, image, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        )
            .bind(&product.id).bind(&product.name).bind(&product.telugu_name)
            .bind(&product.description).bind(&product.category).bind(&product.image)
            .bind(product.created_at).bind(product.updated_at)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        for variant in variants {
            insert_variant(&mut tx, variant).await?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_with_variants(&self) -> Result<Vec<ProductWithVariants>, AppError> {
        let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let variants = sqlx::query_as::<_, ProductVariant>("SELECT * FROM product_variants")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let mut grouped: HashMap<String, Vec<ProductVariant>> = HashMap::new();
        for variant in variants {
            grouped.entry(variant.product_id.clone()).or_default().push(variant);
        }

        Ok(products
            .into_iter()
            .map(|product| {
                let variants = grouped.remove(&product.id).unwrap_or_default();
                ProductWithVariants { product, variants }
            })
            .collect())
    }

    async fn update_with_variants(
        &self,
        product: &Product,
        replacement: Option<&[ProductVariant]>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let result = sqlx::query(
            "UPDATE products SET name=?, telugu_name=?, description=?, category=?, image=?, updated_at=?
             WHERE id=?"
        )
            .bind(&product.name).bind(&product.telugu_name).bind(&product.description)
            .bind(&product.category).bind(&product.image).bind(product.updated_at)
            .bind(&product.id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product {} not found", product.id)));
        }

        if let Some(variants) = replacement {
            sqlx::query("DELETE FROM product_variants WHERE product_id = ?")
                .bind(&product.id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            for variant in variants {
                insert_variant(&mut tx, variant).await?;
            }
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete_with_variants(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }

        sqlx::query("DELETE FROM product_variants WHERE product_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}
