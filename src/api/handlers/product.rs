use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateProductRequest, UpdateProductRequest},
    responses::CreatedResponse,
};
use crate::api::handlers::parse_id;
use crate::domain::models::{product::Product, product_variant::ProductVariant};
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.product_repo.list_with_variants().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let product = state.product_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product = Product::new(
        payload.name,
        payload.telugu_name,
        payload.description,
        payload.category,
        payload.image,
    );

    let variants: Vec<ProductVariant> = payload
        .variants
        .unwrap_or_default()
        .into_iter()
        .map(|v| ProductVariant::new(product.id.clone(), v.variant_name, v.price, v.stock))
        .collect();

    state.product_repo.create_with_variants(&product, &variants).await?;

    info!("Created product {} with {} variants", product.id, variants.len());

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: product.id })))
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let mut product = state.product_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

    if let Some(name) = payload.name {
        product.name = name;
    }
    if let Some(telugu_name) = payload.telugu_name {
        product.telugu_name = telugu_name;
    }
    if let Some(description) = payload.description {
        product.description = description;
    }
    if let Some(category) = payload.category {
        product.category = category;
    }
    if let Some(image) = payload.image {
        product.image = image;
    }
    product.updated_at = Some(Utc::now());

    // A supplied variant list replaces the whole set; an absent field
    // leaves the current set alone.
    let replacement: Option<Vec<ProductVariant>> = payload.variants.map(|variants| {
        variants
            .into_iter()
            .map(|v| ProductVariant::new(id.clone(), v.variant_name, v.price, v.stock))
            .collect()
    });

    state.product_repo
        .update_with_variants(&product, replacement.as_deref())
        .await?;

    info!("Updated product {}", product.id);

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    state.product_repo.delete_with_variants(&id).await?;

    info!("Deleted product {} and its variants", id);

    Ok((StatusCode::ACCEPTED, Json(serde_json::json!({"status": "deleted"}))))
}
