use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateVariantRequest, UpdateVariantRequest},
    responses::CreatedResponse,
};
use crate::api::handlers::parse_id;
use crate::domain::models::product_variant::ProductVariant;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn list_variants(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let variants = state.variant_repo.list().await?;
    Ok(Json(variants))
}

pub async fn get_variant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let variant = state.variant_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Product variant {} not found", id)))?;
    Ok(Json(variant))
}

pub async fn create_variant(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateVariantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product_id = parse_id(&payload.product_id)?;
    let variant = ProductVariant::new(product_id, payload.variant_name, payload.price, payload.stock);
    let created = state.variant_repo.create(&variant).await?;

    info!("Created product variant {} for product {}", created.id, created.product_id);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: created.id })))
}

pub async fn update_variant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateVariantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let mut variant = state.variant_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Product variant {} not found", id)))?;

    if let Some(product_id) = payload.product_id {
        variant.product_id = parse_id(&product_id)?;
    }
    if let Some(variant_name) = payload.variant_name {
        variant.variant_name = variant_name;
    }
    if let Some(price) = payload.price {
        variant.price = price;
    }
    if let Some(stock) = payload.stock {
        variant.stock = stock;
    }
    variant.updated_at = Some(Utc::now());

    let updated = state.variant_repo.update(&variant).await?;

    info!("Updated product variant {}", updated.id);

    Ok(Json(updated))
}

pub async fn delete_variant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    state.variant_repo.delete(&id).await?;

    info!("Deleted product variant {}", id);

    Ok((StatusCode::ACCEPTED, Json(serde_json::json!({"status": "deleted"}))))
}
