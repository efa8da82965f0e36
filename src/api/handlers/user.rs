use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateUserRequest, UpdateUserRequest},
    responses::CreatedResponse,
};
use crate::api::handlers::parse_id;
use crate::domain::models::user::User;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let user = state.user_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = User::new(
        payload.name,
        payload.email,
        payload.phone,
        payload.password,
        payload.role,
        payload.area,
        payload.door_no,
        payload.status,
    );

    let created = state.user_repo.create(&user).await?;

    info!("Created user {} with role {}", created.id, created.role);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: created.id })))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let mut user = state.user_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    if let Some(name) = payload.name {
        user.name = name;
    }
    if let Some(email) = payload.email {
        user.email = email;
    }
    if let Some(phone) = payload.phone {
        user.phone = phone;
    }
    if let Some(password) = payload.password {
        user.password = password;
    }
    if let Some(role) = payload.role {
        user.role = role.as_str().to_string();
    }
    if let Some(area) = payload.area {
        user.area = area;
    }
    if let Some(door_no) = payload.door_no {
        user.door_no = door_no;
    }
    if let Some(status) = payload.status {
        user.status = status.as_str().to_string();
    }
    user.updated_at = Some(Utc::now());

    let updated = state.user_repo.update(&user).await?;

    info!("Updated user {}", updated.id);

    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    state.user_repo.delete(&id).await?;

    info!("Deleted user {}", id);

    Ok((StatusCode::ACCEPTED, Json(serde_json::json!({"status": "deleted"}))))
}
