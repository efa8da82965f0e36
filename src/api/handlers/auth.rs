use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::LoginRequest, responses::LoginResponse};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Issues an access token for the supplied username. No credential check
/// is performed; token issuance is all this endpoint does.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let access_token = state.token_service.issue(&payload.username)?;

    info!("Issued access token for {}", payload.username);

    Ok(Json(LoginResponse { access_token }))
}
