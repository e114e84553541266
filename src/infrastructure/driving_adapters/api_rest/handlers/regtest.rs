//! Regtest Handlers
//!
//! Read and switch the regtest mode of testnet.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::regtest::{RegtestStatusDto, SetRegtestDto};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for regtest endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_regtest_mode).put(set_regtest_mode))
}

/// GET /regtest - Current mode and the parameters it selects
#[axum::debug_handler]
async fn get_regtest_mode(State(state): State<AppState>) -> Result<Json<RegtestStatusDto>, ApiError> {
    let network = state.get_regtest_mode_use_case.execute()?;
    Ok(Json(RegtestStatusDto::from(network.as_ref())))
}

/// PUT /regtest - Enable or disable regtest mode
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 200 OK - Mode switched
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - No network supports regtest mode
#[axum::debug_handler]
async fn set_regtest_mode(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<SetRegtestDto>,
) -> Result<Json<RegtestStatusDto>, ApiError> {
    tracing::info!(user = %user.id, enabled = dto.enabled, "Regtest switch requested");

    let network = state.set_regtest_mode_use_case.execute(dto.enabled)?;

    Ok(Json(RegtestStatusDto::from(network.as_ref())))
}
