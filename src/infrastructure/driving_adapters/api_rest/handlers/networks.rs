//! Network Handlers
//!
//! HTTP handlers for registering, resolving and removing networks.
//! Lookups are public; registration and removal require JWT authentication.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::lookup::{NetworkKey, NetworkQuery};
use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    AddNetworkDto, LookupParams, NetworkResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for network endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_networks).post(add_network))
        .route("/:key", get(get_network).delete(remove_network))
}

/// GET /networks - List networks in registration order
///
/// # Responses
///
/// * 200 OK - All registered networks
#[axum::debug_handler]
async fn list_networks(State(state): State<AppState>) -> Json<Vec<NetworkResponseDto>> {
    let networks = state.list_networks_use_case.execute();
    Json(networks.iter().map(|n| NetworkResponseDto::from(n.as_ref())).collect())
}

/// GET /networks/:key - Resolve a network by name, alias or indexed value
///
/// Numeric keys are read as decimal or `0x` hex, then as text when nothing
/// matches the number (names like `1234`). `?keys=alias,port` restricts
/// the match to those fields. Resolving `local` or `regtest` without `keys`
/// switches testnet to regtest mode.
///
/// # Responses
///
/// * 200 OK - Network found
/// * 400 Bad Request - Unknown field in `keys`
/// * 404 Not Found - No network matches
#[axum::debug_handler]
async fn get_network(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
    Query(params): Query<LookupParams>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let fields = params.fields()?;
    let (key, text_key) = NetworkKey::parse_with_text(&raw_key);
    let use_case = &state.get_network_use_case;

    let network = match (use_case.execute(&NetworkQuery::Key(key), fields.as_deref()), text_key) {
        (Err(UseCaseError::NotFound { .. }), Some(text)) => {
            use_case.execute(&NetworkQuery::Key(text), fields.as_deref())?
        }
        (result, _) => result?,
    };

    Ok(Json(NetworkResponseDto::from(network.as_ref())))
}

/// POST /networks - Register a custom network
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 201 Created - Network registered
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 409 Conflict - A network with the same name exists
#[axum::debug_handler]
async fn add_network(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<AddNetworkDto>,
) -> Result<(StatusCode, Json<NetworkResponseDto>), ApiError> {
    dto.validate()?;
    tracing::info!(user = %user.id, role = %user.role, name = %dto.name, "Network registration requested");

    let network = state.add_network_use_case.execute(dto.into())?;

    Ok((StatusCode::CREATED, Json(NetworkResponseDto::from(network.as_ref()))))
}

/// DELETE /networks/:key - Remove a custom network by name
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 204 No Content - Network removed
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Built-in network
/// * 404 Not Found - No network with this name
#[axum::debug_handler]
async fn remove_network(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(user = %user.id, name = %name, "Network removal requested");

    state.remove_network_use_case.execute(&name)?;

    Ok(StatusCode::NO_CONTENT)
}
