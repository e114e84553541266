//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{extract::FromRef, middleware as axum_middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::networks::{
    AddNetworkUseCase, GetNetworkUseCase, GetRegtestModeUseCase, ListNetworksUseCase,
    RemoveNetworkUseCase, SetRegtestModeUseCase,
};
use crate::domain::gateways::NetworkRepository;
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub add_network_use_case: Arc<AddNetworkUseCase>,
    pub get_network_use_case: Arc<GetNetworkUseCase>,
    pub list_networks_use_case: Arc<ListNetworksUseCase>,
    pub remove_network_use_case: Arc<RemoveNetworkUseCase>,
    pub get_regtest_mode_use_case: Arc<GetRegtestModeUseCase>,
    pub set_regtest_mode_use_case: Arc<SetRegtestModeUseCase>,
}

impl AppState {
    /// Wire every use case to the same repository
    #[must_use]
    pub fn new(config: Arc<AppConfig>, network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self {
            config,
            add_network_use_case: Arc::new(AddNetworkUseCase::new(network_repository.clone())),
            get_network_use_case: Arc::new(GetNetworkUseCase::new(network_repository.clone())),
            list_networks_use_case: Arc::new(ListNetworksUseCase::new(network_repository.clone())),
            remove_network_use_case: Arc::new(RemoveNetworkUseCase::new(network_repository.clone())),
            get_regtest_mode_use_case: Arc::new(GetRegtestModeUseCase::new(network_repository.clone())),
            set_regtest_mode_use_case: Arc::new(SetRegtestModeUseCase::new(network_repository)),
        }
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.config)
    }
}

/// Build the full API router
///
/// Rate limiting is left to the caller since it needs peer addresses.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/networks", handlers::networks::router())
        .nest("/regtest", handlers::regtest::router())
        .layer(axum_middleware::from_fn(middleware::request_id::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
