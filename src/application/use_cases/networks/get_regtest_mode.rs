//! Get Regtest Mode Use Case

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::Network;
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for reading the network carrying the regtest switch
pub struct GetRegtestModeUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl GetRegtestModeUseCase {
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// # Errors
    ///
    /// Returns `DomainError::RegtestUnsupported` if no registered network has a regtest switch.
    pub fn execute(&self) -> Result<Arc<Network>, UseCaseError> {
        self.network_repository
            .regtest_network()
            .ok_or_else(|| DomainError::RegtestUnsupported.into())
    }
}
