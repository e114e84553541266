//! List Networks Use Case
//!
//! Returns every registered network in registration order.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::Network;

/// Use case for listing networks
pub struct ListNetworksUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl ListNetworksUseCase {
    /// Create a new ListNetworksUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<Arc<Network>> {
        let networks = self.network_repository.find_all();
        tracing::debug!(count = networks.len(), "Listed networks");
        networks
    }
}
