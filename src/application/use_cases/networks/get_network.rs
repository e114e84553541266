//! Get Network Use Case
//!
//! Resolves a network by descriptor, name, alias or any indexed value.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::lookup::{NetworkField, NetworkQuery};
use crate::domain::models::network::Network;
use crate::shared::errors::UseCaseError;

/// Use case for resolving a single network
pub struct GetNetworkUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl GetNetworkUseCase {
    /// Create a new GetNetworkUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// With `fields`, only those fields are compared and the index is bypassed.
    /// Without, the index is used and `local`/`regtest` switch on regtest mode.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if nothing matches.
    pub fn execute(
        &self,
        query: &NetworkQuery,
        fields: Option<&[NetworkField]>,
    ) -> Result<Arc<Network>, UseCaseError> {
        tracing::debug!(query = %query, ?fields, "Resolving network");

        let network = match fields {
            Some(fields) => self.network_repository.find_by_fields(query, fields),
            None => self.network_repository.find(query),
        };

        let network = network.ok_or_else(|| {
            tracing::warn!(query = %query, "Network not found");
            UseCaseError::NotFound {
                resource: "Network".to_string(),
                id: query.to_string(),
            }
        })?;

        tracing::debug!(network = %network, "Network found");
        Ok(network)
    }
}
