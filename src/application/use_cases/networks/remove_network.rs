//! Remove Network Use Case
//!
//! Deregisters a custom network by name. Built-in networks stay.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::lookup::{NetworkField, NetworkQuery};
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for removing a network
pub struct RemoveNetworkUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl RemoveNetworkUseCase {
    /// Create a new RemoveNetworkUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no network has this name.
    /// Returns `DomainError::BuiltinNetwork` for livenet and testnet.
    pub fn execute(&self, name: &str) -> Result<(), UseCaseError> {
        tracing::info!(name = %name, "Removing network");

        let network = self
            .network_repository
            .find_by_fields(&NetworkQuery::from(name), &[NetworkField::Name])
            .ok_or_else(|| {
                tracing::warn!(name = %name, "Network not found for removal");
                UseCaseError::NotFound {
                    resource: "Network".to_string(),
                    id: name.to_string(),
                }
            })?;

        if self.network_repository.is_builtin(&network) {
            tracing::warn!(name = %name, "Refusing to remove built-in network");
            return Err(DomainError::BuiltinNetwork(name.to_string()).into());
        }

        self.network_repository.remove(&network);

        tracing::info!(name = %name, "Network removed successfully");
        Ok(())
    }
}
