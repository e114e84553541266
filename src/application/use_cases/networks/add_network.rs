//! Add Network Use Case
//!
//! Registers a custom network in the registry.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::lookup::{NetworkField, NetworkQuery};
use crate::domain::models::network::{Network, NetworkData};
use crate::shared::errors::UseCaseError;

/// Use case for registering a new network
pub struct AddNetworkUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl AddNetworkUseCase {
    /// Create a new AddNetworkUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// Only the name is checked for uniqueness. Any other value shared with an
    /// existing network is taken over by the new one.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if a network with the same name is registered.
    pub fn execute(&self, data: NetworkData) -> Result<Arc<Network>, UseCaseError> {
        tracing::info!(name = %data.name, aliases = ?data.alias, "Registering network");

        let query = NetworkQuery::from(data.name.as_str());
        if self
            .network_repository
            .find_by_fields(&query, &[NetworkField::Name])
            .is_some()
        {
            tracing::warn!(name = %data.name, "Network with name already registered");
            return Err(UseCaseError::Conflict(format!(
                "Network '{}' already exists",
                data.name
            )));
        }

        let network = self.network_repository.add(data);

        tracing::info!(
            network = %network,
            port = ?network.port(),
            "Network registered successfully"
        );

        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::networks::test_support::{custom_network_data, livenet};
    use crate::domain::gateways::network_repository::MockNetworkRepository;
    use crate::domain::models::lookup::NetworkKey;

    #[test]
    fn should_add_network_when_name_is_free() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_fields()
            .withf(|query, fields| {
                matches!(query, NetworkQuery::Key(NetworkKey::Text(name)) if name == "customnet")
                    && fields.to_vec() == vec![NetworkField::Name]
            })
            .times(1)
            .returning(|_, _| None);
        repo.expect_add()
            .times(1)
            .returning(|data| Arc::new(Network::new(data)));

        let use_case = AddNetworkUseCase::new(Arc::new(repo));
        let network = use_case.execute(custom_network_data()).unwrap();

        assert_eq!(network.name(), "customnet");
        assert_eq!(network.port(), Some(22556));
    }

    #[test]
    fn should_return_conflict_when_name_exists() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_fields().returning(|_, _| Some(livenet()));
        repo.expect_add().never();

        let use_case = AddNetworkUseCase::new(Arc::new(repo));
        let result = use_case.execute(NetworkData {
            name: "livenet".to_string(),
            ..custom_network_data()
        });

        assert!(matches!(result.unwrap_err(), UseCaseError::Conflict(_)));
    }
}
