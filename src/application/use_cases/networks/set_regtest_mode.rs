//! Set Regtest Mode Use Case
//!
//! Switches testnet between its normal and regtest port, magic and seeds.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::Network;
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for toggling regtest mode
pub struct SetRegtestModeUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl SetRegtestModeUseCase {
    /// Create a new SetRegtestModeUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case, returning the switched network
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RegtestUnsupported` if no registered network has a regtest switch.
    pub fn execute(&self, enabled: bool) -> Result<Arc<Network>, UseCaseError> {
        tracing::info!(enabled, "Switching regtest mode");

        let network = self.network_repository.set_regtest(enabled).ok_or_else(|| {
            tracing::warn!("No network supports regtest mode");
            DomainError::RegtestUnsupported
        })?;

        tracing::info!(network = %network, port = ?network.port(), "Regtest mode switched");
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::networks::test_support::testnet;
    use crate::domain::gateways::network_repository::MockNetworkRepository;

    #[test]
    fn should_return_switched_network() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_set_regtest()
            .withf(|enabled| *enabled)
            .times(1)
            .returning(|_| Some(testnet()));

        let use_case = SetRegtestModeUseCase::new(Arc::new(repo));
        let network = use_case.execute(true).unwrap();

        assert_eq!(network.name(), "testnet");
    }

    #[test]
    fn should_fail_without_switchable_network() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_set_regtest().returning(|_| None);

        let use_case = SetRegtestModeUseCase::new(Arc::new(repo));
        let result = use_case.execute(false);

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Domain(DomainError::RegtestUnsupported)
        ));
    }
}
