//! In-Memory Network Repository Implementation
//!
//! Implements the NetworkRepository trait over a `NetworkRegistry` guarded by an
//! `RwLock`, so one registry can be shared between request handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::lookup::{NetworkField, NetworkQuery};
use crate::domain::models::network::{Network, NetworkData};
use crate::domain::registry::{BuiltinNetworks, NetworkRegistry};

/// Lock-guarded implementation of NetworkRepository
#[derive(Debug, Default)]
pub struct InMemoryNetworkRepository {
    registry: RwLock<NetworkRegistry>,
}

impl InMemoryNetworkRepository {
    /// Wrap an existing registry
    #[must_use]
    pub fn new(registry: NetworkRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Create a repository holding livenet and testnet
    #[must_use]
    pub fn with_builtin_networks() -> Self {
        Self::bootstrap().0
    }

    /// Create a repository holding livenet and testnet, returning both descriptors
    #[must_use]
    pub fn bootstrap() -> (Self, BuiltinNetworks) {
        let (registry, builtin) = NetworkRegistry::bootstrap();
        tracing::debug!(
            livenet = %builtin.livenet,
            testnet = %builtin.testnet,
            "Built-in networks registered"
        );
        (Self::new(registry), builtin)
    }

    fn read(&self) -> RwLockReadGuard<'_, NetworkRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NetworkRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NetworkRepository for InMemoryNetworkRepository {
    fn add(&self, data: NetworkData) -> Arc<Network> {
        let network = self.write().add(data);
        tracing::debug!(network = %network, "Network added to registry");
        network
    }

    fn remove(&self, network: &Arc<Network>) {
        self.write().remove(network);
        tracing::debug!(network = %network, "Network removed from registry");
    }

    fn find(&self, query: &NetworkQuery) -> Option<Arc<Network>> {
        self.read().get(query)
    }

    fn find_by_fields(&self, query: &NetworkQuery, fields: &[NetworkField]) -> Option<Arc<Network>> {
        self.read().get_by_fields(query, fields)
    }

    fn find_all(&self) -> Vec<Arc<Network>> {
        self.read().networks().to_vec()
    }

    fn is_builtin(&self, network: &Arc<Network>) -> bool {
        self.read().is_builtin(network)
    }

    fn set_regtest(&self, enabled: bool) -> Option<Arc<Network>> {
        let registry = self.read();
        if enabled {
            registry.enable_regtest();
        } else {
            registry.disable_regtest();
        }
        registry.regtest_network().cloned()
    }

    fn regtest_network(&self) -> Option<Arc<Network>> {
        self.read().regtest_network().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::builtin::{REGTEST_PORT, TESTNET_PORT};

    fn create_test_data() -> NetworkData {
        NetworkData {
            name: "sidenet".to_string(),
            alias: vec![],
            pubkeyhash: 0x3f,
            privatekey: 0xbf,
            scripthash: 0x7d,
            xpubkey: 0x0101_0101,
            xprivkey: 0x0202_0202,
            xpubkey256bit: 0x0303_0303,
            xprivkey256bit: 0x0404_0404,
            network_magic: None,
            port: None,
            dns_seeds: None,
        }
    }

    #[test]
    fn should_share_descriptors_between_add_and_find() {
        let repo = InMemoryNetworkRepository::with_builtin_networks();

        let added = repo.add(create_test_data());
        let found = repo.find(&"sidenet".into());

        assert!(found.is_some_and(|n| Arc::ptr_eq(&n, &added)));
        assert_eq!(repo.find_all().len(), 3);
        assert!(!repo.is_builtin(&added));
    }

    #[test]
    fn should_forget_removed_network() {
        let repo = InMemoryNetworkRepository::with_builtin_networks();
        let added = repo.add(create_test_data());

        repo.remove(&added);

        assert!(repo.find(&"sidenet".into()).is_none());
        assert!(repo.find_by_fields(&0x3f_u8.into(), &[NetworkField::PubKeyHash]).is_none());
        assert_eq!(repo.find_all().len(), 2);
    }

    #[test]
    fn should_toggle_regtest_on_testnet() {
        let (repo, builtin) = InMemoryNetworkRepository::bootstrap();

        let testnet = repo.set_regtest(true);
        assert!(testnet.is_some_and(|n| Arc::ptr_eq(&n, &builtin.testnet)));
        assert_eq!(builtin.testnet.port(), Some(REGTEST_PORT));

        repo.set_regtest(false);
        assert_eq!(builtin.testnet.port(), Some(TESTNET_PORT));
        assert!(repo.is_builtin(&builtin.livenet));
    }

    #[test]
    fn should_report_no_regtest_network_when_empty() {
        let repo = InMemoryNetworkRepository::default();

        assert!(repo.set_regtest(true).is_none());
        assert!(repo.regtest_network().is_none());
        assert!(repo.find_all().is_empty());
    }
}
