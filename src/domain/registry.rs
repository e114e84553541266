//! Network Registry
//!
//! Ordered collection of network descriptors plus an index from every
//! distinguishing value (name, aliases, version bytes, port, seeds) to the
//! descriptor that declared it.
//!
//! The registry is a plain data structure: mutation needs `&mut self`, and
//! callers sharing it across threads serialize access themselves (see
//! `InMemoryNetworkRepository`). The regtest switch is the one piece of state
//! that flips through `&self`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::models::builtin;
use crate::domain::models::lookup::{NetworkField, NetworkKey, NetworkQuery};
use crate::domain::models::network::{Network, NetworkData, RegtestSwitch};

/// Descriptors registered at bootstrap
#[derive(Debug, Clone)]
pub struct BuiltinNetworks {
    pub livenet: Arc<Network>,
    pub testnet: Arc<Network>,
}

#[derive(Debug, Default)]
pub struct NetworkRegistry {
    networks: Vec<Arc<Network>>,
    index: HashMap<NetworkKey, Arc<Network>>,
    builtin: Vec<Arc<Network>>,
    regtest_network: Option<Arc<Network>>,
}

impl NetworkRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding livenet and testnet
    #[must_use]
    pub fn with_builtin_networks() -> Self {
        Self::bootstrap().0
    }

    /// Create a registry holding livenet and testnet, returning both descriptors
    #[must_use]
    pub fn bootstrap() -> (Self, BuiltinNetworks) {
        let mut registry = Self::new();
        let livenet = registry.add(builtin::livenet());
        let testnet = registry.add_switchable(
            builtin::testnet(),
            RegtestSwitch::new(builtin::testnet_mode(), builtin::regtest_mode()),
        );
        registry.builtin = vec![Arc::clone(&livenet), Arc::clone(&testnet)];

        (registry, BuiltinNetworks { livenet, testnet })
    }

    /// Register a network
    ///
    /// Every key of the new descriptor overwrites an existing entry with the same
    /// value; duplicates are the caller's concern.
    pub fn add(&mut self, data: NetworkData) -> Arc<Network> {
        self.register(Network::new(data))
    }

    /// Register a network whose port, magic and seeds follow the regtest switch
    ///
    /// The new descriptor becomes the target of `enable_regtest`/`disable_regtest`.
    pub fn add_switchable(&mut self, data: NetworkData, switch: RegtestSwitch) -> Arc<Network> {
        let network = self.register(Network::with_regtest_switch(data, switch));
        self.regtest_network = Some(Arc::clone(&network));
        network
    }

    fn register(&mut self, network: Network) -> Arc<Network> {
        let network = Arc::new(network);
        for key in network.index_keys() {
            if let Some(previous) = self.index.insert(key.clone(), Arc::clone(&network)) {
                if !Arc::ptr_eq(&previous, &network) {
                    tracing::debug!(%key, from = %previous, to = %network, "Index key taken over");
                }
            }
        }
        self.networks.push(Arc::clone(&network));
        network
    }

    /// Remove a network and every index entry pointing at it
    ///
    /// Removing a network that is not registered does nothing.
    pub fn remove(&mut self, network: &Arc<Network>) {
        self.networks.retain(|n| !Arc::ptr_eq(n, network));
        self.index.retain(|_, n| !Arc::ptr_eq(n, network));
    }

    /// Resolve a descriptor or key through the index
    ///
    /// A registered descriptor resolves to itself. An unregistered one resolves
    /// by its name. Resolving testnet through `local` or `regtest` turns regtest
    /// mode on.
    #[must_use]
    pub fn get(&self, query: &NetworkQuery) -> Option<Arc<Network>> {
        match query {
            NetworkQuery::Network(network) if self.contains(network) => Some(Arc::clone(network)),
            NetworkQuery::Network(network) => self.lookup(&NetworkKey::Text(network.name().to_string())),
            NetworkQuery::Key(key) => self.lookup(key),
        }
    }

    fn lookup(&self, key: &NetworkKey) -> Option<Arc<Network>> {
        let network = self.index.get(key)?;
        if key.is_regtest_alias() && self.is_regtest_network(network) {
            self.enable_regtest();
        }
        Some(Arc::clone(network))
    }

    /// Find the first network, in registration order, where any of `fields` equals the key
    ///
    /// Bypasses the index and never toggles regtest mode.
    #[must_use]
    pub fn get_by_fields(&self, query: &NetworkQuery, fields: &[NetworkField]) -> Option<Arc<Network>> {
        match query {
            NetworkQuery::Network(network) if self.contains(network) => Some(Arc::clone(network)),
            NetworkQuery::Network(_) => None,
            NetworkQuery::Key(key) => self
                .networks
                .iter()
                .find(|network| fields.iter().any(|&field| network.matches_field(field, key)))
                .cloned(),
        }
    }

    /// Switch the regtest network to its regtest parameters
    pub fn enable_regtest(&self) {
        self.set_regtest(true);
    }

    /// Switch the regtest network back to its normal parameters
    pub fn disable_regtest(&self) {
        self.set_regtest(false);
    }

    fn set_regtest(&self, enabled: bool) {
        if let Some(network) = &self.regtest_network {
            network.set_regtest_enabled(enabled);
            tracing::debug!(network = %network, enabled, "Regtest mode switched");
        }
    }

    /// The network carrying the regtest switch, if one was registered
    #[must_use]
    pub fn regtest_network(&self) -> Option<&Arc<Network>> {
        self.regtest_network.as_ref()
    }

    fn is_regtest_network(&self, network: &Arc<Network>) -> bool {
        self.regtest_network
            .as_ref()
            .is_some_and(|regtest| Arc::ptr_eq(regtest, network))
    }

    /// Registered networks in registration order
    #[must_use]
    pub fn networks(&self) -> &[Arc<Network>] {
        &self.networks
    }

    #[must_use]
    pub fn contains(&self, network: &Arc<Network>) -> bool {
        self.networks.iter().any(|n| Arc::ptr_eq(n, network))
    }

    #[must_use]
    pub fn is_builtin(&self, network: &Arc<Network>) -> bool {
        self.builtin.iter().any(|n| Arc::ptr_eq(n, network))
    }

    /// Index keys currently resolving to `network`
    #[must_use]
    pub fn keys_for(&self, network: &Arc<Network>) -> Vec<NetworkKey> {
        self.index
            .iter()
            .filter(|(_, n)| Arc::ptr_eq(n, network))
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn indexed_keys(&self) -> impl Iterator<Item = &NetworkKey> {
        self.index.keys()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::models::builtin::{REGTEST_PORT, TESTNET_PORT};
    use crate::domain::models::network::NetworkMagic;

    fn custom_network_data() -> NetworkData {
        NetworkData {
            name: "customnet".to_string(),
            alias: vec!["customalias".to_string()],
            pubkeyhash: 0x10,
            privatekey: 0x90,
            scripthash: 0x08,
            xpubkey: 0x0278_b20e,
            xprivkey: 0x0278_ade4,
            xpubkey256bit: 0x0eec_0000,
            xprivkey256bit: 0x0eec_0001,
            network_magic: Some(0xe7be_b4d4),
            port: Some(20001),
            dns_seeds: Some(vec!["localhost".to_string(), "mynet.localhost".to_string()]),
        }
    }

    fn key_set(registry: &NetworkRegistry) -> HashSet<NetworkKey> {
        registry.indexed_keys().cloned().collect()
    }

    #[test]
    fn test_builtin_networks_resolve_by_name_and_identity() {
        let (registry, builtin) = NetworkRegistry::bootstrap();

        for network in [&builtin.livenet, &builtin.testnet] {
            let by_name = registry.get(&network.name().into());
            assert!(by_name.is_some_and(|n| Arc::ptr_eq(&n, network)));

            let by_identity = registry.get(&network.into());
            assert!(by_identity.is_some_and(|n| Arc::ptr_eq(&n, network)));
        }
        assert_eq!(registry.networks().len(), 2);
        assert!(registry.is_builtin(&builtin.livenet));
        assert!(registry.is_builtin(&builtin.testnet));
    }

    #[test]
    fn test_every_alias_resolves_to_its_network() {
        let (registry, builtin) = NetworkRegistry::bootstrap();

        let mainnet = registry.get(&"mainnet".into());
        assert!(mainnet.is_some_and(|n| Arc::ptr_eq(&n, &builtin.livenet)));

        for alias in ["regtest", "devnet", "evonet", "local"] {
            let network = registry.get(&alias.into());
            assert!(network.is_some_and(|n| Arc::ptr_eq(&n, &builtin.testnet)), "alias {alias}");
        }
    }

    #[test]
    fn test_livenet_constants() {
        let (_, builtin) = NetworkRegistry::bootstrap();
        let livenet = &builtin.livenet;

        assert_eq!(livenet.pubkeyhash(), 0x4c);
        assert_eq!(livenet.privatekey(), 0xcc);
        assert_eq!(livenet.scripthash(), 0x10);
        assert_eq!(livenet.xpubkey(), 0x0488_b21e);
        assert_eq!(livenet.xprivkey(), 0x0488_ade4);
        assert_eq!(livenet.network_magic(), Some(NetworkMagic::from_bytes([0xbf, 0x0c, 0x6b, 0xbd])));
        assert_eq!(livenet.port(), Some(9400));
        assert_eq!(livenet.dns_seeds().map(<[String]>::len), Some(3));
        assert_eq!(livenet.regtest_enabled(), None);
    }

    #[test]
    fn test_lookup_by_numeric_values() {
        let (registry, builtin) = NetworkRegistry::bootstrap();

        let by_prefix = registry.get(&0x8c_u8.into());
        assert!(by_prefix.is_some_and(|n| Arc::ptr_eq(&n, &builtin.testnet)));

        let by_port = registry.get(&9400_u16.into());
        assert!(by_port.is_some_and(|n| Arc::ptr_eq(&n, &builtin.livenet)));

        let by_seed = registry.get(&"159.203.17.166".into());
        assert!(by_seed.is_some_and(|n| Arc::ptr_eq(&n, &builtin.livenet)));

        for port in [TESTNET_PORT, REGTEST_PORT] {
            let network = registry.get(&port.into());
            assert!(network.is_some_and(|n| Arc::ptr_eq(&n, &builtin.testnet)));
        }

        // The magic is not an index key
        assert!(registry.get(&0xbf0c_6bbd_u32.into()).is_none());
        assert!(registry.get(&"unknown".into()).is_none());
    }

    #[test]
    fn test_regtest_toggle_switches_testnet_params() {
        let (registry, builtin) = NetworkRegistry::bootstrap();
        let testnet = &builtin.testnet;

        assert_eq!(testnet.port(), Some(19400));
        assert_eq!(testnet.network_magic().map(NetworkMagic::to_u32), Some(0xcee2_caff));
        assert_eq!(testnet.dns_seeds().map(<[String]>::len), Some(2));

        registry.enable_regtest();
        assert_eq!(testnet.regtest_enabled(), Some(true));
        assert_eq!(testnet.port(), Some(19899));
        assert_eq!(testnet.network_magic().map(NetworkMagic::to_u32), Some(0xfcc1_b7dc));
        assert_eq!(testnet.dns_seeds(), Some(&[][..]));
        assert_eq!(testnet.name(), "testnet");
        assert_eq!(testnet.pubkeyhash(), 0x8c);

        registry.enable_regtest();
        assert_eq!(testnet.port(), Some(19899));

        registry.disable_regtest();
        assert_eq!(testnet.port(), Some(19400));

        // Livenet never switches
        assert_eq!(builtin.livenet.port(), Some(9400));
    }

    #[test]
    fn test_regtest_aliases_enable_regtest_mode() {
        for alias in ["local", "regtest"] {
            let (registry, builtin) = NetworkRegistry::bootstrap();
            assert_eq!(builtin.testnet.regtest_enabled(), Some(false));

            let network = registry.get(&alias.into());
            assert!(network.is_some_and(|n| Arc::ptr_eq(&n, &builtin.testnet)));
            assert_eq!(builtin.testnet.regtest_enabled(), Some(true));
            assert_eq!(builtin.testnet.port(), Some(REGTEST_PORT));
        }
    }

    #[test]
    fn test_other_testnet_keys_leave_mode_unchanged() {
        let (registry, builtin) = NetworkRegistry::bootstrap();

        for key in ["testnet", "devnet", "evonet"] {
            assert!(registry.get(&key.into()).is_some());
        }
        assert!(registry.get(&REGTEST_PORT.into()).is_some());
        assert_eq!(builtin.testnet.regtest_enabled(), Some(false));

        registry.enable_regtest();
        assert!(registry.get(&"testnet".into()).is_some());
        assert_eq!(builtin.testnet.regtest_enabled(), Some(true));
    }

    #[test]
    fn test_restricted_lookup_by_fields() {
        let (registry, builtin) = NetworkRegistry::bootstrap();

        let by_alias = registry.get_by_fields(&"mainnet".into(), &[NetworkField::Alias]);
        assert!(by_alias.is_some_and(|n| Arc::ptr_eq(&n, &builtin.livenet)));

        assert!(registry.get_by_fields(&"mainnet".into(), &[NetworkField::Name]).is_none());
        assert!(registry
            .get_by_fields(&"livenet".into(), &[NetworkField::Alias])
            .is_none());

        let by_magic = registry.get_by_fields(&0xbf0c_6bbd_u32.into(), &[NetworkField::NetworkMagic]);
        assert!(by_magic.is_some_and(|n| Arc::ptr_eq(&n, &builtin.livenet)));

        let by_either = registry.get_by_fields(
            &0xcee2_caff_u32.into(),
            &[NetworkField::Port, NetworkField::NetworkMagic],
        );
        assert!(by_either.is_some_and(|n| Arc::ptr_eq(&n, &builtin.testnet)));

        assert!(registry.get_by_fields(&"livenet".into(), &[]).is_none());
    }

    #[test]
    fn test_restricted_lookup_ignores_name_of_other_network() {
        let (mut registry, builtin) = NetworkRegistry::bootstrap();
        let custom = registry.add(NetworkData {
            name: "shadow".to_string(),
            alias: vec!["livenet".to_string()],
            ..custom_network_data()
        });

        let by_alias = registry.get_by_fields(&"livenet".into(), &[NetworkField::Alias]);
        assert!(by_alias.is_some_and(|n| Arc::ptr_eq(&n, &custom)));

        let by_name = registry.get_by_fields(&"livenet".into(), &[NetworkField::Name]);
        assert!(by_name.is_some_and(|n| Arc::ptr_eq(&n, &builtin.livenet)));
    }

    #[test]
    fn test_restricted_lookup_does_not_toggle_regtest() {
        let (registry, builtin) = NetworkRegistry::bootstrap();

        let network = registry.get_by_fields(&"regtest".into(), &[NetworkField::Alias]);
        assert!(network.is_some_and(|n| Arc::ptr_eq(&n, &builtin.testnet)));
        assert_eq!(builtin.testnet.regtest_enabled(), Some(false));
    }

    #[test]
    fn test_add_then_get_returns_matching_fields() {
        let mut registry = NetworkRegistry::with_builtin_networks();
        let data = custom_network_data();
        let added = registry.add(data.clone());

        let found = registry.get(&"customnet".into());
        assert!(found.as_ref().is_some_and(|n| Arc::ptr_eq(n, &added)));

        let network = found.unwrap();
        assert_eq!(network.alias(), data.alias.as_slice());
        assert_eq!(network.pubkeyhash(), data.pubkeyhash);
        assert_eq!(network.xprivkey256bit(), data.xprivkey256bit);
        assert_eq!(network.network_magic(), Some(NetworkMagic::from_u32(0xe7be_b4d4)));
        assert_eq!(network.port(), data.port);
        assert_eq!(network.dns_seeds(), data.dns_seeds.as_deref());
        assert_eq!(registry.networks().len(), 3);
        assert!(!registry.is_builtin(&network));

        for key in ["customalias", "localhost", "mynet.localhost"] {
            assert!(registry.get(&key.into()).is_some_and(|n| Arc::ptr_eq(&n, &added)));
        }
        assert!(registry.get(&20001_u16.into()).is_some_and(|n| Arc::ptr_eq(&n, &added)));
    }

    #[test]
    fn test_remove_purges_collection_and_index() {
        let mut registry = NetworkRegistry::with_builtin_networks();
        let added = registry.add(custom_network_data());

        registry.remove(&added);

        assert!(registry.get(&"customnet".into()).is_none());
        assert!(registry.get(&"customalias".into()).is_none());
        assert!(!registry.contains(&added));
        assert!(registry.keys_for(&added).is_empty());
        assert_eq!(registry.networks().len(), 2);

        // Removed descriptor no longer short-circuits and its name is unknown
        assert!(registry.get(&(&added).into()).is_none());
    }

    #[test]
    fn test_add_then_remove_restores_index() {
        let mut registry = NetworkRegistry::with_builtin_networks();
        let before = key_set(&registry);

        let added = registry.add(custom_network_data());
        assert_ne!(key_set(&registry), before);

        registry.remove(&added);
        assert_eq!(key_set(&registry), before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = NetworkRegistry::with_builtin_networks();
        let before = key_set(&registry);
        let stranger = Arc::new(Network::new(custom_network_data()));

        registry.remove(&stranger);
        registry.remove(&stranger);

        assert_eq!(registry.networks().len(), 2);
        assert_eq!(key_set(&registry), before);
    }

    #[test]
    fn test_unregistered_descriptor_resolves_by_name() {
        let (registry, builtin) = NetworkRegistry::bootstrap();
        let lookalike = Arc::new(Network::new(NetworkData {
            name: "livenet".to_string(),
            ..custom_network_data()
        }));

        let network = registry.get(&(&lookalike).into());
        assert!(network.is_some_and(|n| Arc::ptr_eq(&n, &builtin.livenet)));
        assert!(registry.get_by_fields(&(&lookalike).into(), &[NetworkField::Name]).is_none());
    }

    #[test]
    fn test_last_registration_wins_on_shared_keys() {
        let mut registry = NetworkRegistry::with_builtin_networks();
        let first = registry.add(custom_network_data());
        let second = registry.add(NetworkData {
            name: "othernet".to_string(),
            ..custom_network_data()
        });

        let shared = registry.get(&"customalias".into());
        assert!(shared.is_some_and(|n| Arc::ptr_eq(&n, &second)));
        assert!(registry.get(&"customnet".into()).is_some_and(|n| Arc::ptr_eq(&n, &first)));

        registry.remove(&second);
        assert!(registry.get(&"customalias".into()).is_none());
        assert!(registry.get(&"customnet".into()).is_some_and(|n| Arc::ptr_eq(&n, &first)));
    }

    #[test]
    fn test_empty_registry_is_safe() {
        let registry = NetworkRegistry::new();

        assert!(registry.get(&"livenet".into()).is_none());
        assert!(registry.get(&"regtest".into()).is_none());
        assert!(registry.get_by_fields(&"livenet".into(), &[NetworkField::Name]).is_none());
        assert!(registry.regtest_network().is_none());
        registry.enable_regtest();
        registry.disable_regtest();
        assert_eq!(registry.indexed_keys().count(), 0);
    }
}
