//! Process-Wide Networks
//!
//! A lazily bootstrapped registry shared by the whole process, holding livenet
//! and testnet from first use. Downstream encoders reach for these functions
//! instead of threading a registry around.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::lookup::{NetworkField, NetworkQuery};
use crate::domain::models::network::{Network, NetworkData};
use crate::domain::registry::BuiltinNetworks;
use crate::infrastructure::driven_adapters::network_repository::InMemoryNetworkRepository;

static PROCESS_REGISTRY: Lazy<(InMemoryNetworkRepository, BuiltinNetworks)> =
    Lazy::new(InMemoryNetworkRepository::bootstrap);

/// The process-wide repository
#[must_use]
pub fn repository() -> &'static InMemoryNetworkRepository {
    &PROCESS_REGISTRY.0
}

/// Register a custom network
pub fn add(data: NetworkData) -> Arc<Network> {
    repository().add(data)
}

/// Deregister a network; no-op when it is not registered
pub fn remove(network: &Arc<Network>) {
    repository().remove(network);
}

/// Resolve a network by descriptor, name, alias or any indexed value
///
/// `get("local")` and `get("regtest")` also turn regtest mode on.
pub fn get(query: impl Into<NetworkQuery>) -> Option<Arc<Network>> {
    repository().find(&query.into())
}

/// Resolve a network by comparing only the given fields
pub fn get_by_fields(query: impl Into<NetworkQuery>, fields: &[NetworkField]) -> Option<Arc<Network>> {
    repository().find_by_fields(&query.into(), fields)
}

/// All registered networks in registration order
#[must_use]
pub fn all() -> Vec<Arc<Network>> {
    repository().find_all()
}

pub fn enable_regtest() {
    repository().set_regtest(true);
}

pub fn disable_regtest() {
    repository().set_regtest(false);
}

#[must_use]
pub fn livenet() -> Arc<Network> {
    Arc::clone(&PROCESS_REGISTRY.1.livenet)
}

/// Alias of [`livenet`]
#[must_use]
pub fn mainnet() -> Arc<Network> {
    livenet()
}

#[must_use]
pub fn testnet() -> Arc<Network> {
    Arc::clone(&PROCESS_REGISTRY.1.testnet)
}

/// The network used when a caller names none
#[must_use]
pub fn default_network() -> Arc<Network> {
    livenet()
}
