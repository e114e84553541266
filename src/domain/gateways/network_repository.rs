//! Network Repository Gateway
//!
//! Abstract trait defining the contract for network registry operations.
//! All operations are synchronous and infallible: a missing network is `None`.

use std::sync::Arc;

use crate::domain::models::lookup::{NetworkField, NetworkQuery};
use crate::domain::models::network::{Network, NetworkData};

/// Repository trait for network registration and lookup
#[cfg_attr(test, mockall::automock)]
pub trait NetworkRepository: Send + Sync {
    /// Register a network and index all of its keys
    fn add(&self, data: NetworkData) -> Arc<Network>;

    /// Deregister a network; no-op when it is not registered
    fn remove(&self, network: &Arc<Network>);

    /// Resolve a descriptor or key through the index
    fn find(&self, query: &NetworkQuery) -> Option<Arc<Network>>;

    /// Resolve a key against the given fields only, in registration order
    fn find_by_fields(&self, query: &NetworkQuery, fields: &[NetworkField]) -> Option<Arc<Network>>;

    /// All networks in registration order
    fn find_all(&self) -> Vec<Arc<Network>>;

    /// Whether the network was registered at bootstrap
    fn is_builtin(&self, network: &Arc<Network>) -> bool;

    /// Switch regtest mode, returning the switchable network if there is one
    fn set_regtest(&self, enabled: bool) -> Option<Arc<Network>>;

    /// The network carrying the regtest switch
    fn regtest_network(&self) -> Option<Arc<Network>>;
}
