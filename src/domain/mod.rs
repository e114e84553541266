//! Domain Layer
//!
//! Contains the network descriptor model, the registry core and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;
pub mod registry;

pub use gateways::network_repository::NetworkRepository;
pub use models::lookup::{NetworkField, NetworkKey, NetworkQuery};
pub use models::network::{ModeParams, Network, NetworkData, NetworkMagic, RegtestSwitch};
pub use registry::{BuiltinNetworks, NetworkRegistry};
