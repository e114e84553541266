//! Domain Models
//!
//! Network descriptors, lookup value objects and the built-in network parameters.

pub mod builtin;
pub mod lookup;
pub mod network;

pub use lookup::{NetworkField, NetworkKey, NetworkQuery, ParseNetworkFieldError};
pub use network::{ModeParams, Network, NetworkData, NetworkMagic, RegtestSwitch};
