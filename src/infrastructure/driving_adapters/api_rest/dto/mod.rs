//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod network;
pub mod regtest;

pub use network::{AddNetworkDto, AliasDto, LookupParams, NetworkResponseDto};
pub use regtest::{RegtestStatusDto, SetRegtestDto};
