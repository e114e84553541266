//! Driven Adapters
//!
//! Implementations of gateway traits and outward-facing plumbing:
//! - In-memory registry repository
//! - Configuration

pub mod config;
pub mod network_repository;

pub use config::AppConfig;
pub use network_repository::InMemoryNetworkRepository;
