//! Infrastructure Layer
//!
//! The in-memory registry store and configuration loading (driven side), and
//! the HTTP API (driving side).

pub mod driven_adapters;
pub mod driving_adapters;
