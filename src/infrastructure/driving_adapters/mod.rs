//! Driving Adapters
//!
//! The REST API that exposes registry lookups and the regtest switch.

pub mod api_rest;
