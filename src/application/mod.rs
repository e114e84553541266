//! Application Layer
//!
//! Use cases over the network repository gateway.

pub mod use_cases;
