//! Chain Network Registry
//!
//! Named parameter sets (version bytes, extended-key magics, network magic,
//! default port and DNS seeds) for livenet, testnet and testnet's regtest mode,
//! with lookup by any distinguishing value. Laid out in Clean/Hexagonal
//! Architecture layers, with a REST API as the driving adapter.
//!
//! Most consumers only need the process-wide functions in [`networks`]:
//!
//! ```
//! use chain_network_registry::networks;
//!
//! let livenet = networks::get("mainnet").expect("livenet is built in");
//! assert_eq!(livenet.pubkeyhash(), 0x4c);
//! assert_eq!(livenet.port(), Some(9400));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod networks;
pub mod shared;
