//! Network Use Cases
//!
//! Business logic for registering, resolving and removing networks, and for
//! switching testnet between its normal and regtest parameters.

mod add_network;
mod get_network;
mod get_regtest_mode;
mod list_networks;
mod remove_network;
mod set_regtest_mode;

pub use add_network::AddNetworkUseCase;
pub use get_network::GetNetworkUseCase;
pub use get_regtest_mode::GetRegtestModeUseCase;
pub use list_networks::ListNetworksUseCase;
pub use remove_network::RemoveNetworkUseCase;
pub use set_regtest_mode::SetRegtestModeUseCase;
