//! Regtest DTOs

use serde::{Deserialize, Serialize};

use crate::domain::models::network::Network;

/// Body of `PUT /regtest`
#[derive(Debug, Clone, Deserialize)]
pub struct SetRegtestDto {
    pub enabled: bool,
}

/// Current regtest mode and the parameters it selects
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegtestStatusDto {
    pub network: String,
    pub enabled: bool,
    pub port: Option<u16>,
    pub network_magic: Option<String>,
    pub dns_seeds: Vec<String>,
}

impl From<&Network> for RegtestStatusDto {
    fn from(network: &Network) -> Self {
        Self {
            network: network.name().to_string(),
            enabled: network.regtest_enabled().unwrap_or(false),
            port: network.port(),
            network_magic: network.network_magic().map(|m| m.to_string()),
            dns_seeds: network.dns_seeds().map(<[String]>::to_vec).unwrap_or_default(),
        }
    }
}
