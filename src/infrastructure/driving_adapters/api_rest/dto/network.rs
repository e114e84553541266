//! Network DTOs
//!
//! Data transfer objects for network API endpoints. Field names follow the
//! camelCase names downstream tooling already uses for network parameters.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::lookup::{NetworkField, ParseNetworkFieldError};
use crate::domain::models::network::{Network, NetworkData};

lazy_static! {
    /// Network names and aliases: alphanumeric start, then alphanumerics, `.`, `_` or `-`
    static ref NETWORK_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,63}$").expect("valid regex");

    /// DNS seeds: dot-separated hostname labels (IPv4 literals included)
    static ref DNS_SEED_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$"
    )
    .expect("valid regex");
}

/// Validates a network name or alias
fn validate_network_name(name: &str) -> Result<(), validator::ValidationError> {
    if NETWORK_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("network_name");
        error.message = Some(
            "Invalid network name (letters, digits, '.', '_' or '-', at most 64 characters)".into(),
        );
        Err(error)
    }
}

/// Validates every alias
fn validate_alias(alias: &AliasDto) -> Result<(), validator::ValidationError> {
    let aliases = alias.as_slice();
    if aliases.len() > 16 {
        let mut error = validator::ValidationError::new("alias");
        error.message = Some("alias can have at most 16 items".into());
        return Err(error);
    }
    aliases.iter().try_for_each(|a| validate_network_name(a))
}

/// Validates DNS seed hostnames
fn validate_dns_seeds(seeds: &[String]) -> Result<(), validator::ValidationError> {
    for seed in seeds {
        if seed.len() > 253 || !DNS_SEED_REGEX.is_match(seed) {
            let mut error = validator::ValidationError::new("dns_seed");
            error.message = Some(format!("Invalid DNS seed '{seed}'").into());
            return Err(error);
        }
    }
    Ok(())
}

/// Alias given as one string or a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AliasDto {
    One(String),
    Many(Vec<String>),
}

impl AliasDto {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(alias) => std::slice::from_ref(alias),
            Self::Many(aliases) => aliases,
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(alias) => vec![alias],
            Self::Many(aliases) => aliases,
        }
    }
}

/// DTO for registering a new network
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddNetworkDto {
    #[validate(custom(function = "validate_network_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_alias"))]
    pub alias: Option<AliasDto>,

    pub pubkeyhash: u8,
    pub privatekey: u8,
    pub scripthash: u8,
    pub xpubkey: u32,
    pub xprivkey: u32,
    pub xpubkey256bit: u32,
    pub xprivkey256bit: u32,

    #[serde(default)]
    pub network_magic: Option<u32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "port must be at least 1"))]
    pub port: Option<u16>,

    #[serde(default)]
    #[validate(
        length(max = 32, message = "dnsSeeds can have at most 32 items"),
        custom(function = "validate_dns_seeds")
    )]
    pub dns_seeds: Option<Vec<String>>,
}

impl From<AddNetworkDto> for NetworkData {
    fn from(dto: AddNetworkDto) -> Self {
        Self {
            name: dto.name,
            alias: dto.alias.map(AliasDto::into_vec).unwrap_or_default(),
            pubkeyhash: dto.pubkeyhash,
            privatekey: dto.privatekey,
            scripthash: dto.scripthash,
            xpubkey: dto.xpubkey,
            xprivkey: dto.xprivkey,
            xpubkey256bit: dto.xpubkey256bit,
            xprivkey256bit: dto.xprivkey256bit,
            network_magic: dto.network_magic,
            port: dto.port,
            dns_seeds: dto.dns_seeds,
        }
    }
}

/// Query string of a network lookup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupParams {
    /// Comma-separated field names restricting the match
    pub keys: Option<String>,
}

impl LookupParams {
    /// Parse `keys`; absent or blank means an index lookup
    ///
    /// # Errors
    ///
    /// Returns `ParseNetworkFieldError` for an unknown field name.
    pub fn fields(&self) -> Result<Option<Vec<NetworkField>>, ParseNetworkFieldError> {
        let Some(keys) = self.keys.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };
        keys.split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::parse::<NetworkField>)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Network response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub name: String,
    pub alias: Vec<String>,
    pub pubkeyhash: u8,
    pub privatekey: u8,
    pub scripthash: u8,
    pub xpubkey: u32,
    pub xprivkey: u32,
    pub xpubkey256bit: u32,
    pub xprivkey256bit: u32,
    /// Big-endian hex
    pub network_magic: Option<String>,
    pub port: Option<u16>,
    pub dns_seeds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regtest_enabled: Option<bool>,
}

impl From<&Network> for NetworkResponseDto {
    fn from(network: &Network) -> Self {
        Self {
            name: network.name().to_string(),
            alias: network.alias().to_vec(),
            pubkeyhash: network.pubkeyhash(),
            privatekey: network.privatekey(),
            scripthash: network.scripthash(),
            xpubkey: network.xpubkey(),
            xprivkey: network.xprivkey(),
            xpubkey256bit: network.xpubkey256bit(),
            xprivkey256bit: network.xprivkey256bit(),
            network_magic: network.network_magic().map(|m| m.to_string()),
            port: network.port(),
            dns_seeds: network.dns_seeds().map(<[String]>::to_vec),
            regtest_enabled: network.regtest_enabled(),
        }
    }
}
