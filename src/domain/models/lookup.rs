//! Lookup Keys
//!
//! Value objects used to resolve a network: index keys, field selectors and the
//! query accepted by registry lookups.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::models::network::Network;

/// Scalar key a network is indexed under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetworkKey {
    Text(String),
    Number(u32),
}

impl NetworkKey {
    /// Parse a key from user input
    ///
    /// `0x`-prefixed hex and plain decimal become numbers, anything else is text.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let hex = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X"));
        if let Some(number) = hex.and_then(|h| u32::from_str_radix(h, 16).ok()) {
            return Self::Number(number);
        }
        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = input.parse() {
                return Self::Number(number);
            }
        }
        Self::Text(input.to_string())
    }

    /// Parse a key, keeping the raw text as a second reading when it looked numeric
    ///
    /// Names and aliases such as `1234` or `0xbeef` are indexed as text, so a
    /// numeric reading that finds nothing is worth retrying as text.
    #[must_use]
    pub fn parse_with_text(input: &str) -> (Self, Option<Self>) {
        match Self::parse(input) {
            number @ Self::Number(_) => (number, Some(Self::Text(input.to_string()))),
            text => (text, None),
        }
    }

    /// Aliases that select testnet in regtest mode
    #[must_use]
    pub fn is_regtest_alias(&self) -> bool {
        matches!(self, Self::Text(text) if text == "local" || text == "regtest")
    }
}

impl fmt::Display for NetworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for NetworkKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NetworkKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u8> for NetworkKey {
    fn from(value: u8) -> Self {
        Self::Number(value.into())
    }
}

impl From<u16> for NetworkKey {
    fn from(value: u16) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for NetworkKey {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

/// Descriptor fields eligible for a restricted lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkField {
    Name,
    Alias,
    PubKeyHash,
    PrivateKey,
    ScriptHash,
    XPubKey,
    XPrivKey,
    XPubKey256Bit,
    XPrivKey256Bit,
    NetworkMagic,
    Port,
    DnsSeeds,
}

impl NetworkField {
    pub const ALL: [Self; 12] = [
        Self::Name,
        Self::Alias,
        Self::PubKeyHash,
        Self::PrivateKey,
        Self::ScriptHash,
        Self::XPubKey,
        Self::XPrivKey,
        Self::XPubKey256Bit,
        Self::XPrivKey256Bit,
        Self::NetworkMagic,
        Self::Port,
        Self::DnsSeeds,
    ];

    /// Wire name of the field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Alias => "alias",
            Self::PubKeyHash => "pubkeyhash",
            Self::PrivateKey => "privatekey",
            Self::ScriptHash => "scripthash",
            Self::XPubKey => "xpubkey",
            Self::XPrivKey => "xprivkey",
            Self::XPubKey256Bit => "xpubkey256bit",
            Self::XPrivKey256Bit => "xprivkey256bit",
            Self::NetworkMagic => "networkMagic",
            Self::Port => "port",
            Self::DnsSeeds => "dnsSeeds",
        }
    }
}

impl fmt::Display for NetworkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown network field: {0}")]
pub struct ParseNetworkFieldError(pub String);

impl FromStr for NetworkField {
    type Err = ParseNetworkFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseNetworkFieldError(s.to_string()))
    }
}

/// Argument of a registry lookup: a descriptor or a key
#[derive(Debug, Clone)]
pub enum NetworkQuery {
    Network(Arc<Network>),
    Key(NetworkKey),
}

impl From<Arc<Network>> for NetworkQuery {
    fn from(network: Arc<Network>) -> Self {
        Self::Network(network)
    }
}

impl From<&Arc<Network>> for NetworkQuery {
    fn from(network: &Arc<Network>) -> Self {
        Self::Network(Arc::clone(network))
    }
}

impl From<NetworkKey> for NetworkQuery {
    fn from(key: NetworkKey) -> Self {
        Self::Key(key)
    }
}

impl From<&str> for NetworkQuery {
    fn from(value: &str) -> Self {
        Self::Key(value.into())
    }
}

impl From<String> for NetworkQuery {
    fn from(value: String) -> Self {
        Self::Key(value.into())
    }
}

impl From<u8> for NetworkQuery {
    fn from(value: u8) -> Self {
        Self::Key(value.into())
    }
}

impl From<u16> for NetworkQuery {
    fn from(value: u16) -> Self {
        Self::Key(value.into())
    }
}

impl From<u32> for NetworkQuery {
    fn from(value: u32) -> Self {
        Self::Key(value.into())
    }
}

impl fmt::Display for NetworkQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(network) => write!(f, "{network}"),
            Self::Key(key) => write!(f, "{key}"),
        }
    }
}
