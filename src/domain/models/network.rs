//! Network Domain Model
//!
//! A network descriptor: the address and key version bytes, extended-key magics,
//! wire magic, default port and DNS seeds that tell one chain network apart from
//! another. Descriptors are immutable once built, except for the regtest switch
//! carried by the testnet descriptor.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::models::lookup::{NetworkField, NetworkKey};

/// Four-byte network magic, stored big-endian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkMagic([u8; 4]);

impl NetworkMagic {
    /// Encode a 32-bit integer as its big-endian byte sequence
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    #[must_use]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl From<u32> for NetworkMagic {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl fmt::Display for NetworkMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.to_u32())
    }
}

/// Data required to register a new Network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkData {
    pub name: String,
    pub alias: Vec<String>,
    pub pubkeyhash: u8,
    pub privatekey: u8,
    pub scripthash: u8,
    pub xpubkey: u32,
    pub xprivkey: u32,
    pub xpubkey256bit: u32,
    pub xprivkey256bit: u32,
    pub network_magic: Option<u32>,
    pub port: Option<u16>,
    pub dns_seeds: Option<Vec<String>>,
}

/// Port, magic and seeds of one mode of a switchable network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeParams {
    pub port: u16,
    pub network_magic: NetworkMagic,
    pub dns_seeds: Vec<String>,
}

/// Normal and regtest parameter sets plus the flag selecting between them
#[derive(Debug)]
pub struct RegtestSwitch {
    enabled: AtomicBool,
    normal: ModeParams,
    regtest: ModeParams,
}

impl RegtestSwitch {
    /// Create a switch that starts in normal mode
    #[must_use]
    pub fn new(normal: ModeParams, regtest: ModeParams) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            normal,
            regtest,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// The parameter set selected by the current mode
    #[must_use]
    pub fn active(&self) -> &ModeParams {
        if self.is_enabled() {
            &self.regtest
        } else {
            &self.normal
        }
    }

    #[must_use]
    pub fn normal(&self) -> &ModeParams {
        &self.normal
    }

    #[must_use]
    pub fn regtest(&self) -> &ModeParams {
        &self.regtest
    }
}

/// Network descriptor
///
/// Shared as `Arc<Network>`; two descriptors are the same network only when they
/// are the same allocation.
#[derive(Debug)]
pub struct Network {
    name: String,
    alias: Vec<String>,
    pubkeyhash: u8,
    privatekey: u8,
    scripthash: u8,
    xpubkey: u32,
    xprivkey: u32,
    xpubkey256bit: u32,
    xprivkey256bit: u32,
    network_magic: Option<NetworkMagic>,
    port: Option<u16>,
    dns_seeds: Option<Vec<String>>,
    regtest: Option<RegtestSwitch>,
}

impl Network {
    /// Create a new Network from registration data
    #[must_use]
    pub fn new(data: NetworkData) -> Self {
        Self {
            name: data.name,
            alias: data.alias,
            pubkeyhash: data.pubkeyhash,
            privatekey: data.privatekey,
            scripthash: data.scripthash,
            xpubkey: data.xpubkey,
            xprivkey: data.xprivkey,
            xpubkey256bit: data.xpubkey256bit,
            xprivkey256bit: data.xprivkey256bit,
            network_magic: data.network_magic.map(NetworkMagic::from_u32),
            port: data.port,
            dns_seeds: data.dns_seeds,
            regtest: None,
        }
    }

    /// Create a Network whose port, magic and seeds are read through a regtest switch
    #[must_use]
    pub fn with_regtest_switch(data: NetworkData, switch: RegtestSwitch) -> Self {
        Self {
            regtest: Some(switch),
            ..Self::new(data)
        }
    }

    /// Every scalar value this descriptor is indexed under
    ///
    /// Sequence fields contribute each element. The magic bytes are not a key.
    /// A switchable network is indexed under the ports of both modes.
    #[must_use]
    pub fn index_keys(&self) -> Vec<NetworkKey> {
        let mut keys = vec![NetworkKey::Text(self.name.clone())];
        keys.extend(self.alias.iter().cloned().map(NetworkKey::Text));
        keys.extend(
            [
                u32::from(self.pubkeyhash),
                u32::from(self.privatekey),
                u32::from(self.scripthash),
                self.xpubkey,
                self.xprivkey,
                self.xpubkey256bit,
                self.xprivkey256bit,
            ]
            .map(NetworkKey::Number),
        );
        if let Some(port) = self.port {
            keys.push(NetworkKey::Number(port.into()));
        }
        if let Some(seeds) = &self.dns_seeds {
            keys.extend(seeds.iter().cloned().map(NetworkKey::Text));
        }
        if let Some(switch) = &self.regtest {
            keys.push(NetworkKey::Number(switch.normal().port.into()));
            keys.push(NetworkKey::Number(switch.regtest().port.into()));
        }
        keys
    }

    /// Whether `field` of this descriptor equals `key`
    ///
    /// Sequence fields match on any element.
    #[must_use]
    pub fn matches_field(&self, field: NetworkField, key: &NetworkKey) -> bool {
        match (field, key) {
            (NetworkField::Name, NetworkKey::Text(text)) => self.name == *text,
            (NetworkField::Alias, NetworkKey::Text(text)) => self.alias.iter().any(|a| a == text),
            (NetworkField::DnsSeeds, NetworkKey::Text(text)) => {
                self.dns_seeds().is_some_and(|seeds| seeds.iter().any(|s| s == text))
            }
            (NetworkField::Port, NetworkKey::Number(n)) => self.port().is_some_and(|p| u32::from(p) == *n),
            (NetworkField::NetworkMagic, NetworkKey::Number(n)) => {
                self.network_magic().is_some_and(|m| m.to_u32() == *n)
            }
            (field, NetworkKey::Number(n)) => self.version_field(field) == Some(*n),
            _ => false,
        }
    }

    fn version_field(&self, field: NetworkField) -> Option<u32> {
        match field {
            NetworkField::PubKeyHash => Some(self.pubkeyhash.into()),
            NetworkField::PrivateKey => Some(self.privatekey.into()),
            NetworkField::ScriptHash => Some(self.scripthash.into()),
            NetworkField::XPubKey => Some(self.xpubkey),
            NetworkField::XPrivKey => Some(self.xprivkey),
            NetworkField::XPubKey256Bit => Some(self.xpubkey256bit),
            NetworkField::XPrivKey256Bit => Some(self.xprivkey256bit),
            _ => None,
        }
    }

    // Getters

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn alias(&self) -> &[String] {
        &self.alias
    }

    #[must_use]
    pub fn pubkeyhash(&self) -> u8 {
        self.pubkeyhash
    }

    #[must_use]
    pub fn privatekey(&self) -> u8 {
        self.privatekey
    }

    #[must_use]
    pub fn scripthash(&self) -> u8 {
        self.scripthash
    }

    #[must_use]
    pub fn xpubkey(&self) -> u32 {
        self.xpubkey
    }

    #[must_use]
    pub fn xprivkey(&self) -> u32 {
        self.xprivkey
    }

    #[must_use]
    pub fn xpubkey256bit(&self) -> u32 {
        self.xpubkey256bit
    }

    #[must_use]
    pub fn xprivkey256bit(&self) -> u32 {
        self.xprivkey256bit
    }

    /// Wire magic, following the regtest switch when present
    #[must_use]
    pub fn network_magic(&self) -> Option<NetworkMagic> {
        match &self.regtest {
            Some(switch) => Some(switch.active().network_magic),
            None => self.network_magic,
        }
    }

    /// Default port, following the regtest switch when present
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        match &self.regtest {
            Some(switch) => Some(switch.active().port),
            None => self.port,
        }
    }

    /// DNS seeds, following the regtest switch when present
    #[must_use]
    pub fn dns_seeds(&self) -> Option<&[String]> {
        match &self.regtest {
            Some(switch) => Some(&switch.active().dns_seeds),
            None => self.dns_seeds.as_deref(),
        }
    }

    #[must_use]
    pub fn regtest_switch(&self) -> Option<&RegtestSwitch> {
        self.regtest.as_ref()
    }

    /// `Some(enabled)` for switchable networks, `None` otherwise
    #[must_use]
    pub fn regtest_enabled(&self) -> Option<bool> {
        self.regtest.as_ref().map(RegtestSwitch::is_enabled)
    }

    /// Flip the regtest switch; returns false when this network has none
    pub(crate) fn set_regtest_enabled(&self, enabled: bool) -> bool {
        match &self.regtest {
            Some(switch) => {
                switch.set_enabled(enabled);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
