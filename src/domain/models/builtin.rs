//! Built-in Networks
//!
//! Parameters of the networks every registry starts with. Other code encodes
//! against these values, so they must not change.

use crate::domain::models::network::{ModeParams, NetworkData, NetworkMagic};

pub const LIVENET: &str = "livenet";
pub const TESTNET: &str = "testnet";

pub const LIVENET_NETWORK_MAGIC: u32 = 0xbf0c_6bbd;
pub const LIVENET_PORT: u16 = 9400;

pub const TESTNET_PORT: u16 = 19400;
pub const TESTNET_NETWORK_MAGIC: u32 = 0xcee2_caff;

pub const REGTEST_PORT: u16 = 19899;
pub const REGTEST_NETWORK_MAGIC: u32 = 0xfcc1_b7dc;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn livenet() -> NetworkData {
    NetworkData {
        name: LIVENET.to_string(),
        alias: strings(&["mainnet"]),
        pubkeyhash: 0x4c,
        privatekey: 0xcc,
        scripthash: 0x10,
        xpubkey: 0x0488_b21e,       // xpub
        xprivkey: 0x0488_ade4,      // xprv
        xpubkey256bit: 0x0eec_efc5,  // dpmp
        xprivkey256bit: 0x0eec_f02e, // dpms
        network_magic: Some(LIVENET_NETWORK_MAGIC),
        port: Some(LIVENET_PORT),
        dns_seeds: Some(strings(&["www.lkschain.io", "5.189.170.226", "159.203.17.166"])),
    }
}

/// Testnet registration data; port, magic and seeds come from the mode params
#[must_use]
pub fn testnet() -> NetworkData {
    NetworkData {
        name: TESTNET.to_string(),
        alias: strings(&["regtest", "devnet", "evonet", "local"]),
        pubkeyhash: 0x8c,
        privatekey: 0xef,
        scripthash: 0x13,
        xpubkey: 0x0435_87cf,       // tpub
        xprivkey: 0x0435_8394,      // tprv
        xpubkey256bit: 0x0eed_270b,  // dptp
        xprivkey256bit: 0x0eed_2774, // dpts
        network_magic: None,
        port: None,
        dns_seeds: None,
    }
}

#[must_use]
pub fn testnet_mode() -> ModeParams {
    ModeParams {
        port: TESTNET_PORT,
        network_magic: NetworkMagic::from_u32(TESTNET_NETWORK_MAGIC),
        dns_seeds: strings(&["fork.lkschain.io", "159.65.73.24"]),
    }
}

#[must_use]
pub fn regtest_mode() -> ModeParams {
    ModeParams {
        port: REGTEST_PORT,
        network_magic: NetworkMagic::from_u32(REGTEST_NETWORK_MAGIC),
        dns_seeds: Vec::new(),
    }
}
