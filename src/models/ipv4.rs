//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing an IPv4 network in CIDR form,
//! along with the mask and block arithmetic used by the allocator.

use crate::error::VlsmError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Splits "<address>[/<prefix>]" while leaving validation of each part to the caller.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^(?P<addr>[^/\s]+)(?:/(?P<prefix>.*))?$").expect("Invalid Regex")
    })
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above 32 saturate to a full mask.
///
/// # Examples
/// ```
/// use vlsm_planner::models::mask_bits;
/// assert_eq!(mask_bits(24), 0xFFFFFF00);
/// ```
pub fn mask_bits(len: u8) -> u32 {
    let len = len.min(MAX_LENGTH);
    if len == 0 {
        0
    } else {
        u32::MAX << (MAX_LENGTH - len)
    }
}

/// Dotted-quad form of a prefix length, e.g. 26 -> 255.255.255.192.
pub fn netmask(len: u8) -> Ipv4Addr {
    Ipv4Addr::from(mask_bits(len))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask_bits(len))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = mask_bits(len);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// Number of addresses in a block of the given prefix length (2^(32-len)).
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Usable host addresses in a block, network and broadcast excluded.
///
/// /31 and /32 have no usable hosts under this rule.
pub fn num_hosts(len: u8) -> u64 {
    block_size(len).saturating_sub(2)
}

/// IPv4 network in CIDR notation.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address (host bits may be set).
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Parse a CIDR string (e.g. "10.0.0.0/24").
    ///
    /// The prefix is mandatory: no classful default is assumed. Host bits are
    /// kept as given, use [`Ipv4::network`] to normalise.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, VlsmError> {
        let addr_cidr = addr_cidr.trim();
        let caps = get_cidr_regex()
            .captures(addr_cidr)
            .ok_or_else(|| VlsmError::InvalidAddress {
                input: addr_cidr.to_string(),
            })?;

        let addr_str = &caps["addr"];
        let addr: Ipv4Addr = addr_str.parse().map_err(|_| VlsmError::InvalidAddress {
            input: addr_str.to_string(),
        })?;

        let prefix_str = caps
            .name("prefix")
            .ok_or_else(|| VlsmError::MissingPrefix {
                input: addr_cidr.to_string(),
            })?
            .as_str();
        let mask = prefix_str
            .parse::<u8>()
            .ok()
            .filter(|m| *m <= MAX_LENGTH)
            .ok_or_else(|| VlsmError::InvalidPrefix {
                input: prefix_str.to_string(),
            })?;

        Ok(Ipv4 { addr, mask })
    }

    /// The same network with host bits masked off.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
    }

    pub fn netmask(&self) -> Ipv4Addr {
        netmask(self.mask)
    }

    /// Total addresses in the network, network and broadcast included.
    pub fn num_addresses(&self) -> u64 {
        block_size(self.mask)
    }

    /// Address `offset` positions after the network address.
    ///
    /// Returns `None` when the offset falls outside this network.
    pub fn nth(&self, offset: u64) -> Option<Ipv4Addr> {
        if offset >= self.num_addresses() {
            return None;
        }
        let bits = u64::from(u32::from(self.lo())) + offset;
        u32::try_from(bits).ok().map(Ipv4Addr::from)
    }

    /// Check if an address lies within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// True when the two address ranges share at least one address.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
