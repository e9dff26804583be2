//! Allocated subnet record and allocation result.

use super::{num_hosts, Ipv4};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One subnet carved out of the base network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocatedSubnet {
    /// 1-based position in processing (descending size) order.
    pub id: usize,
    /// Host count that was requested.
    pub hosts_needed: u32,
    /// Network in CIDR form.
    pub network: Ipv4,
    pub broadcast: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    /// Dotted-quad subnet mask.
    pub mask: Ipv4Addr,
    /// Prefix length, serialized as "/N".
    #[serde(with = "prefix_label")]
    pub prefix: u8,
    /// Usable addresses in the block (block size - 2).
    pub available_hosts: u64,
}

impl AllocatedSubnet {
    /// Derive every address field from the allocated network.
    ///
    /// `network` must already be aligned and have a prefix of at most /30.
    pub fn new(id: usize, hosts_needed: u32, network: Ipv4) -> AllocatedSubnet {
        let network = network.network();
        let lo = u32::from(network.lo());
        let hi = u32::from(network.hi());
        AllocatedSubnet {
            id,
            hosts_needed,
            network,
            broadcast: network.hi(),
            first_host: Ipv4Addr::from(lo.saturating_add(1)),
            last_host: Ipv4Addr::from(hi.saturating_sub(1)),
            mask: network.netmask(),
            prefix: network.mask,
            available_hosts: num_hosts(network.mask),
        }
    }

    /// First address of the block.
    pub fn network_address(&self) -> Ipv4Addr {
        self.network.addr
    }

    /// Prefix length in "/N" form.
    pub fn prefix_label(&self) -> String {
        format!("/{}", self.prefix)
    }
}

/// Successful result of an allocation call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Base network with host bits masked off.
    pub base: Ipv4,
    /// Subnets in the caller's original request order.
    pub subnets: Vec<AllocatedSubnet>,
    /// Request positions (0-based) with a host count of zero, left out of the allocation.
    pub omitted: Vec<usize>,
    /// Addresses consumed by all allocated blocks.
    pub used_addresses: u64,
    /// Addresses in the base network.
    pub total_addresses: u64,
}

impl Allocation {
    /// Addresses of the base network left unallocated.
    pub fn free_addresses(&self) -> u64 {
        self.total_addresses - self.used_addresses
    }
}

mod prefix_label {
    use crate::models::MAX_LENGTH;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(prefix: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("/{prefix}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.strip_prefix('/')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| *n <= MAX_LENGTH)
            .ok_or_else(|| de::Error::custom(format!("invalid prefix label: {s}")))
    }
}
