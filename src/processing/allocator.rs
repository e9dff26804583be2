//! VLSM allocation.
//!
//! Requests are served largest first, each taking the smallest power-of-two
//! block that holds its hosts plus network and broadcast, at the next free
//! offset of the base network. Blocks are handed out in descending size, so
//! every offset is aligned to the block placed there.

use super::reorder::restore_request_order;
use crate::error::VlsmError;
use crate::models::{block_size, AllocatedSubnet, Allocation, Ipv4, MAX_LENGTH};
use itertools::Itertools;

/// Allocate subnets for `requests` out of the CIDR string `base`.
///
/// Fails with [`VlsmError::MissingPrefix`] when `base` has no `/prefix`.
/// See [`allocate_network`] for the allocation itself.
///
/// # Examples
/// ```
/// use vlsm_planner::allocate;
/// let allocation = allocate("192.168.1.0/24", &[100, 50, 20]).unwrap();
/// let cidrs: Vec<String> = allocation.subnets.iter().map(|s| s.network.to_string()).collect();
/// assert_eq!(cidrs, ["192.168.1.0/25", "192.168.1.128/26", "192.168.1.192/27"]);
/// ```
pub fn allocate(base: &str, requests: &[u32]) -> Result<Allocation, VlsmError> {
    let base = Ipv4::new(base)?;
    allocate_network(base, requests)
}

/// Allocate subnets for `requests` out of `base`.
///
/// Host bits of `base` are ignored. Zero host counts take no space and are
/// listed in [`Allocation::omitted`]. The first request that does not fit
/// aborts the whole call.
pub fn allocate_network(base: Ipv4, requests: &[u32]) -> Result<Allocation, VlsmError> {
    let base = base.network();
    let total_addresses = base.num_addresses();
    log::info!(
        "#Start allocate_network() base={base} requests={} addresses={total_addresses}",
        requests.len()
    );

    let omitted: Vec<usize> = requests
        .iter()
        .positions(|hosts| *hosts == 0)
        .collect();
    if !omitted.is_empty() {
        log::warn!("Skipping zero host requests at positions {omitted:?}");
    }

    // Stable, so equal counts keep their request order.
    let sorted: Vec<u32> = requests
        .iter()
        .copied()
        .filter(|hosts| *hosts > 0)
        .sorted_by(|a, b| b.cmp(a))
        .collect();

    let mut allocated: u64 = 0;
    let mut subnets = Vec::with_capacity(sorted.len());

    for (i, hosts_needed) in sorted.into_iter().enumerate() {
        let prefix = prefix_for_hosts(hosts_needed).ok_or(VlsmError::HostCountTooLarge {
            requested: hosts_needed,
        })?;
        let block = block_size(prefix);

        if allocated + block > total_addresses {
            log::warn!(
                "No room for {hosts_needed} hosts (/{prefix}): {} of {total_addresses} addresses left",
                total_addresses - allocated
            );
            return Err(VlsmError::InsufficientSpace {
                requested: hosts_needed,
                required_prefix: prefix,
                available_addresses: total_addresses - allocated,
            });
        }

        let addr = base.nth(allocated).ok_or(VlsmError::InsufficientSpace {
            requested: hosts_needed,
            required_prefix: prefix,
            available_addresses: total_addresses - allocated,
        })?;
        let subnet = AllocatedSubnet::new(i + 1, hosts_needed, Ipv4 { addr, mask: prefix });
        log::debug!(
            "Subnet {} for {hosts_needed} hosts -> {}",
            subnet.id,
            subnet.network
        );
        subnets.push(subnet);
        allocated += block;
    }

    let subnets = restore_request_order(requests, subnets);
    log::info!(
        "Allocated {} subnets using {allocated}/{total_addresses} addresses",
        subnets.len()
    );

    Ok(Allocation {
        base,
        subnets,
        omitted,
        used_addresses: allocated,
        total_addresses,
    })
}

/// Smallest prefix whose block holds `hosts` usable addresses.
///
/// `None` when even a /0 is too small.
pub fn prefix_for_hosts(hosts: u32) -> Option<u8> {
    let size_needed = u64::from(hosts) + 2;
    let bits = u64::BITS - (size_needed - 1).leading_zeros();
    u8::try_from(bits)
        .ok()
        .filter(|bits| *bits <= MAX_LENGTH)
        .map(|bits| MAX_LENGTH - bits)
}

/// Total addresses the positive requests would need if they all fit.
///
/// Requests too large for IPv4 count as a full /0.
pub fn required_addresses(requests: &[u32]) -> u64 {
    requests
        .iter()
        .filter(|hosts| **hosts > 0)
        .map(|hosts| prefix_for_hosts(*hosts).map_or(block_size(0), block_size))
        .sum()
}
