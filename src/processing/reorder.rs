//! Mapping allocated subnets back to the order they were requested in.

use crate::models::AllocatedSubnet;
use std::collections::{HashMap, VecDeque};

/// Reorder `processed` to follow `requests`.
///
/// Each request takes the earliest unused subnet with the same host count,
/// so duplicate counts are matched in order and no record is used twice.
/// Requests without a matching subnet (zero host counts) are skipped.
pub fn restore_request_order(
    requests: &[u32],
    processed: Vec<AllocatedSubnet>,
) -> Vec<AllocatedSubnet> {
    let mut by_hosts: HashMap<u32, VecDeque<AllocatedSubnet>> = HashMap::new();
    for subnet in processed {
        by_hosts
            .entry(subnet.hosts_needed)
            .or_default()
            .push_back(subnet);
    }

    requests
        .iter()
        .filter_map(|hosts| by_hosts.get_mut(hosts).and_then(VecDeque::pop_front))
        .collect()
}
