//! Domain models for the VLSM planner.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`AllocatedSubnet`] and [`Allocation`] - allocator output

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, mask_bits, netmask, num_hosts, Ipv4, MAX_LENGTH,
};
pub use subnet::{AllocatedSubnet, Allocation};
