//! Subnet allocation logic.
//!
//! - [`allocator`] - VLSM allocation out of a base network
//! - [`reorder`] - Restoring the caller's request order

mod allocator;
mod reorder;

// Re-export public functions
pub use allocator::{allocate, allocate_network, prefix_for_hosts, required_addresses};
pub use reorder::restore_request_order;
