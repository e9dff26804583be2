//! Variable-length subnet (VLSM) planning for IPv4.
//!
//! [`allocate`] splits a base network into subnets sized for a list of host
//! counts. The other modules collect input and render or export the result.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{InputError, VlsmError};
pub use models::{AllocatedSubnet, Allocation, Ipv4};
pub use processing::{allocate, allocate_network};
