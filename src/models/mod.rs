//! Domain models for the VLSM solver.
//!
//! This module contains the core value types and address arithmetic:
//! - [`Network`] - an allocated IPv4 network (address plus slash mask)
//! - address codec and mask conversion free functions

mod ipv4;
mod network;

// Re-export public types
pub use ipv4::{
    addressable_hosts, advance_addr, broadcast_addr, dotted_mask, first_host, format_addr,
    last_host, network_addr, parse_addr, slash_mask, usable_hosts, MAX_LENGTH,
};
pub use network::Network;
