//! VLSM solver library.
//!
//! Partitions a base IPv4 network into contiguous, minimally-sized
//! subnets, one per host-count request and in request order, or reports
//! that the allocation is infeasible. Pure computation: no I/O, no shared
//! state, every call is independent and re-entrant. Interactive front
//! ends are expected to live outside this crate and drive it through
//! [`allocate`]/[`solve`].

pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::VlsmError;
pub use models::{dotted_mask, format_addr, parse_addr, slash_mask, Network};
pub use output::{describe, NetworkSummary};
pub use processing::allocate;

/// Text-in convenience wrapper: parse the base address, allocate, and
/// describe every resulting subnet.
pub fn solve(
    base: &str,
    base_mask: u8,
    requests: &[u64],
) -> Result<Vec<NetworkSummary>, VlsmError> {
    let base_addr = models::parse_addr(base)?;
    let subnets = processing::allocate(base_addr, base_mask, requests)?;
    Ok(subnets.iter().map(describe).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        let summaries = solve("192.168.0.0", 24, &[254]).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(
            summaries[0].to_string(),
            "192.168.0.0/24 (255.255.255.0) | 192.168.0.1 | 192.168.0.254 | 192.168.0.255 [254]"
        );
    }

    #[test]
    fn test_solve_bad_base_text() {
        assert_eq!(
            solve("192.168.0", 24, &[10]),
            Err(VlsmError::ParseError("192.168.0".to_string()))
        );
    }
}
