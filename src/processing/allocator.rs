//! Sequential VLSM allocation.
//!
//! Walks an ordered list of host-count requests and places each subnet
//! immediately after the previous one inside the base network. The policy
//! is deliberately greedy and order-preserving: requests are never sorted
//! or repacked, so callers wanting largest-first packing must sort first.

use super::mask_select::select_mask;
use crate::error::VlsmError;
use crate::models::{addressable_hosts, advance_addr, network_addr, usable_hosts, Network};
use std::net::Ipv4Addr;

/// Partition the base network into one subnet per request, in request
/// order, each placed directly after the previous subnet's block.
///
/// Upfront validation: the base mask must be in /1..=/30 and the sum of
/// all requests must be addressable inside the base network; either check
/// failing rejects the whole batch. An empty request list yields an empty
/// allocation without further checks.
///
/// A request of 0 hosts keeps its slot in the result as a mask-0 entry
/// and the subnet after it reuses the same position; it never aborts the
/// batch. On success the result has exactly `requests.len()` entries,
/// index-aligned with the input, contiguous and non-overlapping.
pub fn allocate(
    base_addr: Ipv4Addr,
    base_mask: u8,
    requests: &[u64],
) -> Result<Vec<Network>, VlsmError> {
    log::debug!("#Start allocate() base={base_addr}/{base_mask} requests={requests:?}");

    if requests.is_empty() {
        return Ok(Vec::new());
    }
    if base_mask == 0 || base_mask > 30 {
        return Err(VlsmError::InvalidMask(base_mask));
    }
    let total = match requests.iter().try_fold(0u64, |sum, &n| sum.checked_add(n)) {
        Some(total) => total,
        None => u64::MAX, // summed demand alone overflows the counter
    };
    if select_mask(total, base_mask).is_none() {
        return Err(VlsmError::CapacityExceeded {
            requested: total,
            available: usable_hosts(base_mask),
        });
    }

    let mut subnets: Vec<Network> = Vec::with_capacity(requests.len());
    let mut cursor = network_addr(base_addr, base_mask);

    for &nhosts in requests {
        let mask = match select_mask(nhosts, base_mask) {
            Some(mask) => mask,
            None => {
                // Only reachable for a 0-host request: the sum pre-check
                // already guarantees every real request fits the ceiling.
                log::warn!("request for {nhosts} hosts keeps an empty mask-0 slot");
                0
            }
        };
        if let Some(prev) = subnets.last() {
            // a mask-0 skip slot leaves the cursor in place
            if prev.mask != 0 {
                cursor = advance_addr(cursor, addressable_hosts(prev.mask))?;
            }
        }
        subnets.push(Network { addr: cursor, mask });
    }

    log::debug!("allocate() placed {} subnets", subnets.len());
    Ok(subnets)
}
