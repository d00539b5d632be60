//! Smallest-subnet mask selection.

use crate::models::{usable_hosts, MAX_LENGTH};

/// Find the tightest slash mask able to address `nhosts` usable hosts
/// inside a network masked at `ceiling_mask`.
///
/// Returns `None` when `nhosts` is 0 or when even the ceiling mask cannot
/// hold that many hosts. Otherwise the scan walks host-bit counts from
/// small to large and stops at the first subnet with at least two host
/// bits that covers `nhosts`, so a single host still gets a /30.
pub fn select_mask(nhosts: u64, ceiling_mask: u8) -> Option<u8> {
    if nhosts == 0 || usable_hosts(ceiling_mask) < nhosts {
        return None;
    }

    for host_bits in 0..=MAX_LENGTH.saturating_sub(ceiling_mask) {
        let capacity = 1u64 << host_bits;
        if capacity > 2 && capacity - 2 >= nhosts {
            return Some(MAX_LENGTH - host_bits);
        }
    }
    None
}
