//! Descriptive rendering of an allocated network.

use crate::models::{format_addr, Network};
use serde::Serialize;

/// All display fields of one allocated network, pre-rendered.
///
/// Pure formatting over [`Network`]: no field is re-validated, so a
/// degenerate mask shows whatever the host formulas compute (a mask-0
/// skip slot reports the full address space). When a host derivation
/// cannot advance past 255.255.255.255 the network address itself is
/// shown, as the historic solver did.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    /// CIDR notation, e.g. "10.0.0.0/26".
    pub cidr: String,
    /// The mask in dotted form.
    pub dotted_mask: String,
    /// First usable host address.
    pub first_host: String,
    /// Last usable host address.
    pub last_host: String,
    /// Broadcast address.
    pub broadcast: String,
    /// Number of usable hosts.
    pub usable_hosts: u64,
}

/// Build the display fields for one allocated network.
pub fn describe(network: &Network) -> NetworkSummary {
    let addr = network.addr;
    NetworkSummary {
        cidr: network.to_string(),
        dotted_mask: format_addr(network.dotted_mask()),
        first_host: format_addr(network.first_host().unwrap_or(addr)),
        last_host: format_addr(network.last_host().unwrap_or(addr)),
        broadcast: format_addr(network.broadcast().unwrap_or(addr)),
        usable_hosts: network.usable_hosts(),
    }
}

impl std::fmt::Display for NetworkSummary {
    /// One line per network: `addr/mask (dmask) | first | last | broadcast [hosts]`
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{cidr} ({dmask}) | {first} | {last} | {broadcast} [{hosts}]",
            cidr = self.cidr,
            dmask = self.dotted_mask,
            first = self.first_host,
            last = self.last_host,
            broadcast = self.broadcast,
            hosts = self.usable_hosts,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let summary = describe(&Network::new("192.168.0.0/24").unwrap());
        assert_eq!(summary.cidr, "192.168.0.0/24");
        assert_eq!(summary.dotted_mask, "255.255.255.0");
        assert_eq!(summary.first_host, "192.168.0.1");
        assert_eq!(summary.last_host, "192.168.0.254");
        assert_eq!(summary.broadcast, "192.168.0.255");
        assert_eq!(summary.usable_hosts, 254);
    }

    #[test]
    fn test_display_line() {
        let summary = describe(&Network::new("10.0.0.64/26").unwrap());
        assert_eq!(
            summary.to_string(),
            "10.0.0.64/26 (255.255.255.192) | 10.0.0.65 | 10.0.0.126 | 10.0.0.127 [62]"
        );
    }

    #[test]
    fn test_degenerate_masks_tolerated() {
        // /31: the formula says zero usable hosts, so first > last
        let summary = describe(&Network::new("10.0.0.0/31").unwrap());
        assert_eq!(summary.first_host, "10.0.0.1");
        assert_eq!(summary.last_host, "10.0.0.0");
        assert_eq!(summary.usable_hosts, 0);

        // mask-0 skip slot: derivations that cannot advance fall back to
        // the network address itself
        let summary = describe(&Network::new("192.168.0.16/0").unwrap());
        assert_eq!(summary.dotted_mask, "0.0.0.0");
        assert_eq!(summary.first_host, "192.168.0.17");
        assert_eq!(summary.broadcast, "192.168.0.16");
        assert_eq!(summary.usable_hosts, 4294967294);
    }

    #[test]
    fn test_serialize() {
        let summary = describe(&Network::new("10.0.0.0/30").unwrap());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["cidr"], "10.0.0.0/30");
        assert_eq!(json["usable_hosts"], 2);
    }
}
