//! Allocated network value type.

use super::ipv4::{
    self, broadcast_addr, dotted_mask, first_host, last_host, network_addr, parse_addr, usable_hosts,
    MAX_LENGTH,
};
use crate::error::VlsmError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// An IPv4 network: address plus slash mask.
///
/// The address is expected to already be the network address for `mask`
/// (host bits zero); the allocator produces them that way and never
/// re-validates. Ordering compares the address first, then the mask.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR '{}': {}", s, e)))
    }
}

impl Network {
    /// Create a new [`Network`] from a CIDR string (e.g. "10.0.0.0/24").
    ///
    /// The address part goes through [`parse_addr`] and keeps its quirks.
    pub fn new(addr_cidr: &str) -> Result<Network, VlsmError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_text, mask_text) = addr_cidr
            .split_once('/')
            .ok_or_else(|| VlsmError::ParseError(addr_cidr.to_string()))?;
        let addr = parse_addr(addr_text)?;
        let mask: u8 = mask_text
            .parse()
            .map_err(|_| VlsmError::ParseError(addr_cidr.to_string()))?;
        if mask > MAX_LENGTH {
            return Err(VlsmError::ParseError(addr_cidr.to_string()));
        }
        Ok(Network { addr, mask })
    }

    /// The subnet mask in dotted form.
    pub fn dotted_mask(&self) -> Ipv4Addr {
        dotted_mask(self.mask)
    }

    /// Number of usable hosts in this network.
    pub fn usable_hosts(&self) -> u64 {
        usable_hosts(self.mask)
    }

    /// Number of addressable hosts in this network.
    pub fn addressable_hosts(&self) -> u64 {
        ipv4::addressable_hosts(self.mask)
    }

    /// First usable host address.
    pub fn first_host(&self) -> Result<Ipv4Addr, VlsmError> {
        first_host(self.addr)
    }

    /// Last usable host address.
    pub fn last_host(&self) -> Result<Ipv4Addr, VlsmError> {
        last_host(self.addr, self.mask)
    }

    /// Broadcast address.
    pub fn broadcast(&self) -> Result<Ipv4Addr, VlsmError> {
        broadcast_addr(self.addr, self.mask)
    }

    /// This network's address with the host bits zeroed under its mask.
    pub fn normalized(&self) -> Network {
        Network {
            addr: network_addr(self.addr, self.mask),
            mask: self.mask,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Network) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Network {
    fn partial_cmp(&self, other: &Network) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let net = Network::new("192.168.0.0/24").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(net.mask, 24);
        assert_eq!(net.to_string(), "192.168.0.0/24");

        assert!(Network::new("192.168.0.0").is_err());
        assert!(Network::new("192.168.0.0/33").is_err());
        assert!(Network::new("192.168.0/24").is_err());
        assert!(Network::new("10.0.0.0/abc").is_err());
    }

    #[test]
    fn test_derivations() {
        let net = Network::new("192.168.0.0/24").unwrap();
        assert_eq!(net.dotted_mask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(net.usable_hosts(), 254);
        assert_eq!(net.addressable_hosts(), 256);
        assert_eq!(net.first_host().unwrap(), Ipv4Addr::new(192, 168, 0, 1));
        assert_eq!(net.last_host().unwrap(), Ipv4Addr::new(192, 168, 0, 254));
        assert_eq!(net.broadcast().unwrap(), Ipv4Addr::new(192, 168, 0, 255));
    }

    #[test]
    fn test_normalized() {
        let net = Network::new("192.168.1.42/24").unwrap();
        assert_eq!(net.normalized(), Network::new("192.168.1.0/24").unwrap());
        // already normalized stays put
        assert_eq!(
            net.normalized().normalized(),
            Network::new("192.168.1.0/24").unwrap()
        );
    }

    #[test]
    fn test_cmp() {
        let n1 = Network::new("10.0.0.0/24").unwrap();
        let n2 = Network::new("10.0.1.0/24").unwrap();
        let n3 = Network::new("10.0.0.0/24").unwrap();

        assert!(n1 < n2);
        assert!(n1 == n3);
        assert!(n2 > n1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let net = Network::new("218.20.28.0/22").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"218.20.28.0/22\"");
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);

        let bad: Result<Network, _> = serde_json::from_str("\"10.0.0.0\"");
        assert!(bad.is_err());
    }
}
