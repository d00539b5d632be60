//! IPv4 address codec and subnet mask arithmetic.
//!
//! Free functions for parsing/formatting dotted-decimal text, advancing an
//! address through the 32-bit space, and converting between slash and
//! dotted mask forms. Everything operates on [`std::net::Ipv4Addr`] via
//! its `u32` representation.

use crate::error::VlsmError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-decimal text into an address.
///
/// Accepts exactly 4 groups separated by `.` or `,`, each group at most
/// 3 digits. An empty group counts as 0 (`"1..2.3"` parses to `1.0.2.3`)
/// and a group above 255 wraps through a byte cast (`"300"` becomes 44);
/// both follow the historic solver behaviour.
///
/// # Examples
/// ```
/// use vlsm_solver::models::parse_addr;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse_addr("192.168.0.1").unwrap(), Ipv4Addr::new(192, 168, 0, 1));
/// assert!(parse_addr("192.168.0").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, VlsmError> {
    let mut octets = [0u8; 4];
    let mut group = String::new();
    let mut resolved = 0usize;

    // '\0' terminates the scan the same way the end of a C string does.
    for c in text.chars().chain(std::iter::once('\0')) {
        if c == '.' || c == ',' || c == '\0' {
            if resolved == 4 {
                // 5th group
                return Err(VlsmError::ParseError(text.to_string()));
            }
            octets[resolved] = group.parse::<u32>().unwrap_or(0) as u8;
            group.clear();
            resolved += 1;
        } else if !c.is_ascii_digit() {
            return Err(VlsmError::ParseError(text.to_string()));
        } else {
            if resolved == 4 {
                return Err(VlsmError::ParseError(text.to_string()));
            }
            group.push(c);
            if group.len() > 3 {
                return Err(VlsmError::ParseError(text.to_string()));
            }
        }
    }

    if resolved != 4 {
        return Err(VlsmError::ParseError(text.to_string()));
    }
    Ok(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
}

/// Render an address as dotted decimal, the exact inverse of [`parse_addr`]
/// for canonical input.
pub fn format_addr(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Advance `addr` by `nhosts` through the 32-bit address space.
///
/// Fails with [`VlsmError::AddressOverflow`] when the result would pass
/// 255.255.255.255.
pub fn advance_addr(addr: Ipv4Addr, nhosts: u64) -> Result<Ipv4Addr, VlsmError> {
    let bits = u32::from(addr) as u64;
    let advanced = bits
        .checked_add(nhosts)
        .ok_or(VlsmError::AddressOverflow)?;
    if advanced > u32::MAX as u64 {
        return Err(VlsmError::AddressOverflow);
    }
    Ok(Ipv4Addr::from(advanced as u32))
}

/// Number of usable hosts (excluding network and broadcast addresses) for
/// a mask: `2^(32-mask) - 2`. Masks above 32 yield 0.
///
/// The formula is evaluated as-is at the boundary: `/31` yields 0 and
/// `/32` wraps to `u64::MAX`, matching the historic solver. Callers that
/// need `/31` or `/32` to mean anything must special-case them.
pub fn usable_hosts(mask: u8) -> u64 {
    if mask > MAX_LENGTH {
        0
    } else {
        (1u64 << (MAX_LENGTH - mask)).wrapping_sub(2)
    }
}

/// Number of addressable hosts (including network and broadcast) for a
/// mask: `2^(32-mask)`. Masks above 32 yield 0.
pub fn addressable_hosts(mask: u8) -> u64 {
    if mask > MAX_LENGTH {
        0
    } else {
        1u64 << (MAX_LENGTH - mask)
    }
}

/// Convert a slash mask to its dotted form, e.g. 25 to 255.255.255.128.
///
/// `mask` must be at most 32.
pub fn dotted_mask(mask: u8) -> Ipv4Addr {
    debug_assert!(mask <= MAX_LENGTH, "mask /{mask} > 32");
    let right_len = MAX_LENGTH - mask;
    let all_bits = u32::MAX as u64;
    let bits = (all_bits >> right_len) << right_len;
    Ipv4Addr::from(bits as u32)
}

/// Convert a dotted mask to slash form by summing each octet's bit count
/// from the canonical table. A non-canonical octet contributes 0 without
/// failing the conversion; a warning is logged instead.
pub fn slash_mask(dotted: Ipv4Addr) -> u8 {
    const OCTET_BITS: [(u8, u8); 9] = [
        (0, 0),
        (128, 1),
        (192, 2),
        (224, 3),
        (240, 4),
        (248, 5),
        (252, 6),
        (254, 7),
        (255, 8),
    ];
    let mut mask = 0;
    for octet in dotted.octets() {
        match OCTET_BITS.iter().find(|(value, _)| *value == octet) {
            Some((_, bits)) => mask += bits,
            None => log::warn!("non-canonical mask octet {octet} in {dotted}, counted as 0"),
        }
    }
    mask
}

/// Network address of `addr` under `mask`: bitwise AND with the dotted
/// mask, zeroing the host bits.
pub fn network_addr(addr: Ipv4Addr, mask: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & u32::from(dotted_mask(mask)))
}

/// First usable host address of the network at `addr`.
pub fn first_host(addr: Ipv4Addr) -> Result<Ipv4Addr, VlsmError> {
    advance_addr(addr, 1)
}

/// Last usable host address of the network at `addr` under `mask`.
pub fn last_host(addr: Ipv4Addr, mask: u8) -> Result<Ipv4Addr, VlsmError> {
    advance_addr(addr, usable_hosts(mask))
}

/// Broadcast address of the network at `addr` under `mask`.
pub fn broadcast_addr(addr: Ipv4Addr, mask: u8) -> Result<Ipv4Addr, VlsmError> {
    advance_addr(addr, addressable_hosts(mask).wrapping_sub(1))
}
