//! Error taxonomy for the solver.
//!
//! Every fallible operation in the crate returns one of these variants;
//! callers can match on them to give precise messages. No partial results
//! accompany an error and nothing in the library panics across the API.

use thiserror::Error;

/// Errors surfaced by the address codec and the allocator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VlsmError {
    /// Malformed dotted-decimal text. Carries the offending input.
    #[error("invalid IPv4 address text: '{0}'")]
    ParseError(String),

    /// Base network mask outside the allowed /1..=/30 range.
    #[error("base network mask /{0} is outside the allowed range /1..=/30")]
    InvalidMask(u8),

    /// Aggregate host demand does not fit in the base network.
    #[error("requested {requested} hosts but the base network only addresses {available}")]
    CapacityExceeded {
        /// Sum of all host-count requests.
        requested: u64,
        /// Usable host capacity of the base network.
        available: u64,
    },

    /// Address arithmetic would pass 255.255.255.255.
    #[error("address arithmetic overflowed past 255.255.255.255")]
    AddressOverflow,
}
