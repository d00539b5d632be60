//! Output formatting for allocated networks.
//!
//! This module handles the presentation side of the solver:
//! - [`describe`] - turn a [`crate::models::Network`] into display fields

mod describe;

pub use describe::{describe, NetworkSummary};
