//! Allocation logic.
//!
//! This module contains the solver's decision logic:
//! - [`mask_select`] - smallest-fit mask selection for one request
//! - [`allocator`] - sequential VLSM placement over a request list

mod allocator;
mod mask_select;

// Re-export public functions
pub use allocator::allocate;
pub use mask_select::select_mask;
