//! Term and path helpers used across a pass.

pub mod bucket;
pub mod date;
pub mod filter;
pub mod slug;
