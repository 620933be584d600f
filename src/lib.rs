//! Retail quotes, freight-rate lookups and shipment tracking for the HY Express desk.
//!
//! The desktop shell in `main.rs` is a thin layer over these modules.

pub mod domain;
pub mod infra;
pub mod util;
