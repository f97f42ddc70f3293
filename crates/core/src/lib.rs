//! Domain types for the stockroom inventory service.
//!
//! Everything here is pure: product values, validation rules, the tagged
//! outcome type shared by every front end, and the status-message text the
//! console and SOAP front ends print. No I/O lives in this crate.

pub mod error;
pub mod message;
pub mod product;
pub mod types;
