//! Stockroom REST API server library.
//!
//! Exposes config, state, error handling, DTOs and routes so integration
//! tests and the binary entrypoint build the exact same application.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
