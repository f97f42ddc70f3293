//! Stockroom SOAP service library.
//!
//! RPC-style SOAP 1.1 over HTTP: four operations mapped one-to-one onto
//! the persistence gateway, each answering with a human-readable status
//! line. Parsing, dispatch, envelope rendering and the WSDL document are
//! exposed so tests drive the same router the binary serves.

pub mod config;
pub mod envelope;
pub mod error;
pub mod operations;
pub mod router;
pub mod state;
pub mod wsdl;
