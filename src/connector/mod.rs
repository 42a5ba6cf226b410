//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - HTTP access to the remote catalog (reqwest)
//! - An in-memory catalog stand-in for development and tests
//! - Console rendering of list snapshots

pub mod adapter;

pub use adapter::*;
