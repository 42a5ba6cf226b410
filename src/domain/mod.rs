//! # Domain Layer
//!
//! Core models and errors, independent of transport and presentation.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
