//! Domain types and pure catalog rules shared by the storage and HTTP layers.
//!
//! This crate has no internal dependencies and performs no I/O.

pub mod catalog;
pub mod error;
pub mod types;
