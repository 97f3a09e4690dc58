//! Row structs and API response models.
//!
//! `*Row` structs mirror database rows and derive `FromRow`; the remaining
//! structs are the denormalized shapes returned to clients.

pub mod catalog;
pub mod park;
