//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&DbPool` as the first argument. Connections are borrowed
//! from the pool per statement and returned on drop, including on error.

pub mod image_repo;
pub mod park_repo;

pub use image_repo::ImageRepo;
pub use park_repo::ParkRepo;
