//! Repository layer: one struct per table, each method one SQL statement.

pub mod image_repo;

pub use image_repo::ImageRepo;
