//! Domain types shared by the gallery store and web server.

pub mod encoding;
pub mod error;
pub mod image;
