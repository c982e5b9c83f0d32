//! Request handlers.
//!
//! Handlers delegate to the [`ImageStore`](gallery_db::ImageStore) in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod gallery;
