//! Request handlers.
//!
//! Handlers delegate to repositories in `envanter_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod assets;
