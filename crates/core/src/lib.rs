//! Domain logic for the equipment inventory.
//!
//! Everything here is free of I/O so the repository and HTTP layers (and
//! their tests) can share one definition of what a valid asset is.

pub mod admin;
pub mod assets;
pub mod error;
pub mod types;
