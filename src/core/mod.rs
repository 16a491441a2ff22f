//! Core components of the `natgrid-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`NgClient`] and its builder.
//! - The [`NgError`] type.
//! - Internal networking and fixture-recording helpers.

/// The client (`NgClient`), builder, and endpoint defaults.
pub mod client;
/// The error type (`NgError`) for the crate.
pub mod error;

#[cfg(feature = "dataframe")]
/// Polars conversions for snapshot tables.
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NgClient`
pub use client::{NgClient, NgClientBuilder};
pub use error::NgError;
