#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! Listra HTTP Client
//!
//! `reqwest`-backed access to the collection resource, implementing the
//! [`ItemStore`](listra_core::ItemStore) seam.

pub mod config;
pub mod store;

// Re-exports for convenience
pub use config::ClientConfig;
pub use store::HttpStore;
