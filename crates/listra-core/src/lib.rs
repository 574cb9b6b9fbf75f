#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! Listra Core Library
//!
//! Shared types, traits, and errors for the Listra to-do client. It has no
//! internal Listra dependencies (dependency level 0).

pub mod error;
pub mod filter;
pub mod item;
pub mod store;

// Re-exports for convenience
pub use error::{Error, Result};
pub use item::{Item, ItemId};
pub use store::{ItemStore, MemoryStore};
