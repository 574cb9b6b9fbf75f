#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! Listra CLI
//!
//! The `listra` binary: item operations, search, and configuration
//! management for the Listra to-do client.

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;

pub use error::{Error, Result};
