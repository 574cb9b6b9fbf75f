//! # Listra Design Documentation
//!
//! This crate contains design documentation and architectural decision records
//! for the Listra project.
//!
//! This is a documentation-only crate with no runtime code.

#![doc = include_str!("../README.md")]
