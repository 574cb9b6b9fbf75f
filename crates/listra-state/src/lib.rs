#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! Listra State Container
//!
//! [`ListState`] and its synchronization rules over any
//! [`ItemStore`](listra_core::ItemStore).

mod state;

pub use state::ListState;
