//! Public API traits and types for the bnpair library
//!
//! This crate provides the public API surface shared by the bnpair crates:
//! the error type returned by every fallible operation and the byte
//! serialization trait implemented by the pairing groups.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::Serialize;

// Re-export trait modules for direct access
pub use traits::serialize;
