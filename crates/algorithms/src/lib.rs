//! Pairing engine for the bnpair library
//!
//! This crate implements the optimal-Ate pairing over a 256-bit
//! Barreto-Naehrig curve: the base field and its degree 2, 6 and 12
//! extensions, the G₁ and G₂ curve groups, the Miller loop and final
//! exponentiation, hashing onto both curve groups and the byte encodings
//! consumed by pairing-based schemes.
//!
//! The library is usable in `no_std` environments that provide an
//! allocator.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic curve primitives
pub mod ec;
pub use ec::bn256::{
    self, hash_to_g1, hash_to_g2, map_gt_to_message, map_message_to_gt, miller, pair, Gt, G1,
    G2,
};
