//! # bnpair
//!
//! An optimal-Ate pairing engine over a 256-bit Barreto-Naehrig curve, for
//! pairing-based schemes such as ciphertext-policy attribute-based
//! encryption.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bnpair = "0.3"
//! ```
//!
//! ```
//! use bnpair::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (a, pa) = G1::random(&mut OsRng);
//! let (b, qb) = G2::random(&mut OsRng);
//!
//! // e(aP, bQ) = e(P, Q)^(ab)
//! let ab = (&a * &b) % bnpair::algorithms::ec::bn256::order();
//! assert_eq!(pair(&pa, &qb), pair(&G1::generator(), &G2::generator()).scalar_mult(&ab));
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: `no_std` builds with an allocator
//! - `serde`: serde support for `G1`, `G2` and `Gt` through their byte encodings
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`bnpair-api`]: public error type and the `Serialize` trait
//! - [`bnpair-algorithms`]: the field tower, curve groups and pairing

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use bnpair_algorithms as algorithms;
pub use bnpair_api as api;

pub use num_bigint::BigUint;

/// Common imports for bnpair users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::Serialize;

    // Pairing groups and operations
    pub use crate::algorithms::ec::bn256::{
        hash_to_g1, hash_to_g2, map_gt_to_message, map_message_to_gt, miller, pair, Gt, G1, G2,
    };

    pub use crate::BigUint;
}
