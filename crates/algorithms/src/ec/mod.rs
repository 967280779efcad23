//! Elliptic curve primitives
//!
//! Currently a single pairing-friendly curve, BN256, used by pairing-based
//! schemes such as attribute-based encryption.

pub mod bn256;

pub use bn256::{
    map_gt_to_message, map_message_to_gt, miller, pair, Gt as Bn256Gt, G1 as Bn256G1,
    G2 as Bn256G2,
};
