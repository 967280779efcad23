//! BN256: the optimal-Ate pairing over a 256-bit Barreto-Naehrig curve.
//!
//! The curve is y² = x³ + 3 over Fp with seed u = 1868033³, embedding
//! degree 12 and a sextic twist y² = x³ + 3/ξ over Fp2 carrying G₂.
//! Field elements live in Montgomery form; every byte encoding is canonical
//! big-endian.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

// Module declarations
mod constants;
pub mod field;
mod g1;
mod g2;
mod groups;
mod hash;
mod message;
pub mod pairings;

#[cfg(test)]
mod tests;

// Public API exports
pub use constants::{
    modulus, order, BN256_FP_SIZE, BN256_G1_SIZE, BN256_G2_SIZE, BN256_GT_SIZE,
    BN256_SCALAR_SIZE, BN_U, MAX_HASH_ATTEMPTS,
};
pub use field::{Fp, Fp12, Fp2, Fp6};
pub use g1::G1Projective;
pub use g2::G2Projective;
pub use groups::{miller, pair, Gt, G1, G2};
pub use hash::{hash_to_g1, hash_to_g2};
pub use message::{map_gt_to_message, map_message_to_gt};
