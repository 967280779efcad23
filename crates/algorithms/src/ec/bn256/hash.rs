//! Try-and-increment hashing onto G₁ and G₂.
//!
//! G₂ candidates are cleared into the order-n subgroup with the Frobenius
//! combination of Fuentes-Castañeda, Knapp and Rodríguez-Henríquez,
//! "Faster hashing to G₂": h(Q) = [u]Q + π([3u]Q) + π²([u]Q) + π³(Q).

use sha2::{Digest, Sha256};

use super::constants::{BN_U, MAX_HASH_ATTEMPTS};
use super::field::{Fp, Fp2};
use super::g1::{G1Projective, B};
use super::g2::{G2Projective, TWIST_B};
use crate::error::{Error, Result};

/// SHA-256 of the message, rehashed until the digest is a canonical field
/// element.
pub(crate) fn hash_to_fp(msg: &[u8]) -> Result<Fp> {
    let mut digest: [u8; 32] = Sha256::digest(msg).into();

    for attempt in 0..MAX_HASH_ATTEMPTS {
        if let Some(x) = Option::<Fp>::from(Fp::from_bytes(&digest)) {
            return Ok(x);
        }
        tracing::trace!(attempt, "digest exceeds the field modulus, rehashing");
        digest = Sha256::digest(digest).into();
    }

    tracing::warn!(attempts = MAX_HASH_ATTEMPTS, "no digest below the field modulus");
    Err(Error::NoSquareRoot {
        context: "hash to base field",
    })
}

/// Hash a message onto G₁: x starts at the message hash and is incremented
/// until x³ + 3 is a square.
pub fn hash_to_g1(msg: &[u8]) -> Result<G1Projective> {
    let mut x = hash_to_fp(msg)?;

    for attempt in 0..MAX_HASH_ATTEMPTS {
        let rhs = x.square() * x + B;
        if let Some(y) = Option::<Fp>::from(rhs.sqrt()) {
            tracing::debug!(attempt, "hashed to G1");
            return Ok(G1Projective::from_affine_unchecked(x, y));
        }
        tracing::trace!(attempt, "G1 candidate is not on the curve");
        x += Fp::one();
    }

    tracing::warn!(attempts = MAX_HASH_ATTEMPTS, "G1 hash search exhausted");
    Err(Error::NoSquareRoot { context: "hash_to_g1" })
}

/// Hash a message onto the order-n subgroup of the twist: x = 1 + v·i with
/// v starting at the message hash, then cofactor clearing.
pub fn hash_to_g2(msg: &[u8]) -> Result<G2Projective> {
    let mut v = hash_to_fp(msg)?;

    for attempt in 0..MAX_HASH_ATTEMPTS {
        let x = Fp2 { c0: Fp::one(), c1: v };
        let rhs = x.square() * x + TWIST_B;
        if let Some(y) = Option::<Fp2>::from(rhs.sqrt()) {
            tracing::debug!(attempt, "hashed to the twist");
            return clear_cofactor(&G2Projective::from_affine_unchecked(x, y));
        }
        tracing::trace!(attempt, "G2 candidate is not on the twist");
        v += Fp::one();
    }

    tracing::warn!(attempts = MAX_HASH_ATTEMPTS, "G2 hash search exhausted");
    Err(Error::NoSquareRoot { context: "hash_to_g2" })
}

/// Map an affine twist point into the order-n subgroup.
fn clear_cofactor(point: &G2Projective) -> Result<G2Projective> {
    let xq = point.multiply(&[BN_U]);

    let t1 = (xq + xq.double()).to_affine().frobenius()?;

    let xq = xq.to_affine();
    let t2 = xq.frobenius()?.frobenius()?;
    let t3 = point.frobenius()?.frobenius()?.frobenius()?;

    Ok(xq + t1 + t2 + t3)
}
