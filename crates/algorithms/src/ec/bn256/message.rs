//! Direct embedding of short messages into Fp12.
//!
//! A message is read as a big-endian integer m < p¹² and written in base p,
//! digit i going to the i-th coefficient of the GT wire order. The mapped
//! element is generally not in the order-n subgroup; it is meant to be
//! blinded by a GT element and recovered, not paired.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::constants::{modulus, BN256_FP_SIZE};
use super::field::Fp;
use super::groups::{gt_coefficients, gt_from_coefficients, Gt};
use crate::error::{Error, Result};

fn fp_from_digit(digit: &BigUint) -> Result<Fp> {
    let bytes = digit.to_bytes_be();
    if bytes.len() > BN256_FP_SIZE {
        return Err(Error::Other("base-p digit wider than a field element"));
    }

    let mut buf = [0u8; BN256_FP_SIZE];
    buf[BN256_FP_SIZE - bytes.len()..].copy_from_slice(&bytes);
    Option::<Fp>::from(Fp::from_bytes(&buf)).ok_or(Error::Other("base-p digit not below p"))
}

/// Embed `msg` into Fp12; fails when its integer value is not below p¹².
pub fn map_message_to_gt(msg: &[u8]) -> Result<Gt> {
    let p = modulus();
    let bound = p.pow(12);

    let mut m = BigUint::from_bytes_be(msg);
    if m >= bound {
        return Err(Error::MessageTooLarge {
            bits: m.bits(),
            max_bits: bound.bits(),
        });
    }

    let mut coefficients = [Fp::zero(); 12];
    for c in coefficients.iter_mut() {
        let (q, r) = m.div_rem(&p);
        *c = fp_from_digit(&r)?;
        m = q;
    }

    Ok(Gt::from(gt_from_coefficients(&coefficients)))
}

/// Recover the message embedded by [`map_message_to_gt`]. Leading zero
/// bytes of the original message are not preserved.
pub fn map_gt_to_message(gt: &Gt) -> Vec<u8> {
    let p = modulus();

    let m = gt_coefficients(&gt.to_fp12())
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, c| {
            acc * &p + BigUint::from_bytes_be(&c.to_bytes())
        });

    if m.is_zero() {
        Vec::new()
    } else {
        m.to_bytes_be()
    }
}
