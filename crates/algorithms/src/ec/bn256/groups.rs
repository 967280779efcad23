//! The three pairing groups as consumed by pairing-based schemes.
//!
//! `G1` and `G2` wrap curve points, `Gt` wraps an element of the order-n
//! subgroup of Fp12*. All three are written additively: `Gt::add` multiplies,
//! `Gt::neg` conjugates and `Gt::scalar_mult` exponentiates.

use core::fmt;
use core::ops::{Add, Neg, Sub};

use bnpair_api::{Result as ApiResult, Serialize};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::constants::{order, BN256_FP_SIZE, BN256_G1_SIZE, BN256_G2_SIZE, BN256_GT_SIZE};
use super::field::{Fp, Fp2, Fp6, Fp12};
use super::g1::G1Projective;
use super::g2::G2Projective;
use super::hash::{hash_to_g1, hash_to_g2};
use super::pairings::{final_exponentiation, miller_loop, optimal_ate};
use crate::error::{validate, Error, Result};

/// e(g1, g2) for the fixed generators of G₁ and G₂
const GT_GENERATOR: Fp12 = Fp12 {
    c0: Fp6 {
        c0: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x97b9_1989_993e_7be4,
                0x8526_5453_56ea_b684,
                0xb050_0730_22eb_1892,
                0x658b_432a_d099_39c0,
            ]),
            c1: Fp::from_raw_unchecked([
                0xf848_7d81_cb35_4c6c,
                0x7421_be69_f152_2caa,
                0x6940_c778_b9fb_2d54,
                0x7da4_b04e_102b_b621,
            ]),
        },
        c1: Fp2 {
            c0: Fp::from_raw_unchecked([
                0xfb0b_c4c0_ef6d_f55f,
                0x8bdc_585b_70bc_2120,
                0x17d4_98d2_cb72_0def,
                0x2a36_8248_319b_899c,
            ]),
            c1: Fp::from_raw_unchecked([
                0xd343_2a33_5533_272b,
                0xa008_fbbd_c7d7_4f4a,
                0x68e3_c81e_b729_5ed9,
                0x17fe_34c2_1fde_cef2,
            ]),
        },
        c2: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x0799_5279_9f9e_f4b0,
                0x4102_c47a_a3df_01c6,
                0xfa82_a633_c53d_a2e1,
                0x54c3_f039_2f9f_7e0e,
            ]),
            c1: Fp::from_raw_unchecked([
                0x7e76_809b_142d_020b,
                0xd994_9d1b_2822_e995,
                0x3de9_3d97_4f84_b076,
                0x1445_2347_7028_928d,
            ]),
        },
    },
    c1: Fp6 {
        c0: Fp2 {
            c0: Fp::from_raw_unchecked([
                0xcd09_ee8d_d841_8013,
                0xf8d0_50d0_5faa_9b11,
                0x589e_90a5_5550_7ee1,
                0x58e4_ab25_f9c4_9c15,
            ]),
            c1: Fp::from_raw_unchecked([
                0x07cd_ef49_c547_7faa,
                0x40eb_71ff_edaa_199d,
                0xbc89_6661_f17c_9b8f,
                0x3144_4629_83c3_8c02,
            ]),
        },
        c1: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x3f4c_99f8_abaf_1a22,
                0x66d5_f612_1f86_dc33,
                0x8e0a_82f6_8a50_abba,
                0x8199_27d1_eebd_0695,
            ]),
            c1: Fp::from_raw_unchecked([
                0xace5_36a5_607c_910e,
                0xda93_774a_941d_dd40,
                0x5de0_e985_3b75_93ad,
                0x0e05_bb92_6f51_3153,
            ]),
        },
        c2: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x3e0c_1a72_bf08_eb4f,
                0x4972_ec05_990a_5ecc,
                0xf7b9_a407_ead8_007e,
                0x3ca0_4c61_3572_ce49,
            ]),
            c1: Fp::from_raw_unchecked([
                0x62d6_08d6_bb67_a4fb,
                0x9a66_ec93_f0c2_032f,
                0x5391_628e_924e_1a34,
                0x2162_dbf7_de80_1d0e,
            ]),
        },
    },
};

// ============================================================================
// Encoding Helpers
// ============================================================================

/// Little-endian limbs of k mod n
fn scalar_limbs(k: &BigUint) -> Vec<u64> {
    (k % order()).to_u64_digits()
}

fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R) -> BigUint {
    rng.gen_biguint_range(&BigUint::one(), &order())
}

/// Decode one canonical big-endian field element.
fn decode_fp(bytes: &[u8], context: &'static str) -> Result<Fp> {
    validate::length(context, bytes.len(), BN256_FP_SIZE)?;
    let mut buf = [0u8; BN256_FP_SIZE];
    buf.copy_from_slice(bytes);
    Option::<Fp>::from(Fp::from_bytes(&buf)).ok_or(Error::MalformedPoint { context })
}

/// The twelve base field coefficients of an Fp12 element in wire order.
pub(crate) fn gt_coefficients(x: &Fp12) -> [Fp; 12] {
    [
        x.c1.c2.c1, x.c1.c2.c0, x.c1.c1.c1, x.c1.c1.c0, x.c1.c0.c1, x.c1.c0.c0,
        x.c0.c2.c1, x.c0.c2.c0, x.c0.c1.c1, x.c0.c1.c0, x.c0.c0.c1, x.c0.c0.c0,
    ]
}

/// Inverse of [`gt_coefficients`].
pub(crate) fn gt_from_coefficients(c: &[Fp; 12]) -> Fp12 {
    Fp12 {
        c0: Fp6 {
            c0: Fp2 { c0: c[11], c1: c[10] },
            c1: Fp2 { c0: c[9], c1: c[8] },
            c2: Fp2 { c0: c[7], c1: c[6] },
        },
        c1: Fp6 {
            c0: Fp2 { c0: c[5], c1: c[4] },
            c1: Fp2 { c0: c[3], c1: c[2] },
            c2: Fp2 { c0: c[1], c1: c[0] },
        },
    }
}

// ============================================================================
// G1
// ============================================================================

/// Element of G₁
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G1(pub(crate) G1Projective);

impl G1 {
    /// Point at infinity
    pub fn identity() -> G1 {
        G1(G1Projective::identity())
    }

    /// Fixed generator (1, −2)
    pub fn generator() -> G1 {
        G1(G1Projective::generator())
    }

    /// Sample k uniformly from [1, n) and return (k, k·g).
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> (BigUint, G1) {
        let k = random_scalar(rng);
        let p = G1::scalar_base_mult(&k);
        (k, p)
    }

    /// k·g for the fixed generator g
    pub fn scalar_base_mult(k: &BigUint) -> G1 {
        G1::generator().scalar_mult(k)
    }

    /// k·self, with k reduced modulo n
    pub fn scalar_mult(&self, k: &BigUint) -> G1 {
        G1(self.0.multiply(&scalar_limbs(k)))
    }

    /// Group addition
    pub fn add(&self, rhs: &G1) -> G1 {
        G1(&self.0 + &rhs.0)
    }

    /// Group negation
    pub fn neg(&self) -> G1 {
        G1(-self.0)
    }

    /// Check for the point at infinity
    pub fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    /// Hash a message onto G₁
    pub fn hash(msg: &[u8]) -> Result<G1> {
        hash_to_g1(msg).map(G1)
    }

    /// Underlying Jacobian point
    pub fn to_projective(&self) -> G1Projective {
        self.0
    }

    /// Affine X ‖ Y, each 32 bytes big-endian; infinity is all zeros.
    pub fn marshal(&self) -> Vec<u8> {
        let p = self.0.to_affine();
        let mut out = Vec::with_capacity(BN256_G1_SIZE);
        if bool::from(p.is_identity()) {
            out.resize(BN256_G1_SIZE, 0);
            return out;
        }
        out.extend_from_slice(&p.x.to_bytes());
        out.extend_from_slice(&p.y.to_bytes());
        out
    }

    /// Decode a point from the front of `bytes`, returning the unread rest.
    pub fn unmarshal(bytes: &[u8]) -> Result<(G1, &[u8])> {
        validate::min_length("G1", bytes.len(), BN256_G1_SIZE)?;
        let (encoded, rest) = bytes.split_at(BN256_G1_SIZE);

        if encoded.iter().all(|&b| b == 0) {
            return Ok((G1::identity(), rest));
        }

        let x = decode_fp(&encoded[..BN256_FP_SIZE], "G1")?;
        let y = decode_fp(&encoded[BN256_FP_SIZE..], "G1")?;
        let p = G1Projective::from_affine_unchecked(x, y);
        validate::point(p.is_on_curve(), "G1")?;

        Ok((G1(p), rest))
    }
}

impl From<G1Projective> for G1 {
    fn from(p: G1Projective) -> G1 {
        G1(p)
    }
}

impl fmt::Display for G1 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.0.to_affine();
        write!(f, "bn256.G1({}, {})", p.x, p.y)
    }
}

// ============================================================================
// G2
// ============================================================================

const G2_TAG_INFINITY: u8 = 0x00;
const G2_TAG_POINT: u8 = 0x01;

/// Element of G₂
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G2(pub(crate) G2Projective);

impl G2 {
    /// Point at infinity
    pub fn identity() -> G2 {
        G2(G2Projective::identity())
    }

    /// Fixed generator of G₂
    pub fn generator() -> G2 {
        G2(G2Projective::generator())
    }

    /// Sample k uniformly from [1, n) and return (k, k·g).
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> (BigUint, G2) {
        let k = random_scalar(rng);
        let p = G2::scalar_base_mult(&k);
        (k, p)
    }

    /// k·g for the fixed generator g
    pub fn scalar_base_mult(k: &BigUint) -> G2 {
        G2::generator().scalar_mult(k)
    }

    /// k·self, with k reduced modulo n
    pub fn scalar_mult(&self, k: &BigUint) -> G2 {
        G2(self.0.multiply(&scalar_limbs(k)))
    }

    /// Group addition
    pub fn add(&self, rhs: &G2) -> G2 {
        G2(&self.0 + &rhs.0)
    }

    /// Group negation
    pub fn neg(&self) -> G2 {
        G2(-self.0)
    }

    /// Check for the point at infinity
    pub fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    /// Hash a message onto G₂
    pub fn hash(msg: &[u8]) -> Result<G2> {
        hash_to_g2(msg).map(G2)
    }

    /// Underlying Jacobian point
    pub fn to_projective(&self) -> G2Projective {
        self.0
    }

    /// A single 0x00 byte for infinity, otherwise
    /// 0x01 ‖ X.c1 ‖ X.c0 ‖ Y.c1 ‖ Y.c0.
    pub fn marshal(&self) -> Vec<u8> {
        let p = self.0.to_affine();
        if bool::from(p.is_identity()) {
            return [G2_TAG_INFINITY].to_vec();
        }

        let mut out = Vec::with_capacity(BN256_G2_SIZE);
        out.push(G2_TAG_POINT);
        for c in [p.x.c1, p.x.c0, p.y.c1, p.y.c0].iter() {
            out.extend_from_slice(&c.to_bytes());
        }
        out
    }

    /// Decode a point from the front of `bytes`, returning the unread rest.
    pub fn unmarshal(bytes: &[u8]) -> Result<(G2, &[u8])> {
        validate::min_length("G2", bytes.len(), 1)?;

        match bytes[0] {
            G2_TAG_INFINITY => Ok((G2::identity(), &bytes[1..])),
            G2_TAG_POINT => {
                validate::min_length("G2", bytes.len(), BN256_G2_SIZE)?;
                let (encoded, rest) = bytes[1..].split_at(BN256_G2_SIZE - 1);

                let mut c = [Fp::zero(); 4];
                for (i, chunk) in encoded.chunks_exact(BN256_FP_SIZE).enumerate() {
                    c[i] = decode_fp(chunk, "G2")?;
                }

                let p = G2Projective::from_affine_unchecked(
                    Fp2 { c0: c[1], c1: c[0] },
                    Fp2 { c0: c[3], c1: c[2] },
                );
                validate::point(p.is_on_curve(), "G2")?;

                Ok((G2(p), rest))
            }
            _ => Err(Error::MalformedPoint { context: "G2 tag" }),
        }
    }
}

impl From<G2Projective> for G2 {
    fn from(p: G2Projective) -> G2 {
        G2(p)
    }
}

impl fmt::Display for G2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.0.to_affine();
        write!(
            f,
            "bn256.G2(({}, {}), ({}, {}))",
            p.x.c1, p.x.c0, p.y.c1, p.y.c0
        )
    }
}

// ============================================================================
// GT
// ============================================================================

/// Element of GT, or an unfinalized Miller loop output
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Gt(pub(crate) Fp12);

impl Default for Gt {
    fn default() -> Gt {
        Gt::identity()
    }
}

impl Gt {
    /// The identity, 1 in Fp12
    pub fn identity() -> Gt {
        Gt(Fp12::one())
    }

    /// Same as [`Gt::identity`]
    pub fn one() -> Gt {
        Gt::identity()
    }

    /// Check for the identity
    pub fn is_one(&self) -> bool {
        bool::from(self.0.is_one())
    }

    /// e(g1, g2)
    pub fn generator() -> Gt {
        Gt(GT_GENERATOR)
    }

    /// Sample k uniformly from [1, n) and return (k, gᵏ).
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> (BigUint, Gt) {
        let k = random_scalar(rng);
        let g = Gt::scalar_base_mult(&k);
        (k, g)
    }

    /// gᵏ for the generator e(g1, g2)
    pub fn scalar_base_mult(k: &BigUint) -> Gt {
        Gt::generator().scalar_mult(k)
    }

    /// selfᵏ, with k reduced modulo n
    pub fn scalar_mult(&self, k: &BigUint) -> Gt {
        Gt(self.0.pow_vartime(&scalar_limbs(k)))
    }

    /// Group law: multiplication in Fp12
    pub fn add(&self, rhs: &Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }

    /// Group inverse: conjugation, valid for finalized elements
    pub fn neg(&self) -> Gt {
        Gt(self.0.conjugate())
    }

    /// Apply the final exponentiation to a Miller loop output.
    pub fn finalize(&self) -> Gt {
        let _span = tracing::debug_span!("finalize").entered();
        Gt(final_exponentiation(&self.0))
    }

    /// Underlying Fp12 element
    pub fn to_fp12(&self) -> Fp12 {
        self.0
    }

    /// The twelve coefficients, 32 bytes big-endian each, highest first.
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BN256_GT_SIZE);
        for c in gt_coefficients(&self.0).iter() {
            out.extend_from_slice(&c.to_bytes());
        }
        out
    }

    /// Decode an element from the front of `bytes`, returning the unread rest.
    pub fn unmarshal(bytes: &[u8]) -> Result<(Gt, &[u8])> {
        validate::min_length("GT", bytes.len(), BN256_GT_SIZE)?;
        let (encoded, rest) = bytes.split_at(BN256_GT_SIZE);

        let mut c = [Fp::zero(); 12];
        for (i, chunk) in encoded.chunks_exact(BN256_FP_SIZE).enumerate() {
            c[i] = decode_fp(chunk, "GT")?;
        }

        Ok((Gt(gt_from_coefficients(&c)), rest))
    }
}

impl From<Fp12> for Gt {
    fn from(x: Fp12) -> Gt {
        Gt(x)
    }
}

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "bn256.GT(")?;
        for (i, c) in gt_coefficients(&self.0).iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Pairing
// ============================================================================

/// The optimal-Ate pairing e(p, q)
pub fn pair(p: &G1, q: &G2) -> Gt {
    let _span = tracing::debug_span!("pair").entered();
    Gt(optimal_ate(&q.0, &p.0))
}

/// The Miller loop alone; bilinear, but only comparable after
/// [`Gt::finalize`] or against other unfinalized values of the same product.
pub fn miller(p: &G1, q: &G2) -> Gt {
    let _span = tracing::debug_span!("miller").entered();
    Gt(miller_loop(&q.0, &p.0))
}

// ============================================================================
// Trait Implementations
// ============================================================================

macro_rules! impl_group_traits {
    ($t:ident, $name:expr) => {
        impl<'a, 'b> Add<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: &'b $t) -> $t { $t::add(self, rhs) }
        }

        impl Add<$t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t { $t::add(&self, &rhs) }
        }

        impl<'a, 'b> Sub<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: &'b $t) -> $t { $t::add(self, &$t::neg(rhs)) }
        }

        impl Sub<$t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t { &self - &rhs }
        }

        impl<'a> Neg for &'a $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t { $t::neg(self) }
        }

        impl Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t { $t::neg(&self) }
        }

        impl Serialize for $t {
            fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
                let (value, rest) = $t::unmarshal(bytes)?;
                validate::length($name, bytes.len(), bytes.len() - rest.len())?;
                Ok(value)
            }

            fn to_bytes(&self) -> Vec<u8> {
                self.marshal()
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $t {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&self.marshal())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
                let bytes = <Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
                <$t as Serialize>::from_bytes(&bytes).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_group_traits!(G1, "G1");
impl_group_traits!(G2, "G2");
impl_group_traits!(Gt, "GT");
