//! Base field `GF(p)` of the BN256 curve where
//! p = 0x8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089667
//!
//! p is larger than 2^255, so sums of two reduced elements can overflow four
//! limbs. Every reduction here carries the fifth (overflow) word explicitly.

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
///
/// The returned borrow is either zero or all ones.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
pub(crate) const MODULUS: [u64; 4] = [
    0x185c_ac6c_5e08_9667,
    0xee5b_88d1_20b5_b59e,
    0xaa6f_ecb8_6184_dc21,
    0x8fb5_01e3_4aa3_87f9,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x2387_f900_7f17_daa9;

/// Montgomery R = 2^256 mod p
const R: Fp = Fp([
    0xe7a3_5393_a1f7_6999,
    0x11a4_772e_df4a_4a61,
    0x5590_1347_9e7b_23de,
    0x704a_fe1c_b55c_7806,
]);

/// Montgomery R^2 = 2^512 mod p
const R2: Fp = Fp([
    0x9c21_c3ff_7e44_4f56,
    0x409e_d151_b2ef_b0c2,
    0x0c6d_c37b_80fb_1651,
    0x7c36_e0e6_2c23_80b7,
]);

/// Montgomery R^3 = 2^768 mod p
const R3: Fp = Fp([
    0x2af2_dfb9_324a_5bb8,
    0x388f_8990_54f5_38a4,
    0xdf2f_f663_96b1_07a7,
    0x24eb_bbb3_a252_9292,
]);

/// p - 2, the inversion exponent
const P_MINUS_2: [u64; 4] = [
    0x185c_ac6c_5e08_9665,
    0xee5b_88d1_20b5_b59e,
    0xaa6f_ecb8_6184_dc21,
    0x8fb5_01e3_4aa3_87f9,
];

/// (p + 1) / 4, the square-root exponent (p ≡ 3 mod 4)
const P_PLUS_1_OVER_4: [u64; 4] = [
    0x8617_2b1b_1782_259a,
    0x7b96_e234_482d_6d67,
    0x6a9b_fb2e_1861_3708,
    0x23ed_4078_d2a8_e1fe,
];

/// 1/2 in Montgomery form
const TWO_INV: Fp = Fp([0, 0, 0, 0x8000_0000_0000_0000]);

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^256
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 4]);

// ============================================================================
// Reduction
// ============================================================================

impl Fp {
    /// Reduce a five-word value known to be below 2p
    #[inline(always)]
    const fn reduce_once(l0: u64, l1: u64, l2: u64, l3: u64, hi: u64) -> Fp {
        let (r0, borrow) = sbb(l0, MODULUS[0], 0);
        let (r1, borrow) = sbb(l1, MODULUS[1], borrow);
        let (r2, borrow) = sbb(l2, MODULUS[2], borrow);
        let (r3, borrow) = sbb(l3, MODULUS[3], borrow);
        let (_, borrow) = sbb(hi, 0, borrow);

        // borrow is all ones when the value was already below p
        Fp([
            (l0 & borrow) | (r0 & !borrow),
            (l1 & borrow) | (r1 & !borrow),
            (l2 & borrow) | (r2 & !borrow),
            (l3 & borrow) | (r3 & !borrow),
        ])
    }

    /// Montgomery reduction of an eight-word product
    #[inline(always)]
    pub(crate) const fn montgomery_reduce(
        r0: u64, r1: u64, r2: u64, r3: u64,
        r4: u64, r5: u64, r6: u64, r7: u64,
    ) -> Self {
        let k = r0.wrapping_mul(INV);
        let (_, carry) = mac(r0, k, MODULUS[0], 0);
        let (r1, carry) = mac(r1, k, MODULUS[1], carry);
        let (r2, carry) = mac(r2, k, MODULUS[2], carry);
        let (r3, carry) = mac(r3, k, MODULUS[3], carry);
        let (r4, carry2) = adc(r4, 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, carry2) = adc(r5, carry2, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, carry2) = adc(r6, carry2, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, carry2) = adc(r7, carry2, carry);

        Self::reduce_once(r4, r5, r6, r7, carry2)
    }
}

// ============================================================================
// Core Field Operations
// ============================================================================

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Convert a small integer into Montgomery form
    pub const fn from_u64(v: u64) -> Fp {
        Fp([v, 0, 0, 0]).mul(&R2)
    }

    /// Create from Montgomery-form limbs without checking canonicity
    pub const fn from_raw_unchecked(v: [u64; 4]) -> Fp {
        Fp(v)
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, carry) = adc(self.0[3], rhs.0[3], carry);

        Self::reduce_once(d0, d1, d2, d3, carry)
    }

    /// Double a field element
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        let (d0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (d1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (d2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (d3, borrow) = sbb(self.0[3], rhs.0[3], borrow);

        // Add p back if the subtraction underflowed
        let (d0, carry) = adc(d0, MODULUS[0] & borrow, 0);
        let (d1, carry) = adc(d1, MODULUS[1] & borrow, carry);
        let (d2, carry) = adc(d2, MODULUS[2] & borrow, carry);
        let (d3, _) = adc(d3, MODULUS[3] & borrow, carry);

        Fp([d0, d1, d2, d3])
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        // Mask if zero
        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0) as u64)
            .wrapping_sub(1);

        Fp([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }

    /// Multiply two field elements
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        let (r0, carry) = mac(0, self.0[0], rhs.0[0], 0);
        let (r1, carry) = mac(0, self.0[0], rhs.0[1], carry);
        let (r2, carry) = mac(0, self.0[0], rhs.0[2], carry);
        let (r3, r4) = mac(0, self.0[0], rhs.0[3], carry);

        let (r1, carry) = mac(r1, self.0[1], rhs.0[0], 0);
        let (r2, carry) = mac(r2, self.0[1], rhs.0[1], carry);
        let (r3, carry) = mac(r3, self.0[1], rhs.0[2], carry);
        let (r4, r5) = mac(r4, self.0[1], rhs.0[3], carry);

        let (r2, carry) = mac(r2, self.0[2], rhs.0[0], 0);
        let (r3, carry) = mac(r3, self.0[2], rhs.0[1], carry);
        let (r4, carry) = mac(r4, self.0[2], rhs.0[2], carry);
        let (r5, r6) = mac(r5, self.0[2], rhs.0[3], carry);

        let (r3, carry) = mac(r3, self.0[3], rhs.0[0], 0);
        let (r4, carry) = mac(r4, self.0[3], rhs.0[1], carry);
        let (r5, carry) = mac(r5, self.0[3], rhs.0[2], carry);
        let (r6, r7) = mac(r6, self.0[3], rhs.0[3], carry);

        Self::montgomery_reduce(r0, r1, r2, r3, r4, r5, r6, r7)
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Fp {
        let (r1, carry) = mac(0, self.0[0], self.0[1], 0);
        let (r2, carry) = mac(0, self.0[0], self.0[2], carry);
        let (r3, r4) = mac(0, self.0[0], self.0[3], carry);

        let (r3, carry) = mac(r3, self.0[1], self.0[2], 0);
        let (r4, r5) = mac(r4, self.0[1], self.0[3], carry);

        let (r5, r6) = mac(r5, self.0[2], self.0[3], 0);

        let r7 = r6 >> 63;
        let r6 = (r6 << 1) | (r5 >> 63);
        let r5 = (r5 << 1) | (r4 >> 63);
        let r4 = (r4 << 1) | (r3 >> 63);
        let r3 = (r3 << 1) | (r2 >> 63);
        let r2 = (r2 << 1) | (r1 >> 63);
        let r1 = r1 << 1;

        let (r0, carry) = mac(0, self.0[0], self.0[0], 0);
        let (r1, carry) = adc(0, r1, carry);
        let (r2, carry) = mac(r2, self.0[1], self.0[1], carry);
        let (r3, carry) = adc(0, r3, carry);
        let (r4, carry) = mac(r4, self.0[2], self.0[2], carry);
        let (r5, carry) = adc(0, r5, carry);
        let (r6, carry) = mac(r6, self.0[3], self.0[3], carry);
        let (r7, _) = adc(0, r7, carry);

        Self::montgomery_reduce(r0, r1, r2, r3, r4, r5, r6, r7)
    }

    /// Halve a field element
    #[inline]
    pub const fn halve(&self) -> Fp {
        self.mul(&TWO_INV)
    }
}

// ============================================================================
// Advanced Field Operations
// ============================================================================

impl Fp {
    /// Variable-time exponentiation by a little-endian limb slice.
    ///
    /// Only the exponent's bit pattern leaks; all callers pass public
    /// exponents.
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Compute square root if it exists
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        // p ≡ 3 (mod 4), compute a^((p+1)/4)
        let sqrt = self.pow_vartime(&P_PLUS_1_OVER_4);

        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Multiplicative inverse
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        // Fermat's little theorem: a^(p-2)
        let t = self.pow_vartime(&P_MINUS_2);

        CtOption::new(t, !self.is_zero())
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from canonical big-endian bytes, rejecting values >= p
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Fp> {
        let mut tmp = Fp([
            BigEndian::read_u64(&bytes[24..32]),
            BigEndian::read_u64(&bytes[16..24]),
            BigEndian::read_u64(&bytes[8..16]),
            BigEndian::read_u64(&bytes[0..8]),
        ]);

        // Check if < modulus
        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);

        let is_some = (borrow as u8) & 1;

        // Convert to Montgomery form
        tmp *= &R2;

        CtOption::new(tmp, Choice::from(is_some))
    }

    /// Encode to canonical big-endian bytes
    pub fn to_bytes(self) -> [u8; 32] {
        // Convert from Montgomery form
        let tmp = Fp::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0);

        let mut res = [0; 32];
        BigEndian::write_u64(&mut res[0..8], tmp.0[3]);
        BigEndian::write_u64(&mut res[8..16], tmp.0[2]);
        BigEndian::write_u64(&mut res[16..24], tmp.0[1]);
        BigEndian::write_u64(&mut res[24..32], tmp.0[0]);

        res
    }

    /// Create a uniformly random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);

        Fp::from_u512([
            BigEndian::read_u64(&bytes[0..8]),
            BigEndian::read_u64(&bytes[8..16]),
            BigEndian::read_u64(&bytes[16..24]),
            BigEndian::read_u64(&bytes[24..32]),
            BigEndian::read_u64(&bytes[32..40]),
            BigEndian::read_u64(&bytes[40..48]),
            BigEndian::read_u64(&bytes[48..56]),
            BigEndian::read_u64(&bytes[56..64]),
        ])
    }

    /// Reduce a big-endian 512-bit number modulo p
    fn from_u512(limbs: [u64; 8]) -> Fp {
        let lo = Fp([limbs[7], limbs[6], limbs[5], limbs[4]]);
        let hi = Fp([limbs[3], limbs[2], limbs[1], limbs[0]]);
        lo * R2 + hi * R3
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl_field_ops!(Fp);
