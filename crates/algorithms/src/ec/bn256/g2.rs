//! G₂: points on the sextic twist y² = x³ + 3/ξ over Fp2 in Jacobian
//! coordinates.

use core::ops::{Add, Neg, Sub};

use subtle::{Choice, ConstantTimeEq};

use super::constants::{XI_TO_P_MINUS_1_OVER_2, XI_TO_P_MINUS_1_OVER_3};
use super::field::{Fp, Fp2};
use crate::error::{Error, Result};

/// Twist constant b' = 3/ξ
pub(crate) const TWIST_B: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xb94f_760f_b4c5_ee14,
        0xdae9_f8f2_4c3b_6eb4,
        0x77a6_75d2_e52f_4fe4,
        0x736f_31b0_9116_c66b,
    ]),
    c1: Fp::from_raw_unchecked([
        0x7504_6774_386b_8d71,
        0x5bd0_854a_46d3_6cf8,
        0x6643_27a1_d41c_8414,
        0x096c_9abb_932e_eb2f,
    ]),
};

const GENERATOR_X: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x88f9_f11d_a7cd_c184,
        0x1829_3f95_d695_09d3,
        0xb5ce_0c55_a735_d5a1,
        0x0151_3418_9bfd_45a0,
    ]),
    c1: Fp::from_raw_unchecked([
        0x402c_4ab7_139e_1404,
        0xce1c_368a_183d_85a4,
        0xd67c_f9a6_cb8d_3983,
        0x3cf2_46bb_c2a9_fbe8,
    ]),
};

const GENERATOR_Y: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xc2e0_7c14_63ea_9e56,
        0xee44_4205_2072_ebd2,
        0x561a_5194_8603_6937,
        0x05bd_9394_cc0d_2cce,
    ]),
    c1: Fp::from_raw_unchecked([
        0xbfac_7d73_1e9e_87a2,
        0xa50b_b800_7962_e441,
        0xafe9_10a4_e827_0556,
        0x5075_c542_9d69_159a,
    ]),
};

/// Point on the twist, (X, Y, Z) representing (X/Z², Y/Z³). T caches Z² for
/// normalized points and the running point of the Miller loop.
#[derive(Copy, Clone, Debug)]
pub struct G2Projective {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
    pub(crate) t: Fp2,
}

impl Default for G2Projective {
    fn default() -> G2Projective {
        G2Projective::identity()
    }
}

impl G2Projective {
    /// Point at infinity.
    pub const fn identity() -> G2Projective {
        G2Projective {
            x: Fp2::zero(),
            y: Fp2::one(),
            z: Fp2::zero(),
            t: Fp2::zero(),
        }
    }

    /// Fixed generator of the order-n subgroup of the twist.
    pub const fn generator() -> G2Projective {
        G2Projective {
            x: GENERATOR_X,
            y: GENERATOR_Y,
            z: Fp2::one(),
            t: Fp2::one(),
        }
    }

    /// Affine point without an on-curve check.
    pub(crate) const fn from_affine_unchecked(x: Fp2, y: Fp2) -> G2Projective {
        G2Projective {
            x,
            y,
            z: Fp2::one(),
            t: Fp2::one(),
        }
    }

    /// Check for the point at infinity.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Check the curve equation on the affine form; infinity is on the curve.
    pub fn is_on_curve(&self) -> bool {
        let p = self.to_affine();
        if bool::from(p.is_identity()) {
            return true;
        }
        p.y.square() == p.x.square() * p.x + TWIST_B
    }

    /// Normalize to Z = 1 (or the canonical infinity (0, 1, 0, 0)).
    pub fn to_affine(&self) -> G2Projective {
        if bool::from(self.z.ct_eq(&Fp2::one())) {
            return G2Projective::from_affine_unchecked(self.x, self.y);
        }

        match Option::<Fp2>::from(self.z.invert()) {
            Some(z_inv) => {
                let z_inv2 = z_inv.square();
                G2Projective::from_affine_unchecked(self.x * z_inv2, self.y * z_inv2 * z_inv)
            }
            None => G2Projective::identity(),
        }
    }

    /// The twist endomorphism induced by the p-power Frobenius.
    ///
    /// Only defined on normalized input (Z = 1).
    pub fn frobenius(&self) -> Result<G2Projective> {
        if !bool::from(self.z.is_one()) {
            return Err(Error::NotAffine {
                context: "G2 Frobenius",
            });
        }

        Ok(G2Projective::from_affine_unchecked(
            self.x.conjugate() * XI_TO_P_MINUS_1_OVER_3,
            self.y.conjugate() * XI_TO_P_MINUS_1_OVER_2,
        ))
    }

    /// Point doubling.
    pub fn double(&self) -> G2Projective {
        // http://hyperelliptic.org/EFD/g1p/auto-code/shortw/jacobian-0/doubling/dbl-2009-l.op3
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();

        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();

        G2Projective { x: x3, y: y3, z: z3, t: Fp2::zero() }
    }

    /// Point addition; equal inputs are routed to doubling.
    pub fn add(&self, rhs: &G2Projective) -> G2Projective {
        // http://hyperelliptic.org/EFD/g1p/auto-code/shortw/jacobian-0/addition/add-2007-bl.op3
        if bool::from(self.is_identity()) {
            return *rhs;
        }
        if bool::from(rhs.is_identity()) {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;

        let h = u2 - u1;
        let r = s2 - s1;
        if bool::from(h.is_zero() & r.is_zero()) {
            return self.double();
        }

        let i = h.double().square();
        let j = h * i;
        let r = r.double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;

        G2Projective { x: x3, y: y3, z: z3, t: Fp2::zero() }
    }

    /// Point negation.
    pub fn neg(&self) -> G2Projective {
        G2Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
            t: Fp2::zero(),
        }
    }

    /// Variable-time double-and-add from the most significant bit of a
    /// little-endian limb slice.
    pub fn multiply(&self, by: &[u64]) -> G2Projective {
        let mut acc = G2Projective::identity();
        for limb in by.iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                if ((*limb >> i) & 1) == 1 {
                    acc = &acc + self;
                }
            }
        }
        acc
    }
}

impl ConstantTimeEq for G2Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1/Z1², Y1/Z1³) == (X2/Z2², Y2/Z2³)
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        let x_eq = (self.x * z2z2).ct_eq(&(other.x * z1z1));
        let y_eq = (self.y * z2z2 * other.z).ct_eq(&(other.y * z1z1 * self.z));

        let self_inf = self.is_identity();
        let other_inf = other.is_identity();

        (self_inf & other_inf) | ((!self_inf) & (!other_inf) & x_eq & y_eq)
    }
}

impl Eq for G2Projective {}
impl PartialEq for G2Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        G2Projective::neg(self)
    }
}

impl Neg for G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Projective) -> G2Projective {
        G2Projective::add(self, rhs)
    }
}

impl Add<G2Projective> for G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: G2Projective) -> G2Projective {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Projective) -> G2Projective {
        self + &(-rhs)
    }
}

impl Sub<G2Projective> for G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: G2Projective) -> G2Projective {
        &self - &rhs
    }
}
