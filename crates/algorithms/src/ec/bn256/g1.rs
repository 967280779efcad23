//! G₁: points on y² = x³ + 3 over Fp in Jacobian coordinates.

use core::ops::{Add, Neg, Sub};

use subtle::{Choice, ConstantTimeEq};

use super::field::Fp;

/// Curve constant b = 3
pub(crate) const B: Fp = Fp::from_raw_unchecked([
    0x8630_a1e2_29d5_0ffd,
    0x5836_53ea_5c73_73e9,
    0xabd0_6066_1867_b356,
    0x3176_f68f_8ace_581f,
]);

/// −2, the y coordinate of the generator (1, −2)
const GENERATOR_Y: Fp = Fp::from_raw_unchecked([
    0x6172_b1b1_7822_599c,
    0xb96e_2344_82d6_d678,
    0xa9bf_b2e1_8613_7087,
    0x3ed4_078d_2a8e_1fe6,
]);

/// G₁ point (X, Y, Z) representing (X/Z², Y/Z³), with the auxiliary T = Z²
/// kept for points that have been normalized. Z = 0 is the point at infinity.
#[derive(Copy, Clone, Debug)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
    pub(crate) t: Fp,
}

impl Default for G1Projective {
    fn default() -> G1Projective {
        G1Projective::identity()
    }
}

impl G1Projective {
    /// Point at infinity.
    pub const fn identity() -> G1Projective {
        G1Projective {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::zero(),
            t: Fp::zero(),
        }
    }

    /// Fixed generator (1, −2).
    pub const fn generator() -> G1Projective {
        G1Projective {
            x: Fp::one(),
            y: GENERATOR_Y,
            z: Fp::one(),
            t: Fp::one(),
        }
    }

    /// Affine point without an on-curve check.
    pub(crate) const fn from_affine_unchecked(x: Fp, y: Fp) -> G1Projective {
        G1Projective {
            x,
            y,
            z: Fp::one(),
            t: Fp::one(),
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
        p.y.square() == p.x.square() * p.x + B
    }

    /// Normalize to Z = 1 (or the canonical infinity (0, 1, 0, 0)).
    pub fn to_affine(&self) -> G1Projective {
        if bool::from(self.z.ct_eq(&Fp::one())) {
            return G1Projective::from_affine_unchecked(self.x, self.y);
        }

        match Option::<Fp>::from(self.z.invert()) {
            Some(z_inv) => {
                let z_inv2 = z_inv.square();
                G1Projective::from_affine_unchecked(self.x * z_inv2, self.y * z_inv2 * z_inv)
            }
            None => G1Projective::identity(),
        }
    }

    /// Point doubling.
    pub fn double(&self) -> G1Projective {
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

        G1Projective { x: x3, y: y3, z: z3, t: Fp::zero() }
    }

    /// Point addition; equal inputs are routed to doubling.
    pub fn add(&self, rhs: &G1Projective) -> G1Projective {
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

        G1Projective { x: x3, y: y3, z: z3, t: Fp::zero() }
    }

    /// Point negation.
    pub fn neg(&self) -> G1Projective {
        G1Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
            t: Fp::zero(),
        }
    }

    /// Variable-time double-and-add from the most significant bit of a
    /// little-endian limb slice.
    pub fn multiply(&self, by: &[u64]) -> G1Projective {
        let mut acc = G1Projective::identity();
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

impl ConstantTimeEq for G1Projective {
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

impl Eq for G1Projective {}
impl PartialEq for G1Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        G1Projective::neg(self)
    }
}

impl Neg for G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        G1Projective::add(self, rhs)
    }
}

impl Add<G1Projective> for G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl Sub<G1Projective> for G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        &self - &rhs
    }
}
