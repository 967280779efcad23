//! Dodecic extension Fp12 = Fp6[ω]/(ω² − τ), the pairing's target field

use core::fmt;

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp6::Fp6;
use crate::ec::bn256::constants::{
    XI_TO_P_MINUS_1_OVER_6, XI_TO_P_SQUARED_MINUS_1_OVER_3, XI_TO_P_SQUARED_MINUS_1_OVER_6,
};

/// Element c0 + c1·ω of the dodecic extension
#[derive(Copy, Clone)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of ω
    pub c1: Fp6,
}

impl Fp12 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 { c0: Fp6::zero(), c1: Fp6::zero() }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 { c0: Fp6::one(), c1: Fp6::zero() }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp12::one())
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp12 {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate an element
    #[inline]
    pub fn neg(&self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Conjugate over Fp6; for unitary elements (all of GT) this is the inverse
    #[inline]
    pub fn conjugate(&self) -> Fp12 {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiply two elements
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb;

        Fp12 {
            c0: aa + bb.mul_by_tau(),
            c1,
        }
    }

    /// Square an element (complex squaring)
    pub fn square(&self) -> Fp12 {
        let v0 = self.c0 * self.c1;
        let t = self.c1.mul_by_tau() + self.c0;
        let c0 = (self.c0 + self.c1) * t - v0 - v0.mul_by_tau();

        Fp12 {
            c0,
            c1: v0.double(),
        }
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Fp12> {
        // 1/(a + bω) = (a − bω)/(a² − b²τ)
        (self.c0.square() - self.c1.square().mul_by_tau())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    /// The p-power Frobenius endomorphism
    pub fn frobenius(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius(),
            c1: self.c1.frobenius().mul_by_fp2(&XI_TO_P_MINUS_1_OVER_6),
        }
    }

    /// The p²-power Frobenius endomorphism
    pub fn frobenius_p2(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_p2(),
            c1: self.c1.frobenius_p2().mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_6),
        }
    }

    /// The p⁴-power Frobenius endomorphism
    pub fn frobenius_p4(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_p4(),
            c1: self.c1.frobenius_p4().mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        }
    }

    /// Variable-time square-and-multiply by a little-endian limb slice
    pub fn pow_vartime(&self, by: &[u64]) -> Fp12 {
        let mut res = Fp12::one();
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
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?} + {:?}*ω)", self.c0, self.c1)
    }
}

impl Default for Fp12 {
    fn default() -> Self {
        Fp12::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp12 {}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl_field_ops!(Fp12);
