//! Sextic extension Fp6 = Fp2[τ]/(τ³ − ξ)

use core::fmt;

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;
use crate::ec::bn256::constants::{
    XI_TO_2P_MINUS_2_OVER_3, XI_TO_2P_SQUARED_MINUS_2_OVER_3, XI_TO_P_MINUS_1_OVER_3,
    XI_TO_P_SQUARED_MINUS_1_OVER_3,
};

/// Element c0 + c1·τ + c2·τ² of the sextic extension
#[derive(Copy, Clone)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of τ
    pub c1: Fp2,
    /// Coefficient of τ²
    pub c2: Fp2,
}

impl Fp6 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 { c0: Fp2::zero(), c1: Fp2::zero(), c2: Fp2::zero() }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 { c0: Fp2::one(), c1: Fp2::zero(), c2: Fp2::zero() }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp6 {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }

    /// Negate an element
    #[inline]
    pub fn neg(&self) -> Fp6 {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    /// Double an element
    #[inline]
    pub fn double(&self) -> Fp6 {
        Fp6 {
            c0: self.c0.double(),
            c1: self.c1.double(),
            c2: self.c2.double(),
        }
    }

    /// Multiply two elements.
    ///
    /// Karatsuba over Karatsuba, section 4 of
    /// "Multiplication and Squaring on Pairing-Friendly Fields" (Devegili et al.).
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let v2 = self.c2 * rhs.c2;

        let c0 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - v1 - v2).mul_by_xi() + v0;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1 + v2.mul_by_xi();
        let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - v0 + v1 - v2;

        Fp6 { c0, c1, c2 }
    }

    /// Square an element
    pub fn square(&self) -> Fp6 {
        let v0 = self.c0.square();
        let v1 = self.c1.square();
        let v2 = self.c2.square();

        let c0 = ((self.c1 + self.c2).square() - v1 - v2).mul_by_xi() + v0;
        let c1 = (self.c0 + self.c1).square() - v0 - v1 + v2.mul_by_xi();
        let c2 = (self.c0 + self.c2).square() - v0 + v1 - v2;

        Fp6 { c0, c1, c2 }
    }

    /// Multiply every coefficient by an Fp2 element
    #[inline]
    pub fn mul_by_fp2(&self, b: &Fp2) -> Fp6 {
        Fp6 {
            c0: self.c0 * b,
            c1: self.c1 * b,
            c2: self.c2 * b,
        }
    }

    /// Multiply every coefficient by a base field element
    #[inline]
    pub fn mul_by_fp(&self, b: &Fp) -> Fp6 {
        Fp6 {
            c0: self.c0.mul_by_fp(b),
            c1: self.c1.mul_by_fp(b),
            c2: self.c2.mul_by_fp(b),
        }
    }

    /// Multiply by τ: coefficients shift up one place and the wrapped τ³
    /// term becomes ξ·c2.
    #[inline]
    pub fn mul_by_tau(&self) -> Fp6 {
        Fp6 {
            c0: self.c2.mul_by_xi(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Multiplicative inverse.
    ///
    /// Algorithm 17 of "High-Speed Software Implementation of the Optimal
    /// Ate Pairing over Barreto–Naehrig Curves" (Beuchat et al.).
    pub fn invert(&self) -> CtOption<Fp6> {
        let a = self.c0.square() - (self.c1 * self.c2).mul_by_xi();
        let b = self.c2.square().mul_by_xi() - self.c0 * self.c1;
        let c = self.c1.square() - self.c0 * self.c2;

        let f = (c * self.c1).mul_by_xi() + a * self.c0 + (b * self.c2).mul_by_xi();

        f.invert().map(|f| Fp6 {
            c0: a * f,
            c1: b * f,
            c2: c * f,
        })
    }

    /// The p-power Frobenius endomorphism
    pub fn frobenius(&self) -> Fp6 {
        Fp6 {
            c0: self.c0.conjugate(),
            c1: self.c1.conjugate() * XI_TO_P_MINUS_1_OVER_3,
            c2: self.c2.conjugate() * XI_TO_2P_MINUS_2_OVER_3,
        }
    }

    /// The p²-power Frobenius endomorphism
    pub fn frobenius_p2(&self) -> Fp6 {
        Fp6 {
            c0: self.c0,
            c1: self.c1.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
            c2: self.c2.mul_by_fp(&XI_TO_2P_SQUARED_MINUS_2_OVER_3),
        }
    }

    /// The p⁴-power Frobenius endomorphism
    pub fn frobenius_p4(&self) -> Fp6 {
        Fp6 {
            c0: self.c0,
            c1: self.c1.mul_by_fp(&XI_TO_2P_SQUARED_MINUS_2_OVER_3),
            c2: self.c2.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        }
    }
}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?} + {:?}*τ + {:?}*τ²)", self.c0, self.c1, self.c2)
    }
}

impl Default for Fp6 {
    fn default() -> Self {
        Fp6::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp6 {}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp6 {}
impl PartialEq for Fp6 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl_field_ops!(Fp6);
