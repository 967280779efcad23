//! Quadratic extension Fp2 = Fp[i]/(i² + 1)

use core::fmt;

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;

/// Element c0 + c1·i of the quadratic extension
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Imaginary part
    pub c1: Fp,
}

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 { c0: Fp::zero(), c1: Fp::zero() }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 { c0: Fp::one(), c1: Fp::zero() }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp2::one())
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate an element
    #[inline]
    pub fn neg(&self) -> Fp2 {
        Fp2 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Double an element
    #[inline]
    pub fn double(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Multiply two elements (Karatsuba, three base multiplications)
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;

        Fp2 { c0: v0 - v1, c1 }
    }

    /// Square an element
    pub fn square(&self) -> Fp2 {
        let t = self.c0 * self.c1;

        Fp2 {
            c0: (self.c0 + self.c1) * (self.c0 - self.c1),
            c1: t.double(),
        }
    }

    /// Multiply by a base field element
    #[inline]
    pub fn mul_by_fp(&self, b: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * b,
            c1: self.c1 * b,
        }
    }

    /// Multiply by ξ = i + 3
    pub fn mul_by_xi(&self) -> Fp2 {
        let three_c0 = self.c0.double() + self.c0;
        let three_c1 = self.c1.double() + self.c1;

        Fp2 {
            c0: three_c0 - self.c1,
            c1: three_c1 + self.c0,
        }
    }

    /// Complex conjugate, which is also the p-power Frobenius on Fp2
    #[inline]
    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Fp2> {
        // 1/(a + bi) = (a − bi)/(a² + b²)
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        })
    }

    /// Variable-time square-and-multiply by a little-endian limb slice
    pub fn pow_vartime(&self, by: &[u64]) -> Fp2 {
        let mut res = Fp2::one();
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

    /// Square root, if one exists.
    ///
    /// For g = a + bi, t = √(a² + b²) is computed in Fp, then y = √((a ± t)/2)
    /// is tried with the "+" sign first, giving the root y + (b/2y)·i. Purely
    /// real non-residues a have the root i·√(−a). The candidate is checked
    /// by squaring before it is returned.
    pub fn sqrt(&self) -> CtOption<Fp2> {
        if bool::from(self.is_zero()) {
            return CtOption::new(Fp2::zero(), Choice::from(1));
        }

        let a = self.c0;
        let b = self.c1;

        let t = match Option::<Fp>::from((a.square() + b.square()).sqrt()) {
            Some(t) => t,
            None => return CtOption::new(Fp2::zero(), Choice::from(0)),
        };

        let y = [(a + t).halve(), (a - t).halve()]
            .iter()
            .enumerate()
            .find_map(|(branch, z)| {
                let y = Option::<Fp>::from(z.sqrt()).filter(|y| !bool::from(y.is_zero()));
                if y.is_none() {
                    tracing::trace!(branch, "Fp2 sqrt branch has no usable root");
                }
                y
            });

        let candidate = match y {
            Some(y) => y.invert().map(|y_inv| Fp2 {
                c0: y,
                c1: b.halve() * y_inv,
            }),
            None => (-a).sqrt().map(|s| Fp2 { c0: Fp::zero(), c1: s }),
        };

        candidate.and_then(|r| CtOption::new(r, r.square().ct_eq(self)))
    }
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?} + {:?}*i)", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl_field_ops!(Fp2);
