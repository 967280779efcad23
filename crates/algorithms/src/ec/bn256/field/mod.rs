//! Finite field tower for BN256: Fp ⊂ Fp2 ⊂ Fp6 ⊂ Fp12
//!
//! Fp2 = Fp[i]/(i² + 1), Fp6 = Fp2[τ]/(τ³ − ξ) with ξ = i + 3, and
//! Fp12 = Fp6[ω]/(ω² − τ).

/// Operator impls for a field type that exposes inherent `add`, `sub`,
/// `mul` and `neg` methods taking references.
macro_rules! impl_field_ops {
    ($t:ident) => {
        impl<'a> core::ops::Neg for &'a $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t { $t::neg(self) }
        }

        impl core::ops::Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t { -&self }
        }

        impl<'a, 'b> core::ops::Add<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: &'b $t) -> $t { $t::add(self, rhs) }
        }

        impl<'a, 'b> core::ops::Sub<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: &'b $t) -> $t { $t::sub(self, rhs) }
        }

        impl<'a, 'b> core::ops::Mul<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: &'b $t) -> $t { $t::mul(self, rhs) }
        }

        impl<'b> core::ops::Add<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: &'b $t) -> $t { &self + rhs }
        }

        impl<'a> core::ops::Add<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t { self + &rhs }
        }

        impl core::ops::Add<$t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t { &self + &rhs }
        }

        impl<'b> core::ops::Sub<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: &'b $t) -> $t { &self - rhs }
        }

        impl<'a> core::ops::Sub<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t { self - &rhs }
        }

        impl core::ops::Sub<$t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t { &self - &rhs }
        }

        impl<'b> core::ops::Mul<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: &'b $t) -> $t { &self * rhs }
        }

        impl<'a> core::ops::Mul<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t { self * &rhs }
        }

        impl core::ops::Mul<$t> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t { &self * &rhs }
        }

        impl core::ops::AddAssign<$t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) { *self = &*self + &rhs; }
        }

        impl<'b> core::ops::AddAssign<&'b $t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: &'b $t) { *self = &*self + rhs; }
        }

        impl core::ops::SubAssign<$t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) { *self = &*self - &rhs; }
        }

        impl<'b> core::ops::SubAssign<&'b $t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: &'b $t) { *self = &*self - rhs; }
        }

        impl core::ops::MulAssign<$t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) { *self = &*self * &rhs; }
        }

        impl<'b> core::ops::MulAssign<&'b $t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: &'b $t) { *self = &*self * rhs; }
        }
    };
}

pub mod fp;        // Base field
pub mod fp2;       // Quadratic extension
pub mod fp6;       // Degree-6 extension
pub mod fp12;      // Degree-12 extension (target field)

pub use fp::Fp;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use fp12::Fp12;
