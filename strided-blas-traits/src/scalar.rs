//! Numeric domains accepted by the BLAS routines.
//!
//! Every routine is written once against [`BlasScalar`] and instantiated for
//! the four classic domains: `f32`, `f64`, `Complex32` and `Complex64`.
//! [`RealScalar`] is the real counterpart a domain reports through
//! [`BlasScalar::Real`] (the type of norms, absolute sums and rotation cosines).

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::{Float, One, Zero};

use crate::element_op::ElementOpApply;

/// Scalar arithmetic required by the BLAS contract.
pub trait BlasScalar:
    Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + ElementOpApply
{
    /// Real type of this domain (`Self` for real domains).
    type Real: RealScalar;

    /// Whether the domain carries an imaginary part.
    const IS_COMPLEX: bool;

    /// Embed a real value.
    fn from_real(re: Self::Real) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part (zero for real domains).
    fn im(self) -> Self::Real;

    /// Classic BLAS magnitude `|re| + |im|`, used by asum and iamax.
    #[inline]
    fn abs1(self) -> Self::Real {
        self.re().abs() + self.im().abs()
    }

    /// True modulus, computed without intermediate overflow.
    fn modulus(self) -> Self::Real;

    /// Multiply by a real factor.
    #[inline]
    fn scale_real(self, alpha: Self::Real) -> Self {
        self * Self::from_real(alpha)
    }

    /// The value with its imaginary part dropped.
    #[inline]
    fn real_part(self) -> Self {
        Self::from_real(self.re())
    }
}

/// Real domain: `f32` or `f64`.
pub trait RealScalar: BlasScalar<Real = Self> + Float {}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {
        $(
            impl BlasScalar for $t {
                type Real = $t;
                const IS_COMPLEX: bool = false;

                #[inline(always)]
                fn from_real(re: $t) -> Self {
                    re
                }

                #[inline(always)]
                fn re(self) -> $t {
                    self
                }

                #[inline(always)]
                fn im(self) -> $t {
                    0.0
                }

                #[inline(always)]
                fn abs1(self) -> $t {
                    self.abs()
                }

                #[inline(always)]
                fn modulus(self) -> $t {
                    self.abs()
                }

                #[inline(always)]
                fn scale_real(self, alpha: $t) -> Self {
                    self * alpha
                }
            }

            impl RealScalar for $t {}
        )*
    };
}

macro_rules! impl_complex_scalar {
    ($($r:ty),*) => {
        $(
            impl BlasScalar for Complex<$r> {
                type Real = $r;
                const IS_COMPLEX: bool = true;

                #[inline(always)]
                fn from_real(re: $r) -> Self {
                    Complex::new(re, 0.0)
                }

                #[inline(always)]
                fn re(self) -> $r {
                    self.re
                }

                #[inline(always)]
                fn im(self) -> $r {
                    self.im
                }

                #[inline(always)]
                fn modulus(self) -> $r {
                    self.norm()
                }

                #[inline(always)]
                fn scale_real(self, alpha: $r) -> Self {
                    Complex::new(self.re * alpha, self.im * alpha)
                }
            }
        )*
    };
}

impl_real_scalar!(f32, f64);
impl_complex_scalar!(f32, f64);
