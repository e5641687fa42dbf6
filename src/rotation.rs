//! Plane rotation setup.
//!
//! - [`Rotg`]: Givens rotation `(c, s)` that zeros the second component of `(a, b)`
//! - [`rotmg`]: modified Givens transform, returned as a [`RotmParams`] record
//!
//! The records are consumed by [`crate::level1::rot`] and [`crate::level1::rotm`].

use num_complex::Complex;
use num_traits::One;
use strided_blas_traits::{BlasScalar, RealScalar};

use crate::{BlasError, Result};

/// A Givens rotation and the value it produces.
///
/// Applying `[[c, s], [-conj(s), c]]` to `(a, b)` yields `(r, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivensRotation<T: BlasScalar> {
    pub c: T::Real,
    pub s: T,
    pub r: T,
}

/// Givens rotation setup, implemented for all four domains.
pub trait Rotg: BlasScalar {
    /// Construct the rotation that zeros `b` in `(a, b)`.
    fn rotg(a: Self, b: Self) -> GivensRotation<Self>;
}

/// Real setup: `roe` is whichever of `a`, `b` is larger in magnitude and
/// `r` takes its sign, so `c >= 0` whenever `|a| > |b|`.
fn real_rotg<R: RealScalar>(a: R, b: R) -> GivensRotation<R> {
    let roe = if a.abs() > b.abs() { a } else { b };
    let norm = a.hypot(b);
    if norm == R::zero() {
        return GivensRotation {
            c: R::one(),
            s: R::zero(),
            r: R::zero(),
        };
    }
    let r = if roe < R::zero() { -norm } else { norm };
    GivensRotation {
        c: a / r,
        s: b / r,
        r,
    }
}

/// Complex setup: `c` is real and non-negative, `r` keeps the phase of `a`.
fn complex_rotg<R: RealScalar>(a: Complex<R>, b: Complex<R>) -> GivensRotation<Complex<R>>
where
    Complex<R>: BlasScalar<Real = R>,
{
    let abs_a = a.norm();
    if abs_a == R::zero() {
        return GivensRotation {
            c: R::zero(),
            s: Complex::one(),
            r: b,
        };
    }
    let norm = abs_a.hypot(b.norm());
    let phase = a.unscale(abs_a);
    GivensRotation {
        c: abs_a / norm,
        s: phase * b.conj().unscale(norm),
        r: phase.scale(norm),
    }
}

impl Rotg for f32 {
    fn rotg(a: f32, b: f32) -> GivensRotation<f32> {
        real_rotg(a, b)
    }
}

impl Rotg for f64 {
    fn rotg(a: f64, b: f64) -> GivensRotation<f64> {
        real_rotg(a, b)
    }
}

impl Rotg for Complex<f32> {
    fn rotg(a: Self, b: Self) -> GivensRotation<Self> {
        complex_rotg(a, b)
    }
}

impl Rotg for Complex<f64> {
    fn rotg(a: Self, b: Self) -> GivensRotation<Self> {
        complex_rotg(a, b)
    }
}

// ============================================================================
// Modified Givens
// ============================================================================

/// Modified Givens transform `H`, tagged by the classic flag value.
///
/// | Flag | Variant | `H` |
/// |------|---------|-----|
/// | `-2` | `Identity` | `[[1, 0], [0, 1]]` |
/// | `-1` | `Full` | `[[h11, h12], [h21, h22]]` |
/// | `0`  | `OffDiagonal` | `[[1, h12], [h21, 1]]` |
/// | `1`  | `Diagonal` | `[[h11, 1], [-1, h22]]` |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotmParams<R> {
    Identity,
    Full { h11: R, h21: R, h12: R, h22: R },
    OffDiagonal { h21: R, h12: R },
    Diagonal { h11: R, h22: R },
}

impl<R: RealScalar> RotmParams<R> {
    /// Classic flag value.
    pub fn flag(&self) -> R {
        let v = match self {
            RotmParams::Identity => -2.0,
            RotmParams::Full { .. } => -1.0,
            RotmParams::OffDiagonal { .. } => 0.0,
            RotmParams::Diagonal { .. } => 1.0,
        };
        num_traits::cast::<f64, R>(v).unwrap_or_else(R::zero)
    }

    /// Full `[[h11, h12], [h21, h22]]` matrix, with implicit entries filled in.
    pub fn matrix(&self) -> [[R; 2]; 2] {
        let (one, zero) = (R::one(), R::zero());
        match *self {
            RotmParams::Identity => [[one, zero], [zero, one]],
            RotmParams::Full { h11, h21, h12, h22 } => [[h11, h12], [h21, h22]],
            RotmParams::OffDiagonal { h21, h12 } => [[one, h12], [h21, one]],
            RotmParams::Diagonal { h11, h22 } => [[h11, one], [-one, h22]],
        }
    }

    /// Encode as the classic `[flag, h11, h21, h12, h22]` array.
    ///
    /// Entries implied by the flag are written as zero, as the classic
    /// encoding leaves them unspecified.
    pub fn to_array(&self) -> [R; 5] {
        let z = R::zero();
        match *self {
            RotmParams::Identity => [self.flag(), z, z, z, z],
            RotmParams::Full { h11, h21, h12, h22 } => [self.flag(), h11, h21, h12, h22],
            RotmParams::OffDiagonal { h21, h12 } => [self.flag(), z, h21, h12, z],
            RotmParams::Diagonal { h11, h22 } => [self.flag(), h11, z, z, h22],
        }
    }

    /// Decode the classic `[flag, h11, h21, h12, h22]` array.
    ///
    /// # Errors
    /// [`BlasError::InvalidRotmFlag`] if the flag is not one of `-2, -1, 0, 1`.
    pub fn from_array(param: [R; 5]) -> Result<Self> {
        let [flag, h11, h21, h12, h22] = param;
        let code = flag.to_f64().unwrap_or(f64::NAN);
        if code == -2.0 {
            Ok(RotmParams::Identity)
        } else if code == -1.0 {
            Ok(RotmParams::Full { h11, h21, h12, h22 })
        } else if code == 0.0 {
            Ok(RotmParams::OffDiagonal { h21, h12 })
        } else if code == 1.0 {
            Ok(RotmParams::Diagonal { h11, h22 })
        } else {
            Err(BlasError::InvalidRotmFlag { flag: code })
        }
    }
}

/// Working state of the modified Givens setup: always materialized as the
/// full matrix plus the flag describing which entries are implicit.
struct Rotmg<R> {
    flag: i8,
    h11: R,
    h21: R,
    h12: R,
    h22: R,
}

impl<R: RealScalar> Rotmg<R> {
    fn zeroed() -> Self {
        Self {
            flag: -1,
            h11: R::zero(),
            h21: R::zero(),
            h12: R::zero(),
            h22: R::zero(),
        }
    }

    /// Make the implicit entries explicit before rescaling.
    fn promote_to_full(&mut self) {
        match self.flag {
            0 => {
                self.h11 = R::one();
                self.h22 = R::one();
            }
            1 => {
                self.h21 = -R::one();
                self.h12 = R::one();
            }
            _ => {}
        }
        self.flag = -1;
    }

    fn into_params(self) -> RotmParams<R> {
        match self.flag {
            -2 => RotmParams::Identity,
            0 => RotmParams::OffDiagonal {
                h21: self.h21,
                h12: self.h12,
            },
            1 => RotmParams::Diagonal {
                h11: self.h11,
                h22: self.h22,
            },
            _ => RotmParams::Full {
                h11: self.h11,
                h21: self.h21,
                h12: self.h12,
                h22: self.h22,
            },
        }
    }
}

/// Construct the modified Givens transform that zeros the second component of
/// `(sqrt(d1) * x1, sqrt(d2) * y1)`.
///
/// On return `d1`, `d2` and `x1` hold the updated scale factors and first
/// component. Scale factors are kept within `[gam^-2, gam^2]`, `gam = 4096`,
/// by rescaling into `H`. A negative `d1` (or an unrepresentable transform)
/// zeroes `d1`, `d2`, `x1` and returns a zero `Full` transform.
pub fn rotmg<R: RealScalar>(d1: &mut R, d2: &mut R, x1: &mut R, y1: R) -> RotmParams<R> {
    let gam = num_traits::cast::<f64, R>(4096.0).unwrap_or_else(R::one);
    let gamsq = gam * gam;
    let rgamsq = R::one() / gamsq;

    let mut h = Rotmg::zeroed();

    if *d1 < R::zero() {
        *d1 = R::zero();
        *d2 = R::zero();
        *x1 = R::zero();
        return h.into_params();
    }

    let p2 = *d2 * y1;
    if p2 == R::zero() {
        h.flag = -2;
        return h.into_params();
    }

    let p1 = *d1 * *x1;
    let q2 = p2 * y1;
    let q1 = p1 * *x1;

    if q1.abs() > q2.abs() {
        h.h21 = -y1 / *x1;
        h.h12 = p2 / p1;
        let u = R::one() - h.h12 * h.h21;
        if u > R::zero() {
            h.flag = 0;
            *d1 = *d1 / u;
            *d2 = *d2 / u;
            *x1 = *x1 * u;
        } else {
            h = Rotmg::zeroed();
            *d1 = R::zero();
            *d2 = R::zero();
            *x1 = R::zero();
        }
    } else if q2 < R::zero() {
        h = Rotmg::zeroed();
        *d1 = R::zero();
        *d2 = R::zero();
        *x1 = R::zero();
    } else {
        h.flag = 1;
        h.h11 = p1 / p2;
        h.h22 = *x1 / y1;
        let u = R::one() + h.h11 * h.h22;
        let temp = *d2 / u;
        *d2 = *d1 / u;
        *d1 = temp;
        *x1 = y1 * u;
    }

    if *d1 != R::zero() {
        while *d1 <= rgamsq || *d1 >= gamsq {
            h.promote_to_full();
            if *d1 <= rgamsq {
                *d1 = *d1 * gamsq;
                *x1 = *x1 / gam;
                h.h11 = h.h11 / gam;
                h.h12 = h.h12 / gam;
            } else {
                *d1 = *d1 / gamsq;
                *x1 = *x1 * gam;
                h.h11 = h.h11 * gam;
                h.h12 = h.h12 * gam;
            }
        }
    }

    if *d2 != R::zero() {
        while d2.abs() <= rgamsq || d2.abs() >= gamsq {
            h.promote_to_full();
            if d2.abs() <= rgamsq {
                *d2 = *d2 * gamsq;
                h.h21 = h.h21 / gam;
                h.h22 = h.h22 / gam;
            } else {
                *d2 = *d2 / gamsq;
                h.h21 = h.h21 * gam;
                h.h22 = h.h22 * gam;
            }
        }
    }

    h.into_params()
}
