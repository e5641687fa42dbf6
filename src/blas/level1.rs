//! Level 1 catalog: `?rotg`, `?rotmg`, `?rotm`, `?rot`, `?swap`, `?scal`,
//! `?copy`, `?axpy`, `?dot*`, `?nrm2`, `?asum`, `i?amax`.

use num_complex::{Complex32, Complex64};
use strided_blas_traits::{BlasScalar, RealScalar};

use super::{traced, vec_in, vec_out};
use crate::level1;
use crate::rotation::{self, GivensRotation, Rotg, RotmParams};
use crate::Result;

// ============================================================================
// Generic entry points
// ============================================================================

fn rot_impl<T: BlasScalar>(
    n: usize,
    x: &mut [T],
    incx: isize,
    y: &mut [T],
    incy: isize,
    c: T::Real,
    s: T,
) -> Result<()> {
    let mut x = vec_out("x", n, x, incx)?;
    let mut y = vec_out("y", n, y, incy)?;
    level1::rot(&mut x, &mut y, c, s)
}

fn rotm_impl<R: RealScalar>(
    n: usize,
    x: &mut [R],
    incx: isize,
    y: &mut [R],
    incy: isize,
    param: &RotmParams<R>,
) -> Result<()> {
    let mut x = vec_out("x", n, x, incx)?;
    let mut y = vec_out("y", n, y, incy)?;
    level1::rotm(&mut x, &mut y, param)
}

fn swap_impl<T: BlasScalar>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) -> Result<()> {
    let mut x = vec_out("x", n, x, incx)?;
    let mut y = vec_out("y", n, y, incy)?;
    level1::swap(&mut x, &mut y)
}

fn scal_impl<T: BlasScalar>(n: usize, alpha: T, x: &mut [T], incx: isize) -> Result<()> {
    level1::scal(alpha, &mut vec_out("x", n, x, incx)?);
    Ok(())
}

fn scal_real_impl<T: BlasScalar>(n: usize, alpha: T::Real, x: &mut [T], incx: isize) -> Result<()> {
    level1::scal_real(alpha, &mut vec_out("x", n, x, incx)?);
    Ok(())
}

fn copy_impl<T: BlasScalar>(n: usize, x: &[T], incx: isize, y: &mut [T], incy: isize) -> Result<()> {
    let x = vec_in("x", n, x, incx)?;
    level1::copy(&x, &mut vec_out("y", n, y, incy)?)
}

fn axpy_impl<T: BlasScalar>(
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let x = vec_in("x", n, x, incx)?;
    level1::axpy(alpha, &x, &mut vec_out("y", n, y, incy)?)
}

fn dotu_impl<T: BlasScalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> Result<T> {
    level1::dot(&vec_in("x", n, x, incx)?, &vec_in("y", n, y, incy)?)
}

fn dotc_impl<T: BlasScalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> Result<T> {
    level1::dotc(&vec_in("x", n, x, incx)?, &vec_in("y", n, y, incy)?)
}

fn nrm2_impl<T: BlasScalar>(n: usize, x: &[T], incx: isize) -> Result<T::Real> {
    Ok(level1::nrm2(&vec_in("x", n, x, incx)?))
}

fn asum_impl<T: BlasScalar>(n: usize, x: &[T], incx: isize) -> Result<T::Real> {
    Ok(level1::asum(&vec_in("x", n, x, incx)?))
}

fn iamax_impl<T: BlasScalar>(n: usize, x: &[T], incx: isize) -> Result<Option<usize>> {
    Ok(level1::iamax(&vec_in("x", n, x, incx)?))
}

// ============================================================================
// Per-domain routines
// ============================================================================

macro_rules! impl_level1_common {
    (
        $t:ty, $r:ty;
        rotg: $rotg:ident,
        swap: $swap:ident,
        scal: $scal:ident,
        copy: $copy:ident,
        axpy: $axpy:ident,
        nrm2: $nrm2:ident,
        asum: $asum:ident,
        iamax: $iamax:ident
    ) => {
        /// Givens rotation zeroing `b` in `(a, b)`.
        pub fn $rotg(a: $t, b: $t) -> GivensRotation<$t> {
            <$t as Rotg>::rotg(a, b)
        }

        /// Exchange `x` and `y`.
        pub fn $swap(n: usize, x: &mut [$t], incx: isize, y: &mut [$t], incy: isize) -> Result<()> {
            traced(stringify!($swap), swap_impl(n, x, incx, y, incy))
        }

        /// `x := alpha * x`.
        pub fn $scal(n: usize, alpha: $t, x: &mut [$t], incx: isize) -> Result<()> {
            traced(stringify!($scal), scal_impl(n, alpha, x, incx))
        }

        /// `y := x`.
        pub fn $copy(n: usize, x: &[$t], incx: isize, y: &mut [$t], incy: isize) -> Result<()> {
            traced(stringify!($copy), copy_impl(n, x, incx, y, incy))
        }

        /// `y := alpha * x + y`.
        pub fn $axpy(
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(stringify!($axpy), axpy_impl(n, alpha, x, incx, y, incy))
        }

        /// Euclidean norm of `x`.
        pub fn $nrm2(n: usize, x: &[$t], incx: isize) -> Result<$r> {
            traced(stringify!($nrm2), nrm2_impl(n, x, incx))
        }

        /// Sum of `|re| + |im|` over `x`.
        pub fn $asum(n: usize, x: &[$t], incx: isize) -> Result<$r> {
            traced(stringify!($asum), asum_impl(n, x, incx))
        }

        /// Zero-based index of the first element with the largest `|re| + |im|`,
        /// `None` when `n == 0`.
        pub fn $iamax(n: usize, x: &[$t], incx: isize) -> Result<Option<usize>> {
            traced(stringify!($iamax), iamax_impl(n, x, incx))
        }
    };
}

macro_rules! impl_level1_real {
    (
        $t:ty;
        rotmg: $rotmg:ident,
        rotm: $rotm:ident,
        rot: $rot:ident,
        dot: $dot:ident
    ) => {
        /// Modified Givens setup; updates `d1`, `d2` and `x1` in place.
        pub fn $rotmg(d1: &mut $t, d2: &mut $t, x1: &mut $t, y1: $t) -> RotmParams<$t> {
            rotation::rotmg(d1, d2, x1, y1)
        }

        /// Apply the modified Givens transform `param` to `(x, y)`.
        pub fn $rotm(
            n: usize,
            x: &mut [$t],
            incx: isize,
            y: &mut [$t],
            incy: isize,
            param: &RotmParams<$t>,
        ) -> Result<()> {
            traced(stringify!($rotm), rotm_impl(n, x, incx, y, incy, param))
        }

        /// Apply the plane rotation `(c, s)` to `(x, y)`.
        pub fn $rot(
            n: usize,
            x: &mut [$t],
            incx: isize,
            y: &mut [$t],
            incy: isize,
            c: $t,
            s: $t,
        ) -> Result<()> {
            traced(stringify!($rot), rot_impl(n, x, incx, y, incy, c, s))
        }

        /// `sum x_i * y_i`.
        pub fn $dot(n: usize, x: &[$t], incx: isize, y: &[$t], incy: isize) -> Result<$t> {
            traced(stringify!($dot), dotu_impl(n, x, incx, y, incy))
        }
    };
}

macro_rules! impl_level1_complex {
    (
        $t:ty, $r:ty;
        real_rot: $real_rot:ident,
        rot: $rot:ident,
        real_scal: $real_scal:ident,
        dotu: $dotu:ident,
        dotc: $dotc:ident
    ) => {
        /// Apply the plane rotation `(c, s)` with real `s` to `(x, y)`.
        pub fn $real_rot(
            n: usize,
            x: &mut [$t],
            incx: isize,
            y: &mut [$t],
            incy: isize,
            c: $r,
            s: $r,
        ) -> Result<()> {
            traced(
                stringify!($real_rot),
                rot_impl(n, x, incx, y, incy, c, <$t>::from_real(s)),
            )
        }

        /// Apply the plane rotation `(c, s)` with complex `s` to `(x, y)`.
        pub fn $rot(
            n: usize,
            x: &mut [$t],
            incx: isize,
            y: &mut [$t],
            incy: isize,
            c: $r,
            s: $t,
        ) -> Result<()> {
            traced(stringify!($rot), rot_impl(n, x, incx, y, incy, c, s))
        }

        /// `x := alpha * x` with real `alpha`.
        pub fn $real_scal(n: usize, alpha: $r, x: &mut [$t], incx: isize) -> Result<()> {
            traced(stringify!($real_scal), scal_real_impl(n, alpha, x, incx))
        }

        /// Unconjugated dot product `sum x_i * y_i`.
        pub fn $dotu(n: usize, x: &[$t], incx: isize, y: &[$t], incy: isize) -> Result<$t> {
            traced(stringify!($dotu), dotu_impl(n, x, incx, y, incy))
        }

        /// Conjugated dot product `sum conj(x_i) * y_i`.
        pub fn $dotc(n: usize, x: &[$t], incx: isize, y: &[$t], incy: isize) -> Result<$t> {
            traced(stringify!($dotc), dotc_impl(n, x, incx, y, incy))
        }
    };
}

impl_level1_common!(f32, f32;
    rotg: srotg, swap: sswap, scal: sscal, copy: scopy, axpy: saxpy,
    nrm2: snrm2, asum: sasum, iamax: isamax);
impl_level1_common!(f64, f64;
    rotg: drotg, swap: dswap, scal: dscal, copy: dcopy, axpy: daxpy,
    nrm2: dnrm2, asum: dasum, iamax: idamax);
impl_level1_common!(Complex32, f32;
    rotg: crotg, swap: cswap, scal: cscal, copy: ccopy, axpy: caxpy,
    nrm2: scnrm2, asum: scasum, iamax: icamax);
impl_level1_common!(Complex64, f64;
    rotg: zrotg, swap: zswap, scal: zscal, copy: zcopy, axpy: zaxpy,
    nrm2: dznrm2, asum: dzasum, iamax: izamax);

impl_level1_real!(f32; rotmg: srotmg, rotm: srotm, rot: srot, dot: sdot);
impl_level1_real!(f64; rotmg: drotmg, rotm: drotm, rot: drot, dot: ddot);

impl_level1_complex!(Complex32, f32;
    real_rot: csrot, rot: crot, real_scal: csscal, dotu: cdotu, dotc: cdotc);
impl_level1_complex!(Complex64, f64;
    real_rot: zdrot, rot: zrot, real_scal: zdscal, dotu: zdotu, dotc: zdotc);

/// `sb + sum x_i * y_i` for `f32` data, accumulated in `f64`.
pub fn sdsdot(n: usize, sb: f32, x: &[f32], incx: isize, y: &[f32], incy: isize) -> Result<f32> {
    traced(
        "sdsdot",
        vec_in("x", n, x, incx)
            .and_then(|x| level1::sdsdot(sb, &x, &vec_in("y", n, y, incy)?)),
    )
}

/// `sum x_i * y_i` for `f32` data, accumulated and returned in `f64`.
pub fn dsdot(n: usize, x: &[f32], incx: isize, y: &[f32], incy: isize) -> Result<f64> {
    traced(
        "dsdot",
        vec_in("x", n, x, incx).and_then(|x| level1::dsdot(&x, &vec_in("y", n, y, incy)?)),
    )
}
