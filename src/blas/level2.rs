//! Level 2 catalog: general, band, symmetric/hermitian and triangular
//! matrix-vector routines.

use num_complex::{Complex32, Complex64};
use strided_blas_traits::BlasScalar;

use super::{mat_in, mat_out, traced, vec_in, vec_out};
use crate::level2;
use crate::modifier::{Diag, Transpose, Uplo};
use crate::storage::{Banded, Packed, PackedMut};
use crate::Result;

// ============================================================================
// Generic entry points
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn gemv_impl<T: BlasScalar>(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let a = mat_in("a", m, n, a, lda)?;
    let (rows, cols) = trans.apply_shape(m, n);
    let x = vec_in("x", cols, x, incx)?;
    let mut y = vec_out("y", rows, y, incy)?;
    level2::gemv(trans, alpha, &a, &x, beta, &mut y)
}

#[allow(clippy::too_many_arguments)]
fn gbmv_impl<T: BlasScalar>(
    trans: Transpose,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let a = Banded::new(a, m, n, kl, ku, lda)?;
    let (rows, cols) = trans.apply_shape(m, n);
    let x = vec_in("x", cols, x, incx)?;
    let mut y = vec_out("y", rows, y, incy)?;
    level2::gbmv(trans, alpha, &a, &x, beta, &mut y)
}

#[allow(clippy::too_many_arguments)]
fn symv_impl<T: BlasScalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
    hermitian: bool,
) -> Result<()> {
    let a = mat_in("a", n, n, a, lda)?;
    let x = vec_in("x", n, x, incx)?;
    let mut y = vec_out("y", n, y, incy)?;
    if hermitian {
        level2::hemv(uplo, alpha, &a, &x, beta, &mut y)
    } else {
        level2::symv(uplo, alpha, &a, &x, beta, &mut y)
    }
}

#[allow(clippy::too_many_arguments)]
fn sbmv_impl<T: BlasScalar>(
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
    hermitian: bool,
) -> Result<()> {
    let a = Banded::triangle(a, n, k, uplo, lda)?;
    let x = vec_in("x", n, x, incx)?;
    let mut y = vec_out("y", n, y, incy)?;
    if hermitian {
        level2::hbmv(uplo, alpha, &a, &x, beta, &mut y)
    } else {
        level2::sbmv(uplo, alpha, &a, &x, beta, &mut y)
    }
}

#[allow(clippy::too_many_arguments)]
fn spmv_impl<T: BlasScalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    ap: &[T],
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
    hermitian: bool,
) -> Result<()> {
    let ap = Packed::new(ap, n, uplo)?;
    let x = vec_in("x", n, x, incx)?;
    let mut y = vec_out("y", n, y, incy)?;
    if hermitian {
        level2::hpmv(alpha, &ap, &x, beta, &mut y)
    } else {
        level2::spmv(alpha, &ap, &x, beta, &mut y)
    }
}

#[allow(clippy::too_many_arguments)]
fn trmv_impl<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
    solve: bool,
) -> Result<()> {
    let a = mat_in("a", n, n, a, lda)?;
    let mut x = vec_out("x", n, x, incx)?;
    if solve {
        level2::trsv(uplo, trans, diag, &a, &mut x)
    } else {
        level2::trmv(uplo, trans, diag, &a, &mut x)
    }
}

#[allow(clippy::too_many_arguments)]
fn tbmv_impl<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
    solve: bool,
) -> Result<()> {
    let a = Banded::triangle(a, n, k, uplo, lda)?;
    let mut x = vec_out("x", n, x, incx)?;
    if solve {
        level2::tbsv(uplo, trans, diag, &a, &mut x)
    } else {
        level2::tbmv(uplo, trans, diag, &a, &mut x)
    }
}

#[allow(clippy::too_many_arguments)]
fn tpmv_impl<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
    solve: bool,
) -> Result<()> {
    let ap = Packed::new(ap, n, uplo)?;
    let mut x = vec_out("x", n, x, incx)?;
    if solve {
        level2::tpsv(trans, diag, &ap, &mut x)
    } else {
        level2::tpmv(trans, diag, &ap, &mut x)
    }
}

#[allow(clippy::too_many_arguments)]
fn ger_impl<T: BlasScalar>(
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
    conjugate: bool,
) -> Result<()> {
    let x = vec_in("x", m, x, incx)?;
    let y = vec_in("y", n, y, incy)?;
    let mut a = mat_out("a", m, n, a, lda)?;
    if conjugate {
        level2::gerc(alpha, &x, &y, &mut a)
    } else {
        level2::ger(alpha, &x, &y, &mut a)
    }
}

#[allow(clippy::too_many_arguments)]
fn syr_impl<T: BlasScalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    let x = vec_in("x", n, x, incx)?;
    level2::syr(uplo, alpha, &x, &mut mat_out("a", n, n, a, lda)?)
}

#[allow(clippy::too_many_arguments)]
fn her_impl<T: BlasScalar>(
    uplo: Uplo,
    n: usize,
    alpha: T::Real,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    let x = vec_in("x", n, x, incx)?;
    level2::her(uplo, alpha, &x, &mut mat_out("a", n, n, a, lda)?)
}

fn spr_impl<T: BlasScalar>(uplo: Uplo, n: usize, alpha: T, x: &[T], incx: isize, ap: &mut [T]) -> Result<()> {
    let x = vec_in("x", n, x, incx)?;
    level2::spr(alpha, &x, &mut PackedMut::new(ap, n, uplo)?)
}

fn hpr_impl<T: BlasScalar>(
    uplo: Uplo,
    n: usize,
    alpha: T::Real,
    x: &[T],
    incx: isize,
    ap: &mut [T],
) -> Result<()> {
    let x = vec_in("x", n, x, incx)?;
    level2::hpr(alpha, &x, &mut PackedMut::new(ap, n, uplo)?)
}

#[allow(clippy::too_many_arguments)]
fn syr2_impl<T: BlasScalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
    hermitian: bool,
) -> Result<()> {
    let x = vec_in("x", n, x, incx)?;
    let y = vec_in("y", n, y, incy)?;
    let mut a = mat_out("a", n, n, a, lda)?;
    if hermitian {
        level2::her2(uplo, alpha, &x, &y, &mut a)
    } else {
        level2::syr2(uplo, alpha, &x, &y, &mut a)
    }
}

#[allow(clippy::too_many_arguments)]
fn spr2_impl<T: BlasScalar>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    ap: &mut [T],
    hermitian: bool,
) -> Result<()> {
    let x = vec_in("x", n, x, incx)?;
    let y = vec_in("y", n, y, incy)?;
    let mut ap = PackedMut::new(ap, n, uplo)?;
    if hermitian {
        level2::hpr2(alpha, &x, &y, &mut ap)
    } else {
        level2::spr2(alpha, &x, &y, &mut ap)
    }
}

// ============================================================================
// Per-domain routines
// ============================================================================

macro_rules! impl_level2_common {
    (
        $t:ty;
        gemv: $gemv:ident,
        gbmv: $gbmv:ident,
        trmv: $trmv:ident,
        tbmv: $tbmv:ident,
        tpmv: $tpmv:ident,
        trsv: $trsv:ident,
        tbsv: $tbsv:ident,
        tpsv: $tpsv:ident
    ) => {
        /// `y := alpha * op(A) * x + beta * y`, `A` an `m x n` dense matrix.
        #[allow(clippy::too_many_arguments)]
        pub fn $gemv(
            trans: Transpose,
            m: usize,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(
                stringify!($gemv),
                gemv_impl(trans, m, n, alpha, a, lda, x, incx, beta, y, incy),
            )
        }

        /// `y := alpha * op(A) * x + beta * y`, `A` an `m x n` band matrix with
        /// `kl` sub- and `ku` super-diagonals.
        #[allow(clippy::too_many_arguments)]
        pub fn $gbmv(
            trans: Transpose,
            m: usize,
            n: usize,
            kl: usize,
            ku: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(
                stringify!($gbmv),
                gbmv_impl(trans, m, n, kl, ku, alpha, a, lda, x, incx, beta, y, incy),
            )
        }

        /// `x := op(A) * x`, `A` triangular.
        #[allow(clippy::too_many_arguments)]
        pub fn $trmv(
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            n: usize,
            a: &[$t],
            lda: usize,
            x: &mut [$t],
            incx: isize,
        ) -> Result<()> {
            traced(
                stringify!($trmv),
                trmv_impl(uplo, trans, diag, n, a, lda, x, incx, false),
            )
        }

        /// `x := op(A) * x`, `A` triangular band with `k` off-diagonals.
        #[allow(clippy::too_many_arguments)]
        pub fn $tbmv(
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            n: usize,
            k: usize,
            a: &[$t],
            lda: usize,
            x: &mut [$t],
            incx: isize,
        ) -> Result<()> {
            traced(
                stringify!($tbmv),
                tbmv_impl(uplo, trans, diag, n, k, a, lda, x, incx, false),
            )
        }

        /// `x := op(A) * x`, `A` triangular packed.
        pub fn $tpmv(
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            n: usize,
            ap: &[$t],
            x: &mut [$t],
            incx: isize,
        ) -> Result<()> {
            traced(
                stringify!($tpmv),
                tpmv_impl(uplo, trans, diag, n, ap, x, incx, false),
            )
        }

        /// Solve `op(A) * x = b` in place, `A` triangular.
        #[allow(clippy::too_many_arguments)]
        pub fn $trsv(
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            n: usize,
            a: &[$t],
            lda: usize,
            x: &mut [$t],
            incx: isize,
        ) -> Result<()> {
            traced(
                stringify!($trsv),
                trmv_impl(uplo, trans, diag, n, a, lda, x, incx, true),
            )
        }

        /// Solve `op(A) * x = b` in place, `A` triangular band.
        #[allow(clippy::too_many_arguments)]
        pub fn $tbsv(
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            n: usize,
            k: usize,
            a: &[$t],
            lda: usize,
            x: &mut [$t],
            incx: isize,
        ) -> Result<()> {
            traced(
                stringify!($tbsv),
                tbmv_impl(uplo, trans, diag, n, k, a, lda, x, incx, true),
            )
        }

        /// Solve `op(A) * x = b` in place, `A` triangular packed.
        pub fn $tpsv(
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            n: usize,
            ap: &[$t],
            x: &mut [$t],
            incx: isize,
        ) -> Result<()> {
            traced(
                stringify!($tpsv),
                tpmv_impl(uplo, trans, diag, n, ap, x, incx, true),
            )
        }
    };
}

macro_rules! impl_level2_real {
    (
        $t:ty;
        symv: $symv:ident,
        sbmv: $sbmv:ident,
        spmv: $spmv:ident,
        ger: $ger:ident,
        syr: $syr:ident,
        spr: $spr:ident,
        syr2: $syr2:ident,
        spr2: $spr2:ident
    ) => {
        /// `y := alpha * A * x + beta * y`, `A` symmetric.
        #[allow(clippy::too_many_arguments)]
        pub fn $symv(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(
                stringify!($symv),
                symv_impl(uplo, n, alpha, a, lda, x, incx, beta, y, incy, false),
            )
        }

        /// `y := alpha * A * x + beta * y`, `A` symmetric band.
        #[allow(clippy::too_many_arguments)]
        pub fn $sbmv(
            uplo: Uplo,
            n: usize,
            k: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(
                stringify!($sbmv),
                sbmv_impl(uplo, n, k, alpha, a, lda, x, incx, beta, y, incy, false),
            )
        }

        /// `y := alpha * A * x + beta * y`, `A` symmetric packed.
        #[allow(clippy::too_many_arguments)]
        pub fn $spmv(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            ap: &[$t],
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(
                stringify!($spmv),
                spmv_impl(uplo, n, alpha, ap, x, incx, beta, y, incy, false),
            )
        }

        /// `A := alpha * x * y^T + A`.
        #[allow(clippy::too_many_arguments)]
        pub fn $ger(
            m: usize,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            y: &[$t],
            incy: isize,
            a: &mut [$t],
            lda: usize,
        ) -> Result<()> {
            traced(
                stringify!($ger),
                ger_impl(m, n, alpha, x, incx, y, incy, a, lda, false),
            )
        }

        /// `A := alpha * x * x^T + A`, `A` symmetric.
        pub fn $syr(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            a: &mut [$t],
            lda: usize,
        ) -> Result<()> {
            traced(stringify!($syr), syr_impl(uplo, n, alpha, x, incx, a, lda))
        }

        /// `A := alpha * x * x^T + A`, `A` symmetric packed.
        pub fn $spr(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            ap: &mut [$t],
        ) -> Result<()> {
            traced(stringify!($spr), spr_impl(uplo, n, alpha, x, incx, ap))
        }

        /// `A := alpha * x * y^T + alpha * y * x^T + A`, `A` symmetric.
        #[allow(clippy::too_many_arguments)]
        pub fn $syr2(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            y: &[$t],
            incy: isize,
            a: &mut [$t],
            lda: usize,
        ) -> Result<()> {
            traced(
                stringify!($syr2),
                syr2_impl(uplo, n, alpha, x, incx, y, incy, a, lda, false),
            )
        }

        /// `A := alpha * x * y^T + alpha * y * x^T + A`, `A` symmetric packed.
        #[allow(clippy::too_many_arguments)]
        pub fn $spr2(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            y: &[$t],
            incy: isize,
            ap: &mut [$t],
        ) -> Result<()> {
            traced(
                stringify!($spr2),
                spr2_impl(uplo, n, alpha, x, incx, y, incy, ap, false),
            )
        }
    };
}

macro_rules! impl_level2_complex {
    (
        $t:ty, $r:ty;
        hemv: $hemv:ident,
        hbmv: $hbmv:ident,
        hpmv: $hpmv:ident,
        geru: $geru:ident,
        gerc: $gerc:ident,
        her: $her:ident,
        hpr: $hpr:ident,
        her2: $her2:ident,
        hpr2: $hpr2:ident
    ) => {
        /// `y := alpha * A * x + beta * y`, `A` hermitian.
        #[allow(clippy::too_many_arguments)]
        pub fn $hemv(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(
                stringify!($hemv),
                symv_impl(uplo, n, alpha, a, lda, x, incx, beta, y, incy, true),
            )
        }

        /// `y := alpha * A * x + beta * y`, `A` hermitian band.
        #[allow(clippy::too_many_arguments)]
        pub fn $hbmv(
            uplo: Uplo,
            n: usize,
            k: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(
                stringify!($hbmv),
                sbmv_impl(uplo, n, k, alpha, a, lda, x, incx, beta, y, incy, true),
            )
        }

        /// `y := alpha * A * x + beta * y`, `A` hermitian packed.
        #[allow(clippy::too_many_arguments)]
        pub fn $hpmv(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            ap: &[$t],
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            traced(
                stringify!($hpmv),
                spmv_impl(uplo, n, alpha, ap, x, incx, beta, y, incy, true),
            )
        }

        /// `A := alpha * x * y^T + A`.
        #[allow(clippy::too_many_arguments)]
        pub fn $geru(
            m: usize,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            y: &[$t],
            incy: isize,
            a: &mut [$t],
            lda: usize,
        ) -> Result<()> {
            traced(
                stringify!($geru),
                ger_impl(m, n, alpha, x, incx, y, incy, a, lda, false),
            )
        }

        /// `A := alpha * x * y^H + A`.
        #[allow(clippy::too_many_arguments)]
        pub fn $gerc(
            m: usize,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            y: &[$t],
            incy: isize,
            a: &mut [$t],
            lda: usize,
        ) -> Result<()> {
            traced(
                stringify!($gerc),
                ger_impl(m, n, alpha, x, incx, y, incy, a, lda, true),
            )
        }

        /// `A := alpha * x * x^H + A` with real `alpha`, `A` hermitian.
        pub fn $her(
            uplo: Uplo,
            n: usize,
            alpha: $r,
            x: &[$t],
            incx: isize,
            a: &mut [$t],
            lda: usize,
        ) -> Result<()> {
            traced(stringify!($her), her_impl(uplo, n, alpha, x, incx, a, lda))
        }

        /// `A := alpha * x * x^H + A` with real `alpha`, `A` hermitian packed.
        pub fn $hpr(
            uplo: Uplo,
            n: usize,
            alpha: $r,
            x: &[$t],
            incx: isize,
            ap: &mut [$t],
        ) -> Result<()> {
            traced(stringify!($hpr), hpr_impl(uplo, n, alpha, x, incx, ap))
        }

        /// `A := alpha * x * y^H + conj(alpha) * y * x^H + A`, `A` hermitian.
        #[allow(clippy::too_many_arguments)]
        pub fn $her2(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            y: &[$t],
            incy: isize,
            a: &mut [$t],
            lda: usize,
        ) -> Result<()> {
            traced(
                stringify!($her2),
                syr2_impl(uplo, n, alpha, x, incx, y, incy, a, lda, true),
            )
        }

        /// Packed form of the hermitian rank-2 update.
        #[allow(clippy::too_many_arguments)]
        pub fn $hpr2(
            uplo: Uplo,
            n: usize,
            alpha: $t,
            x: &[$t],
            incx: isize,
            y: &[$t],
            incy: isize,
            ap: &mut [$t],
        ) -> Result<()> {
            traced(
                stringify!($hpr2),
                spr2_impl(uplo, n, alpha, x, incx, y, incy, ap, true),
            )
        }
    };
}

impl_level2_common!(f32;
    gemv: sgemv, gbmv: sgbmv, trmv: strmv, tbmv: stbmv, tpmv: stpmv,
    trsv: strsv, tbsv: stbsv, tpsv: stpsv);
impl_level2_common!(f64;
    gemv: dgemv, gbmv: dgbmv, trmv: dtrmv, tbmv: dtbmv, tpmv: dtpmv,
    trsv: dtrsv, tbsv: dtbsv, tpsv: dtpsv);
impl_level2_common!(Complex32;
    gemv: cgemv, gbmv: cgbmv, trmv: ctrmv, tbmv: ctbmv, tpmv: ctpmv,
    trsv: ctrsv, tbsv: ctbsv, tpsv: ctpsv);
impl_level2_common!(Complex64;
    gemv: zgemv, gbmv: zgbmv, trmv: ztrmv, tbmv: ztbmv, tpmv: ztpmv,
    trsv: ztrsv, tbsv: ztbsv, tpsv: ztpsv);

impl_level2_real!(f32;
    symv: ssymv, sbmv: ssbmv, spmv: sspmv, ger: sger,
    syr: ssyr, spr: sspr, syr2: ssyr2, spr2: sspr2);
impl_level2_real!(f64;
    symv: dsymv, sbmv: dsbmv, spmv: dspmv, ger: dger,
    syr: dsyr, spr: dspr, syr2: dsyr2, spr2: dspr2);

impl_level2_complex!(Complex32, f32;
    hemv: chemv, hbmv: chbmv, hpmv: chpmv, geru: cgeru, gerc: cgerc,
    her: cher, hpr: chpr, her2: cher2, hpr2: chpr2);
impl_level2_complex!(Complex64, f64;
    hemv: zhemv, hbmv: zhbmv, hpmv: zhpmv, geru: zgeru, gerc: zgerc,
    her: zher, hpr: zhpr, her2: zher2, hpr2: zhpr2);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlasError;

    #[test]
    fn test_dgemv_leading_dimension_checked_on_empty() {
        let a: [f64; 0] = [];
        let x: [f64; 0] = [];
        let mut y: [f64; 0] = [];
        let err = dgemv(Transpose::NoTrans, 3, 0, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap_err();
        assert_eq!(
            err,
            BlasError::LeadingDimension {
                arg: "a",
                ld: 2,
                min: 3
            }
        );
        // m = 0 keeps ld = 1 valid
        dgemv(Transpose::NoTrans, 0, 0, 1.0, &a, 1, &x, 1, 0.0, &mut y, 1).unwrap();
    }

    #[test]
    fn test_sgemv_transposed_lengths() {
        // 2x3 A, A^T x needs |x| = 2 and |y| = 3
        let a = [1.0f32, 4.0, 2.0, 5.0, 3.0, 6.0];
        let x = [1.0f32, 1.0];
        let mut y = [0.0f32; 3];
        sgemv(Transpose::Trans, 2, 3, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap();
        assert_eq!(y, [5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_packed_length_must_be_exact() {
        let ap = [0.0; 7];
        let x = [0.0; 3];
        let mut y = [1.0; 3];
        let err = dspmv(Uplo::Upper, 3, 1.0, &ap, &x, 1, 0.0, &mut y, 1).unwrap_err();
        assert_eq!(
            err,
            BlasError::PackedLength {
                arg: "ap",
                len: 7,
                expected: 6
            }
        );
        assert_eq!(y, [1.0; 3]);
    }

    #[test]
    fn test_zhpr_keeps_diagonal_real() {
        let mut ap = [Complex64::new(1.0, 3.0)];
        let x = [Complex64::new(0.0, 2.0)];
        zhpr(Uplo::Lower, 1, 0.5, &x, 1, &mut ap).unwrap();
        assert_eq!(ap, [Complex64::new(3.0, 0.0)]);
    }

    #[test]
    fn test_band_leading_dimension() {
        let a = [0.0f32; 4];
        let mut x = [0.0f32; 2];
        let err = stbmv(
            Uplo::Upper,
            Transpose::NoTrans,
            Diag::NonUnit,
            2,
            1,
            &a,
            1,
            &mut x,
            1,
        )
        .unwrap_err();
        assert_eq!(
            err,
            BlasError::LeadingDimension {
                arg: "a",
                ld: 1,
                min: 2
            }
        );
    }

    #[test]
    fn test_ctrsv_unit_diagonal() {
        // unit lower [[1, 0], [i, 1]]
        let a = [
            Complex32::new(f32::NAN, 0.0),
            Complex32::new(0.0, 1.0),
            Complex32::new(0.0, 0.0),
            Complex32::new(f32::NAN, 0.0),
        ];
        let mut x = [Complex32::new(1.0, 0.0), Complex32::new(0.0, 2.0)];
        ctrsv(Uplo::Lower, Transpose::NoTrans, Diag::Unit, 2, &a, 2, &mut x, 1).unwrap();
        assert_eq!(x, [Complex32::new(1.0, 0.0), Complex32::new(0.0, 1.0)]);
    }
}
