//! Level 3 catalog: `?gemm`, `?symm`, `?hemm`, `?syrk`, `?herk`, `?syr2k`,
//! `?her2k`, `?trmm`, `?trsm`.

use num_complex::{Complex32, Complex64};
use strided_blas_traits::BlasScalar;

use super::{mat_in, mat_out, traced};
use crate::level3;
use crate::modifier::{Diag, Side, Transpose, Uplo};
use crate::Result;

/// Stored shape of `A` when `op(A)` is `rows x cols`.
#[inline]
fn stored_shape(trans: Transpose, rows: usize, cols: usize) -> (usize, usize) {
    trans.apply_shape(rows, cols)
}

#[inline]
fn side_order(side: Side, m: usize, n: usize) -> usize {
    match side {
        Side::Left => m,
        Side::Right => n,
    }
}

// ============================================================================
// Generic entry points
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn gemm_impl<T: BlasScalar>(
    transa: Transpose,
    transb: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let (ar, ac) = stored_shape(transa, m, k);
    let (br, bc) = stored_shape(transb, k, n);
    let a = mat_in("a", ar, ac, a, lda)?;
    let b = mat_in("b", br, bc, b, ldb)?;
    let mut c = mat_out("c", m, n, c, ldc)?;
    level3::gemm(transa, transb, alpha, &a, &b, beta, &mut c)
}

#[allow(clippy::too_many_arguments)]
fn symm_impl<T: BlasScalar>(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
    hermitian: bool,
) -> Result<()> {
    let order = side_order(side, m, n);
    let a = mat_in("a", order, order, a, lda)?;
    let b = mat_in("b", m, n, b, ldb)?;
    let mut c = mat_out("c", m, n, c, ldc)?;
    if hermitian {
        level3::hemm(side, uplo, alpha, &a, &b, beta, &mut c)
    } else {
        level3::symm(side, uplo, alpha, &a, &b, beta, &mut c)
    }
}

#[allow(clippy::too_many_arguments)]
fn syrk_impl<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let (ar, ac) = stored_shape(trans, n, k);
    let a = mat_in("a", ar, ac, a, lda)?;
    let mut c = mat_out("c", n, n, c, ldc)?;
    level3::syrk(uplo, trans, alpha, &a, beta, &mut c)
}

#[allow(clippy::too_many_arguments)]
fn herk_impl<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T::Real,
    a: &[T],
    lda: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let (ar, ac) = stored_shape(trans, n, k);
    let a = mat_in("a", ar, ac, a, lda)?;
    let mut c = mat_out("c", n, n, c, ldc)?;
    level3::herk(uplo, trans, alpha, &a, beta, &mut c)
}

#[allow(clippy::too_many_arguments)]
fn syr2k_impl<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let (ar, ac) = stored_shape(trans, n, k);
    let a = mat_in("a", ar, ac, a, lda)?;
    let b = mat_in("b", ar, ac, b, ldb)?;
    let mut c = mat_out("c", n, n, c, ldc)?;
    level3::syr2k(uplo, trans, alpha, &a, &b, beta, &mut c)
}

#[allow(clippy::too_many_arguments)]
fn her2k_impl<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let (ar, ac) = stored_shape(trans, n, k);
    let a = mat_in("a", ar, ac, a, lda)?;
    let b = mat_in("b", ar, ac, b, ldb)?;
    let mut c = mat_out("c", n, n, c, ldc)?;
    level3::her2k(uplo, trans, alpha, &a, &b, beta, &mut c)
}

#[allow(clippy::too_many_arguments)]
fn trmm_impl<T: BlasScalar>(
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
    solve: bool,
) -> Result<()> {
    let order = side_order(side, m, n);
    let a = mat_in("a", order, order, a, lda)?;
    let mut b = mat_out("b", m, n, b, ldb)?;
    if solve {
        level3::trsm(side, uplo, trans, diag, alpha, &a, &mut b)
    } else {
        level3::trmm(side, uplo, trans, diag, alpha, &a, &mut b)
    }
}

// ============================================================================
// Per-domain routines
// ============================================================================

macro_rules! impl_level3_common {
    (
        $t:ty;
        gemm: $gemm:ident,
        symm: $symm:ident,
        syrk: $syrk:ident,
        syr2k: $syr2k:ident,
        trmm: $trmm:ident,
        trsm: $trsm:ident
    ) => {
        /// `C := alpha * op(A) * op(B) + beta * C`, `C` is `m x n`, `k` the
        /// inner dimension.
        #[allow(clippy::too_many_arguments)]
        pub fn $gemm(
            transa: Transpose,
            transb: Transpose,
            m: usize,
            n: usize,
            k: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &[$t],
            ldb: usize,
            beta: $t,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            traced(
                stringify!($gemm),
                gemm_impl(transa, transb, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc),
            )
        }

        /// `C := alpha * A * B + beta * C` or `alpha * B * A + beta * C`,
        /// `A` symmetric.
        #[allow(clippy::too_many_arguments)]
        pub fn $symm(
            side: Side,
            uplo: Uplo,
            m: usize,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &[$t],
            ldb: usize,
            beta: $t,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            traced(
                stringify!($symm),
                symm_impl(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc, false),
            )
        }

        /// `C := alpha * op(A) * op(A)^T + beta * C`, `C` is `n x n`.
        #[allow(clippy::too_many_arguments)]
        pub fn $syrk(
            uplo: Uplo,
            trans: Transpose,
            n: usize,
            k: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            beta: $t,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            traced(
                stringify!($syrk),
                syrk_impl(uplo, trans, n, k, alpha, a, lda, beta, c, ldc),
            )
        }

        /// `C := alpha * op(A) * op(B)^T + alpha * op(B) * op(A)^T + beta * C`.
        #[allow(clippy::too_many_arguments)]
        pub fn $syr2k(
            uplo: Uplo,
            trans: Transpose,
            n: usize,
            k: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &[$t],
            ldb: usize,
            beta: $t,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            traced(
                stringify!($syr2k),
                syr2k_impl(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc),
            )
        }

        /// `B := alpha * op(A) * B` or `alpha * B * op(A)`, `A` triangular.
        #[allow(clippy::too_many_arguments)]
        pub fn $trmm(
            side: Side,
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            m: usize,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &mut [$t],
            ldb: usize,
        ) -> Result<()> {
            traced(
                stringify!($trmm),
                trmm_impl(side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb, false),
            )
        }

        /// Solve `op(A) * X = alpha * B` or `X * op(A) = alpha * B`, `X`
        /// overwriting `B`.
        #[allow(clippy::too_many_arguments)]
        pub fn $trsm(
            side: Side,
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            m: usize,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &mut [$t],
            ldb: usize,
        ) -> Result<()> {
            traced(
                stringify!($trsm),
                trmm_impl(side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb, true),
            )
        }
    };
}

macro_rules! impl_level3_complex {
    (
        $t:ty, $r:ty;
        hemm: $hemm:ident,
        herk: $herk:ident,
        her2k: $her2k:ident
    ) => {
        /// `C := alpha * A * B + beta * C` or `alpha * B * A + beta * C`,
        /// `A` hermitian.
        #[allow(clippy::too_many_arguments)]
        pub fn $hemm(
            side: Side,
            uplo: Uplo,
            m: usize,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &[$t],
            ldb: usize,
            beta: $t,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            traced(
                stringify!($hemm),
                symm_impl(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc, true),
            )
        }

        /// `C := alpha * op(A) * op(A)^H + beta * C` with real `alpha`, `beta`.
        #[allow(clippy::too_many_arguments)]
        pub fn $herk(
            uplo: Uplo,
            trans: Transpose,
            n: usize,
            k: usize,
            alpha: $r,
            a: &[$t],
            lda: usize,
            beta: $r,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            traced(
                stringify!($herk),
                herk_impl(uplo, trans, n, k, alpha, a, lda, beta, c, ldc),
            )
        }

        /// `C := alpha * op(A) * op(B)^H + conj(alpha) * op(B) * op(A)^H + beta * C`
        /// with real `beta`.
        #[allow(clippy::too_many_arguments)]
        pub fn $her2k(
            uplo: Uplo,
            trans: Transpose,
            n: usize,
            k: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &[$t],
            ldb: usize,
            beta: $r,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            traced(
                stringify!($her2k),
                her2k_impl(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc),
            )
        }
    };
}

impl_level3_common!(f32;
    gemm: sgemm, symm: ssymm, syrk: ssyrk, syr2k: ssyr2k, trmm: strmm, trsm: strsm);
impl_level3_common!(f64;
    gemm: dgemm, symm: dsymm, syrk: dsyrk, syr2k: dsyr2k, trmm: dtrmm, trsm: dtrsm);
impl_level3_common!(Complex32;
    gemm: cgemm, symm: csymm, syrk: csyrk, syr2k: csyr2k, trmm: ctrmm, trsm: ctrsm);
impl_level3_common!(Complex64;
    gemm: zgemm, symm: zsymm, syrk: zsyrk, syr2k: zsyr2k, trmm: ztrmm, trsm: ztrsm);

impl_level3_complex!(Complex32, f32; hemm: chemm, herk: cherk, her2k: cher2k);
impl_level3_complex!(Complex64, f64; hemm: zhemm, herk: zherk, her2k: zher2k);
