//! Level 3: matrix-matrix operations.
//!
//! All matrices are column-major [`Dense`] / [`DenseMut`] views. Shapes implied
//! by the modifiers are checked before any element is touched:
//! - `gemm`: `op(A)` is `m x k`, `op(B)` is `k x n`, `C` is `m x n`
//! - `symm`/`hemm`, `trmm`/`trsm`: `A` is square of order `m` (`Side::Left`)
//!   or `n` (`Side::Right`)
//! - `syrk`/`herk`, `syr2k`/`her2k`: `C` is square of order `n` and `op(A)` is
//!   `n x k`
//!
//! `beta == 0` writes `C` without reading it and `alpha == 0` reads neither
//! `A` nor `B`.

use strided_blas_traits::BlasScalar;

use crate::kernel::{
    effective_upper, matvec, scale_output, tri_mul, tri_solve, triangle_rows, OpView, Source,
    Symmetric, Triangular,
};
use crate::level2::{check_dim, check_square};
use crate::modifier::{Diag, Side, Transpose, Uplo};
use crate::storage::{Dense, DenseMut};
use crate::view::{StridedVec, StridedVecMut};
use crate::{BlasError, Result};

fn scale_all<T: BlasScalar>(beta: T, c: &mut DenseMut<'_, T>) {
    for j in 0..c.cols() {
        scale_output(beta, &mut c.col_mut(j));
    }
}

// ============================================================================
// General
// ============================================================================

/// Column `j` of `C := alpha * op(A) * op(B) + beta * C`.
#[inline]
fn gemm_column<T, SA, SB>(
    alpha: T,
    opa: &SA,
    opb: &SB,
    j: usize,
    beta: T,
    col: &mut StridedVecMut<'_, T>,
) where
    T: BlasScalar,
    SA: Source<T>,
    SB: Source<T>,
{
    let bj: Vec<T> = (0..opb.rows()).map(|l| opb.at(l, j)).collect();
    matvec(alpha, opa, &StridedVec::contiguous(&bj), beta, col);
}

/// `C := alpha * op(A) * op(B) + beta * C`.
///
/// With the `parallel` feature, calls with `m * n * k` at or above
/// [`crate::PARALLEL_THRESHOLD`] compute the columns of `C` on the rayon
/// pool. Each column is computed by the same sequential loop either way.
///
/// # Errors
/// [`BlasError::DimensionMismatch`] if the inner dimensions of `op(A)` and
/// `op(B)` differ or `C` is not `m x n`.
pub fn gemm<T: BlasScalar>(
    transa: Transpose,
    transb: Transpose,
    alpha: T,
    a: &Dense<'_, T>,
    b: &Dense<'_, T>,
    beta: T,
    c: &mut DenseMut<'_, T>,
) -> Result<()> {
    let (m, k) = transa.apply_shape(a.rows(), a.cols());
    let (kb, n) = transb.apply_shape(b.rows(), b.cols());
    check_dim("b", k, kb)?;
    check_dim("c", m, c.rows())?;
    check_dim("c", n, c.cols())?;

    if alpha == T::zero() {
        scale_all(beta, c);
        return Ok(());
    }

    let opa = OpView::new(a, transa);
    let opb = OpView::new(b, transb);

    #[cfg(feature = "parallel")]
    if m.saturating_mul(n).saturating_mul(k) >= crate::PARALLEL_THRESHOLD && m > 0 {
        use rayon::prelude::*;

        tracing::trace!(m, n, k, "gemm: computing columns on the rayon pool");
        let ldc = c.ld();
        c.data_mut()
            .par_chunks_mut(ldc)
            .take(n)
            .enumerate()
            .for_each(|(j, chunk)| {
                let mut col = StridedVecMut::from_parts(&mut chunk[..m], m, 1);
                gemm_column(alpha, &opa, &opb, j, beta, &mut col);
            });
        return Ok(());
    }

    for j in 0..n {
        gemm_column(alpha, &opa, &opb, j, beta, &mut c.col_mut(j));
    }
    Ok(())
}

// ============================================================================
// Symmetric / Hermitian products
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn symmetric_mm<T: BlasScalar>(
    side: Side,
    uplo: Uplo,
    alpha: T,
    a: &Dense<'_, T>,
    b: &Dense<'_, T>,
    beta: T,
    c: &mut DenseMut<'_, T>,
    hermitian: bool,
) -> Result<()> {
    let (m, n) = (c.rows(), c.cols());
    check_dim("b", m, b.rows())?;
    check_dim("b", n, b.cols())?;
    let order = check_square("a", a.rows(), a.cols())?;
    check_dim("a", if side == Side::Left { m } else { n }, order)?;

    if alpha == T::zero() {
        scale_all(beta, c);
        return Ok(());
    }

    let sym = Symmetric::new(a, uplo, hermitian);
    for j in 0..n {
        let mut col = c.col_mut(j);
        match side {
            Side::Left => matvec(alpha, &sym, &b.col(j), beta, &mut col),
            Side::Right => {
                let aj: Vec<T> = (0..n).map(|l| sym.at(l, j)).collect();
                matvec(alpha, b, &StridedVec::contiguous(&aj), beta, &mut col);
            }
        }
    }
    Ok(())
}

/// `C := alpha * A * B + beta * C` (`Side::Left`) or `alpha * B * A + beta * C`
/// (`Side::Right`), `A` symmetric with its `uplo` triangle referenced.
pub fn symm<T: BlasScalar>(
    side: Side,
    uplo: Uplo,
    alpha: T,
    a: &Dense<'_, T>,
    b: &Dense<'_, T>,
    beta: T,
    c: &mut DenseMut<'_, T>,
) -> Result<()> {
    symmetric_mm(side, uplo, alpha, a, b, beta, c, false)
}

/// Hermitian counterpart of [`symm`].
pub fn hemm<T: BlasScalar>(
    side: Side,
    uplo: Uplo,
    alpha: T,
    a: &Dense<'_, T>,
    b: &Dense<'_, T>,
    beta: T,
    c: &mut DenseMut<'_, T>,
) -> Result<()> {
    symmetric_mm(side, uplo, alpha, a, b, beta, c, true)
}

// ============================================================================
// Rank-k updates
// ============================================================================

/// Complex symmetric updates accept `N | T`, hermitian ones `N | C`.
/// Real domains accept all three, `C` meaning `T`.
fn check_rank_k_trans<T: BlasScalar>(
    routine: &'static str,
    trans: Transpose,
    hermitian: bool,
) -> Result<()> {
    let rejected = match trans {
        Transpose::NoTrans => false,
        Transpose::Trans => T::IS_COMPLEX && hermitian,
        Transpose::ConjTrans => T::IS_COMPLEX && !hermitian,
    };
    if rejected {
        return Err(BlasError::UnsupportedTranspose { routine, trans });
    }
    Ok(())
}

#[inline]
fn conj_if<T: BlasScalar>(v: T, hermitian: bool) -> T {
    if hermitian {
        v.conj()
    } else {
        v
    }
}

/// Shared driver of the rank-k and rank-2k updates over the `uplo` triangle
/// of `C`. `entry(i, j)` yields the unscaled update term of `C(i, j)`.
fn update_triangle<T, F>(
    uplo: Uplo,
    alpha_is_zero: bool,
    beta: T,
    c: &mut DenseMut<'_, T>,
    hermitian: bool,
    entry: F,
) where
    T: BlasScalar,
    F: Fn(usize, usize) -> T,
{
    let n = c.rows();
    for j in 0..n {
        for i in triangle_rows(uplo, n, j) {
            let old = if beta == T::zero() {
                T::zero()
            } else {
                beta * c.get(i, j)
            };
            let v = if alpha_is_zero { old } else { entry(i, j) + old };
            let v = if hermitian && i == j { v.real_part() } else { v };
            c.set(i, j, v);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn rank_k<T: BlasScalar>(
    routine: &'static str,
    uplo: Uplo,
    trans: Transpose,
    alpha: T,
    a: &Dense<'_, T>,
    beta: T,
    c: &mut DenseMut<'_, T>,
    hermitian: bool,
) -> Result<()> {
    check_rank_k_trans::<T>(routine, trans, hermitian)?;
    let (n, k) = trans.apply_shape(a.rows(), a.cols());
    let order = check_square("c", c.rows(), c.cols())?;
    check_dim("c", n, order)?;

    if (alpha == T::zero() || k == 0) && beta == T::one() {
        return Ok(());
    }

    let p = OpView::new(a, trans);
    update_triangle(uplo, alpha == T::zero(), beta, c, hermitian, |i, j| {
        let acc = (0..k).fold(T::zero(), |acc, l| {
            acc + p.at(i, l) * conj_if(p.at(j, l), hermitian)
        });
        alpha * acc
    });
    Ok(())
}

/// `C := alpha * op(A) * op(A)^T + beta * C` over the `uplo` triangle of `C`.
///
/// `op(A) = A` (`n x k`) for `NoTrans`, `A^T` for `Trans`.
///
/// # Errors
/// [`BlasError::UnsupportedTranspose`] for `ConjTrans` on complex domains.
pub fn syrk<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    alpha: T,
    a: &Dense<'_, T>,
    beta: T,
    c: &mut DenseMut<'_, T>,
) -> Result<()> {
    rank_k("syrk", uplo, trans, alpha, a, beta, c, false)
}

/// `C := alpha * op(A) * op(A)^H + beta * C` with real `alpha` and `beta`.
/// The diagonal of `C` is left real.
///
/// # Errors
/// [`BlasError::UnsupportedTranspose`] for `Trans` on complex domains.
pub fn herk<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    alpha: T::Real,
    a: &Dense<'_, T>,
    beta: T::Real,
    c: &mut DenseMut<'_, T>,
) -> Result<()> {
    rank_k(
        "herk",
        uplo,
        trans,
        T::from_real(alpha),
        a,
        T::from_real(beta),
        c,
        true,
    )
}

#[allow(clippy::too_many_arguments)]
fn rank_2k<T: BlasScalar>(
    routine: &'static str,
    uplo: Uplo,
    trans: Transpose,
    alpha: T,
    a: &Dense<'_, T>,
    b: &Dense<'_, T>,
    beta: T,
    c: &mut DenseMut<'_, T>,
    hermitian: bool,
) -> Result<()> {
    check_rank_k_trans::<T>(routine, trans, hermitian)?;
    check_dim("b", a.rows(), b.rows())?;
    check_dim("b", a.cols(), b.cols())?;
    let (n, k) = trans.apply_shape(a.rows(), a.cols());
    let order = check_square("c", c.rows(), c.cols())?;
    check_dim("c", n, order)?;

    if (alpha == T::zero() || k == 0) && beta == T::one() {
        return Ok(());
    }

    let p = OpView::new(a, trans);
    let r = OpView::new(b, trans);
    let alpha2 = conj_if(alpha, hermitian);
    update_triangle(uplo, alpha == T::zero(), beta, c, hermitian, |i, j| {
        let (mut pr, mut rp) = (T::zero(), T::zero());
        for l in 0..k {
            pr = pr + p.at(i, l) * conj_if(r.at(j, l), hermitian);
            rp = rp + r.at(i, l) * conj_if(p.at(j, l), hermitian);
        }
        alpha * pr + alpha2 * rp
    });
    Ok(())
}

/// `C := alpha * op(A) * op(B)^T + alpha * op(B) * op(A)^T + beta * C`.
pub fn syr2k<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    alpha: T,
    a: &Dense<'_, T>,
    b: &Dense<'_, T>,
    beta: T,
    c: &mut DenseMut<'_, T>,
) -> Result<()> {
    rank_2k("syr2k", uplo, trans, alpha, a, b, beta, c, false)
}

/// `C := alpha * op(A) * op(B)^H + conj(alpha) * op(B) * op(A)^H + beta * C`
/// with a real `beta`. The diagonal of `C` is left real.
pub fn her2k<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    alpha: T,
    a: &Dense<'_, T>,
    b: &Dense<'_, T>,
    beta: T::Real,
    c: &mut DenseMut<'_, T>,
) -> Result<()> {
    rank_2k(
        "her2k",
        uplo,
        trans,
        alpha,
        a,
        b,
        T::from_real(beta),
        c,
        true,
    )
}

// ============================================================================
// Triangular
// ============================================================================

/// `v := op(A) * (alpha * v)` or the corresponding solve.
fn triangular_apply<T: BlasScalar, S: Source<T>>(
    alpha: T,
    a: &S,
    upper: bool,
    solve: bool,
    v: &mut StridedVecMut<'_, T>,
) {
    if alpha != T::one() {
        crate::level1::scal(alpha, v);
    }
    if solve {
        tri_solve(a, upper, v);
    } else {
        tri_mul(a, upper, v);
    }
}

#[allow(clippy::too_many_arguments)]
fn triangular_mm<T: BlasScalar>(
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    alpha: T,
    a: &Dense<'_, T>,
    b: &mut DenseMut<'_, T>,
    solve: bool,
) -> Result<()> {
    let (m, n) = (b.rows(), b.cols());
    let order = check_square("a", a.rows(), a.cols())?;
    check_dim("a", if side == Side::Left { m } else { n }, order)?;

    if alpha == T::zero() {
        scale_all(T::zero(), b);
        return Ok(());
    }

    let op = OpView::new(Triangular::new(a, uplo, diag), trans);
    let upper = effective_upper(uplo, trans);
    match side {
        Side::Left => {
            for j in 0..n {
                triangular_apply(alpha, &op, upper, solve, &mut b.col_mut(j));
            }
        }
        Side::Right => {
            // row_i * op(A) is op(A)^T * row_i^T
            let opt = op.transposed();
            for i in 0..m {
                triangular_apply(alpha, &opt, !upper, solve, &mut b.row_mut(i));
            }
        }
    }
    Ok(())
}

/// `B := alpha * op(A) * B` (`Side::Left`) or `alpha * B * op(A)`
/// (`Side::Right`), `A` triangular.
pub fn trmm<T: BlasScalar>(
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    alpha: T,
    a: &Dense<'_, T>,
    b: &mut DenseMut<'_, T>,
) -> Result<()> {
    triangular_mm(side, uplo, trans, diag, alpha, a, b, false)
}

/// Solve `op(A) * X = alpha * B` (`Side::Left`) or `X * op(A) = alpha * B`
/// (`Side::Right`), overwriting `B` with `X`.
pub fn trsm<T: BlasScalar>(
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    alpha: T,
    a: &Dense<'_, T>,
    b: &mut DenseMut<'_, T>,
) -> Result<()> {
    triangular_mm(side, uplo, trans, diag, alpha, a, b, true)
}
