//! Triangular matrix-vector products and solves.
//!
//! `x` is overwritten in place. With [`Diag::Unit`] the diagonal is taken to
//! be one and never read. Solves perform no singularity check: a zero pivot
//! propagates inf/NaN into `x`.

use strided_blas_traits::BlasScalar;

use super::{check_dim, check_square};
use crate::kernel::{effective_upper, tri_mul, tri_solve, OpView, Source, Triangular};
use crate::modifier::{Diag, Transpose, Uplo};
use crate::storage::{Banded, Dense, Packed};
use crate::view::StridedVecMut;
use crate::Result;

fn triangular_mv<T: BlasScalar, S: Source<T>>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    a: &S,
    x: &mut StridedVecMut<'_, T>,
    solve: bool,
) -> Result<()> {
    let n = check_square("a", a.rows(), a.cols())?;
    check_dim("x", n, x.len())?;
    let op = OpView::new(Triangular::new(a, uplo, diag), trans);
    let upper = effective_upper(uplo, trans);
    if solve {
        tri_solve(&op, upper, x);
    } else {
        tri_mul(&op, upper, x);
    }
    Ok(())
}

/// `x := op(A) * x`, `A` triangular (dense).
pub fn trmv<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    a: &Dense<'_, T>,
    x: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    triangular_mv(uplo, trans, diag, a, x, false)
}

/// `x := op(A) * x`, `A` triangular band.
pub fn tbmv<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    a: &Banded<'_, T>,
    x: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    triangular_mv(uplo, trans, diag, a, x, false)
}

/// `x := op(A) * x`, `A` triangular packed.
pub fn tpmv<T: BlasScalar>(
    trans: Transpose,
    diag: Diag,
    ap: &Packed<'_, T>,
    x: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    triangular_mv(ap.uplo(), trans, diag, ap, x, false)
}

/// Solve `op(A) * x = b` in place, `A` triangular (dense).
pub fn trsv<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    a: &Dense<'_, T>,
    x: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    triangular_mv(uplo, trans, diag, a, x, true)
}

/// Solve `op(A) * x = b` in place, `A` triangular band.
pub fn tbsv<T: BlasScalar>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    a: &Banded<'_, T>,
    x: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    triangular_mv(uplo, trans, diag, a, x, true)
}

/// Solve `op(A) * x = b` in place, `A` triangular packed.
pub fn tpsv<T: BlasScalar>(
    trans: Transpose,
    diag: Diag,
    ap: &Packed<'_, T>,
    x: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    triangular_mv(ap.uplo(), trans, diag, ap, x, true)
}
