//! General (unstructured) matrices: products and rank-1 updates.

use strided_blas_traits::BlasScalar;

use super::check_dim;
use crate::element_op::{ElementOp, Identity};
use crate::kernel::{matvec, OpView, Source};
use crate::modifier::Transpose;
use crate::storage::{Banded, Dense, DenseMut};
use crate::view::{StridedVec, StridedVecMut};
use crate::Result;

fn general_mv<T, S, Op>(
    trans: Transpose,
    alpha: T,
    a: &S,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()>
where
    T: BlasScalar,
    S: Source<T>,
    Op: ElementOp<T>,
{
    let (rows, cols) = trans.apply_shape(a.rows(), a.cols());
    check_dim("x", cols, x.len())?;
    check_dim("y", rows, y.len())?;
    matvec(alpha, &OpView::new(a, trans), x, beta, y);
    Ok(())
}

/// `y := alpha * op(A) * x + beta * y` for a dense `A`.
///
/// `y` is not read when `beta == 0`; `A` and `x` are not read when `alpha == 0`.
///
/// # Errors
/// [`crate::BlasError::DimensionMismatch`] if `x` or `y` disagree with the
/// shape of `op(A)`.
pub fn gemv<T: BlasScalar, Op: ElementOp<T>>(
    trans: Transpose,
    alpha: T,
    a: &Dense<'_, T>,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    general_mv(trans, alpha, a, x, beta, y)
}

/// `y := alpha * op(A) * x + beta * y` for a band `A`.
pub fn gbmv<T: BlasScalar, Op: ElementOp<T>>(
    trans: Transpose,
    alpha: T,
    a: &Banded<'_, T>,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    general_mv(trans, alpha, a, x, beta, y)
}

/// `A := alpha * x * y^T + A` (`geru` for complex domains).
///
/// Conjugation carried by the `y` view is honored; see [`gerc`].
pub fn ger<T, OpX, OpY>(
    alpha: T,
    x: &StridedVec<'_, T, OpX>,
    y: &StridedVec<'_, T, OpY>,
    a: &mut DenseMut<'_, T>,
) -> Result<()>
where
    T: BlasScalar,
    OpX: ElementOp<T>,
    OpY: ElementOp<T>,
{
    check_dim("x", a.rows(), x.len())?;
    check_dim("y", a.cols(), y.len())?;
    if alpha == T::zero() {
        return Ok(());
    }
    for j in 0..a.cols() {
        let ay = alpha * y.get(j);
        let mut col = a.col_mut(j);
        for (i, xi) in x.iter().enumerate() {
            col.update(i, |v| v + xi * ay);
        }
    }
    Ok(())
}

/// `A := alpha * x * y^H + A`.
pub fn gerc<T: BlasScalar>(
    alpha: T,
    x: &StridedVec<'_, T>,
    y: &StridedVec<'_, T, Identity>,
    a: &mut DenseMut<'_, T>,
) -> Result<()> {
    ger(alpha, x, &y.conj(), a)
}
