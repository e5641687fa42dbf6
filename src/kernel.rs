//! Reference kernels shared by the Level 2 and Level 3 routines.
//!
//! Every storage layout is read through [`Source`], which yields the logical
//! element `(i, j)` of a matrix. Wrappers build the matrices the routines
//! actually operate on:
//! - [`Symmetric`]: mirror the referenced triangle (conjugated for hermitian)
//! - [`Triangular`]: zero the other triangle, implicit unit diagonal
//! - [`OpView`]: apply `op(A)` (transpose and/or conjugate)
//!
//! The kernels are plain loops; the arithmetic strategy is not part of the
//! contract, only the result.

use strided_blas_traits::BlasScalar;

use crate::element_op::ElementOp;
use crate::modifier::{Diag, Transpose, Uplo};
use crate::storage::{Banded, Dense, DenseMut, Packed, PackedMut};
use crate::view::{StridedVec, StridedVecMut};

/// Logical element access to a matrix.
///
/// For triangle-only layouts (`Packed`), only elements of the stored triangle
/// may be requested; wrappers guarantee this.
pub(crate) trait Source<T> {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, i: usize, j: usize) -> T;
}

/// Mutable element access for rank-update targets.
pub(crate) trait SourceMut<T>: Source<T> {
    fn store(&mut self, i: usize, j: usize, value: T);
}

impl<T, S: Source<T>> Source<T> for &S {
    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }
    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        (**self).at(i, j)
    }
}

impl<T: BlasScalar> Source<T> for Dense<'_, T> {
    fn rows(&self) -> usize {
        Dense::rows(self)
    }
    fn cols(&self) -> usize {
        Dense::cols(self)
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        self.get(i, j)
    }
}

impl<T: BlasScalar> Source<T> for Banded<'_, T> {
    fn rows(&self) -> usize {
        Banded::rows(self)
    }
    fn cols(&self) -> usize {
        Banded::cols(self)
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        self.get(i, j)
    }
}

impl<T: BlasScalar> Source<T> for Packed<'_, T> {
    fn rows(&self) -> usize {
        self.n()
    }
    fn cols(&self) -> usize {
        self.n()
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        self.get(i, j)
    }
}

impl<T: BlasScalar> Source<T> for DenseMut<'_, T> {
    fn rows(&self) -> usize {
        DenseMut::rows(self)
    }
    fn cols(&self) -> usize {
        DenseMut::cols(self)
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        self.get(i, j)
    }
}

impl<T: BlasScalar> SourceMut<T> for DenseMut<'_, T> {
    #[inline]
    fn store(&mut self, i: usize, j: usize, value: T) {
        self.set(i, j, value);
    }
}

impl<T: BlasScalar> Source<T> for PackedMut<'_, T> {
    fn rows(&self) -> usize {
        self.n()
    }
    fn cols(&self) -> usize {
        self.n()
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        self.get(i, j)
    }
}

impl<T: BlasScalar> SourceMut<T> for PackedMut<'_, T> {
    #[inline]
    fn store(&mut self, i: usize, j: usize, value: T) {
        self.set(i, j, value);
    }
}

// ============================================================================
// Wrappers
// ============================================================================

/// Full symmetric or hermitian matrix reconstructed from one stored triangle.
///
/// The unreferenced triangle is never read. For hermitian matrices the mirror
/// is conjugated and the diagonal is read as its real part.
pub(crate) struct Symmetric<'s, S> {
    src: &'s S,
    uplo: Uplo,
    hermitian: bool,
}

impl<'s, S> Symmetric<'s, S> {
    pub(crate) fn new(src: &'s S, uplo: Uplo, hermitian: bool) -> Self {
        Self {
            src,
            uplo,
            hermitian,
        }
    }
}

impl<T: BlasScalar, S: Source<T>> Source<T> for Symmetric<'_, S> {
    fn rows(&self) -> usize {
        self.src.rows()
    }
    fn cols(&self) -> usize {
        self.src.cols()
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        if i == j {
            let d = self.src.at(i, i);
            if self.hermitian {
                d.real_part()
            } else {
                d
            }
        } else if self.uplo.contains(i, j) {
            self.src.at(i, j)
        } else {
            let v = self.src.at(j, i);
            if self.hermitian {
                v.conj()
            } else {
                v
            }
        }
    }
}

/// Triangular matrix: zero outside `uplo`, unit diagonal never read.
pub(crate) struct Triangular<'s, S> {
    src: &'s S,
    uplo: Uplo,
    diag: Diag,
}

impl<'s, S> Triangular<'s, S> {
    pub(crate) fn new(src: &'s S, uplo: Uplo, diag: Diag) -> Self {
        Self { src, uplo, diag }
    }
}

impl<T: BlasScalar, S: Source<T>> Source<T> for Triangular<'_, S> {
    fn rows(&self) -> usize {
        self.src.rows()
    }
    fn cols(&self) -> usize {
        self.src.cols()
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        if i == j && self.diag == Diag::Unit {
            T::one()
        } else if self.uplo.contains(i, j) {
            self.src.at(i, j)
        } else {
            T::zero()
        }
    }
}

/// `op(A)` applied on access.
pub(crate) struct OpView<S> {
    inner: S,
    transpose: bool,
    conjugate: bool,
}

impl<S> OpView<S> {
    pub(crate) fn new(inner: S, trans: Transpose) -> Self {
        Self {
            inner,
            transpose: trans.is_transposed(),
            conjugate: trans.is_conjugated(),
        }
    }

    /// `op(A)^T`: flips the transpose, keeps the conjugation.
    pub(crate) fn transposed(self) -> Self {
        Self {
            inner: self.inner,
            transpose: !self.transpose,
            conjugate: self.conjugate,
        }
    }

    pub(crate) fn is_transposed(&self) -> bool {
        self.transpose
    }
}

impl<T: BlasScalar, S: Source<T>> Source<T> for OpView<S> {
    fn rows(&self) -> usize {
        if self.transpose {
            self.inner.cols()
        } else {
            self.inner.rows()
        }
    }
    fn cols(&self) -> usize {
        if self.transpose {
            self.inner.rows()
        } else {
            self.inner.cols()
        }
    }
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        let v = if self.transpose {
            self.inner.at(j, i)
        } else {
            self.inner.at(i, j)
        };
        if self.conjugate {
            v.conj()
        } else {
            v
        }
    }
}

// ============================================================================
// Kernels
// ============================================================================

/// `y := beta * y` without reading `y` when `beta == 0`.
pub(crate) fn scale_output<T: BlasScalar>(beta: T, y: &mut StridedVecMut<'_, T>) {
    if beta == T::zero() {
        for i in 0..y.len() {
            y.set(i, T::zero());
        }
    } else if beta != T::one() {
        for i in 0..y.len() {
            y.update(i, |v| beta * v);
        }
    }
}

/// `y := alpha * A * x + beta * y` for `A` of shape `y.len() x x.len()`.
///
/// `beta == 0` never reads `y`; `alpha == 0` never reads `A` or `x`.
pub(crate) fn matvec<T, S, Op>(
    alpha: T,
    a: &S,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) where
    T: BlasScalar,
    S: Source<T>,
    Op: ElementOp<T>,
{
    debug_assert_eq!(a.rows(), y.len());
    debug_assert_eq!(a.cols(), x.len());
    scale_output(beta, y);
    if alpha == T::zero() {
        return;
    }
    for i in 0..y.len() {
        let mut acc = T::zero();
        for j in 0..x.len() {
            acc = acc + a.at(i, j) * x.get(j);
        }
        y.update(i, |v| v + alpha * acc);
    }
}

/// `x := A * x` for a triangular `A` (upper when `upper`).
pub(crate) fn tri_mul<T: BlasScalar, S: Source<T>>(a: &S, upper: bool, x: &mut StridedVecMut<'_, T>) {
    let n = x.len();
    let old = x.to_vec();
    for i in 0..n {
        let cols = if upper { i..n } else { 0..i + 1 };
        let mut acc = T::zero();
        for j in cols {
            acc = acc + a.at(i, j) * old[j];
        }
        x.set(i, acc);
    }
}

/// Solve `A * x = b` in place for a triangular `A` (upper when `upper`).
///
/// A zero pivot yields inf/NaN; conditioning is the caller's responsibility.
pub(crate) fn tri_solve<T: BlasScalar, S: Source<T>>(
    a: &S,
    upper: bool,
    x: &mut StridedVecMut<'_, T>,
) {
    let n = x.len();
    if upper {
        for i in (0..n).rev() {
            let mut acc = x.get(i);
            for j in i + 1..n {
                acc = acc - a.at(i, j) * x.get(j);
            }
            x.set(i, acc / a.at(i, i));
        }
    } else {
        for i in 0..n {
            let mut acc = x.get(i);
            for j in 0..i {
                acc = acc - a.at(i, j) * x.get(j);
            }
            x.set(i, acc / a.at(i, i));
        }
    }
}

/// Rows of column `j` inside the `uplo` triangle of an order-`n` matrix.
#[inline]
pub(crate) fn triangle_rows(uplo: Uplo, n: usize, j: usize) -> std::ops::Range<usize> {
    match uplo {
        Uplo::Upper => 0..j + 1,
        Uplo::Lower => j..n,
    }
}

/// Whether `op(A)` of a `uplo` triangle is upper triangular.
#[inline]
pub(crate) fn effective_upper(uplo: Uplo, trans: Transpose) -> bool {
    (uplo == Uplo::Upper) != trans.is_transposed()
}
