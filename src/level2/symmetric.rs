//! Symmetric and hermitian matrices in dense, band and packed storage.
//!
//! Only the `uplo` triangle is ever read or written. Hermitian operations
//! treat the diagonal as real: products read its real part, rank updates
//! store a zero imaginary part.

use strided_blas_traits::BlasScalar;

use super::{check_dim, check_square};
use crate::element_op::ElementOp;
use crate::kernel::{matvec, triangle_rows, Source, SourceMut, Symmetric};
use crate::modifier::Uplo;
use crate::storage::{Banded, Dense, DenseMut, Packed, PackedMut};
use crate::view::{StridedVec, StridedVecMut};
use crate::Result;

// ============================================================================
// Products
// ============================================================================

fn symmetric_mv<T, S, Op>(
    uplo: Uplo,
    alpha: T,
    a: &S,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
    hermitian: bool,
) -> Result<()>
where
    T: BlasScalar,
    S: Source<T>,
    Op: ElementOp<T>,
{
    let n = check_square("a", a.rows(), a.cols())?;
    check_dim("x", n, x.len())?;
    check_dim("y", n, y.len())?;
    matvec(alpha, &Symmetric::new(a, uplo, hermitian), x, beta, y);
    Ok(())
}

/// `y := alpha * A * x + beta * y`, `A` symmetric (dense, `uplo` triangle).
pub fn symv<T: BlasScalar, Op: ElementOp<T>>(
    uplo: Uplo,
    alpha: T,
    a: &Dense<'_, T>,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    symmetric_mv(uplo, alpha, a, x, beta, y, false)
}

/// `y := alpha * A * x + beta * y`, `A` hermitian (dense, `uplo` triangle).
pub fn hemv<T: BlasScalar, Op: ElementOp<T>>(
    uplo: Uplo,
    alpha: T,
    a: &Dense<'_, T>,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    symmetric_mv(uplo, alpha, a, x, beta, y, true)
}

/// Symmetric band product; `a` holds the `uplo` band (see [`Banded::triangle`]).
pub fn sbmv<T: BlasScalar, Op: ElementOp<T>>(
    uplo: Uplo,
    alpha: T,
    a: &Banded<'_, T>,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    symmetric_mv(uplo, alpha, a, x, beta, y, false)
}

/// Hermitian band product.
pub fn hbmv<T: BlasScalar, Op: ElementOp<T>>(
    uplo: Uplo,
    alpha: T,
    a: &Banded<'_, T>,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    symmetric_mv(uplo, alpha, a, x, beta, y, true)
}

/// Symmetric packed product; the triangle comes from `ap`.
pub fn spmv<T: BlasScalar, Op: ElementOp<T>>(
    alpha: T,
    ap: &Packed<'_, T>,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    symmetric_mv(ap.uplo(), alpha, ap, x, beta, y, false)
}

/// Hermitian packed product.
pub fn hpmv<T: BlasScalar, Op: ElementOp<T>>(
    alpha: T,
    ap: &Packed<'_, T>,
    x: &StridedVec<'_, T, Op>,
    beta: T,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    symmetric_mv(ap.uplo(), alpha, ap, x, beta, y, true)
}

// ============================================================================
// Rank updates
// ============================================================================

#[inline]
fn conj_if<T: BlasScalar>(v: T, hermitian: bool) -> T {
    if hermitian {
        v.conj()
    } else {
        v
    }
}

#[inline]
fn store_triangle<T: BlasScalar, S: SourceMut<T>>(a: &mut S, i: usize, j: usize, v: T, hermitian: bool) {
    if hermitian && i == j {
        a.store(i, j, v.real_part());
    } else {
        a.store(i, j, v);
    }
}

/// `A := alpha * x * x' + A` over the `uplo` triangle, `x' = x^T | x^H`.
fn rank1<T, S, Op>(
    uplo: Uplo,
    alpha: T,
    x: &StridedVec<'_, T, Op>,
    a: &mut S,
    hermitian: bool,
) -> Result<()>
where
    T: BlasScalar,
    S: SourceMut<T>,
    Op: ElementOp<T>,
{
    let n = check_square("a", a.rows(), a.cols())?;
    check_dim("x", n, x.len())?;
    if alpha == T::zero() {
        return Ok(());
    }
    for j in 0..n {
        let axj = alpha * conj_if(x.get(j), hermitian);
        for i in triangle_rows(uplo, n, j) {
            let v = a.at(i, j) + x.get(i) * axj;
            store_triangle(a, i, j, v, hermitian);
        }
    }
    Ok(())
}

/// `A := alpha * x * y' + alpha' * y * x' + A` over the `uplo` triangle.
fn rank2<T, S, OpX, OpY>(
    uplo: Uplo,
    alpha: T,
    x: &StridedVec<'_, T, OpX>,
    y: &StridedVec<'_, T, OpY>,
    a: &mut S,
    hermitian: bool,
) -> Result<()>
where
    T: BlasScalar,
    S: SourceMut<T>,
    OpX: ElementOp<T>,
    OpY: ElementOp<T>,
{
    let n = check_square("a", a.rows(), a.cols())?;
    check_dim("x", n, x.len())?;
    check_dim("y", n, y.len())?;
    if alpha == T::zero() {
        return Ok(());
    }
    let alpha2 = conj_if(alpha, hermitian);
    for j in 0..n {
        let ayj = alpha * conj_if(y.get(j), hermitian);
        let axj = alpha2 * conj_if(x.get(j), hermitian);
        for i in triangle_rows(uplo, n, j) {
            let v = a.at(i, j) + x.get(i) * ayj + y.get(i) * axj;
            store_triangle(a, i, j, v, hermitian);
        }
    }
    Ok(())
}

/// `A := alpha * x * x^T + A`, `A` symmetric (dense, `uplo` triangle).
pub fn syr<T: BlasScalar, Op: ElementOp<T>>(
    uplo: Uplo,
    alpha: T,
    x: &StridedVec<'_, T, Op>,
    a: &mut DenseMut<'_, T>,
) -> Result<()> {
    rank1(uplo, alpha, x, a, false)
}

/// `A := alpha * x * x^H + A` with a real `alpha`, `A` hermitian.
pub fn her<T: BlasScalar, Op: ElementOp<T>>(
    uplo: Uplo,
    alpha: T::Real,
    x: &StridedVec<'_, T, Op>,
    a: &mut DenseMut<'_, T>,
) -> Result<()> {
    rank1(uplo, T::from_real(alpha), x, a, true)
}

/// Packed form of [`syr`].
pub fn spr<T: BlasScalar, Op: ElementOp<T>>(
    alpha: T,
    x: &StridedVec<'_, T, Op>,
    ap: &mut PackedMut<'_, T>,
) -> Result<()> {
    rank1(ap.uplo(), alpha, x, ap, false)
}

/// Packed form of [`her`].
pub fn hpr<T: BlasScalar, Op: ElementOp<T>>(
    alpha: T::Real,
    x: &StridedVec<'_, T, Op>,
    ap: &mut PackedMut<'_, T>,
) -> Result<()> {
    rank1(ap.uplo(), T::from_real(alpha), x, ap, true)
}

/// `A := alpha * x * y^T + alpha * y * x^T + A`, `A` symmetric.
pub fn syr2<T: BlasScalar, OpX: ElementOp<T>, OpY: ElementOp<T>>(
    uplo: Uplo,
    alpha: T,
    x: &StridedVec<'_, T, OpX>,
    y: &StridedVec<'_, T, OpY>,
    a: &mut DenseMut<'_, T>,
) -> Result<()> {
    rank2(uplo, alpha, x, y, a, false)
}

/// `A := alpha * x * y^H + conj(alpha) * y * x^H + A`, `A` hermitian.
pub fn her2<T: BlasScalar, OpX: ElementOp<T>, OpY: ElementOp<T>>(
    uplo: Uplo,
    alpha: T,
    x: &StridedVec<'_, T, OpX>,
    y: &StridedVec<'_, T, OpY>,
    a: &mut DenseMut<'_, T>,
) -> Result<()> {
    rank2(uplo, alpha, x, y, a, true)
}

/// Packed form of [`syr2`].
pub fn spr2<T: BlasScalar, OpX: ElementOp<T>, OpY: ElementOp<T>>(
    alpha: T,
    x: &StridedVec<'_, T, OpX>,
    y: &StridedVec<'_, T, OpY>,
    ap: &mut PackedMut<'_, T>,
) -> Result<()> {
    rank2(ap.uplo(), alpha, x, y, ap, false)
}

/// Packed form of [`her2`].
pub fn hpr2<T: BlasScalar, OpX: ElementOp<T>, OpY: ElementOp<T>>(
    alpha: T,
    x: &StridedVec<'_, T, OpX>,
    y: &StridedVec<'_, T, OpY>,
    ap: &mut PackedMut<'_, T>,
) -> Result<()> {
    rank2(ap.uplo(), alpha, x, y, ap, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlasError;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    // [[1, 2, 3], [2, 4, 5], [3, 5, 6]]
    const UPPER: [f64; 9] = [1.0, f64::NAN, f64::NAN, 2.0, 4.0, f64::NAN, 3.0, 5.0, 6.0];
    const PACKED_UPPER: [f64; 6] = [1.0, 2.0, 4.0, 3.0, 5.0, 6.0];
    const PACKED_LOWER: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    #[test]
    fn test_symv_reads_only_referenced_triangle() {
        let a = Dense::new(&UPPER, 3, 3, 3).unwrap();
        let x = [1.0, 1.0, 1.0];
        let mut y = [0.0; 3];
        symv(
            Uplo::Upper,
            1.0,
            &a,
            &StridedVec::contiguous(&x),
            0.0,
            &mut StridedVecMut::contiguous(&mut y),
        )
        .unwrap();
        assert_eq!(y, [6.0, 11.0, 14.0]);
    }

    #[test]
    fn test_spmv_matches_symv() {
        let x = [1.0, -2.0, 0.5];
        let dense = Dense::new(&UPPER, 3, 3, 3).unwrap();
        let mut expected = [0.0; 3];
        symv(
            Uplo::Upper,
            2.0,
            &dense,
            &StridedVec::contiguous(&x),
            0.0,
            &mut StridedVecMut::contiguous(&mut expected),
        )
        .unwrap();

        for (data, uplo) in [(PACKED_UPPER, Uplo::Upper), (PACKED_LOWER, Uplo::Lower)] {
            let ap = Packed::new(&data, 3, uplo).unwrap();
            let mut y = [0.0; 3];
            spmv(
                2.0,
                &ap,
                &StridedVec::contiguous(&x),
                0.0,
                &mut StridedVecMut::contiguous(&mut y),
            )
            .unwrap();
            assert_eq!(y, expected);
        }
    }

    #[test]
    fn test_sbmv_matches_symv() {
        // band of [[1, 2, 3], [2, 4, 5], [3, 5, 6]] with k = 2, upper storage
        let band = [0.0, 0.0, 1.0, 0.0, 2.0, 4.0, 3.0, 5.0, 6.0];
        let a = Banded::triangle(&band, 3, 2, Uplo::Upper, 3).unwrap();
        let x = [1.0, 1.0, 1.0];
        let mut y = [0.0; 3];
        sbmv(
            Uplo::Upper,
            1.0,
            &a,
            &StridedVec::contiguous(&x),
            0.0,
            &mut StridedVecMut::contiguous(&mut y),
        )
        .unwrap();
        assert_eq!(y, [6.0, 11.0, 14.0]);
    }

    #[test]
    fn test_hemv_conjugates_mirror() {
        // [[2, 1 - i], [1 + i, 3]] stored lower; diagonal imag must be ignored
        let a = [c(2.0, 9.0), c(1.0, 1.0), c(f64::NAN, f64::NAN), c(3.0, -9.0)];
        let a = Dense::new(&a, 2, 2, 2).unwrap();
        let x = [c(1.0, 0.0), c(0.0, 1.0)];
        let mut y = [c(0.0, 0.0); 2];
        hemv(
            Uplo::Lower,
            c(1.0, 0.0),
            &a,
            &StridedVec::contiguous(&x),
            c(0.0, 0.0),
            &mut StridedVecMut::contiguous(&mut y),
        )
        .unwrap();
        // row 0: 2 + (1 - i) i = 3 + i; row 1: (1 + i) + 3i = 1 + 4i
        assert_eq!(y, [c(3.0, 1.0), c(1.0, 4.0)]);
    }

    #[test]
    fn test_hbmv_matches_hemv() {
        // lower band, k = 1, of [[2, 1 - i], [1 + i, 3]]
        let band = [c(2.0, 0.0), c(1.0, 1.0), c(3.0, 0.0), c(0.0, 0.0)];
        let a = Banded::triangle(&band, 2, 1, Uplo::Lower, 2).unwrap();
        let x = [c(1.0, 0.0), c(0.0, 1.0)];
        let mut y = [c(0.0, 0.0); 2];
        hbmv(
            Uplo::Lower,
            c(1.0, 0.0),
            &a,
            &StridedVec::contiguous(&x),
            c(0.0, 0.0),
            &mut StridedVecMut::contiguous(&mut y),
        )
        .unwrap();
        assert_eq!(y, [c(3.0, 1.0), c(1.0, 4.0)]);
    }

    #[test]
    fn test_syr_updates_triangle_only() {
        let mut a = [0.0; 4];
        let x = [1.0, 2.0];
        {
            let mut am = DenseMut::new(&mut a, 2, 2, 2).unwrap();
            syr(Uplo::Upper, 1.0, &StridedVec::contiguous(&x), &mut am).unwrap();
        }
        assert_eq!(a, [1.0, 0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_spr_matches_syr() {
        let x = [1.0, -1.0, 2.0];
        let mut dense = [0.0; 9];
        {
            let mut am = DenseMut::new(&mut dense, 3, 3, 3).unwrap();
            syr(Uplo::Lower, 0.5, &StridedVec::contiguous(&x), &mut am).unwrap();
        }
        let mut packed = [0.0; 6];
        {
            let mut ap = PackedMut::new(&mut packed, 3, Uplo::Lower).unwrap();
            spr(0.5, &StridedVec::contiguous(&x), &mut ap).unwrap();
        }
        // lower packed: (0,0) (1,0) (2,0) (1,1) (2,1) (2,2)
        assert_eq!(
            packed,
            [dense[0], dense[1], dense[2], dense[4], dense[5], dense[8]]
        );
    }

    #[test]
    fn test_her_forces_real_diagonal() {
        let mut a = [c(1.0, 5.0), c(0.0, 0.0), c(0.0, 0.0), c(2.0, -3.0)];
        let x = [c(1.0, 1.0), c(0.0, 2.0)];
        {
            let mut am = DenseMut::new(&mut a, 2, 2, 2).unwrap();
            her(Uplo::Upper, 1.0, &StridedVec::contiguous(&x), &mut am).unwrap();
        }
        // |x0|^2 = 2, |x1|^2 = 4, x0 conj(x1) = (1 + i)(-2i) = 2 - 2i
        assert_eq!(a[0], c(3.0, 0.0));
        assert_eq!(a[2], c(2.0, -2.0));
        assert_eq!(a[3], c(6.0, 0.0));
        assert_eq!(a[1], c(0.0, 0.0));
    }

    #[test]
    fn test_hpr2_matches_her2() {
        let x = [c(1.0, -1.0), c(0.5, 2.0)];
        let y = [c(-2.0, 0.0), c(1.0, 1.0)];
        let alpha = c(0.5, -1.5);
        let mut dense = [c(0.0, 0.0); 4];
        {
            let mut am = DenseMut::new(&mut dense, 2, 2, 2).unwrap();
            her2(
                Uplo::Upper,
                alpha,
                &StridedVec::contiguous(&x),
                &StridedVec::contiguous(&y),
                &mut am,
            )
            .unwrap();
        }
        let mut packed = [c(0.0, 0.0); 3];
        {
            let mut ap = PackedMut::new(&mut packed, 2, Uplo::Upper).unwrap();
            hpr2(
                alpha,
                &StridedVec::contiguous(&x),
                &StridedVec::contiguous(&y),
                &mut ap,
            )
            .unwrap();
        }
        assert_eq!(packed, [dense[0], dense[2], dense[3]]);
        assert_eq!(dense[0].im, 0.0);
        assert_eq!(dense[3].im, 0.0);
        // A(0,1) = alpha x0 conj(y1) + conj(alpha) y0 conj(x1)
        let expected = alpha * x[0] * y[1].conj() + alpha.conj() * y[0] * x[1].conj();
        assert_relative_eq!(dense[2].re, expected.re, epsilon = 1e-12);
        assert_relative_eq!(dense[2].im, expected.im, epsilon = 1e-12);
    }

    #[test]
    fn test_syr2_and_spr2_agree() {
        let x = [1.0, 2.0, 3.0];
        let y = [0.5, -1.0, 4.0];
        let mut dense = [0.0; 9];
        {
            let mut am = DenseMut::new(&mut dense, 3, 3, 3).unwrap();
            syr2(
                Uplo::Upper,
                2.0,
                &StridedVec::contiguous(&x),
                &StridedVec::contiguous(&y),
                &mut am,
            )
            .unwrap();
        }
        let mut packed = [0.0; 6];
        {
            let mut ap = PackedMut::new(&mut packed, 3, Uplo::Upper).unwrap();
            spr2(
                2.0,
                &StridedVec::contiguous(&x),
                &StridedVec::contiguous(&y),
                &mut ap,
            )
            .unwrap();
        }
        // upper packed: (0,0) (0,1) (1,1) (0,2) (1,2) (2,2)
        assert_eq!(
            packed,
            [dense[0], dense[3], dense[4], dense[6], dense[7], dense[8]]
        );
        // A(0,2) = 2 * (x0 y2 + y0 x2) = 2 * (4 + 1.5)
        assert_eq!(dense[6], 11.0);
    }

    #[test]
    fn test_non_square_rejected() {
        let a = [0.0; 6];
        let a = Dense::new(&a, 2, 3, 2).unwrap();
        let x = [0.0; 3];
        let mut y = [0.0; 2];
        let err = symv(
            Uplo::Upper,
            1.0,
            &a,
            &StridedVec::contiguous(&x),
            0.0,
            &mut StridedVecMut::contiguous(&mut y),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BlasError::NonSquare {
                arg: "a",
                rows: 2,
                cols: 3
            }
        );
    }
}
