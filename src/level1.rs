//! Level 1: vector-vector operations over strided views.
//!
//! Two-operand operations require equal logical lengths and report
//! [`BlasError::DimensionMismatch`] against the second operand otherwise.
//! Length-zero operands are valid and leave everything untouched.

use num_traits::{Float, One, Zero};
use strided_blas_traits::{BlasScalar, RealScalar};

use crate::element_op::{ElementOp, Identity};
use crate::rotation::RotmParams;
use crate::view::{StridedVec, StridedVecMut};
use crate::{BlasError, Result};

#[inline]
fn check_same_len(arg: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(BlasError::DimensionMismatch {
            arg,
            expected,
            found,
        });
    }
    Ok(())
}

// ============================================================================
// Rotations
// ============================================================================

/// Apply a plane rotation: `x := c x + s y`, `y := c y - conj(s) x`.
pub fn rot<T: BlasScalar>(
    x: &mut StridedVecMut<'_, T>,
    y: &mut StridedVecMut<'_, T>,
    c: T::Real,
    s: T,
) -> Result<()> {
    check_same_len("y", x.len(), y.len())?;
    let s_conj = s.conj();
    for i in 0..x.len() {
        let (xi, yi) = (x.get(i), y.get(i));
        x.set(i, xi.scale_real(c) + s * yi);
        y.set(i, yi.scale_real(c) - s_conj * xi);
    }
    Ok(())
}

/// Apply a modified Givens transform `H` to the pairs `(x_i, y_i)`.
pub fn rotm<R: RealScalar>(
    x: &mut StridedVecMut<'_, R>,
    y: &mut StridedVecMut<'_, R>,
    params: &RotmParams<R>,
) -> Result<()> {
    check_same_len("y", x.len(), y.len())?;
    if let RotmParams::Identity = params {
        return Ok(());
    }
    let [[h11, h12], [h21, h22]] = params.matrix();
    for i in 0..x.len() {
        let (w, z) = (x.get(i), y.get(i));
        x.set(i, h11 * w + h12 * z);
        y.set(i, h21 * w + h22 * z);
    }
    Ok(())
}

// ============================================================================
// Copies and updates
// ============================================================================

/// Exchange the contents of `x` and `y`.
pub fn swap<T: BlasScalar>(x: &mut StridedVecMut<'_, T>, y: &mut StridedVecMut<'_, T>) -> Result<()> {
    check_same_len("y", x.len(), y.len())?;
    for i in 0..x.len() {
        let tmp = x.get(i);
        x.set(i, y.get(i));
        y.set(i, tmp);
    }
    Ok(())
}

/// `x := alpha * x`.
pub fn scal<T: BlasScalar>(alpha: T, x: &mut StridedVecMut<'_, T>) {
    for i in 0..x.len() {
        x.update(i, |v| alpha * v);
    }
}

/// `x := alpha * x` with a real `alpha` (`csscal`, `zdscal`).
pub fn scal_real<T: BlasScalar>(alpha: T::Real, x: &mut StridedVecMut<'_, T>) {
    for i in 0..x.len() {
        x.update(i, |v| v.scale_real(alpha));
    }
}

/// `y := x`.
pub fn copy<T: BlasScalar, Op: ElementOp<T>>(
    x: &StridedVec<'_, T, Op>,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    check_same_len("y", x.len(), y.len())?;
    for (i, v) in x.iter().enumerate() {
        y.set(i, v);
    }
    Ok(())
}

/// `y := alpha * x + y`. `x` is not read when `alpha == 0`.
pub fn axpy<T: BlasScalar, Op: ElementOp<T>>(
    alpha: T,
    x: &StridedVec<'_, T, Op>,
    y: &mut StridedVecMut<'_, T>,
) -> Result<()> {
    check_same_len("y", x.len(), y.len())?;
    if alpha == T::zero() {
        return Ok(());
    }
    for (i, v) in x.iter().enumerate() {
        y.update(i, |w| w + alpha * v);
    }
    Ok(())
}

// ============================================================================
// Reductions
// ============================================================================

/// Unconjugated dot product `sum x_i * y_i`.
///
/// Conjugation carried by the views is honored, so `dot(&x.conj(), &y)` is
/// the conjugated form.
pub fn dot<T, OpX, OpY>(x: &StridedVec<'_, T, OpX>, y: &StridedVec<'_, T, OpY>) -> Result<T>
where
    T: BlasScalar,
    OpX: ElementOp<T>,
    OpY: ElementOp<T>,
{
    check_same_len("y", x.len(), y.len())?;
    Ok(x.iter().zip(y.iter()).fold(T::zero(), |acc, (a, b)| acc + a * b))
}

/// Conjugated dot product `sum conj(x_i) * y_i`.
pub fn dotc<T: BlasScalar>(x: &StridedVec<'_, T, Identity>, y: &StridedVec<'_, T>) -> Result<T> {
    dot(&x.conj(), y)
}

/// Single-precision dot product accumulated in `f64`.
pub fn dsdot(x: &StridedVec<'_, f32>, y: &StridedVec<'_, f32>) -> Result<f64> {
    check_same_len("y", x.len(), y.len())?;
    Ok(x
        .iter()
        .zip(y.iter())
        .fold(0.0f64, |acc, (a, b)| acc + f64::from(a) * f64::from(b)))
}

/// `sb + sum x_i * y_i`, accumulated in `f64` and rounded once.
pub fn sdsdot(sb: f32, x: &StridedVec<'_, f32>, y: &StridedVec<'_, f32>) -> Result<f32> {
    Ok((f64::from(sb) + dsdot(x, y)?) as f32)
}

/// Euclidean norm, computed as `scale * sqrt(ssq)` so that intermediate
/// squares neither overflow nor underflow. Real and imaginary parts count as
/// separate components.
pub fn nrm2<T: BlasScalar, Op: ElementOp<T>>(x: &StridedVec<'_, T, Op>) -> T::Real {
    let zero = T::Real::zero();
    let mut scale = zero;
    let mut ssq = T::Real::one();
    let mut accumulate = |component: T::Real| {
        if component != zero {
            let a = component.abs();
            if scale < a {
                let r = scale / a;
                ssq = T::Real::one() + ssq * r * r;
                scale = a;
            } else {
                let r = a / scale;
                ssq = ssq + r * r;
            }
        }
    };
    for v in x.iter() {
        accumulate(v.re());
        if T::IS_COMPLEX {
            accumulate(v.im());
        }
    }
    scale * ssq.sqrt()
}

/// Sum of `|re| + |im|`.
pub fn asum<T: BlasScalar, Op: ElementOp<T>>(x: &StridedVec<'_, T, Op>) -> T::Real {
    x.iter().fold(T::Real::zero(), |acc, v| acc + v.abs1())
}

/// Logical index of the first element with the largest `|re| + |im|`.
///
/// Returns `None` for an empty vector. Only a strictly larger magnitude
/// replaces the running maximum, so a NaN at index 0 is returned and a NaN
/// anywhere else is never selected.
pub fn iamax<T: BlasScalar, Op: ElementOp<T>>(x: &StridedVec<'_, T, Op>) -> Option<usize> {
    let mut best: Option<(usize, T::Real)> = None;
    for (i, v) in x.iter().enumerate() {
        let m = v.abs1();
        let replace = match best {
            None => true,
            Some((_, b)) => m > b,
        };
        if replace {
            best = Some((i, m));
        }
    }
    best.map(|(i, _)| i)
}
