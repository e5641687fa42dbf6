//! Element-wise operations applied lazily when a strided vector is read.
//!
//! BLAS distinguishes unconjugated and conjugated variants of the same
//! routine (`dotu`/`dotc`, `geru`/`gerc`). Instead of duplicating the kernel,
//! the conjugation is carried at the type level on the operand view:
//! - `Identity`: no transformation
//! - `Conj`: complex conjugate (identity for real domains)
//!
//! The two operations form a group under composition (`Conj ∘ Conj = Identity`),
//! exposed through [`ComposableElementOp`].

use num_complex::Complex;
use num_traits::Num;

// ---------------------------------------------------------------------------
// ElementOpApply: trait for types that support conjugation
// ---------------------------------------------------------------------------

/// Trait for types that support complex conjugation.
///
/// The default implementation returns `self` unchanged, so real-valued types
/// only need an empty impl:
/// ```ignore
/// impl ElementOpApply for MyReal {}
/// ```
pub trait ElementOpApply: Copy {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

macro_rules! impl_element_op_apply_real {
    ($($t:ty),*) => {
        $(impl ElementOpApply for $t {})*
    };
}

impl_element_op_apply_real!(f32, f64);

impl<T: Num + Copy + Clone + std::ops::Neg<Output = T>> ElementOpApply for Complex<T> {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

// ---------------------------------------------------------------------------
// Marker types
// ---------------------------------------------------------------------------

/// Identity operation: f(x) = x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Complex conjugate operation: f(x) = conj(x)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conj;

// ---------------------------------------------------------------------------
// ElementOp<T>
// ---------------------------------------------------------------------------

/// Operation applied to every element read through a view.
///
/// `Identity` implements this for any `T: Copy`; `Conj` requires
/// `T: ElementOpApply`.
pub trait ElementOp<T>: Copy + Default + 'static {
    /// Whether this operation is the identity (no-op).
    const IS_IDENTITY: bool = false;

    /// Apply the operation to a value.
    fn apply(value: T) -> T;
}

impl<T: Copy> ElementOp<T> for Identity {
    const IS_IDENTITY: bool = true;

    #[inline(always)]
    fn apply(value: T) -> T {
        value
    }
}

impl<T: ElementOpApply> ElementOp<T> for Conj {
    #[inline(always)]
    fn apply(value: T) -> T {
        value.conj()
    }
}

// ---------------------------------------------------------------------------
// ComposableElementOp<T>
// ---------------------------------------------------------------------------

/// Element operations that can be composed with a further conjugation.
pub trait ComposableElementOp<T: ElementOpApply>: ElementOp<T> {
    /// Self then Conj.
    type ComposeConj: ComposableElementOp<T>;
}

impl<T: ElementOpApply> ComposableElementOp<T> for Identity {
    type ComposeConj = Conj;
}

impl<T: ElementOpApply> ComposableElementOp<T> for Conj {
    type ComposeConj = Identity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_identity() {
        let x = Complex64::new(3.0, 4.0);
        assert_eq!(<Identity as ElementOp<Complex64>>::apply(x), x);
    }

    #[test]
    fn test_conj() {
        let x = Complex32::new(3.0, 4.0);
        assert_eq!(
            <Conj as ElementOp<Complex32>>::apply(x),
            Complex32::new(3.0, -4.0)
        );
    }

    #[test]
    fn test_conj_real_is_identity() {
        assert_eq!(<Conj as ElementOp<f64>>::apply(-3.5), -3.5);
        assert_eq!(<Conj as ElementOp<f32>>::apply(2.0), 2.0);
    }

    #[test]
    fn test_composition() {
        fn assert_same<A: 'static, B: 'static>() {
            assert_eq!(std::any::TypeId::of::<A>(), std::any::TypeId::of::<B>());
        }

        assert_same::<<Identity as ComposableElementOp<Complex64>>::ComposeConj, Conj>();
        assert_same::<<Conj as ComposableElementOp<Complex64>>::ComposeConj, Identity>();
    }

    #[test]
    fn test_is_identity_flag() {
        assert!(<Identity as ElementOp<f64>>::IS_IDENTITY);
        assert!(!<Conj as ElementOp<f64>>::IS_IDENTITY);
    }
}
