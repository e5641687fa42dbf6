//! Element-wise operations applied lazily to strided vectors.
//!
//! Re-exported from [`strided_blas_traits`]. See that crate for full documentation.

pub use strided_blas_traits::element_op::{
    ComposableElementOp, Conj, ElementOp, ElementOpApply, Identity,
};
