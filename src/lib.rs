//! A strided BLAS contract over four numeric domains.
//!
//! This crate fixes the observable behavior of the classic BLAS routine set
//! (Level 1 vector-vector, Level 2 matrix-vector, Level 3 matrix-matrix) for
//! `f32`, `f64`, `Complex32` and `Complex64`, and ships reference kernels that
//! honor it. Every routine is written once, generically over
//! [`BlasScalar`], and instantiated per domain.
//!
//! # Core Types
//!
//! - [`StridedVec`] / [`StridedVecMut`]: vectors over a buffer with a signed increment
//! - [`Dense`] / [`DenseMut`], [`Banded`], [`Packed`] / [`PackedMut`]: column-major
//!   matrix storage layouts
//! - [`Transpose`], [`Uplo`], [`Diag`], [`Side`]: closed modifier enums
//! - [`ElementOp`] ([`Identity`], [`Conj`]): conjugation carried on a vector view
//!
//! # Layers
//!
//! - [`level1`], [`level2`], [`level3`]: generic operations over views
//! - [`blas`]: the domain-prefixed routine catalog (`sdot`, `zgemv`, `ctrsm`, ...)
//!   taking raw slices, dimensions and increments
//!
//! # Example
//!
//! ```rust
//! use strided_blas::blas::{dgemv, dnrm2};
//! use strided_blas::Transpose;
//!
//! // 2x2 identity, column-major
//! let a = [1.0, 0.0, 0.0, 1.0];
//! let x = [5.0, 6.0];
//! let mut y = [0.0; 2];
//! dgemv(Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap();
//! assert_eq!(y, [5.0, 6.0]);
//!
//! assert_eq!(dnrm2(2, &[3.0, 4.0], 1).unwrap(), 5.0);
//! ```
//!
//! # Conventions
//!
//! - Matrices are column-major: element `(i, j)` lives at `j * ld + i`.
//! - A negative increment walks the vector backward from the end of the
//!   referenced region, so logical element `0` is the last stored one.
//! - `beta == 0` never reads the output operand; `alpha == 0` never reads the
//!   inputs it scales.
//! - Every argument is validated before any element is written.

pub mod blas;
mod element_op;
mod kernel;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod modifier;
pub mod rotation;
pub mod storage;
pub mod view;

// ============================================================================
// Scalar domains and element operations
// ============================================================================
pub use element_op::{ComposableElementOp, Conj, ElementOp, ElementOpApply, Identity};
pub use strided_blas_traits::{BlasScalar, RealScalar};

// ============================================================================
// Storage, views and modifiers
// ============================================================================
pub use modifier::{Diag, Side, Transpose, Uplo};
pub use rotation::{GivensRotation, Rotg, RotmParams};
pub use storage::{Banded, Dense, DenseMut, Packed, PackedMut};
pub use view::{StridedVec, StridedVecMut};

// ============================================================================
// Configuration
// ============================================================================

/// Minimum `m * n * k` of a `gemm` call before the `parallel` feature splits
/// the columns of `C` across the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 64 * 64 * 64;

// ============================================================================
// Error types
// ============================================================================

/// Argument violations detected before a routine touches memory.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlasError {
    /// A modifier code outside its closed domain.
    #[error("invalid {kind} code {code:?}")]
    InvalidModifier { kind: &'static str, code: char },

    /// A modified Givens flag outside `-2, -1, 0, 1`.
    #[error("invalid rotm flag {flag}")]
    InvalidRotmFlag { flag: f64 },

    /// Zero increment on a vector that is written to.
    #[error("increment of {arg} must be non-zero")]
    ZeroIncrement { arg: &'static str },

    /// The buffer cannot hold the elements implied by shape and stride.
    #[error("buffer {arg} too short: len {len}, required {required}")]
    BufferTooShort {
        arg: &'static str,
        len: usize,
        required: usize,
    },

    /// Leading dimension smaller than the layout requires.
    #[error("leading dimension of {arg} is {ld}, must be at least {min}")]
    LeadingDimension {
        arg: &'static str,
        ld: usize,
        min: usize,
    },

    /// Packed buffer whose length is not `n * (n + 1) / 2`.
    #[error("packed buffer {arg} has len {len}, expected {expected}")]
    PackedLength {
        arg: &'static str,
        len: usize,
        expected: usize,
    },

    /// Operand sizes that do not agree with each other.
    #[error("dimension mismatch for {arg}: expected {expected}, found {found}")]
    DimensionMismatch {
        arg: &'static str,
        expected: usize,
        found: usize,
    },

    /// Matrix is not square when a square matrix was required.
    #[error("non-square matrix {arg}: rows={rows}, cols={cols}")]
    NonSquare {
        arg: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Transpose mode the routine does not define.
    #[error("{routine} does not accept transpose mode {trans}")]
    UnsupportedTranspose {
        routine: &'static str,
        trans: Transpose,
    },

    /// Integer overflow while computing a buffer offset.
    #[error("offset overflow while computing buffer extent")]
    OffsetOverflow,
}

/// Result type for BLAS routines.
pub type Result<T> = std::result::Result<T, BlasError>;
