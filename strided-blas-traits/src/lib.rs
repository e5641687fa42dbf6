//! Shared traits for the strided-blas workspace.
//!
//! This crate holds the numeric-domain abstraction and the lazy element
//! operations that both the routine catalog and external kernel crates
//! implement against. Kernel crates can depend on `strided-blas-traits`
//! alone to implement these traits for their own types without orphan rule
//! violations.

pub mod element_op;
pub mod scalar;

pub use element_op::{ComposableElementOp, Conj, ElementOp, ElementOpApply, Identity};
pub use scalar::{BlasScalar, RealScalar};
