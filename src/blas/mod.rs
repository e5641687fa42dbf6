//! Domain-prefixed BLAS routine catalog.
//!
//! Each routine takes raw slices with explicit dimensions, leading dimensions
//! and increments in the classic argument order (modifiers, dimensions,
//! `alpha`, inputs, `beta`, output), wraps them in validated views and calls
//! the generic implementation in [`crate::level1`], [`crate::level2`] or
//! [`crate::level3`]. Prefixes: `s` = `f32`, `d` = `f64`, `c` = `Complex32`,
//! `z` = `Complex64`.
//!
//! Rejected calls are reported as [`crate::BlasError`] and logged at `debug`
//! level through `tracing`; no buffer is modified in that case.

mod level1;
mod level2;
mod level3;

pub use level1::*;
pub use level2::*;
pub use level3::*;

use crate::storage::{Dense, DenseMut};
use crate::view::{StridedVec, StridedVecMut};
use crate::Result;

/// Pass `result` through, logging rejected calls.
#[inline]
fn traced<T>(routine: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        tracing::debug!(routine, error = %err, "BLAS call rejected");
    }
    result
}

#[inline]
fn vec_in<'a, T: Copy>(arg: &'static str, n: usize, data: &'a [T], inc: isize) -> Result<StridedVec<'a, T>> {
    StridedVec::new_named(arg, data, n, inc)
}

#[inline]
fn vec_out<'a, T>(
    arg: &'static str,
    n: usize,
    data: &'a mut [T],
    inc: isize,
) -> Result<StridedVecMut<'a, T>> {
    StridedVecMut::new_named(arg, data, n, inc)
}

#[inline]
fn mat_in<'a, T>(
    arg: &'static str,
    rows: usize,
    cols: usize,
    data: &'a [T],
    ld: usize,
) -> Result<Dense<'a, T>> {
    Dense::new_named(arg, data, rows, cols, ld)
}

#[inline]
fn mat_out<'a, T>(
    arg: &'static str,
    rows: usize,
    cols: usize,
    data: &'a mut [T],
    ld: usize,
) -> Result<DenseMut<'a, T>> {
    DenseMut::new_named(arg, data, rows, cols, ld)
}
