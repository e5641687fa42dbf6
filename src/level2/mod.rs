//! Level 2: matrix-vector operations.
//!
//! - [`general`]: `gemv`, `gbmv`, `ger`, `gerc`
//! - [`symmetric`]: symmetric/hermitian products and rank updates
//! - [`triangular`]: triangular products and solves
//!
//! Every operation checks operand shapes against each other before touching
//! an element. Vectors are checked against the shape of `op(A)`: `x` against
//! its column count, `y` against its row count.

pub mod general;
pub mod symmetric;
pub mod triangular;

pub use general::{gbmv, gemv, ger, gerc};
pub use symmetric::{
    hbmv, hemv, her, her2, hpmv, hpr, hpr2, sbmv, spmv, spr, spr2, symv, syr, syr2,
};
pub use triangular::{tbmv, tbsv, tpmv, tpsv, trmv, trsv};

use crate::{BlasError, Result};

#[inline]
pub(crate) fn check_dim(arg: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(BlasError::DimensionMismatch {
            arg,
            expected,
            found,
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_square(arg: &'static str, rows: usize, cols: usize) -> Result<usize> {
    if rows != cols {
        return Err(BlasError::NonSquare { arg, rows, cols });
    }
    Ok(rows)
}
