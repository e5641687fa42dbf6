//! Matrix storage layouts.
//!
//! All layouts are column-major. For a buffer `data` with leading dimension `ld`:
//!
//! | Layout | Element `(i, j)` | Stored region |
//! |--------|------------------|---------------|
//! | Dense  | `j * ld + i` | all `rows x cols` |
//! | Banded | `(ku + i - j) + j * ld` | `j - ku <= i <= j + kl` |
//! | Packed upper | `i + j * (j + 1) / 2` | `i <= j` |
//! | Packed lower | `i + j * (2n - j - 1) / 2` | `i >= j` |
//!
//! Symmetric, hermitian and triangular band matrices with `k` off-diagonals
//! are `Banded` with `(kl, ku) = (0, k)` for the upper triangle and `(k, 0)`
//! for the lower one.

use num_traits::Zero;

use crate::modifier::Uplo;
use crate::view::{StridedVec, StridedVecMut};
use crate::{BlasError, Result};

// ============================================================================
// Validation helpers
// ============================================================================

fn check_ld(arg: &'static str, ld: usize, min: usize) -> Result<()> {
    if ld < min {
        return Err(BlasError::LeadingDimension { arg, ld, min });
    }
    Ok(())
}

fn check_len(arg: &'static str, len: usize, required: usize) -> Result<()> {
    if len < required {
        return Err(BlasError::BufferTooShort { arg, len, required });
    }
    Ok(())
}

/// Buffer length a dense `rows x cols` matrix with leading dimension `ld` spans.
pub fn dense_required_len(rows: usize, cols: usize, ld: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    (cols - 1)
        .checked_mul(ld)
        .and_then(|v| v.checked_add(rows))
        .ok_or(BlasError::OffsetOverflow)
}

/// Validate a dense matrix: `ld >= max(1, rows)` and the buffer holds every column.
pub fn validate_dense(
    arg: &'static str,
    len: usize,
    rows: usize,
    cols: usize,
    ld: usize,
) -> Result<()> {
    check_ld(arg, ld, rows.max(1))?;
    check_len(arg, len, dense_required_len(rows, cols, ld)?)
}

/// Number of elements in a packed `n x n` triangle.
#[inline]
pub fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Offset of `(i, j)` in a packed triangle of order `n`.
///
/// `(i, j)` must lie in the `uplo` triangle.
#[inline]
pub fn packed_index(uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
    debug_assert!(uplo.contains(i, j) && i < n);
    match uplo {
        Uplo::Upper => i + j * (j + 1) / 2,
        Uplo::Lower => i + j * (2 * n - j - 1) / 2,
    }
}

// ============================================================================
// Dense
// ============================================================================

/// Read-only dense column-major matrix.
#[derive(Debug, Clone, Copy)]
pub struct Dense<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a, T> Dense<'a, T> {
    /// Wrap `data` as a `rows x cols` matrix with leading dimension `ld`.
    ///
    /// # Errors
    /// [`BlasError::LeadingDimension`] if `ld < max(1, rows)`,
    /// [`BlasError::BufferTooShort`] if the last column does not fit.
    pub fn new(data: &'a [T], rows: usize, cols: usize, ld: usize) -> Result<Self> {
        Self::new_named("a", data, rows, cols, ld)
    }

    pub fn new_named(
        arg: &'static str,
        data: &'a [T],
        rows: usize,
        cols: usize,
        ld: usize,
    ) -> Result<Self> {
        validate_dense(arg, data.len(), rows, cols, ld)?;
        Ok(Self {
            data,
            rows,
            cols,
            ld,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn ld(&self) -> usize {
        self.ld
    }
}

impl<'a, T: Copy> Dense<'a, T> {
    /// Element `(i, j)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.data[j * self.ld + i]
    }

    /// Column `j` as a strided vector.
    pub fn col(&self, j: usize) -> StridedVec<'a, T> {
        assert!(j < self.cols, "column out of bounds");
        StridedVec::contiguous(&self.data[j * self.ld..j * self.ld + self.rows])
    }
}

/// Mutable dense column-major matrix.
#[derive(Debug)]
pub struct DenseMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a, T> DenseMut<'a, T> {
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, ld: usize) -> Result<Self> {
        Self::new_named("c", data, rows, cols, ld)
    }

    pub fn new_named(
        arg: &'static str,
        data: &'a mut [T],
        rows: usize,
        cols: usize,
        ld: usize,
    ) -> Result<Self> {
        validate_dense(arg, data.len(), rows, cols, ld)?;
        Ok(Self {
            data,
            rows,
            cols,
            ld,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn ld(&self) -> usize {
        self.ld
    }

    /// Read-only view of the same matrix.
    pub fn as_dense(&self) -> Dense<'_, T> {
        Dense {
            data: &*self.data,
            rows: self.rows,
            cols: self.cols,
            ld: self.ld,
        }
    }

    /// Column `j` as a mutable strided vector.
    pub fn col_mut(&mut self, j: usize) -> StridedVecMut<'_, T> {
        assert!(j < self.cols, "column out of bounds");
        let start = j * self.ld;
        StridedVecMut::from_parts(&mut self.data[start..start + self.rows], self.rows, 1)
    }

    /// Row `i` as a mutable strided vector with increment `ld`.
    pub fn row_mut(&mut self, i: usize) -> StridedVecMut<'_, T> {
        assert!(i < self.rows, "row out of bounds");
        let ld = self.ld as isize;
        StridedVecMut::from_parts(&mut self.data[i..], self.cols, ld)
    }

    /// The raw buffer, for splitting into columns.
    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<'a, T: Copy> DenseMut<'a, T> {
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.data[j * self.ld + i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.data[j * self.ld + i] = value;
    }
}

// ============================================================================
// Banded
// ============================================================================

/// Band matrix with `kl` sub-diagonals and `ku` super-diagonals.
///
/// Column `j` of the band occupies rows `max(0, j - ku) ..= min(rows - 1, j + kl)`
/// of the full matrix and is stored at `data[j * ld + ku + i - j]`.
#[derive(Debug, Clone, Copy)]
pub struct Banded<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    kl: usize,
    ku: usize,
    ld: usize,
}

impl<'a, T> Banded<'a, T> {
    /// # Errors
    /// [`BlasError::LeadingDimension`] if `ld < kl + ku + 1`,
    /// [`BlasError::BufferTooShort`] if the last stored band element does not fit.
    pub fn new(
        data: &'a [T],
        rows: usize,
        cols: usize,
        kl: usize,
        ku: usize,
        ld: usize,
    ) -> Result<Self> {
        let band = kl
            .checked_add(ku)
            .and_then(|v| v.checked_add(1))
            .ok_or(BlasError::OffsetOverflow)?;
        check_ld("a", ld, band)?;
        check_len("a", data.len(), banded_required_len(rows, cols, kl, ku, ld)?)?;
        Ok(Self {
            data,
            rows,
            cols,
            kl,
            ku,
            ld,
        })
    }

    /// Symmetric, hermitian or triangular band of order `n` with `k`
    /// off-diagonals stored in the `uplo` triangle.
    pub fn triangle(data: &'a [T], n: usize, k: usize, uplo: Uplo, ld: usize) -> Result<Self> {
        match uplo {
            Uplo::Upper => Self::new(data, n, n, 0, k, ld),
            Uplo::Lower => Self::new(data, n, n, k, 0, ld),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn kl(&self) -> usize {
        self.kl
    }

    #[inline]
    pub fn ku(&self) -> usize {
        self.ku
    }

    /// Whether `(i, j)` lies inside the band.
    #[inline]
    pub fn in_band(&self, i: usize, j: usize) -> bool {
        i + self.ku >= j && i <= j + self.kl
    }
}

impl<'a, T: Copy + Zero> Banded<'a, T> {
    /// Element `(i, j)`, zero outside the band.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        if self.in_band(i, j) {
            self.data[j * self.ld + self.ku + i - j]
        } else {
            T::zero()
        }
    }
}

fn banded_required_len(
    rows: usize,
    cols: usize,
    kl: usize,
    ku: usize,
    ld: usize,
) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    // Last column that still intersects the band.
    let last_col = (cols - 1).min(rows - 1 + ku);
    let last_row = (rows - 1).min(last_col + kl);
    last_col
        .checked_mul(ld)
        .and_then(|v| v.checked_add(ku + last_row + 1 - last_col))
        .ok_or(BlasError::OffsetOverflow)
}

// ============================================================================
// Packed
// ============================================================================

fn validate_packed(arg: &'static str, len: usize, n: usize) -> Result<()> {
    let expected = packed_len(n);
    if len != expected {
        return Err(BlasError::PackedLength { arg, len, expected });
    }
    Ok(())
}

/// Read-only packed triangle of order `n`.
#[derive(Debug, Clone, Copy)]
pub struct Packed<'a, T> {
    data: &'a [T],
    n: usize,
    uplo: Uplo,
}

impl<'a, T> Packed<'a, T> {
    /// # Errors
    /// [`BlasError::PackedLength`] unless `data.len() == n * (n + 1) / 2`.
    pub fn new(data: &'a [T], n: usize, uplo: Uplo) -> Result<Self> {
        validate_packed("ap", data.len(), n)?;
        Ok(Self { data, n, uplo })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn uplo(&self) -> Uplo {
        self.uplo
    }
}

impl<'a, T: Copy> Packed<'a, T> {
    /// Element `(i, j)` of the stored triangle.
    ///
    /// # Panics
    /// Panics if `(i, j)` is outside the stored triangle.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(j < self.n && self.uplo.contains(i, j), "index outside packed triangle");
        self.data[packed_index(self.uplo, self.n, i, j)]
    }
}

/// Mutable packed triangle of order `n`.
#[derive(Debug)]
pub struct PackedMut<'a, T> {
    data: &'a mut [T],
    n: usize,
    uplo: Uplo,
}

impl<'a, T> PackedMut<'a, T> {
    pub fn new(data: &'a mut [T], n: usize, uplo: Uplo) -> Result<Self> {
        validate_packed("ap", data.len(), n)?;
        Ok(Self { data, n, uplo })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn uplo(&self) -> Uplo {
        self.uplo
    }
}

impl<'a, T: Copy> PackedMut<'a, T> {
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(j < self.n && self.uplo.contains(i, j), "index outside packed triangle");
        self.data[packed_index(self.uplo, self.n, i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(j < self.n && self.uplo.contains(i, j), "index outside packed triangle");
        let idx = packed_index(self.uplo, self.n, i, j);
        self.data[idx] = value;
    }
}
