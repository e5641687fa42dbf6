//! Strided vector views.
//!
//! A logical vector of length `n` lives in a buffer at a fixed increment:
//! - `inc > 0`: element `i` is at offset `i * inc`
//! - `inc < 0`: element `i` is at offset `(n - 1 - i) * |inc|`, i.e. the
//!   vector is traversed from the end of the referenced region backward
//! - `inc == 0`: every element is slot `0` (read-only views only)
//!
//! A view of length zero is valid for any increment and buffer.

use crate::element_op::{ComposableElementOp, ElementOp, ElementOpApply, Identity};
use crate::{BlasError, Result};
use std::marker::PhantomData;

/// Number of buffer elements a vector of `len` elements at `inc` spans.
pub fn required_len(len: usize, inc: isize) -> Result<usize> {
    if len == 0 {
        return Ok(0);
    }
    (len - 1)
        .checked_mul(inc.unsigned_abs())
        .and_then(|span| span.checked_add(1))
        .ok_or(BlasError::OffsetOverflow)
}

fn validate_extent(arg: &'static str, data_len: usize, len: usize, inc: isize) -> Result<()> {
    let required = required_len(len, inc)?;
    if data_len < required {
        return Err(BlasError::BufferTooShort {
            arg,
            len: data_len,
            required,
        });
    }
    Ok(())
}

#[inline(always)]
fn element_offset(len: usize, inc: isize, i: usize) -> usize {
    if inc >= 0 {
        i * inc as usize
    } else {
        (len - 1 - i) * inc.unsigned_abs()
    }
}

/// An immutable strided vector.
///
/// # Type Parameters
/// - `'a`: Lifetime of the underlying data
/// - `T`: Element type
/// - `Op`: Element operation applied lazily on access (default: Identity)
///
/// # Example
/// ```rust
/// use strided_blas::StridedVec;
///
/// // [1, -7, 3] stored in reverse
/// let data = [3.0, -7.0, 1.0];
/// let x = StridedVec::new(&data, 3, -1).unwrap();
/// assert_eq!(x.get(0), 1.0);
/// assert_eq!(x.get(2), 3.0);
/// ```
#[derive(Debug)]
pub struct StridedVec<'a, T, Op: ElementOp<T> = Identity> {
    data: &'a [T],
    len: usize,
    inc: isize,
    _op: PhantomData<Op>,
}

impl<T, Op: ElementOp<T>> Clone for StridedVec<'_, T, Op> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, Op: ElementOp<T>> Copy for StridedVec<'_, T, Op> {}

impl<'a, T: Copy> StridedVec<'a, T, Identity> {
    /// Create a new strided vector.
    ///
    /// # Errors
    /// Returns [`BlasError::BufferTooShort`] if the view would reach past the
    /// end of `data`.
    pub fn new(data: &'a [T], len: usize, inc: isize) -> Result<Self> {
        Self::new_named("x", data, len, inc)
    }

    /// Like [`StridedVec::new`], reporting errors against argument `arg`.
    pub fn new_named(arg: &'static str, data: &'a [T], len: usize, inc: isize) -> Result<Self> {
        validate_extent(arg, data.len(), len, inc)?;
        Ok(Self {
            data,
            len,
            inc,
            _op: PhantomData,
        })
    }

    /// Contiguous view over a whole slice.
    pub fn contiguous(data: &'a [T]) -> Self {
        Self {
            data,
            len: data.len(),
            inc: 1,
            _op: PhantomData,
        }
    }
}

impl<'a, T, Op: ElementOp<T>> StridedVec<'a, T, Op> {
    /// Returns the logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the increment.
    #[inline]
    pub fn inc(&self) -> isize {
        self.inc
    }

    /// Returns the underlying buffer.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Buffer offset of logical element `i`.
    #[inline]
    pub fn offset(&self, i: usize) -> usize {
        element_offset(self.len, self.inc, i)
    }
}

impl<'a, T: Copy, Op: ElementOp<T>> StridedVec<'a, T, Op> {
    /// Get logical element `i`, with the element operation applied.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        assert!(i < self.len, "index out of bounds");
        Op::apply(self.data[self.offset(i)])
    }

    /// Iterate over the logical elements in order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |i| Op::apply(self.data[self.offset(i)]))
    }

    /// Collect the logical elements into a contiguous vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<'a, T: ElementOpApply, Op: ComposableElementOp<T>> StridedVec<'a, T, Op> {
    /// Apply complex conjugate to all elements (lazily).
    #[inline]
    pub fn conj(self) -> StridedVec<'a, T, Op::ComposeConj> {
        StridedVec {
            data: self.data,
            len: self.len,
            inc: self.inc,
            _op: PhantomData,
        }
    }
}

/// A mutable strided vector.
///
/// Same as `StridedVec` but allows mutation. A zero increment is rejected,
/// since writing `n > 1` logical elements into one slot is not meaningful.
#[derive(Debug)]
pub struct StridedVecMut<'a, T> {
    data: &'a mut [T],
    len: usize,
    inc: isize,
}

impl<'a, T> StridedVecMut<'a, T> {
    /// Create a new mutable strided vector.
    ///
    /// # Errors
    /// Returns [`BlasError::ZeroIncrement`] for `inc == 0` with a non-empty
    /// vector and [`BlasError::BufferTooShort`] if the view would reach past the
    /// end of `data`.
    pub fn new(data: &'a mut [T], len: usize, inc: isize) -> Result<Self> {
        Self::new_named("y", data, len, inc)
    }

    /// Like [`StridedVecMut::new`], reporting errors against argument `arg`.
    pub fn new_named(
        arg: &'static str,
        data: &'a mut [T],
        len: usize,
        inc: isize,
    ) -> Result<Self> {
        if len > 0 && inc == 0 {
            return Err(BlasError::ZeroIncrement { arg });
        }
        validate_extent(arg, data.len(), len, inc)?;
        Ok(Self { data, len, inc })
    }

    /// Contiguous view over a whole slice.
    pub fn contiguous(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self { data, len, inc: 1 }
    }

    /// Create a view without bounds checking.
    ///
    /// The caller must guarantee `inc != 0` and that every logical element
    /// lies inside `data`; violations panic on access rather than corrupt memory.
    pub(crate) fn from_parts(data: &'a mut [T], len: usize, inc: isize) -> Self {
        debug_assert!(len == 0 || inc != 0);
        Self { data, len, inc }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn inc(&self) -> isize {
        self.inc
    }

    /// Buffer offset of logical element `i`.
    #[inline]
    pub fn offset(&self, i: usize) -> usize {
        element_offset(self.len, self.inc, i)
    }

    /// Reborrow with a shorter lifetime.
    #[inline]
    pub fn reborrow(&mut self) -> StridedVecMut<'_, T> {
        StridedVecMut {
            data: &mut *self.data,
            len: self.len,
            inc: self.inc,
        }
    }

}

impl<'a, T: Copy> StridedVecMut<'a, T> {
    /// Get logical element `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        assert!(i < self.len, "index out of bounds");
        self.data[self.offset(i)]
    }

    /// Set logical element `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        assert!(i < self.len, "index out of bounds");
        let idx = self.offset(i);
        self.data[idx] = value;
    }

    /// Replace logical element `i` with `f(old)`.
    #[inline]
    pub fn update(&mut self, i: usize, f: impl FnOnce(T) -> T) {
        assert!(i < self.len, "index out of bounds");
        let idx = self.offset(i);
        self.data[idx] = f(self.data[idx]);
    }

    /// Read-only view of the same elements.
    #[inline]
    pub fn as_view(&self) -> StridedVec<'_, T> {
        StridedVec {
            data: &*self.data,
            len: self.len,
            inc: self.inc,
            _op: PhantomData,
        }
    }

    /// Collect the logical elements into a contiguous vector.
    pub fn to_vec(&self) -> Vec<T> {
        (0..self.len).map(|i| self.get(i)).collect()
    }
}
