//! Closed modifier types selecting the variant of a routine.
//!
//! The classic interface passes these as character codes (`'N'`, `'T'`, `'C'`,
//! `'U'`, `'L'`, ...). Here they are enums: parsing happens once at the
//! boundary through `TryFrom<char>` / `FromStr`, so an unknown code can never
//! reach a kernel.

use std::fmt;
use std::str::FromStr;

use crate::{BlasError, Result};

/// Operation applied to a matrix operand: `op(A)`.
///
/// - 'N': `op(A) = A`
/// - 'T': `op(A) = A^T`
/// - 'C': `op(A) = A^H` (same as 'T' for real domains)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transpose {
    /// No transpose operation
    #[default]
    NoTrans,
    /// Transpose operation
    Trans,
    /// Conjugate transpose (adjoint)
    ConjTrans,
}

impl Transpose {
    /// Convert to the canonical character code.
    pub fn to_char(self) -> char {
        match self {
            Transpose::NoTrans => 'N',
            Transpose::Trans => 'T',
            Transpose::ConjTrans => 'C',
        }
    }

    /// Whether `op(A)` swaps rows and columns.
    #[inline]
    pub fn is_transposed(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }

    /// Whether `op(A)` conjugates the elements.
    #[inline]
    pub fn is_conjugated(self) -> bool {
        matches!(self, Transpose::ConjTrans)
    }

    /// Shape of `op(A)` for an `rows x cols` matrix `A`.
    #[inline]
    pub fn apply_shape(self, rows: usize, cols: usize) -> (usize, usize) {
        if self.is_transposed() {
            (cols, rows)
        } else {
            (rows, cols)
        }
    }
}

/// Which triangle of a symmetric, hermitian or triangular matrix is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Uplo {
    #[default]
    Upper,
    Lower,
}

impl Uplo {
    pub fn to_char(self) -> char {
        match self {
            Uplo::Upper => 'U',
            Uplo::Lower => 'L',
        }
    }

    /// The opposite triangle.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }

    /// Whether `(i, j)` lies in this triangle (diagonal included).
    #[inline]
    pub fn contains(self, i: usize, j: usize) -> bool {
        match self {
            Uplo::Upper => i <= j,
            Uplo::Lower => i >= j,
        }
    }
}

/// Whether a triangular matrix has an implicit unit diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Diag {
    /// The diagonal is stored and read.
    #[default]
    NonUnit,
    /// The diagonal is never read and taken to be 1.
    Unit,
}

impl Diag {
    pub fn to_char(self) -> char {
        match self {
            Diag::NonUnit => 'N',
            Diag::Unit => 'U',
        }
    }
}

/// Side on which the special operand of a Level 3 routine multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// `op(A) * B`
    #[default]
    Left,
    /// `B * op(A)`
    Right,
}

impl Side {
    pub fn to_char(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

macro_rules! impl_modifier_parsing {
    ($ty:ident, $kind:literal, { $($code:literal => $variant:ident),* $(,)? }) => {
        impl TryFrom<char> for $ty {
            type Error = BlasError;

            fn try_from(code: char) -> Result<Self> {
                match code.to_ascii_uppercase() {
                    $($code => Ok($ty::$variant),)*
                    _ => Err(BlasError::InvalidModifier { kind: $kind, code }),
                }
            }
        }

        impl FromStr for $ty {
            type Err = BlasError;

            fn from_str(s: &str) -> Result<Self> {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(code), None) => $ty::try_from(code),
                    _ => Err(BlasError::InvalidModifier {
                        kind: $kind,
                        code: s.chars().next().unwrap_or('\0'),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_char())
            }
        }
    };
}

impl_modifier_parsing!(Transpose, "transpose", { 'N' => NoTrans, 'T' => Trans, 'C' => ConjTrans });
impl_modifier_parsing!(Uplo, "uplo", { 'U' => Upper, 'L' => Lower });
impl_modifier_parsing!(Diag, "diag", { 'N' => NonUnit, 'U' => Unit });
impl_modifier_parsing!(Side, "side", { 'L' => Left, 'R' => Right });
