// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

use crate::kind::ElementKind;

/// Reasons why a list operation was rejected.
///
/// A rejected operation leaves the list exactly as it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The index does not address an element of the list.
    ///
    /// For `insert`, the valid range also includes `len` itself.
    IndexOutOfBounds { index: usize, len: usize },
    /// The value passed to a [`List`] is of a different kind than the list was created with.
    ///
    /// [`List`]: crate::List
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => write!(
                f,
                "index {} is out of bounds for a list of length {}",
                index, len
            ),
            Self::KindMismatch { expected, found } => write!(
                f,
                "cannot store a {} value in a {} list",
                found, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T, E = Error> = core::result::Result<T, E>;
