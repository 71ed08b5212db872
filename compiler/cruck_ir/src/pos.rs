//! Source positions.
//!
//! Provides the compact 8-byte (line, column) pair attached to every error.

use std::fmt;

/// A 0-indexed (line, column) location in a `SourceText`.
///
/// Layout: 8 bytes total
/// - line: u32 - index into the source lines
/// - col: u32 - character offset within that line
///
/// `Display` renders the 1-based `line:col` form used in human output;
/// `Debug` keeps the raw 0-indexed values.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(C)]
pub struct SourcePos {
    pub line: u32,
    pub col: u32,
}

impl SourcePos {
    /// Position of the first character of the source.
    pub const START: SourcePos = SourcePos { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        SourcePos { line, col }
    }

    /// Create a position from `usize` indices, saturating at `u32::MAX`.
    ///
    /// Sources large enough to saturate cannot be loaded by any transport we
    /// support, so saturation only guards against arithmetic surprises.
    #[inline]
    pub fn at(line: usize, col: usize) -> Self {
        SourcePos {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            col: u32::try_from(col).unwrap_or(u32::MAX),
        }
    }

    /// Line index as `usize`, for slicing.
    #[inline]
    pub fn line_index(self) -> usize {
        self.line as usize
    }

    /// Column index as `usize`.
    #[inline]
    pub fn col_index(self) -> usize {
        self.col as usize
    }
}

impl fmt::Debug for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.col)
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", u64::from(self.line) + 1, u64::from(self.col) + 1)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::SourcePos;
    crate::static_assert_size!(SourcePos, 8);
}

#[cfg(test)]
mod tests;
