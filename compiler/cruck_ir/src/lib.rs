//! Cruck IR - shared source types
//!
//! This crate contains the data structures every interpreter stage agrees on:
//! - `SourcePos` for 0-indexed (line, column) locations
//! - `SourceText` for the immutable line vector of one run
//! - `CompareOp` for the comparison operators accepted by `if`
//!
//! # Design Philosophy
//!
//! - **Lines are the unit**: the language is line-oriented, so positions are
//!   (line, column) pairs instead of byte spans.
//! - **Columns count characters**: a column is the number of `char`s before
//!   the position on its line, never a byte offset.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ops;
mod pos;
mod source;

pub use ops::CompareOp;
pub use pos::SourcePos;
pub use source::SourceText;
