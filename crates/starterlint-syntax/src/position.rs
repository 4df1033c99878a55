//! Shared position conversion helpers.
//!
//! Tree-sitter positions and byte offsets are `usize`; spans in
//! `starterlint_core` are `u32`. Sources larger than 4 GiB are not a
//! realistic input, so values saturate instead of failing.

use starterlint_core::LineCol;

/// Converts a Tree-sitter position (0-based) to one-based display coordinates.
#[must_use]
pub(crate) fn point_to_one_based(pos: tree_sitter::Point) -> (u32, u32) {
    point_to_line_col(pos).one_based()
}

/// Converts a Tree-sitter position to a zero-based [`LineCol`].
#[must_use]
pub(crate) fn point_to_line_col(pos: tree_sitter::Point) -> LineCol {
    LineCol::new(saturating_u32(pos.row), saturating_u32(pos.column))
}

/// Narrows a byte offset or position component to `u32`.
#[must_use]
pub(crate) fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
