//! Node colors.

use std::fmt;

/// Color of a tree node.
///
/// Uses `#[repr(u8)]` so the auditor and debug dumps can treat it as a byte.
/// Absent children are never stored; callers treat them as [`Color::Black`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Freshly inserted nodes start red.
    Red = 0,
    /// The root and every nil leaf are black.
    Black = 1,
}

impl Color {
    #[inline]
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}
