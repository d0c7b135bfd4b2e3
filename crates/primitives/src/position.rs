use std::fmt;

/// A (line, column) coordinate into a text source.
///
/// Columns count `char`s of the line text, not bytes, and never include the
/// line terminator. Ordering is by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based column, in chars.
	pub column: usize,
}

impl Position {
	/// The start of every document.
	pub const ZERO: Self = Self { line: 0, column: 0 };

	/// Creates a position.
	#[inline]
	pub const fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}

impl From<(usize, usize)> for Position {
	fn from((line, column): (usize, usize)) -> Self {
		Self::new(line, column)
	}
}
