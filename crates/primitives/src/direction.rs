/// Orientation of a traversal or motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Towards the end of the document.
	Forward,
	/// Towards the start of the document.
	Backward,
}

impl Direction {
	/// The opposite direction.
	#[inline]
	#[must_use]
	pub const fn reverse(self) -> Self {
		match self {
			Self::Forward => Self::Backward,
			Self::Backward => Self::Forward,
		}
	}
}
