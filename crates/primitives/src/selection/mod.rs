//! Anchor/active selection pairs.
//!
//! A selection spans the text between its `anchor` (the fixed end) and its
//! `active` end (the cursor that motions move). Positions sit between
//! characters, so an empty selection is a plain cursor.

use crate::Position;

/// A selection with a fixed anchor and a moving active end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
	/// The fixed end.
	pub anchor: Position,
	/// The moving end.
	pub active: Position,
}

impl Selection {
	/// Creates a selection from `anchor` to `active`.
	#[inline]
	pub const fn new(anchor: Position, active: Position) -> Self {
		Self { anchor, active }
	}

	/// Creates an empty selection (a cursor) at `position`.
	#[inline]
	pub const fn cursor(position: Position) -> Self {
		Self::new(position, position)
	}

	/// Returns the earlier of both ends.
	#[inline]
	pub fn start(&self) -> Position {
		self.anchor.min(self.active)
	}

	/// Returns the later of both ends.
	#[inline]
	pub fn end(&self) -> Position {
		self.anchor.max(self.active)
	}

	/// Returns true if both ends coincide.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.active
	}

	/// Returns true if the active end precedes the anchor.
	#[inline]
	pub fn is_reversed(&self) -> bool {
		self.active < self.anchor
	}

	/// Moves the active end to `active`.
	///
	/// With `extend`, the anchor stays where it is. Otherwise the new
	/// selection spans from the previous active end to `active`.
	#[inline]
	pub fn select_to(self, active: Position, extend: bool) -> Self {
		if extend {
			Self::new(self.anchor, active)
		} else {
			Self::new(self.active, active)
		}
	}

	/// Collapses the selection onto its active end.
	#[inline]
	pub fn collapse(self) -> Self {
		Self::cursor(self.active)
	}
}
