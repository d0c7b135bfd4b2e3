//! Snapshot undo history.
//!
//! A buffer opens an undo group the first time it is edited after an undo
//! stop, capturing the text and selections it had before that edit. Undoing
//! restores the snapshot of the most recent group. Only the newest `limit`
//! groups are kept.

use std::collections::VecDeque;

use strand_primitives::{Rope, Selection};
use tracing::trace;

/// Buffer state captured when an undo group opens.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
	/// Text before the group's first edit.
	pub text: Rope,
	/// Selections before the group's first edit.
	pub selections: Vec<Selection>,
}

#[derive(Debug)]
pub struct History {
	undo_stack: VecDeque<HistoryEntry>,
	limit: usize,
	group_open: bool,
}

impl Default for History {
	fn default() -> Self {
		Self::with_limit(Self::DEFAULT_LIMIT)
	}
}

impl History {
	pub const DEFAULT_LIMIT: usize = 1_000;

	pub fn new() -> Self {
		Self::default()
	}

	/// A history keeping at most `limit` undo groups (at least one).
	pub fn with_limit(limit: usize) -> Self {
		Self {
			undo_stack: VecDeque::new(),
			limit: limit.max(1),
			group_open: false,
		}
	}

	/// Records the pre-edit state if no group is open yet.
	pub fn checkpoint(&mut self, text: &Rope, selections: &[Selection]) {
		if self.group_open {
			return;
		}
		if self.undo_stack.len() == self.limit {
			self.undo_stack.pop_front();
		}
		self.undo_stack.push_back(HistoryEntry {
			text: text.clone(),
			selections: selections.to_vec(),
		});
		self.group_open = true;
		trace!(depth = self.undo_stack.len(), "Opened undo group");
	}

	/// Closes the open group, if any. Returns whether one was open.
	pub fn seal(&mut self) -> bool {
		std::mem::replace(&mut self.group_open, false)
	}

	/// Pops the most recent group.
	pub fn undo(&mut self) -> Option<HistoryEntry> {
		self.group_open = false;
		self.undo_stack.pop_back()
	}

	pub fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}

	pub fn can_undo(&self) -> bool {
		!self.undo_stack.is_empty()
	}

	pub fn is_group_open(&self) -> bool {
		self.group_open
	}
}

#[cfg(test)]
mod tests {
	use strand_primitives::Position;

	use super::*;

	#[test]
	fn one_snapshot_per_group() {
		let mut history = History::new();
		let selections = [Selection::cursor(Position::ZERO)];

		history.checkpoint(&Rope::from("a"), &selections);
		history.checkpoint(&Rope::from("ab"), &selections);
		assert_eq!(history.undo_len(), 1);
		assert!(history.seal());
		assert!(!history.seal());

		history.checkpoint(&Rope::from("abc"), &selections);
		assert_eq!(history.undo_len(), 2);

		let entry = history.undo().unwrap();
		assert_eq!(entry.text, "abc");
		assert!(!history.is_group_open());
		assert_eq!(history.undo().unwrap().text, "a");
		assert!(history.undo().is_none());
	}

	#[test]
	fn oldest_groups_fall_off_past_the_limit() {
		let mut history = History::with_limit(2);
		let selections = [Selection::cursor(Position::ZERO)];

		for text in ["a", "b", "c"] {
			history.checkpoint(&Rope::from(text), &selections);
			history.seal();
		}

		assert_eq!(history.undo_len(), 2);
		assert_eq!(history.undo().unwrap().text, "c");
		assert_eq!(history.undo().unwrap().text, "b");
		assert!(!history.can_undo());
	}
}
