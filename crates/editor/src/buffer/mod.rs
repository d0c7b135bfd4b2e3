//! Text buffers.

use std::ops::Range;

use strand_primitives::{Position, Rope, Selection, TextSource};

use crate::history::History;

/// Identifies a buffer within an [`Editor`](crate::Editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub(crate) u64);

/// A document with its selections and undo history.
///
/// There is always at least one selection; the first is the primary one.
#[derive(Debug)]
pub struct Buffer {
	id: BufferId,
	text: Rope,
	selections: Vec<Selection>,
	history: History,
}

impl Buffer {
	pub fn new(id: BufferId, text: &str) -> Self {
		Self::with_undo_limit(id, text, History::DEFAULT_LIMIT)
	}

	/// A buffer that keeps at most `undo_limit` undo groups.
	pub fn with_undo_limit(id: BufferId, text: &str, undo_limit: usize) -> Self {
		Self {
			id,
			text: Rope::from(text),
			selections: vec![Selection::cursor(Position::ZERO)],
			history: History::with_limit(undo_limit),
		}
	}

	pub fn id(&self) -> BufferId {
		self.id
	}

	pub fn text(&self) -> &Rope {
		&self.text
	}

	pub fn selections(&self) -> &[Selection] {
		&self.selections
	}

	pub fn primary(&self) -> Selection {
		self.selections[0]
	}

	/// Replaces the selections. An empty list leaves a cursor at the start of
	/// the document.
	pub fn set_selections(&mut self, selections: Vec<Selection>) {
		self.selections = if selections.is_empty() {
			vec![Selection::cursor(Position::ZERO)]
		} else {
			selections
		};
	}

	/// Rewrites every selection with `f`, which also sees the text.
	pub fn map_selections(&mut self, mut f: impl FnMut(&Rope, Selection) -> Selection) {
		for selection in &mut self.selections {
			*selection = f(&self.text, *selection);
		}
	}

	/// Nearest valid position to `position`.
	pub fn clamp(&self, position: Position) -> Position {
		let line = position.line.min(self.text.line_count().saturating_sub(1));
		Position::new(line, position.column.min(self.text.line_len(line)))
	}

	/// Char offset of `position`, after clamping it.
	pub fn char_index(&self, position: Position) -> usize {
		let position = self.clamp(position);
		self.text.line_to_char(position.line) + position.column
	}

	/// Position of the char offset `index`, clamped to the document.
	pub fn position(&self, index: usize) -> Position {
		let index = index.min(self.text.len_chars());
		let line = self.text.char_to_line(index);
		Position::new(line, index - self.text.line_to_char(line))
	}

	/// Inserts `text` at the char offset `index`.
	pub fn insert(&mut self, index: usize, text: &str) {
		if text.is_empty() {
			return;
		}
		self.history.checkpoint(&self.text, &self.selections);
		let index = index.min(self.text.len_chars());
		self.text.insert(index, text);
	}

	/// Removes the chars in `range`.
	pub fn remove(&mut self, range: Range<usize>) {
		let len = self.text.len_chars();
		let range = range.start.min(len)..range.end.min(len);
		if range.is_empty() {
			return;
		}
		self.history.checkpoint(&self.text, &self.selections);
		self.text.remove(range);
	}

	/// Ends the current undo group.
	pub fn insert_undo_stop(&mut self) {
		self.history.seal();
	}

	/// Restores the state before the most recent undo group. Returns whether
	/// there was anything to undo.
	pub fn undo(&mut self) -> bool {
		match self.history.undo() {
			Some(entry) => {
				self.text = entry.text;
				self.selections = entry.selections;
				true
			}
			None => false,
		}
	}

	pub fn history(&self) -> &History {
		&self.history
	}
}
