//! Read-only, line-addressed access to document text.
//!
//! Traversals and motions only ever read a document through [`TextSource`],
//! so any storage can be walked as long as it can hand out one line at a time.

use std::borrow::Cow;

use ropey::{Rope, RopeSlice};

use crate::Position;

/// Line-addressed document text.
///
/// Line text never includes its terminator. A document always has at least
/// one (possibly empty) line. Asking for a line past the end yields an empty
/// line rather than panicking.
pub trait TextSource {
	/// Number of lines, always at least 1.
	fn line_count(&self) -> usize;

	/// Text of `line` without its line terminator.
	fn line_text(&self, line: usize) -> Cow<'_, str>;

	/// Length of `line` in chars.
	fn line_len(&self, line: usize) -> usize {
		self.line_text(line).chars().count()
	}

	/// Absolute end of the document: the end of its last line.
	fn end_position(&self) -> Position {
		let last = self.line_count().saturating_sub(1);
		Position::new(last, self.line_len(last))
	}
}

/// Byte length of the line terminator at the end of `text`, if any.
fn line_break_len(text: &str) -> usize {
	if text.ends_with("\r\n") {
		return 2;
	}
	match text.chars().next_back() {
		Some(c @ ('\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}')) => c.len_utf8(),
		_ => 0,
	}
}

fn strip_line_break(text: Cow<'_, str>) -> Cow<'_, str> {
	let len = line_break_len(&text);
	if len == 0 {
		return text;
	}
	match text {
		Cow::Borrowed(s) => Cow::Borrowed(&s[..s.len() - len]),
		Cow::Owned(mut s) => {
			s.truncate(s.len() - len);
			Cow::Owned(s)
		}
	}
}

fn rope_line_len(line: RopeSlice<'_>) -> usize {
	let len = line.len_chars();
	if len == 0 {
		return 0;
	}
	match line.char(len - 1) {
		'\n' if len >= 2 && line.char(len - 2) == '\r' => len - 2,
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}' => len - 1,
		_ => len,
	}
}

impl TextSource for RopeSlice<'_> {
	fn line_count(&self) -> usize {
		self.len_lines()
	}

	fn line_text(&self, line: usize) -> Cow<'_, str> {
		match self.get_line(line) {
			Some(slice) => strip_line_break(slice.into()),
			None => Cow::Borrowed(""),
		}
	}

	fn line_len(&self, line: usize) -> usize {
		self.get_line(line).map_or(0, rope_line_len)
	}
}

impl TextSource for Rope {
	fn line_count(&self) -> usize {
		self.len_lines()
	}

	fn line_text(&self, line: usize) -> Cow<'_, str> {
		match self.get_line(line) {
			Some(slice) => strip_line_break(slice.into()),
			None => Cow::Borrowed(""),
		}
	}

	fn line_len(&self, line: usize) -> usize {
		self.get_line(line).map_or(0, rope_line_len)
	}
}

/// Plain strings split on `\n` (a preceding `\r` is dropped).
impl TextSource for str {
	fn line_count(&self) -> usize {
		self.split('\n').count()
	}

	fn line_text(&self, line: usize) -> Cow<'_, str> {
		let text = self.split('\n').nth(line).unwrap_or("");
		Cow::Borrowed(text.strip_suffix('\r').unwrap_or(text))
	}
}
