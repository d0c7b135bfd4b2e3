//! Character classes shared by word motions and object selection.

bitflags::bitflags! {
	/// A set of character classes.
	///
	/// Every character belongs to exactly one class; sets are used to ask
	/// whether a character belongs to any of several classes.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CharSet: u8 {
		/// Alphanumeric characters and `_`.
		const WORD = 1 << 0;
		/// Whitespace other than line breaks.
		const BLANK = 1 << 1;
		/// Everything that is neither a word, blank, nor line break character.
		const PUNCTUATION = 1 << 2;
		/// `\n` and `\r`.
		const LINE_BREAK = 1 << 3;
	}
}

const ASCII_CLASSES: [CharSet; 128] = {
	let mut table = [CharSet::PUNCTUATION; 128];
	let mut i = 0;
	while i < 128 {
		let b = i as u8;
		table[i] = if b == b'\n' || b == b'\r' {
			CharSet::LINE_BREAK
		} else if b.is_ascii_alphanumeric() || b == b'_' {
			CharSet::WORD
		} else if b.is_ascii_whitespace() || b == 0x0B {
			CharSet::BLANK
		} else {
			CharSet::PUNCTUATION
		};
		i += 1;
	}
	table
};

impl CharSet {
	/// Every class.
	pub const ANY: Self = Self::all();

	/// Returns the class of `c`.
	pub fn of(c: char) -> Self {
		if c.is_ascii() {
			return ASCII_CLASSES[c as usize];
		}
		if c.is_alphanumeric() {
			Self::WORD
		} else if c.is_whitespace() {
			Self::BLANK
		} else {
			Self::PUNCTUATION
		}
	}

	/// Returns the class of a raw code point.
	///
	/// Codes that are not valid scalar values are treated as punctuation.
	#[inline]
	pub fn of_code(code: u32) -> Self {
		match usize::try_from(code) {
			Ok(index) if index < ASCII_CLASSES.len() => ASCII_CLASSES[index],
			_ => char::from_u32(code).map_or(Self::PUNCTUATION, Self::of),
		}
	}

	/// Returns whether `c` belongs to this set.
	#[inline]
	pub fn matches(self, c: char) -> bool {
		self.intersects(Self::of(c))
	}

	/// Returns whether the code point belongs to this set.
	#[inline]
	pub fn matches_code(self, code: u32) -> bool {
		self.intersects(Self::of_code(code))
	}

	/// Looks a set up by its object name (`word`, `blank`, `punctuation`).
	pub fn from_object_name(name: &str) -> Option<Self> {
		match name {
			"word" => Some(Self::WORD),
			"blank" | "whitespace" => Some(Self::BLANK),
			"punctuation" => Some(Self::PUNCTUATION),
			_ => None,
		}
	}
}
