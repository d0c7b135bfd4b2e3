//! Directional traversal over a [`TextSource`].
//!
//! Every motion is built from one primitive: walk the document one unit at a
//! time in a [`Direction`], folding a caller-owned state through a reducer,
//! and stop at the first unit the reducer rejects. Line breaks are fed to the
//! reducer as a synthetic `'\n'` unit between lines; no unit follows the last
//! line.
//!
//! Two unit types exist. The `move_with*`/`move_while*` functions decode lines
//! into `char`s, while the `*_code` variants feed raw [`CharCode`]s for callers
//! that classify through lookup tables. Both address columns in chars and
//! share the exact same control flow.
//!
//! Whether the walk ran off the document is part of the returned
//! [`Traversal`], so nested or interleaved walks never observe each other.
//!
//! # Stop positions
//!
//! Forward, a rejected unit at column `i` yields `(line, i)`, and a rejected
//! line break yields the end of the line it terminates.
//!
//! Backward, a rejected unit at column `i` of the origin line yields
//! `(line, i + 1)`. A rejected line break yields the start of the line being
//! left. On earlier lines, a rejected last character yields the start of the
//! following line rather than the end of its own line; any other rejected
//! column `i` yields `(line, i + 1)`.
//!
//! Origins past the end of their line behave as if clamped to it. Origins on
//! lines past the end of the document are a caller error.

use crate::{Direction, Position, TextSource};

/// A raw code point, as fed to the reducers of the `*_code` traversals.
pub type CharCode = u32;

/// Outcome of a traversal.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traversal {
	/// Where the traversal stopped.
	pub position: Position,
	/// Whether the whole remaining document was consumed without the reducer
	/// stopping. The position is then `(0, 0)` backward, or the end of the
	/// document forward.
	pub reached_edge: bool,
}

impl Traversal {
	const fn stopped(position: Position) -> Self {
		Self {
			position,
			reached_edge: false,
		}
	}

	const fn edge(position: Position) -> Self {
		Self {
			position,
			reached_edge: true,
		}
	}
}

trait Unit: Copy {
	const NEWLINE: Self;

	fn decode(line: &str, out: &mut Vec<Self>);
}

impl Unit for char {
	const NEWLINE: Self = '\n';

	fn decode(line: &str, out: &mut Vec<Self>) {
		out.clear();
		out.extend(line.chars());
	}
}

impl Unit for CharCode {
	const NEWLINE: Self = 0x0A;

	fn decode(line: &str, out: &mut Vec<Self>) {
		out.clear();
		out.extend(line.chars().map(CharCode::from));
	}
}

fn walk_forward<S, U, T, F>(text: &S, mut state: T, origin: Position, mut reduce: F) -> Traversal
where
	S: TextSource + ?Sized,
	U: Unit,
	F: FnMut(U, T) -> Option<T>,
{
	let last_line = text.line_count().saturating_sub(1);
	let mut units = Vec::new();
	let mut line = origin.line;
	let mut skip = origin.column;

	while line <= last_line {
		U::decode(&text.line_text(line), &mut units);

		for (column, &unit) in units.iter().enumerate().skip(skip) {
			match reduce(unit, state) {
				Some(next) => state = next,
				None => return Traversal::stopped(Position::new(line, column)),
			}
		}

		if line == last_line {
			break;
		}

		match reduce(U::NEWLINE, state) {
			Some(next) => state = next,
			None => return Traversal::stopped(Position::new(line, units.len())),
		}

		line += 1;
		skip = 0;
	}

	Traversal::edge(text.end_position())
}

fn walk_backward<S, U, T, F>(text: &S, mut state: T, origin: Position, mut reduce: F) -> Traversal
where
	S: TextSource + ?Sized,
	U: Unit,
	F: FnMut(U, T) -> Option<T>,
{
	let mut units = Vec::new();
	U::decode(&text.line_text(origin.line), &mut units);

	for (column, &unit) in units.iter().enumerate().take(origin.column).rev() {
		match reduce(unit, state) {
			Some(next) => state = next,
			None => return Traversal::stopped(Position::new(origin.line, column + 1)),
		}
	}

	for line in (0..origin.line).rev() {
		match reduce(U::NEWLINE, state) {
			Some(next) => state = next,
			None => return Traversal::stopped(Position::new(line + 1, 0)),
		}

		U::decode(&text.line_text(line), &mut units);
		let last_column = units.len().saturating_sub(1);

		for (column, &unit) in units.iter().enumerate().rev() {
			match reduce(unit, state) {
				Some(next) => state = next,
				None => {
					let position = if column == last_column {
						Position::new(line + 1, 0)
					} else {
						Position::new(line, column + 1)
					};
					return Traversal::stopped(position);
				}
			}
		}
	}

	Traversal::edge(Position::ZERO)
}

/// Moves from `origin` in `direction` for as long as `reduce` returns `Some`.
///
/// `reduce` receives each character (and `'\n'` between lines) together with
/// the state returned by its previous call, starting from `start`. Returning
/// `None` stops the traversal in front of the rejected character.
///
/// ```
/// use strand_primitives::movement::move_with;
/// use strand_primitives::{Direction, Position};
///
/// // Walk back over a descending run of digits.
/// let moved = move_with("1234578", Direction::Backward, Position::new(0, 5), 6, |c, next: u32| {
/// 	(c.to_digit(10) == Some(next - 1)).then(|| next - 1)
/// });
/// assert_eq!(moved.position, Position::new(0, 0));
/// assert!(moved.reached_edge);
/// ```
pub fn move_with<S, T, F>(text: &S, direction: Direction, origin: Position, start: T, reduce: F) -> Traversal
where
	S: TextSource + ?Sized,
	F: FnMut(char, T) -> Option<T>,
{
	match direction {
		Direction::Forward => walk_forward(text, start, origin, reduce),
		Direction::Backward => walk_backward(text, start, origin, reduce),
	}
}

/// Forward [`move_with`].
pub fn move_with_forward<S, T, F>(text: &S, origin: Position, start: T, reduce: F) -> Traversal
where
	S: TextSource + ?Sized,
	F: FnMut(char, T) -> Option<T>,
{
	walk_forward(text, start, origin, reduce)
}

/// Backward [`move_with`].
pub fn move_with_backward<S, T, F>(text: &S, origin: Position, start: T, reduce: F) -> Traversal
where
	S: TextSource + ?Sized,
	F: FnMut(char, T) -> Option<T>,
{
	walk_backward(text, start, origin, reduce)
}

/// Same as [`move_with`], but feeding raw code points.
pub fn move_with_code<S, T, F>(text: &S, direction: Direction, origin: Position, start: T, reduce: F) -> Traversal
where
	S: TextSource + ?Sized,
	F: FnMut(CharCode, T) -> Option<T>,
{
	match direction {
		Direction::Forward => walk_forward(text, start, origin, reduce),
		Direction::Backward => walk_backward(text, start, origin, reduce),
	}
}

/// Forward [`move_with_code`].
pub fn move_with_code_forward<S, T, F>(text: &S, origin: Position, start: T, reduce: F) -> Traversal
where
	S: TextSource + ?Sized,
	F: FnMut(CharCode, T) -> Option<T>,
{
	walk_forward(text, start, origin, reduce)
}

/// Backward [`move_with_code`].
pub fn move_with_code_backward<S, T, F>(text: &S, origin: Position, start: T, reduce: F) -> Traversal
where
	S: TextSource + ?Sized,
	F: FnMut(CharCode, T) -> Option<T>,
{
	walk_backward(text, start, origin, reduce)
}

/// Moves from `origin` in `direction` for as long as `predicate` holds.
///
/// Equivalent to [`move_with`] with a stateless reducer.
///
/// ```
/// use strand_primitives::movement::move_while;
/// use strand_primitives::{Direction, Position};
///
/// let moved = move_while("abc", Direction::Forward, Position::ZERO, |c| c.is_alphanumeric());
/// assert_eq!(moved.position, Position::new(0, 3));
///
/// let moved = move_while("abc", Direction::Backward, Position::new(0, 3), |c| c == 'c');
/// assert_eq!(moved.position, Position::new(0, 2));
/// ```
pub fn move_while<S, P>(text: &S, direction: Direction, origin: Position, mut predicate: P) -> Traversal
where
	S: TextSource + ?Sized,
	P: FnMut(char) -> bool,
{
	move_with(text, direction, origin, (), |c, ()| predicate(c).then_some(()))
}

/// Forward [`move_while`].
pub fn move_while_forward<S, P>(text: &S, origin: Position, predicate: P) -> Traversal
where
	S: TextSource + ?Sized,
	P: FnMut(char) -> bool,
{
	move_while(text, Direction::Forward, origin, predicate)
}

/// Backward [`move_while`].
pub fn move_while_backward<S, P>(text: &S, origin: Position, predicate: P) -> Traversal
where
	S: TextSource + ?Sized,
	P: FnMut(char) -> bool,
{
	move_while(text, Direction::Backward, origin, predicate)
}

/// Same as [`move_while`], but testing raw code points.
pub fn move_while_code<S, P>(text: &S, direction: Direction, origin: Position, mut predicate: P) -> Traversal
where
	S: TextSource + ?Sized,
	P: FnMut(CharCode) -> bool,
{
	move_with_code(text, direction, origin, (), |code, ()| predicate(code).then_some(()))
}

/// Forward [`move_while_code`].
pub fn move_while_code_forward<S, P>(text: &S, origin: Position, predicate: P) -> Traversal
where
	S: TextSource + ?Sized,
	P: FnMut(CharCode) -> bool,
{
	move_while_code(text, Direction::Forward, origin, predicate)
}

/// Backward [`move_while_code`].
pub fn move_while_code_backward<S, P>(text: &S, origin: Position, predicate: P) -> Traversal
where
	S: TextSource + ?Sized,
	P: FnMut(CharCode) -> bool,
{
	move_while_code(text, Direction::Backward, origin, predicate)
}
