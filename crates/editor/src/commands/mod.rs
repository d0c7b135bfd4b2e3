//! Built-in commands.
//!
//! | identifier | handler | flags |
//! |---|---|---|
//! | `seek.word`, `seek.word_end`, `seek.word.backward` | editor | |
//! | `select.line_start`, `select.line_end` | editor | |
//! | `seek.object` | editor | |
//! | `edit.insert`, `edit.delete` | editor | |
//! | `history.undo` | editor | `DO_NOT_REPLAY` |
//! | `count.update`, `register.select` | global | `DO_NOT_REPLAY` |
//! | `macro.record.start`, `macro.record.stop`, `macro.play` | global | `DO_NOT_REPLAY` |
//! | `history.repeat` | global | `DO_NOT_REPLAY` |
//!
//! Motions honor `count` (where repeating makes sense) and `extend`.

use strand_invocation::{Argument, CommandError, CommandRegistry, RegistryError};
use strand_primitives::{Position, Rope};

use crate::Editor;
use crate::buffer::Buffer;

mod edit;
mod macros;
mod object;
mod prefix;
mod seek;

pub use object::object_around;
pub use seek::{next_word_end, next_word_start, previous_word_start};

/// A registry holding every built-in command.
pub fn builtin() -> Result<CommandRegistry<Editor>, RegistryError> {
	let mut registry = CommandRegistry::new();
	seek::register(&mut registry)?;
	object::register(&mut registry)?;
	edit::register(&mut registry)?;
	prefix::register(&mut registry)?;
	macros::register(&mut registry)?;
	Ok(registry)
}

/// The argument's repetition count, capped at [`Config::max_count`](crate::Config).
fn repetitions(editor: &Editor, argument: &Argument) -> Result<usize, CommandError> {
	let max = usize::try_from(editor.config().max_count).unwrap_or(usize::MAX);
	Ok(argument.repetitions()?.min(max))
}

fn extend(argument: &Argument) -> Result<bool, CommandError> {
	Ok(argument.bool("extend")?.unwrap_or(false))
}

/// Moves the active end of every selection with `motion`, up to `repetitions`
/// times. A selection the motion cannot move is left as it was.
fn move_selections(
	buffer: &mut Buffer,
	repetitions: usize,
	extend: bool,
	motion: impl Fn(&Rope, Position) -> Option<Position>,
) {
	buffer.map_selections(|text, mut selection| {
		for _ in 0..repetitions {
			match motion(text, selection.active) {
				Some(active) if active != selection.active => selection = selection.select_to(active, extend),
				_ => break,
			}
		}
		selection
	});
}
