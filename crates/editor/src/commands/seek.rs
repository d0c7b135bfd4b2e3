use serde_json::Value;
use strand_invocation::{
	Argument, BoxFutureLocal, CommandDescriptor, CommandFlags, CommandRegistry, CommandResult, EditorContext,
	RegistryError,
};
use strand_primitives::movement::{move_while_backward, move_while_forward, move_with_backward, move_with_forward};
use strand_primitives::{CharSet, Position, Rope};

use super::{extend, move_selections, repetitions};
use crate::Editor;

pub(super) fn register(registry: &mut CommandRegistry<Editor>) -> Result<(), RegistryError> {
	registry.register(CommandDescriptor::editor("seek.word", seek_word, CommandFlags::NONE))?;
	registry.register(CommandDescriptor::editor("seek.word_end", seek_word_end, CommandFlags::NONE))?;
	registry.register(CommandDescriptor::editor(
		"seek.word.backward",
		seek_word_backward,
		CommandFlags::NONE,
	))?;
	registry.register(CommandDescriptor::editor("select.line_start", select_line_start, CommandFlags::NONE))?;
	registry.register(CommandDescriptor::editor("select.line_end", select_line_end, CommandFlags::NONE))?;
	Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Word {
	Start,
	Run(CharSet),
	Blanks,
}

fn is_space(class: CharSet) -> bool {
	class.intersects(CharSet::BLANK | CharSet::LINE_BREAK)
}

/// Start of the next word: past the run under the cursor and the blanks after
/// it. Stops at line ends.
pub fn next_word_start(text: &Rope, origin: Position) -> Option<Position> {
	let moved = move_with_forward(text, origin, Word::Start, |c, state| {
		let class = CharSet::of(c);
		match state {
			Word::Start if is_space(class) => Some(Word::Blanks),
			Word::Start => Some(Word::Run(class)),
			Word::Run(run) if run == class => Some(state),
			Word::Run(_) | Word::Blanks if class == CharSet::BLANK => Some(Word::Blanks),
			_ => None,
		}
	});
	(moved.position != origin).then_some(moved.position)
}

/// Just past the end of the next word, skipping blanks and line breaks first.
pub fn next_word_end(text: &Rope, origin: Position) -> Option<Position> {
	let moved = move_with_forward(text, origin, Word::Start, word_end_step);
	(moved.position != origin).then_some(moved.position)
}

/// Start of the previous word, skipping blanks and line breaks first.
pub fn previous_word_start(text: &Rope, origin: Position) -> Option<Position> {
	let moved = move_with_backward(text, origin, Word::Start, word_end_step);
	(moved.position != origin).then_some(moved.position)
}

fn word_end_step(c: char, state: Word) -> Option<Word> {
	let class = CharSet::of(c);
	match state {
		Word::Start | Word::Blanks if is_space(class) => Some(Word::Blanks),
		Word::Start | Word::Blanks => Some(Word::Run(class)),
		Word::Run(run) if run == class => Some(state),
		Word::Run(_) => None,
	}
}

fn seek_word<'a>(cx: &'a mut EditorContext<'a, Editor>, argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move { seek(cx, &argument, next_word_start) })
}

fn seek_word_end<'a>(cx: &'a mut EditorContext<'a, Editor>, argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move { seek(cx, &argument, next_word_end) })
}

fn seek_word_backward<'a>(
	cx: &'a mut EditorContext<'a, Editor>,
	argument: Argument,
) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move { seek(cx, &argument, previous_word_start) })
}

fn seek(
	cx: &mut EditorContext<'_, Editor>,
	argument: &Argument,
	motion: fn(&Rope, Position) -> Option<Position>,
) -> CommandResult {
	let repetitions = repetitions(cx.host(), argument)?;
	let extend = extend(argument)?;
	move_selections(cx.editor_mut()?, repetitions, extend, motion);
	Ok(Value::Null)
}

fn select_line_start<'a>(
	cx: &'a mut EditorContext<'a, Editor>,
	argument: Argument,
) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let extend = extend(&argument)?;
		move_selections(cx.editor_mut()?, 1, extend, |text, origin| {
			Some(move_while_backward(text, origin, |c| c != '\n').position)
		});
		Ok(Value::Null)
	})
}

fn select_line_end<'a>(cx: &'a mut EditorContext<'a, Editor>, argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let extend = extend(&argument)?;
		move_selections(cx.editor_mut()?, 1, extend, |text, origin| {
			Some(move_while_forward(text, origin, |c| c != '\n').position)
		});
		Ok(Value::Null)
	})
}
