use serde_json::Value;
use strand_invocation::{
	Argument, BoxFutureLocal, CommandDescriptor, CommandError, CommandFlags, CommandRegistry, CommandResult,
	EditorContext, RegistryError,
};
use strand_primitives::movement::{move_while_code_backward, move_while_code_forward};
use strand_primitives::{CharCode, CharSet, Position, Rope, Selection};

use crate::Editor;

pub(super) fn register(registry: &mut CommandRegistry<Editor>) -> Result<(), RegistryError> {
	registry.register(CommandDescriptor::editor("seek.object", seek_object, CommandFlags::NONE))?;
	Ok(())
}

/// Selects the run of `set` characters around `cursor` on its line.
///
/// Without `inner`, a word object also takes the blanks that follow it.
/// Returns `None` when the cursor touches no such run.
pub fn object_around(text: &Rope, cursor: Position, set: CharSet, inner: bool) -> Option<Selection> {
	let in_set = |code: CharCode| set.matches_code(code);
	let start = move_while_code_backward(text, cursor, in_set).position;
	let mut end = move_while_code_forward(text, cursor, in_set).position;
	if start == end {
		return None;
	}
	if !inner && set == CharSet::WORD {
		end = move_while_code_forward(text, end, |code| CharSet::BLANK.matches_code(code)).position;
	}
	Some(Selection::new(start, end))
}

fn seek_object<'a>(cx: &'a mut EditorContext<'a, Editor>, argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let name = argument.required_string("object")?;
		let set = CharSet::from_object_name(name)
			.ok_or_else(|| CommandError::InvalidArgument(format!("unknown object {name:?}")))?;
		let inner = argument.bool("inner")?.unwrap_or(true);

		cx.editor_mut()?.map_selections(|text, selection| {
			object_around(text, selection.active, set, inner).unwrap_or(selection)
		});
		Ok(Value::Null)
	})
}
