use std::ops::Range;

use serde_json::Value;
use strand_invocation::{
	Argument, BoxFutureLocal, CommandDescriptor, CommandFlags, CommandRegistry, CommandResult, EditorContext,
	RegistryError,
};
use strand_primitives::Selection;

use super::repetitions;
use crate::Editor;
use crate::buffer::Buffer;
use crate::notifications::Notification;

pub(super) fn register(registry: &mut CommandRegistry<Editor>) -> Result<(), RegistryError> {
	registry.register(CommandDescriptor::editor("edit.insert", insert, CommandFlags::NONE))?;
	registry.register(CommandDescriptor::editor("edit.delete", delete, CommandFlags::NONE))?;
	registry.register(CommandDescriptor::editor("history.undo", undo, CommandFlags::DO_NOT_REPLAY))?;
	Ok(())
}

fn insert<'a>(cx: &'a mut EditorContext<'a, Editor>, argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let text = argument.required_string("text")?.repeat(repetitions(cx.host(), &argument)?);
		insert_at_cursors(cx.editor_mut()?, &text);
		Ok(Value::Null)
	})
}

fn delete<'a>(cx: &'a mut EditorContext<'a, Editor>, _argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let removed = delete_selections(cx.editor_mut()?);
		Ok(Value::from(removed))
	})
}

fn undo<'a>(cx: &'a mut EditorContext<'a, Editor>, _argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let undone = cx.editor_mut()?.undo();
		if !undone {
			cx.host_mut().notify(Notification::info("nothing left to undo"));
		}
		Ok(Value::Bool(undone))
	})
}

/// Inserts `text` at every cursor and leaves each cursor after its insertion.
/// Cursors sharing a position share one insertion.
fn insert_at_cursors(buffer: &mut Buffer, text: &str) {
	let len = text.chars().count();
	let cursors: Vec<usize> = buffer
		.selections()
		.iter()
		.map(|selection| buffer.char_index(selection.active))
		.collect();

	let mut offsets = cursors.clone();
	offsets.sort_unstable();
	offsets.dedup();
	for (shift, &offset) in offsets.iter().enumerate() {
		buffer.insert(offset + shift * len, text);
	}

	let selections: Vec<_> = cursors
		.iter()
		.map(|&cursor| {
			let before = offsets.partition_point(|&offset| offset < cursor);
			Selection::cursor(buffer.position(cursor + (before + 1) * len))
		})
		.collect();
	buffer.set_selections(selections);
}

/// Deletes the text of every selection. Overlapping selections are merged
/// first. Returns the number of chars removed.
fn delete_selections(buffer: &mut Buffer) -> usize {
	let spans: Vec<Range<usize>> = buffer
		.selections()
		.iter()
		.map(|selection| buffer.char_index(selection.start())..buffer.char_index(selection.end()))
		.collect();

	let mut ranges: Vec<_> = spans.iter().filter(|range| !range.is_empty()).cloned().collect();
	ranges.sort_unstable_by_key(|range| range.start);
	let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
	for range in ranges {
		match merged.last_mut() {
			Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
			_ => merged.push(range),
		}
	}

	for range in merged.iter().rev() {
		buffer.remove(range.clone());
	}

	let selections: Vec<_> = spans
		.iter()
		.map(|span| Selection::cursor(buffer.position(span.start - removed_before(span.start, &merged))))
		.collect();
	buffer.set_selections(selections);

	merged.iter().map(|range| range.len()).sum()
}

fn removed_before(index: usize, ranges: &[Range<usize>]) -> usize {
	ranges
		.iter()
		.take_while(|range| range.start < index)
		.map(|range| index.min(range.end) - range.start)
		.sum()
}
