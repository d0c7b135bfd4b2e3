use std::sync::Arc;

use serde_json::{Value, json};
use strand_editor::commands;
use strand_editor::{Argument, Config, Editor, InvocationResult, RecordedCommand, Register};
use strand_invocation::{BoxFutureLocal, CommandDescriptor, CommandFlags, CommandResult, GlobalContext, Host};

use crate::common::{run, text};

fn recorded(editor: &Editor, identifier: &str, argument: Value) -> RecordedCommand {
	let descriptor = editor.commands().get(identifier).map(Arc::clone).expect("registered command");
	let argument = Argument::from_raw(Some(&argument)).expect("object argument");
	RecordedCommand::new(descriptor, argument)
}

#[tokio::test]
async fn recorded_macro_replays_as_one_undo_group() {
	let mut editor = crate::common::editor_with("");

	run(&mut editor, "macro.record.start", json!({})).await;
	assert_eq!(editor.recorder().recording(), Some(Register::MACRO));
	run(&mut editor, "edit.insert", json!({ "text": "ab" })).await;
	run(&mut editor, "count.update", json!({ "digit": 3 })).await;
	run(&mut editor, "edit.insert", json!({ "text": "c" })).await;
	assert_eq!(run(&mut editor, "macro.record.stop", json!({})).await, InvocationResult::Ok(json!(2)));
	assert_eq!(text(&editor), "abccc");

	let result = run(&mut editor, "macro.play", json!({ "count": 2 })).await;
	assert_eq!(result, InvocationResult::Ok(json!(4)));
	assert_eq!(text(&editor), "abcccabcccabccc");

	let last = editor.recorder().last().unwrap();
	assert_eq!(last.identifier(), "edit.insert");
	assert_eq!(last.argument().count(), Ok(Some(3)));

	run(&mut editor, "history.undo", json!({})).await;
	assert_eq!(text(&editor), "abccc");
}

#[tokio::test]
async fn macro_register_comes_from_the_prefix() {
	let mut editor = crate::common::editor_with("");

	run(&mut editor, "register.select", json!({ "register": "q" })).await;
	run(&mut editor, "macro.record.start", json!({})).await;
	assert_eq!(editor.recorder().recording(), Some(Register::new('q')));
	run(&mut editor, "edit.insert", json!({ "text": "z" })).await;
	run(&mut editor, "macro.record.stop", json!({})).await;

	let result = run(&mut editor, "macro.play", json!({})).await;
	assert_eq!(result.message(), Some("error executing command \"macro.play\": register @ holds no macro"));

	assert!(run(&mut editor, "macro.play", json!({ "register": "q" })).await.is_ok());
	assert_eq!(text(&editor), "zz");
}

#[tokio::test]
async fn recording_twice_fails() {
	let mut editor = crate::common::editor_with("");

	assert!(run(&mut editor, "macro.record.start", json!({})).await.is_ok());
	let result = run(&mut editor, "macro.record.start", json!({})).await;
	assert_eq!(
		result.message(),
		Some("error executing command \"macro.record.start\": already recording into register @")
	);

	run(&mut editor, "macro.record.stop", json!({})).await;
	let result = run(&mut editor, "macro.record.stop", json!({})).await;
	assert_eq!(result.message(), Some("error executing command \"macro.record.stop\": not recording"));
}

#[tokio::test]
async fn repeat_replays_last_command() {
	let mut editor = crate::common::editor_with("");

	let result = run(&mut editor, "history.repeat", json!({})).await;
	assert_eq!(result.message(), Some("error executing command \"history.repeat\": no command to repeat"));

	run(&mut editor, "edit.insert", json!({ "text": "a" })).await;
	assert_eq!(run(&mut editor, "history.repeat", json!({ "count": 3 })).await, InvocationResult::Ok(json!(3)));
	assert_eq!(text(&editor), "aaaa");
	assert_eq!(editor.recorder().history().count(), 1);

	run(&mut editor, "history.undo", json!({})).await;
	assert_eq!(text(&editor), "a");
}

#[tokio::test]
async fn playback_stops_at_first_failure() {
	let mut editor = crate::common::editor_with("");
	let commands = vec![
		recorded(&editor, "edit.insert", json!({ "text": "x" })),
		recorded(&editor, "seek.object", json!({ "object": "nope" })),
		recorded(&editor, "edit.insert", json!({ "text": "y" })),
	];
	editor.recorder_mut().set_macro(Register::new('m'), commands);

	let result = run(&mut editor, "macro.play", json!({ "register": "m" })).await;

	assert!(matches!(result, InvocationResult::Failed(_)));
	assert_eq!(text(&editor), "x");
	run(&mut editor, "history.undo", json!({})).await;
	assert_eq!(text(&editor), "");
}

fn cancel_all<'a>(cx: &'a mut GlobalContext<'a, Editor>, _argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		cx.host_mut().cancel();
		Ok(Value::Null)
	})
}

#[tokio::test]
async fn cancellation_stops_playback() {
	let mut registry = commands::builtin().unwrap();
	registry
		.register(CommandDescriptor::global("cancel.all", cancel_all, CommandFlags::NONE))
		.unwrap();
	let mut editor = Editor::with_commands(Config::default(), registry);
	editor.open("");

	let commands = vec![
		recorded(&editor, "edit.insert", json!({ "text": "a" })),
		recorded(&editor, "cancel.all", json!({})),
		recorded(&editor, "edit.insert", json!({ "text": "b" })),
	];
	editor.recorder_mut().set_macro(Register::MACRO, commands);

	let result = run(&mut editor, "macro.play", json!({})).await;
	assert_eq!(result.message(), Some("error executing command \"macro.play\": command was cancelled"));
	assert_eq!(text(&editor), "a");

	assert!(run(&mut editor, "edit.insert", json!({ "text": "c" })).await.is_ok());
	assert_eq!(text(&editor), "ac");
}

#[tokio::test]
async fn history_limit_bounds_repeatable_commands() {
	let config = Config {
		history_limit: 2,
		..Config::default()
	};
	let mut editor = crate::common::editor_with_config("", config);

	for text in ["a", "b", "c"] {
		run(&mut editor, "edit.insert", json!({ "text": text })).await;
	}

	let texts: Vec<_> = editor
		.recorder()
		.history()
		.map(|command| command.argument().string("text").unwrap().unwrap().to_owned())
		.collect();
	assert_eq!(texts, ["c", "b"]);
}

#[tokio::test]
async fn repeat_count_is_capped_by_config() {
	let config = Config {
		max_count: 3,
		..Config::default()
	};
	let mut editor = crate::common::editor_with_config("", config);

	run(&mut editor, "edit.insert", json!({ "text": "ab" })).await;
	let result = run(&mut editor, "history.repeat", json!({ "count": 4_000_000_000u64 })).await;

	assert_eq!(result, InvocationResult::Ok(json!(3)));
	assert_eq!(text(&editor), "ab".repeat(4));
}

#[tokio::test]
async fn replaying_a_recorded_command_is_deterministic() {
	let mut left = crate::common::editor_with("one two three");
	let mut right = crate::common::editor_with("one two three");

	for (identifier, argument) in [
		("seek.word", json!({ "count": 2, "extend": true })),
		("edit.insert", json!({ "text": "ab", "count": 3 })),
	] {
		let command = recorded(&left, identifier, argument);
		let descriptor = command.descriptor();

		let first = descriptor.replay(&mut left, command.argument().clone()).await;
		let second = descriptor.replay(&mut right, command.argument().clone()).await;

		assert_eq!(first, second);
		assert!(first.is_ok());
		assert_eq!(text(&left), text(&right));
		let left_buffer = left.active_buffer().unwrap();
		let right_buffer = right.active_buffer().unwrap();
		assert_eq!(left_buffer.selections(), right_buffer.selections());
	}

	assert_eq!(text(&left), "one two ababab three");
	assert!(left.recorder().last().is_none());
}
