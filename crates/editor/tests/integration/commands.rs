use serde_json::json;
use strand_editor::notifications::Level;
use strand_editor::{Config, Editor, InvocationResult};

use crate::common::{editor_with, editor_with_config, place_cursor, primary, run, sel, text};

#[tokio::test]
async fn seek_word_with_count_selects_last_word() {
	let mut editor = editor_with("one two three four");

	assert!(run(&mut editor, "seek.word", json!({ "count": 2 })).await.is_ok());
	assert_eq!(primary(&editor), sel((0, 4), (0, 8)));
}

#[tokio::test]
async fn seek_word_extend_keeps_anchor() {
	let mut editor = editor_with("one two three four");

	run(&mut editor, "seek.word", json!({ "count": 2, "extend": true })).await;
	assert_eq!(primary(&editor), sel((0, 0), (0, 8)));
}

#[tokio::test]
async fn word_end_and_backward() {
	let mut editor = editor_with("alpha  beta");

	run(&mut editor, "seek.word_end", json!({})).await;
	assert_eq!(primary(&editor), sel((0, 0), (0, 5)));
	run(&mut editor, "seek.word_end", json!({})).await;
	assert_eq!(primary(&editor), sel((0, 5), (0, 11)));

	run(&mut editor, "seek.word.backward", json!({})).await;
	assert_eq!(primary(&editor), sel((0, 11), (0, 7)));
}

#[tokio::test]
async fn line_motions() {
	let mut editor = editor_with("hello\nworld");
	place_cursor(&mut editor, 1, 2);

	run(&mut editor, "select.line_end", json!({})).await;
	assert_eq!(primary(&editor), sel((1, 2), (1, 5)));

	run(&mut editor, "select.line_start", json!({ "extend": true })).await;
	assert_eq!(primary(&editor), sel((1, 2), (1, 0)));

	place_cursor(&mut editor, 0, 3);
	run(&mut editor, "select.line_start", json!({})).await;
	assert_eq!(primary(&editor), sel((0, 3), (0, 0)));
}

#[tokio::test]
async fn seek_object_selects_word_under_cursor() {
	let mut editor = editor_with("foo bar  baz");
	place_cursor(&mut editor, 0, 5);

	run(&mut editor, "seek.object", json!({ "object": "word" })).await;
	assert_eq!(primary(&editor), sel((0, 4), (0, 7)));

	place_cursor(&mut editor, 0, 5);
	run(&mut editor, "seek.object", json!({ "object": "word", "inner": false })).await;
	assert_eq!(primary(&editor), sel((0, 4), (0, 9)));
}

#[tokio::test]
async fn seek_object_rejects_unknown_objects() {
	let mut editor = editor_with("foo");

	let result = run(&mut editor, "seek.object", json!({ "object": "line" })).await;

	assert_eq!(
		result,
		InvocationResult::Failed("error executing command \"seek.object\": invalid argument: unknown object \"line\"".into())
	);
	let last = editor.notifications().iter().last().unwrap();
	assert_eq!(last.level, Level::Error);
	assert!(editor.recorder().last().is_none());
}

#[tokio::test]
async fn insert_repeats_and_undoes_in_one_step() {
	let mut editor = editor_with("[]");
	place_cursor(&mut editor, 0, 1);

	run(&mut editor, "edit.insert", json!({ "text": "ab", "count": 3 })).await;
	assert_eq!(text(&editor), "[ababab]");
	assert_eq!(primary(&editor), sel((0, 7), (0, 7)));

	assert_eq!(run(&mut editor, "history.undo", json!({})).await, InvocationResult::Ok(json!(true)));
	assert_eq!(text(&editor), "[]");
	assert_eq!(primary(&editor), sel((0, 1), (0, 1)));
}

#[tokio::test]
async fn delete_then_undo() {
	let mut editor = editor_with("one two");
	run(&mut editor, "seek.word", json!({})).await;

	assert_eq!(run(&mut editor, "edit.delete", json!({})).await, InvocationResult::Ok(json!(4)));
	assert_eq!(text(&editor), "two");

	run(&mut editor, "history.undo", json!({})).await;
	assert_eq!(text(&editor), "one two");
}

#[tokio::test]
async fn undo_with_empty_history_informs() {
	let mut editor = editor_with("x");

	assert_eq!(run(&mut editor, "history.undo", json!({})).await, InvocationResult::Ok(json!(false)));
	let notification = editor.notifications().iter().last().unwrap();
	assert_eq!(notification.level, Level::Info);
}

#[tokio::test]
async fn editor_commands_need_a_buffer() {
	let mut editor = Editor::new(Config::default()).unwrap();

	let result = run(&mut editor, "edit.insert", json!({ "text": "x" })).await;

	assert_eq!(
		result.message(),
		Some("error executing command \"edit.insert\": an active editor is required")
	);
	let pending = editor.notifications_mut().take_pending();
	assert_eq!(pending.len(), 1);
	assert_eq!(pending[0].level, Level::Error);
	assert!(editor.notifications().is_empty());
}

#[tokio::test]
async fn closing_the_active_buffer_falls_back() {
	let mut editor = Editor::new(Config::default()).unwrap();
	let first = editor.open("first");
	let second = editor.open("second");

	assert_eq!(editor.active_buffer().map(|buffer| buffer.id()), Some(second));
	editor.close(second);
	assert_eq!(editor.active_buffer().map(|buffer| buffer.id()), Some(first));
	assert!(!editor.focus(second));
}

#[tokio::test]
async fn unknown_command_is_not_found() {
	let mut editor = editor_with("");

	let result = editor.execute("does.not.exist", None).await;

	assert!(matches!(result, InvocationResult::NotFound(_)));
	assert_eq!(editor.notifications().len(), 1);
}

#[tokio::test]
async fn insert_count_is_capped_by_config() {
	let config = Config {
		max_count: 3,
		..Config::default()
	};
	let mut editor = editor_with_config("", config);

	let result = run(&mut editor, "edit.insert", json!({ "text": "abcdefgh", "count": 4_000_000_000u64 })).await;

	assert!(result.is_ok());
	assert_eq!(text(&editor), "abcdefgh".repeat(3));
}

#[tokio::test]
async fn undo_history_keeps_only_the_newest_groups() {
	let config = Config {
		undo_limit: 1,
		..Config::default()
	};
	let mut editor = editor_with_config("", config);

	run(&mut editor, "edit.insert", json!({ "text": "a" })).await;
	run(&mut editor, "edit.insert", json!({ "text": "b" })).await;
	assert_eq!(editor.active_buffer().unwrap().history().undo_len(), 1);

	assert_eq!(run(&mut editor, "history.undo", json!({})).await, InvocationResult::Ok(json!(true)));
	assert_eq!(text(&editor), "a");
	assert_eq!(run(&mut editor, "history.undo", json!({})).await, InvocationResult::Ok(json!(false)));
	assert_eq!(text(&editor), "a");
}
