use serde_json::json;
use strand_editor::{Config, InvocationResult, Register};
use strand_invocation::Host;

use crate::common::{editor_with, editor_with_config, primary, run, sel};

#[tokio::test]
async fn digits_accumulate_into_the_next_count() {
	let mut editor = editor_with("a b c d e f g h i j k l m");

	assert_eq!(run(&mut editor, "count.update", json!({ "digit": 1 })).await, InvocationResult::Ok(json!(1)));
	assert_eq!(run(&mut editor, "count.update", json!({ "digit": 2 })).await, InvocationResult::Ok(json!(12)));
	assert_eq!(editor.session().ambient().count(), 12);

	run(&mut editor, "seek.word", json!({})).await;
	assert_eq!(primary(&editor), sel((0, 22), (0, 24)));
	assert_eq!(editor.session().ambient().count(), 0);
}

#[tokio::test]
async fn counts_are_clamped() {
	let config = Config {
		max_count: 5,
		..Config::default()
	};
	let mut editor = editor_with_config("", config);

	run(&mut editor, "count.update", json!({ "digit": 3 })).await;
	run(&mut editor, "count.update", json!({ "digit": 4 })).await;
	assert_eq!(editor.session().ambient().count(), 5);
}

#[tokio::test]
async fn count_update_validates_digits() {
	let mut editor = editor_with("");

	let result = run(&mut editor, "count.update", json!({ "digit": 12 })).await;
	assert!(matches!(&result, InvocationResult::Failed(message) if message.contains("digit must be between 0 and 9")));

	let result = run(&mut editor, "count.update", json!({})).await;
	assert_eq!(
		result.message(),
		Some("error executing command \"count.update\": missing argument: digit")
	);

	assert!(run(&mut editor, "count.update", json!({ "count": 7 })).await.is_ok());
	assert_eq!(editor.session().ambient().count(), 7);
}

#[tokio::test]
async fn register_and_count_combine_in_either_order() {
	let mut editor = editor_with("");

	run(&mut editor, "register.select", json!({ "register": "a" })).await;
	run(&mut editor, "count.update", json!({ "digit": 2 })).await;
	assert_eq!(editor.session().ambient().register(), Some(Register::new('a')));
	assert_eq!(editor.session().ambient().count(), 2);

	run(&mut editor, "edit.insert", json!({ "text": "x" })).await;
	let last = editor.recorder().last().unwrap();
	assert_eq!(last.argument().count(), Ok(Some(2)));
	assert_eq!(last.argument().register(), Ok(Some(Register::new('a'))));
	assert!(editor.session().ambient().is_empty());

	run(&mut editor, "count.update", json!({ "digit": 4 })).await;
	run(&mut editor, "register.select", json!({ "register": "b" })).await;
	assert_eq!(editor.session().ambient().count(), 4);
	assert_eq!(editor.session().ambient().register(), Some(Register::new('b')));
}

#[tokio::test]
async fn prefix_commands_are_not_recorded() {
	let mut editor = editor_with("");

	run(&mut editor, "count.update", json!({ "digit": 2 })).await;
	run(&mut editor, "register.select", json!({ "register": "r" })).await;

	assert!(editor.recorder().last().is_none());
}

#[tokio::test]
async fn failed_command_consumes_prefix_without_recording() {
	let mut editor = editor_with("abc");

	run(&mut editor, "count.update", json!({ "digit": 2 })).await;
	let result = run(&mut editor, "seek.object", json!({})).await;

	assert_eq!(
		result.message(),
		Some("error executing command \"seek.object\": missing argument: object")
	);
	assert!(editor.recorder().last().is_none());
	assert_eq!(editor.session().ambient().count(), 0);
}
