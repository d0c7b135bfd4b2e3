use serde_json::Value;
use strand_editor::{Config, Editor, InvocationResult};
use strand_primitives::{Position, Selection};

pub fn editor_with(text: &str) -> Editor {
	editor_with_config(text, Config::default())
}

pub fn editor_with_config(text: &str, config: Config) -> Editor {
	let mut editor = Editor::new(config).expect("built-in commands register");
	editor.open(text);
	editor
}

pub async fn run(editor: &mut Editor, identifier: &str, argument: Value) -> InvocationResult {
	editor.execute(identifier, Some(&argument)).await
}

pub fn text(editor: &Editor) -> String {
	editor.active_buffer().expect("active buffer").text().to_string()
}

pub fn primary(editor: &Editor) -> Selection {
	editor.active_buffer().expect("active buffer").primary()
}

pub fn place_cursor(editor: &mut Editor, line: usize, column: usize) {
	editor
		.active_buffer_mut()
		.expect("active buffer")
		.set_selections(vec![Selection::cursor(Position::new(line, column))]);
}

pub fn sel(anchor: (usize, usize), active: (usize, usize)) -> Selection {
	Selection::new(anchor.into(), active.into())
}
