//! Playback of recorded commands.

use strand_invocation::{CommandError, Host};
use tracing::{Instrument, debug, trace_span};

use crate::Editor;
use crate::recorder::RecordedCommand;

/// Re-runs `commands` in order through their raw handlers, `times` times over.
///
/// Commands that may not be replayed are skipped. Playback stops at the first
/// failure or once the editor's cancellation token fires. Everything the
/// commands changed forms a single undo group, even when playback fails
/// midway. Returns how many commands ran.
pub async fn replay_commands(
	editor: &mut Editor,
	commands: &[RecordedCommand],
	times: usize,
) -> Result<usize, CommandError> {
	let span = trace_span!("replay", commands = commands.len(), times);
	async move {
		let result = replay_each(editor, commands, times).await;
		editor.insert_undo_stop();
		if let Err(err) = &result {
			debug!(error = %err, "Replay stopped");
		}
		result
	}
	.instrument(span)
	.await
}

async fn replay_each(editor: &mut Editor, commands: &[RecordedCommand], times: usize) -> Result<usize, CommandError> {
	let cancellation = editor.cancellation();
	let mut replayed = 0;
	for command in (0..times).flat_map(|_| commands) {
		let descriptor = command.descriptor();
		if !descriptor.is_replayable() {
			continue;
		}
		if cancellation.is_cancelled() {
			return Err(CommandError::Cancelled);
		}
		descriptor.replay(editor, command.argument().clone()).await?;
		replayed += 1;
	}
	Ok(replayed)
}
