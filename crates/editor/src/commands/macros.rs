//! Macro recording and playback, and repetition of the last command.

use serde_json::Value;
use strand_invocation::{
	Argument, BoxFutureLocal, CommandDescriptor, CommandError, CommandFlags, CommandRegistry, CommandResult, GlobalContext,
	Register, RegistryError,
};

use super::repetitions;
use crate::Editor;
use crate::notifications::Notification;
use crate::recorder::RecorderError;
use crate::replay::replay_commands;

pub(super) fn register(registry: &mut CommandRegistry<Editor>) -> Result<(), RegistryError> {
	let flags = CommandFlags::DO_NOT_REPLAY;
	registry.register(CommandDescriptor::global("macro.record.start", start_recording, flags))?;
	registry.register(CommandDescriptor::global("macro.record.stop", stop_recording, flags))?;
	registry.register(CommandDescriptor::global("macro.play", play_macro, flags))?;
	registry.register(CommandDescriptor::global("history.repeat", repeat_last, flags))?;
	Ok(())
}

fn macro_register(editor: &Editor, argument: &Argument) -> Result<Register, CommandError> {
	Ok(argument.register()?.unwrap_or(editor.config().macro_register))
}

fn start_recording<'a>(
	cx: &'a mut GlobalContext<'a, Editor>,
	argument: Argument,
) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let editor = cx.host_mut();
		let register = macro_register(editor, &argument)?;
		editor.recorder_mut().start(register)?;
		editor.notify(Notification::info(format!("recording into register {register}")));
		Ok(Value::from(register))
	})
}

fn stop_recording<'a>(
	cx: &'a mut GlobalContext<'a, Editor>,
	_argument: Argument,
) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let editor = cx.host_mut();
		let (register, len) = editor.recorder_mut().stop()?;
		editor.notify(Notification::info(format!("recorded {len} commands into register {register}")));
		Ok(Value::from(len))
	})
}

/// Replays the macro in `register` (default from the configuration) `count`
/// times as one undo group.
fn play_macro<'a>(cx: &'a mut GlobalContext<'a, Editor>, argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let editor = cx.host_mut();
		let times = repetitions(editor, &argument)?;
		let register = macro_register(editor, &argument)?;
		let commands = editor
			.recorder()
			.macro_in(register)
			.ok_or(RecorderError::EmptyRegister(register))?
			.to_vec();

		let replayed = replay_commands(editor, &commands, times).await?;
		Ok(Value::from(replayed))
	})
}

/// Replays the most recently recorded command `count` times.
fn repeat_last<'a>(cx: &'a mut GlobalContext<'a, Editor>, argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let editor = cx.host_mut();
		let times = repetitions(editor, &argument)?;
		let last = editor.recorder().last().ok_or(RecorderError::NothingToRepeat)?.clone();

		let replayed = replay_commands(editor, std::slice::from_ref(&last), times).await?;
		Ok(Value::from(replayed))
	})
}
