//! Commands that build up the count/register prefix for the next command.

use serde_json::Value;
use strand_invocation::{
	AmbientState, Argument, BoxFutureLocal, CommandDescriptor, CommandError, CommandFlags, CommandRegistry,
	CommandResult, GlobalContext, Host, RegistryError,
};

use crate::Editor;

pub(super) fn register(registry: &mut CommandRegistry<Editor>) -> Result<(), RegistryError> {
	registry.register(CommandDescriptor::global("count.update", update_count, CommandFlags::DO_NOT_REPLAY))?;
	registry.register(CommandDescriptor::global(
		"register.select",
		select_register,
		CommandFlags::DO_NOT_REPLAY,
	))?;
	Ok(())
}

/// `digit` appends to the count this invocation carried in; `count` alone
/// sets it. Whatever register was pending stays pending.
fn update_count<'a>(cx: &'a mut GlobalContext<'a, Editor>, argument: Argument) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let max = cx.host().config().max_count;
		let mut ambient = AmbientState::default();
		ambient.set_register(argument.register()?);
		ambient.set_count(argument.count()?.unwrap_or(0).min(max));

		match argument.u64("digit")? {
			Some(digit) if digit <= 9 => ambient.push_digit(digit as u32, max),
			Some(digit) => {
				return Err(CommandError::InvalidArgument(format!(
					"digit must be between 0 and 9, got {digit}"
				)));
			}
			None if argument.contains(Argument::COUNT) => {}
			None => return Err(CommandError::MissingArgument("digit")),
		}

		*cx.host_mut().session_mut().ambient_mut() = ambient;
		Ok(Value::from(ambient.count()))
	})
}

/// Makes `register` the pending register, keeping any pending count.
fn select_register<'a>(
	cx: &'a mut GlobalContext<'a, Editor>,
	argument: Argument,
) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let register = argument
			.register()?
			.ok_or(CommandError::MissingArgument(Argument::REGISTER))?;

		let ambient = cx.host_mut().session_mut().ambient_mut();
		ambient.set_count(argument.count()?.unwrap_or(0));
		ambient.set_register(Some(register));
		Ok(Value::from(register))
	})
}
